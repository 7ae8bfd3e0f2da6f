//! Async request/response methods for Session.

use tracing::{debug, warn};

use crate::prompt;
use crate::{CompletionClient, CompletionError};

use super::manager::Session;
use super::types::Turn;

impl Session {
    /// Record a free-form user message and get the assistant's reply.
    ///
    /// Blank input is ignored and returns `Ok(None)` without a request.
    /// Anything else is recorded exactly as given.
    /// On failure the user turn stays recorded and no assistant turn is
    /// appended.
    pub async fn on_user_submit(
        &mut self,
        client: &dyn CompletionClient,
        text: &str,
    ) -> Result<Option<&Turn>, CompletionError> {
        if text.trim().is_empty() {
            debug!("ignoring blank submission");
            return Ok(None);
        }

        self.append(Turn::user(text));

        let context = self.recent_context(self.context_turns);
        let full_prompt = prompt::submission_prompt(&context, text);
        self.complete(client, &full_prompt).await.map(Some)
    }

    /// Ask for advice about one of the quick topics.
    ///
    /// The user turn is synthesized from the label; no history is sent.
    pub async fn on_quick_topic(
        &mut self,
        client: &dyn CompletionClient,
        label: &str,
    ) -> Result<&Turn, CompletionError> {
        self.append(Turn::user(prompt::topic_request(label)));

        let full_prompt = prompt::topic_prompt(label);
        self.complete(client, &full_prompt).await
    }

    async fn complete(
        &mut self,
        client: &dyn CompletionClient,
        full_prompt: &str,
    ) -> Result<&Turn, CompletionError> {
        debug!(
            prompt_len = full_prompt.len(),
            turns = self.turns.len(),
            "requesting completion"
        );

        let raw = match tokio::time::timeout(self.timeout, client.generate(full_prompt)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(timeout = ?self.timeout, "completion timed out");
                return Err(CompletionError::Timeout(self.timeout));
            }
        };

        let text = self.post_process.apply(&raw);
        self.turns.push(Turn::assistant(text));
        let index = self.turns.len() - 1;
        Ok(&self.turns[index])
    }
}
