//! Session struct and turn history.

use std::time::Duration;

use crate::postprocess::PostProcess;

use super::types::Turn;

/// A single user's conversation: ordered turns plus the settings that
/// shape each request.
pub struct Session {
    /// Turn history, append-only. Index 0 is the greeting.
    pub(super) turns: Vec<Turn>,
    /// How many recent turns go into each free-form prompt.
    pub(super) context_turns: usize,
    /// Reshaping applied to every model reply.
    pub(super) post_process: PostProcess,
    /// Upper bound on one completion call.
    pub(super) timeout: Duration,
}

impl Session {
    /// Start a session whose only turn is the assistant greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::assistant(greeting)],
            context_turns: 6,
            post_process: PostProcess::None,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_context_turns(mut self, n: usize) -> Self {
        self.context_turns = n;
        self
    }

    pub fn with_post_process(mut self, post_process: PostProcess) -> Self {
        self.post_process = post_process;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a turn to the end of the history.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The last `n` turns (fewer if the session is shorter), oldest first.
    pub fn context_slice(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// The last `n` turns formatted as `"{role}: {text}"` lines.
    pub fn recent_context(&self, n: usize) -> Vec<String> {
        self.context_slice(n)
            .iter()
            .map(Turn::context_line)
            .collect()
    }

    /// Get the full conversation history.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns in history, greeting included.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}
