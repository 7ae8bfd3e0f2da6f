//! Interactive chat loop: reads lines, dispatches commands, renders replies.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};
use wellbot_ai::{quick_topic, reveal, CompletionClient, Role, Session, QUICK_TOPICS};

use crate::renderer::Renderer;

const HELP: &str = "Type a question, or:
  /topics          list quick health topics
  /topic <n|name>  ask about a quick topic
  /history         show the conversation so far
  /quit            exit";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Submit(&'a str),
    Topic(&'a str),
    Topics,
    History,
    Help,
    Quit,
    Unknown(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Submit(line);
    };

    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    match name {
        "topic" => Command::Topic(arg.trim()),
        "topics" => Command::Topics,
        "history" => Command::History,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(name),
    }
}

/// Owns the session, the completion client, and the renderer for one run.
pub struct App<R: Renderer> {
    session: Session,
    client: Box<dyn CompletionClient>,
    renderer: R,
}

impl<R: Renderer> App<R> {
    pub fn new(session: Session, client: Box<dyn CompletionClient>, renderer: R) -> Self {
        Self {
            session,
            client,
            renderer,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render the existing history, then serve input until EOF or `/quit`.
    ///
    /// Each line is handled to completion before the next one is read.
    pub async fn run<I: AsyncBufRead + Unpin>(&mut self, input: I) -> std::io::Result<()> {
        for turn in self.session.turns() {
            self.renderer.render_turn(turn)?;
        }
        self.renderer.render_notice(HELP)?;

        let mut lines = input.lines();
        loop {
            self.renderer.render_input_marker()?;
            let Some(line) = lines.next_line().await? else {
                debug!("input closed");
                break;
            };
            if !self.handle_line(&line).await? {
                break;
            }
        }
        Ok(())
    }

    /// Handle one input line. Returns `false` when the loop should stop.
    pub async fn handle_line(&mut self, line: &str) -> std::io::Result<bool> {
        match parse_command(line) {
            Command::Submit(text) => self.submit(text).await?,
            Command::Topic(selector) => match quick_topic(selector) {
                Some(label) => self.ask_topic(label).await?,
                None => self
                    .renderer
                    .render_notice(&format!("Unknown topic '{selector}'. Try /topics."))?,
            },
            Command::Topics => {
                let list = QUICK_TOPICS
                    .iter()
                    .enumerate()
                    .map(|(i, topic)| format!("  {}. {topic}", i + 1))
                    .collect::<Vec<_>>()
                    .join("\n");
                self.renderer
                    .render_notice(&format!("Quick Health Topics\n{list}"))?;
            }
            Command::History => {
                for turn in self.session.turns() {
                    self.renderer.render_turn(turn)?;
                }
            }
            Command::Help => self.renderer.render_notice(HELP)?,
            Command::Quit => return Ok(false),
            Command::Unknown(name) => self
                .renderer
                .render_notice(&format!("Unknown command '/{name}'. Try /help."))?,
        }
        Ok(true)
    }

    async fn submit(&mut self, text: &str) -> std::io::Result<()> {
        match self.session.on_user_submit(self.client.as_ref(), text).await {
            Ok(Some(turn)) => {
                self.renderer
                    .render_reveal(Role::Assistant, reveal(turn.text()))
                    .await
            }
            Ok(None) => Ok(()),
            Err(e) => {
                warn!("completion failed: {e}");
                self.renderer.render_error(&e.to_string())
            }
        }
    }

    async fn ask_topic(&mut self, label: &str) -> std::io::Result<()> {
        let user_index = self.session.turn_count();
        let result = self
            .session
            .on_quick_topic(self.client.as_ref(), label)
            .await
            .map(|turn| turn.text().to_string());

        if let Some(turn) = self.session.turns().get(user_index) {
            self.renderer.render_turn(turn)?;
        }

        match result {
            Ok(text) => {
                self.renderer
                    .render_reveal(Role::Assistant, reveal(&text))
                    .await
            }
            Err(e) => {
                warn!(topic = label, "completion failed: {e}");
                self.renderer.render_error(&e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use wellbot_ai::{CompletionError, PostProcess};

    use super::*;
    use crate::renderer::TerminalRenderer;

    struct StubClient(&'static str);

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn generate(&self, _prompt: &str) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    struct QuotaClient;

    #[async_trait]
    impl CompletionClient for QuotaClient {
        async fn generate(&self, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::RateLimited)
        }
    }

    fn app(client: Box<dyn CompletionClient>) -> App<TerminalRenderer<Vec<u8>>> {
        let session = Session::new("Hello!").with_post_process(PostProcess::Bulletize);
        let renderer = TerminalRenderer::new(Vec::new(), Duration::ZERO, false);
        App::new(session, client, renderer)
    }

    fn output(app: &App<TerminalRenderer<Vec<u8>>>) -> String {
        String::from_utf8(app.renderer().out_ref().clone()).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  sleep tips "), Command::Submit("sleep tips"));
        assert_eq!(parse_command("/topic 3"), Command::Topic("3"));
        assert_eq!(
            parse_command("/topic  Mental Wellness"),
            Command::Topic("Mental Wellness")
        );
        assert_eq!(parse_command("/topics"), Command::Topics);
        assert_eq!(parse_command("/history"), Command::History);
        assert_eq!(parse_command("/exit"), Command::Quit);
        assert_eq!(parse_command("/dance now"), Command::Unknown("dance"));
    }

    #[tokio::test]
    async fn submit_renders_bulletized_reply() {
        let mut app = app(Box::new(StubClient("Drink water.\nSleep early.")));
        assert!(app.handle_line("sleep tips").await.unwrap());

        assert_eq!(app.session().turn_count(), 3);
        assert!(output(&app).contains("Assistant:\n• Drink water.\n• Sleep early.\n"));
    }

    #[tokio::test]
    async fn failure_is_rendered_inline_and_loop_continues() {
        let mut app = app(Box::new(QuotaClient));
        assert!(app.handle_line("sleep tips").await.unwrap());

        assert_eq!(app.session().turn_count(), 2);
        assert!(output(&app).contains("Error generating response: Rate limited"));
    }

    #[tokio::test]
    async fn topic_by_number_records_synthesized_turn() {
        let mut app = app(Box::new(StubClient("Move daily.")));
        app.handle_line("/topic 2").await.unwrap();

        let turns = app.session().turns();
        assert_eq!(turns[1].text(), "I need advice about Exercise Routine");
        assert_eq!(turns[2].text(), "• Move daily.");
    }

    #[tokio::test]
    async fn topic_renders_the_recorded_user_turn() {
        let mut app = app(Box::new(QuotaClient));
        app.handle_line("/topic Sleep Improvement").await.unwrap();

        assert_eq!(app.session().turn_count(), 2);
        let out = output(&app);
        assert!(out.contains("You:\nI need advice about Sleep Improvement\n"));
        assert!(out.contains("Error generating response: Rate limited"));
    }

    #[tokio::test]
    async fn unknown_topic_sends_nothing() {
        let mut app = app(Box::new(StubClient("unused")));
        app.handle_line("/topic Yoga").await.unwrap();

        assert_eq!(app.session().turn_count(), 1);
        assert!(output(&app).contains("Unknown topic 'Yoga'"));
    }

    #[tokio::test]
    async fn run_stops_at_quit() {
        let mut app = app(Box::new(StubClient("ok")));
        let input: &[u8] = b"hello\n/quit\nnever sent\n";
        app.run(input).await.unwrap();

        assert_eq!(app.session().turn_count(), 3);
        let out = output(&app);
        assert!(out.starts_with("Assistant:\nHello!\n"));
        assert!(!out.contains("never sent"));
    }

    #[tokio::test]
    async fn run_stops_at_eof() {
        let mut app = app(Box::new(StubClient("ok")));
        let input: &[u8] = b"one\ntwo\n";
        app.run(input).await.unwrap();

        assert_eq!(app.session().turn_count(), 5);
    }
}
