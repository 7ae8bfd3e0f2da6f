//! Display layer: renders turns, the typing reveal, and inline errors.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use console::style;
use wellbot_ai::{Reveal, Role, Turn};

/// Something that can show the conversation to the user.
#[async_trait(?Send)]
pub trait Renderer {
    /// Show a finished turn in one go.
    fn render_turn(&mut self, turn: &Turn) -> std::io::Result<()>;

    /// Show a turn progressively, one reveal step at a time.
    async fn render_reveal(&mut self, role: Role, steps: Reveal<'_>) -> std::io::Result<()>;

    /// Show a failed request inline.
    fn render_error(&mut self, message: &str) -> std::io::Result<()>;

    /// Show an informational line (help, topic list).
    fn render_notice(&mut self, message: &str) -> std::io::Result<()>;

    /// Show the input marker before reading a line.
    fn render_input_marker(&mut self) -> std::io::Result<()>;
}

/// Renders to a terminal (or any writer) with optional ANSI styling.
pub struct TerminalRenderer<W: Write> {
    out: W,
    step_delay: Duration,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, step_delay: Duration, color: bool) -> Self {
        Self {
            out,
            step_delay,
            color,
        }
    }

    #[cfg(test)]
    pub(crate) fn out_ref(&self) -> &W {
        &self.out
    }

    fn label(&self, role: Role) -> String {
        let name = match role {
            Role::User => "You",
            Role::Assistant => "Assistant",
        };
        if !self.color {
            return format!("{name}:");
        }
        let styled = match role {
            Role::User => style(format!("{name}:")).green().bold(),
            Role::Assistant => style(format!("{name}:")).cyan().bold(),
        };
        styled.force_styling(true).to_string()
    }
}

#[async_trait(?Send)]
impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_turn(&mut self, turn: &Turn) -> std::io::Result<()> {
        let label = self.label(turn.role());
        writeln!(self.out, "{label}\n{}\n", turn.text())?;
        self.out.flush()
    }

    async fn render_reveal(&mut self, role: Role, steps: Reveal<'_>) -> std::io::Result<()> {
        let label = self.label(role);
        writeln!(self.out, "{label}")?;

        let mut shown = 0;
        for step in steps {
            write!(self.out, "{}", &step[shown..])?;
            self.out.flush()?;
            shown = step.len();
            if !self.step_delay.is_zero() {
                tokio::time::sleep(self.step_delay).await;
            }
        }

        writeln!(self.out, "\n")?;
        self.out.flush()
    }

    fn render_error(&mut self, message: &str) -> std::io::Result<()> {
        let line = format!("Error generating response: {message}");
        if self.color {
            writeln!(self.out, "{}\n", style(line).red().force_styling(true))?;
        } else {
            writeln!(self.out, "{line}\n")?;
        }
        self.out.flush()
    }

    fn render_notice(&mut self, message: &str) -> std::io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", style(message).dim().force_styling(true))?;
        } else {
            writeln!(self.out, "{message}")?;
        }
        self.out.flush()
    }

    fn render_input_marker(&mut self) -> std::io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), Duration::ZERO, false)
    }

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.out_ref().clone()).unwrap()
    }

    #[test]
    fn renders_turn_with_role_label() {
        let mut renderer = plain();
        renderer.render_turn(&Turn::assistant("Hello!")).unwrap();
        assert_eq!(output(renderer), "Assistant:\nHello!\n\n");
    }

    #[tokio::test]
    async fn reveal_writes_full_text_once() {
        let mut renderer = plain();
        let text = "• Drink water.\n• Sleep early.";
        renderer
            .render_reveal(Role::Assistant, wellbot_ai::reveal(text))
            .await
            .unwrap();
        assert_eq!(output(renderer), format!("Assistant:\n{text}\n\n"));
    }

    #[test]
    fn error_uses_inline_wording() {
        let mut renderer = plain();
        renderer.render_error("Rate limited").unwrap();
        assert_eq!(output(renderer), "Error generating response: Rate limited\n\n");
    }

    #[test]
    fn colored_labels_carry_ansi_codes() {
        let mut renderer = TerminalRenderer::new(Vec::new(), Duration::ZERO, true);
        renderer.render_turn(&Turn::user("hi")).unwrap();
        assert!(output(renderer).contains("\u{1b}["));
    }
}
