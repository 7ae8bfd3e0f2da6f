//! Typing-reveal sequencer.
//!
//! Turns a finished reply into a lazy sequence of growing prefixes so the
//! display can fake token-by-token streaming.

/// Create a reveal sequence over `text`. Each call starts from scratch.
pub fn reveal(text: &str) -> Reveal<'_> {
    Reveal {
        text,
        pos: 0,
        finished: false,
    }
}

/// Iterator over progressively longer prefixes of a text, one
/// whitespace-separated token per step. The last item is always the whole
/// text, whitespace included.
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
    text: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Iterator for Reveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let rest = &self.text[self.pos..];
        let Some(start) = rest.find(|c: char| !c.is_whitespace()) else {
            // Only trailing whitespace (or nothing) left.
            self.finished = true;
            return Some(self.text);
        };

        let token = &rest[start..];
        let len = token.find(char::is_whitespace).unwrap_or(token.len());
        self.pos += start + len;
        if self.pos == self.text.len() {
            self.finished = true;
        }
        Some(&self.text[..self.pos])
    }
}
