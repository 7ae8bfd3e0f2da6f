//! Response post-processing: bullet normalization and word truncation.
//!
//! Everything here is pure; the same input always yields the same output.

/// Marker that prefixes each line of a bulletized reply.
pub const BULLET: char = '•';

/// Markdown list markers that also count as existing bullets when they
/// open a line.
const LIST_MARKERS: [&str; 2] = ["- ", "* "];

const ELLIPSIS: &str = "...";

/// How a raw model reply is reshaped before it becomes an assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostProcess {
    #[default]
    None,
    Bulletize,
    Truncate { max_words: usize },
}

impl PostProcess {
    pub fn apply(&self, text: &str) -> String {
        match *self {
            PostProcess::None => text.to_string(),
            PostProcess::Bulletize => bulletize(text),
            PostProcess::Truncate { max_words } => truncate(text, max_words),
        }
    }
}

/// Whether the text is already formatted as a list: it contains `•`
/// anywhere, or some line starts with `- ` or `* ` after indentation.
pub fn has_bullet_marker(text: &str) -> bool {
    text.contains(BULLET)
        || text.lines().any(|line| {
            let line = line.trim_start();
            LIST_MARKERS.iter().any(|marker| line.starts_with(marker))
        })
}

/// Prefix every non-blank line with a bullet, unless the text already
/// has a bullet marker (see [`has_bullet_marker`]). Blank lines are dropped.
pub fn bulletize(text: &str) -> String {
    if has_bullet_marker(text) {
        return text.to_string();
    }

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{BULLET} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep the first `max_words` whitespace-separated words and append an
/// ellipsis. Text within the limit is returned unchanged.
pub fn truncate(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }

    let mut out = words[..max_words].join(" ");
    out.push_str(ELLIPSIS);
    out
}
