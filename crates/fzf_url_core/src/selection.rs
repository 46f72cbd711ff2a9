/// What fzf printed: the `--expect` key line, then the chosen URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Empty when the user confirmed with Enter.
    pub key: String,
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Copy,
    Open,
}

impl Selection {
    /// `None` when fzf printed fewer than two lines (cancelled, nothing chosen).
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.len() < 2 {
            return None;
        }
        let mut lines = lines.into_iter();
        let key = lines.next()?;
        Some(Self {
            key,
            urls: lines.collect(),
        })
    }

    pub fn action(&self, copy_key: &str) -> SelectionAction {
        if self.key == copy_key {
            SelectionAction::Copy
        } else {
            SelectionAction::Open
        }
    }
}

/// Newline-joined, trimmed, and cut to `limit` characters when given.
pub fn clipboard_text(urls: &[String], limit: Option<usize>) -> String {
    let joined = urls.join("\n");
    let trimmed = joined.trim();
    match limit {
        Some(limit) if trimmed.chars().count() > limit => trimmed.chars().take(limit).collect(),
        _ => trimmed.to_string(),
    }
}
