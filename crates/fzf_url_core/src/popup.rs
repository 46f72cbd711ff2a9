use std::fmt;

/// Border (2), padding (4) and margin (2) around the longest line.
pub const POPUP_WIDTH_CHROME: usize = 8;
/// Prompt/info rows (5), header (1) and header border (1).
pub const POPUP_HEIGHT_CHROME: usize = 7;

/// Size of the tmux client the popup is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSize {
    pub width: usize,
    pub height: usize,
}

impl ClientSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Parses `"<width> <height>"` as printed by tmux.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let width = parts.next()?.parse().ok()?;
        let height = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { width, height })
    }
}

impl Default for ClientSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Popup dimensions passed to `fzf --tmux`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupSize {
    pub width: usize,
    pub height: usize,
}

impl PopupSize {
    /// Fits every candidate and the header, clamped to the client.
    pub fn for_candidates(candidates: &[String], header: &str, client: ClientSize) -> Self {
        let widest = candidates
            .iter()
            .map(|candidate| candidate.chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0);
        let width = widest + POPUP_WIDTH_CHROME;
        let height = candidates.len() + POPUP_HEIGHT_CHROME;
        Self {
            width: width.min(client.width),
            height: height.min(client.height),
        }
    }
}

impl fmt::Display for PopupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}
