#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Kick off a run.
    Started,
    /// Pane history as text.
    ScrollbackCaptured(String),
    /// tmux could not be reached; carries the reason for the log.
    ScrollbackUnavailable(String),
    /// Client size, or `None` if the query failed.
    ClientSizeReported(Option<crate::ClientSize>),
    /// Raw fzf output lines (empty when fzf failed to run).
    PickerClosed(Vec<String>),
    /// No clipboard writer on this system.
    ClipboardUnavailable,
    /// Clipboard writer finished.
    CopyFinished { ok: bool },
    /// No URL opener on this system.
    OpenerUnavailable,
    /// Opener ran for every selected URL.
    UrlsOpened { opened: usize, failed: usize },
}
