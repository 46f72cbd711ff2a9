use crate::PickerRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CaptureScrollback,
    QueryClientSize,
    RunPicker(PickerRequest),
    CopyToClipboard { text: String },
    OpenUrls { urls: Vec<String> },
    /// Transient message in the tmux status line.
    Notify(String),
    /// Diagnostic on stderr.
    ReportError(String),
    Exit(ExitKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    Success,
    Failure,
}

impl ExitKind {
    pub fn code(self) -> u8 {
        match self {
            ExitKind::Success => 0,
            ExitKind::Failure => 1,
        }
    }
}

/// Texts shown through [`Effect::Notify`] and [`Effect::ReportError`].
pub mod notice {
    pub const NO_URLS: &str = "No URLs found";
    pub const COPIED: &str = "Copied to clipboard";
    pub const COPY_FAILED: &str = "Error copying to clipboard";
    pub const NO_CLIPBOARD: &str = "No command to control clipboard with";
    pub const NO_OPENER: &str = "No command to open URL with";
    pub const NO_TMUX: &str = "Error: tmux not available or not running in tmux session";
}
