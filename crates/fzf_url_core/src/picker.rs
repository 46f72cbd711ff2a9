use crate::PopupSize;

pub const DEFAULT_HEADER: &str = "Press CTRL-Y to copy URL to clipboard";
pub const DEFAULT_COPY_KEY: &str = "ctrl-y";

/// Everything needed to launch one fzf popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    /// Written to fzf's stdin, one per line.
    pub candidates: Vec<String>,
    /// fzf argument vector, without the program name.
    pub args: Vec<String>,
}

/// fzf arguments for a multi-select popup that reports `copy_key` via `--expect`.
pub fn fzf_args(size: PopupSize, header: &str, copy_key: &str) -> Vec<String> {
    [
        "--tmux",
        &size.to_string(),
        "--multi",
        "--no-margin",
        "--no-padding",
        "--wrap",
        "--expect",
        copy_key,
        "--style",
        "default",
        "--header",
        header,
        "--header-border",
        "top",
        "--highlight-line",
        "--header-first",
        "--info",
        "inline-right",
        "--padding",
        "1,1,0,1",
        "--border-label",
        " URLs ",
    ]
    .iter()
    .map(|arg| (*arg).to_string())
    .collect()
}
