use std::time::Duration;

use crate::ToolCommand;

/// Lines of pane history requested from tmux.
pub const DEFAULT_HISTORY_LIMIT: u32 = 99_999;
/// How long a blocking opener such as `open` may run.
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub tmux: ToolCommand,
    /// Passed to tmux as `-S <socket>`.
    pub tmux_socket: Option<String>,
    pub history_limit: u32,
    pub fzf: ToolCommand,
    pub open_timeout: Duration,
    /// Replaces the clipboard candidate list.
    pub clipboard_override: Option<ToolCommand>,
    /// Replaces the opener candidate list.
    pub opener_override: Option<ToolCommand>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            tmux: ToolCommand::new("tmux", Vec::<String>::new()),
            tmux_socket: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            fzf: ToolCommand::new("fzf", Vec::<String>::new()),
            open_timeout: DEFAULT_OPEN_TIMEOUT,
            clipboard_override: None,
            opener_override: None,
        }
    }
}
