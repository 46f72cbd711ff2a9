//! fzf-url engine: the external programs a run talks to.
mod clipboard;
mod engine;
mod opener;
mod picker;
mod process;
mod settings;
mod tmux;
mod tools;

pub use clipboard::{Clipboard, ClipboardError, CommandClipboard};
pub use engine::{Backend, EngineHandle};
pub use opener::{open_all, OpenError, OpenStrategy, OpenerCommand, UrlOpener};
pub use picker::{write_candidates, FzfPicker, Picker, PickerError};
pub use settings::{EngineSettings, DEFAULT_HISTORY_LIMIT, DEFAULT_OPEN_TIMEOUT};
pub use tmux::{Multiplexer, TmuxClient, TmuxError};
pub use tools::{
    clipboard_candidates, first_available, opener_candidates, CommandProbe, PathProbe,
    ShellProbe, ToolCommand, ToolSpecError,
};
