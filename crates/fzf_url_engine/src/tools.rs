use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::str::FromStr;

use fzf_url_logging::url_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolSpecError {
    #[error("empty command")]
    Empty,
    #[error("invalid command {spec:?}: {source}")]
    Parse {
        spec: String,
        #[source]
        source: shell_words::ParseError,
    },
}

/// A program plus the fixed arguments it is always run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `spec` into words the way a POSIX shell would.
    pub fn parse(spec: &str) -> Result<Self, ToolSpecError> {
        let mut words = shell_words::split(spec)
            .map_err(|source| ToolSpecError::Parse {
                spec: spec.to_string(),
                source,
            })?
            .into_iter();
        let program = words.next().ok_or(ToolSpecError::Empty)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// File name of the program, without any directory.
    pub fn program_name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.program)
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl FromStr for ToolCommand {
    type Err = ToolSpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::parse(spec)
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(self.args.iter());
        write!(f, "{}", shell_words::join(words))
    }
}

/// Whether a program can be run on this system.
pub trait CommandProbe {
    fn exists(&self, program: &str) -> bool;
}

/// Looks for an executable file in a list of directories, `PATH` by default.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    dirs: Vec<PathBuf>,
}

impl PathProbe {
    pub fn from_env() -> Self {
        let dirs = env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl CommandProbe for PathProbe {
    fn exists(&self, program: &str) -> bool {
        if program.is_empty() {
            return false;
        }
        let path = Path::new(program);
        if path.components().count() > 1 {
            return is_executable(path);
        }
        self.dirs.iter().any(|dir| is_executable(&dir.join(program)))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

/// Asks `/bin/sh` via `command -v`, which also sees builtins and functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellProbe;

impl CommandProbe for ShellProbe {
    fn exists(&self, program: &str) -> bool {
        Command::new("/bin/sh")
            .args(["-c", "command -v \"$1\"", "sh", program])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

/// First candidate whose program the probe can find.
pub fn first_available(candidates: &[ToolCommand], probe: &dyn CommandProbe) -> Option<ToolCommand> {
    let found = candidates
        .iter()
        .find(|candidate| probe.exists(&candidate.program))
        .cloned();
    url_debug!(
        "Tool lookup among [{}] -> {:?}",
        candidates
            .iter()
            .map(ToolCommand::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        found.as_ref().map(ToolCommand::to_string)
    );
    found
}

/// Clipboard writers in order of preference.
pub fn clipboard_candidates() -> Vec<ToolCommand> {
    vec![
        ToolCommand::new("reattach-to-user-namespace", ["pbcopy"]),
        ToolCommand::new("pbcopy", Vec::<String>::new()),
        ToolCommand::new("wl-copy", Vec::<String>::new()),
        ToolCommand::new("xsel", ["--clipboard", "--input"]),
        ToolCommand::new("xclip", ["-selection", "clipboard"]),
    ]
}

/// URL openers in order of preference.
pub fn opener_candidates() -> Vec<ToolCommand> {
    vec![
        ToolCommand::new("open", Vec::<String>::new()),
        ToolCommand::new("xdg-open", Vec::<String>::new()),
    ]
}
