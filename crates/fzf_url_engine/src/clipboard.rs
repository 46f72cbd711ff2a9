use std::io;
use std::process::{ExitStatus, Stdio};

use fzf_url_logging::url_debug;
use thiserror::Error;

use crate::process::write_ignoring_broken_pipe;
use crate::ToolCommand;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("clipboard io error: {0}")]
    Io(#[from] io::Error),
    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
}

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard writer that reads the text on stdin (`pbcopy`, `xclip`, ...).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: ToolCommand,
}

impl CommandClipboard {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = self
            .command
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = write_ignoring_broken_pipe(&mut stdin, text.as_bytes()) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(err.into());
            }
        }

        let status = child.wait()?;
        url_debug!("{} exited with {}", self.command, status);
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Status {
                program: self.command.program.clone(),
                status,
            })
        }
    }
}
