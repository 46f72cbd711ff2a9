use std::io;
use std::process::{Command, ExitStatus, Stdio};

use fzf_url_logging::{url_debug, url_warn};
use thiserror::Error;

use crate::ToolCommand;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("tmux {subcommand} exited with {status}")]
    Status {
        subcommand: &'static str,
        status: ExitStatus,
    },
}

/// The terminal multiplexer hosting the current pane.
pub trait Multiplexer {
    /// The pane's history, joined wrapped lines included.
    fn capture_scrollback(&self) -> Result<String, TmuxError>;
    /// `"<width> <height>"` of the attached client.
    fn client_size(&self) -> Result<String, TmuxError>;
    /// Shows a transient message in the status line; failures are only logged.
    fn display_message(&self, message: &str);
}

#[derive(Debug, Clone)]
pub struct TmuxClient {
    base: ToolCommand,
    socket: Option<String>,
    history_limit: u32,
}

impl TmuxClient {
    pub fn new(base: ToolCommand, socket: Option<String>, history_limit: u32) -> Self {
        Self {
            base,
            socket,
            history_limit,
        }
    }

    fn command(&self, subcommand: &str) -> Command {
        let mut command = self.base.command();
        if let Some(socket) = &self.socket {
            command.args(["-S", socket]);
        }
        command.arg(subcommand);
        command.stdin(Stdio::null()).stderr(Stdio::null());
        command
    }

    fn output(&self, subcommand: &'static str, args: &[&str]) -> Result<String, TmuxError> {
        let output = self
            .command(subcommand)
            .args(args)
            .output()
            .map_err(|source| TmuxError::Spawn {
                program: self.base.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(TmuxError::Status {
                subcommand,
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Multiplexer for TmuxClient {
    fn capture_scrollback(&self) -> Result<String, TmuxError> {
        let start = format!("-{}", self.history_limit);
        let text = self.output("capture-pane", &["-J", "-p", "-S", &start])?;
        url_debug!("Captured {} bytes of scrollback", text.len());
        Ok(text)
    }

    fn client_size(&self) -> Result<String, TmuxError> {
        self.output("display-message", &["-p", "#{client_width} #{client_height}"])
    }

    fn display_message(&self, message: &str) {
        let status = self
            .command("display-message")
            .arg(message)
            .stdout(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => url_warn!("tmux display-message exited with {}", status),
            Err(err) => url_warn!("tmux display-message failed: {}", err),
        }
    }
}
