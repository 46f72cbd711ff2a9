use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use fzf_url_logging::{url_debug, url_for_log, url_warn};
use thiserror::Error;

use crate::process::wait_with_timeout;
use crate::ToolCommand;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
    #[error("{program} did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },
    #[error("opener io error: {0}")]
    Io(#[from] io::Error),
}

/// Something that hands a URL to the desktop.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// How an opener process is supervised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStrategy {
    /// Run to completion, killed after the timeout.
    Wait { timeout: Duration },
    /// Start under `nohup` in a new process group and return at once.
    Detach,
}

#[derive(Debug, Clone)]
pub struct OpenerCommand {
    command: ToolCommand,
    strategy: OpenStrategy,
}

impl OpenerCommand {
    /// Only the platform `open` command is waited for, under `timeout`.
    /// Every other opener, `xdg-open` and user overrides included, is detached.
    pub fn new(command: ToolCommand, timeout: Duration) -> Self {
        let strategy = if command.program_name() == "open" {
            OpenStrategy::Wait { timeout }
        } else {
            OpenStrategy::Detach
        };
        Self::with_strategy(command, strategy)
    }

    pub fn with_strategy(command: ToolCommand, strategy: OpenStrategy) -> Self {
        Self { command, strategy }
    }

    pub fn strategy(&self) -> OpenStrategy {
        self.strategy
    }

    fn spawn_error(&self, source: io::Error) -> OpenError {
        OpenError::Spawn {
            program: self.command.program.clone(),
            source,
        }
    }

    fn open_and_wait(&self, url: &str, timeout: Duration) -> Result<(), OpenError> {
        let mut child = self
            .command
            .command()
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| self.spawn_error(err))?;
        match wait_with_timeout(&mut child, timeout)? {
            Some(status) if status.success() => Ok(()),
            Some(status) => Err(OpenError::Status {
                program: self.command.program.clone(),
                status,
            }),
            None => Err(OpenError::Timeout {
                program: self.command.program.clone(),
                timeout,
            }),
        }
    }

    fn open_detached(&self, url: &str) -> Result<(), OpenError> {
        let mut command = std::process::Command::new("nohup");
        command
            .arg(&self.command.program)
            .args(&self.command.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        let child = command.spawn().map_err(|err| self.spawn_error(err))?;
        url_debug!("Detached {} as pid {}", self.command.program, child.id());
        Ok(())
    }
}

impl UrlOpener for OpenerCommand {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        match self.strategy {
            OpenStrategy::Wait { timeout } => self.open_and_wait(url, timeout),
            OpenStrategy::Detach => self.open_detached(url),
        }
    }
}

/// Opens every URL, carrying on past failures. Returns `(opened, failed)`.
pub fn open_all(opener: &dyn UrlOpener, urls: &[String]) -> (usize, usize) {
    let mut opened = 0;
    let mut failed = 0;
    for url in urls {
        match opener.open(url) {
            Ok(()) => opened += 1,
            Err(err) => {
                url_warn!("Could not open {}: {}", url_for_log(url), err);
                failed += 1;
            }
        }
    }
    (opened, failed)
}
