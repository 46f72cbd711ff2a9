use std::io::{self, BufWriter, Write};
use std::process::Stdio;

use fzf_url_logging::{url_debug, url_trace};
use thiserror::Error;

use crate::process::write_ignoring_broken_pipe;
use crate::ToolCommand;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("picker io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes one candidate per line to `sink`.
///
/// A reader that exits early (broken pipe) ends the write without error.
pub fn write_candidates<W: Write>(sink: &mut W, candidates: &[String]) -> io::Result<()> {
    let mut text = candidates.join("\n");
    if !candidates.is_empty() {
        text.push('\n');
    }
    write_ignoring_broken_pipe(sink, text.as_bytes())
}

/// Interactive selection over a list of candidates.
pub trait Picker {
    /// Output lines of the picker: the `--expect` key line first, then the selection.
    fn pick(&self, candidates: &[String], args: &[String]) -> Result<Vec<String>, PickerError>;
}

#[derive(Debug, Clone)]
pub struct FzfPicker {
    command: ToolCommand,
}

impl FzfPicker {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }
}

impl Picker for FzfPicker {
    fn pick(&self, candidates: &[String], args: &[String]) -> Result<Vec<String>, PickerError> {
        url_trace!("{} {:?}", self.command, args);
        let mut child = self
            .command
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PickerError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;

        if let Some(stdin) = child.stdin.take() {
            let mut sink = BufWriter::new(stdin);
            if let Err(err) = write_candidates(&mut sink, candidates) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(err.into());
            }
        }

        let output = child.wait_with_output()?;
        url_debug!("{} exited with {}", self.command.program, output.status);
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_owned)
            .collect())
    }
}
