mod platform;

use std::io::{self, Write};
use std::process::ExitCode;

use fzf_url_logging::url_debug;

fn main() -> ExitCode {
    match platform::run_app() {
        Ok(code) => code,
        Err(err) => {
            report_failure(&mut io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

/// Writes the one user-facing line for a failed run. The log only gets it at
/// debug level so a terminal logger does not repeat it on stderr.
fn report_failure(out: &mut impl Write, err: &anyhow::Error) {
    url_debug!("Run failed: {:#}", err);
    let _ = writeln!(out, "fzf-url: {err:#}");
}
