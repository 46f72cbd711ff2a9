//! Command-line and environment configuration.
//!
//! Every option has a default, so a bare `fzf-url` from a tmux binding runs
//! the standard capture, pick and copy/open flow.

use anyhow::{Context, Result};
use clap::Parser;
use fzf_url_core::Settings;
use fzf_url_engine::{EngineSettings, ToolCommand, DEFAULT_HISTORY_LIMIT};
use log::LevelFilter;

use super::logging::LogDestination;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "fzf-url",
    version,
    about = "Pick URLs from the tmux scrollback with fzf, then open or copy them"
)]
pub struct AppConfig {
    /// fzf executable, optionally with extra arguments
    #[arg(long = "fzf-cmd", env = "FZF_URL_FZF_CMD", default_value = "fzf")]
    pub fzf_cmd: String,

    /// Keep every pattern match: no length or location checks, no cap on copied text
    #[arg(long = "no-validate", env = "FZF_URL_NO_VALIDATE", default_value_t = false)]
    pub no_validate: bool,

    /// Lines of pane history to scan
    #[arg(long, env = "FZF_URL_HISTORY_LIMIT", default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: u32,

    /// tmux server socket path
    #[arg(long, env = "FZF_URL_TMUX_SOCKET")]
    pub tmux_socket: Option<String>,

    /// Clipboard command reading text on stdin (skips auto-detection)
    #[arg(long = "clipboard-cmd", env = "FZF_URL_CLIPBOARD_CMD")]
    pub clipboard_cmd: Option<String>,

    /// Command that opens a URL given as its last argument (skips auto-detection)
    #[arg(long = "open-cmd", env = "FZF_URL_OPEN_CMD")]
    pub open_cmd: Option<String>,

    /// Where to write logs
    #[arg(long, env = "FZF_URL_LOG", value_enum, default_value_t = LogDestination::Off)]
    pub log: LogDestination,

    /// Log level filter
    #[arg(long = "log-level", env = "FZF_URL_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn core_settings(&self) -> Settings {
        Settings {
            validate_urls: !self.no_validate,
            ..Settings::default()
        }
    }

    pub fn engine_settings(&self) -> Result<EngineSettings> {
        let fzf = ToolCommand::parse(&self.fzf_cmd).context("invalid --fzf-cmd")?;
        let clipboard_override = self
            .clipboard_cmd
            .as_deref()
            .map(ToolCommand::parse)
            .transpose()
            .context("invalid --clipboard-cmd")?;
        let opener_override = self
            .open_cmd
            .as_deref()
            .map(ToolCommand::parse)
            .transpose()
            .context("invalid --open-cmd")?;

        Ok(EngineSettings {
            tmux_socket: self.tmux_socket.clone().filter(|socket| !socket.is_empty()),
            history_limit: self.history_limit,
            fzf,
            clipboard_override,
            opener_override,
            ..EngineSettings::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fzf-url").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let config = parse(&[]);
        assert_eq!(config.core_settings(), Settings::default());
        assert_eq!(config.log, LogDestination::Off);
        assert_eq!(config.log_level, LevelFilter::Info);

        let engine = config.engine_settings().unwrap();
        assert_eq!(engine, EngineSettings::default());
    }

    #[test]
    fn overrides_are_split_into_commands() {
        let config = parse(&[
            "--fzf-cmd",
            "fzf --no-color",
            "--clipboard-cmd",
            "xclip -selection primary",
            "--open-cmd",
            "firefox --new-tab",
            "--history-limit",
            "2000",
            "--tmux-socket",
            "/tmp/tmux-1000/work",
        ]);
        let engine = config.engine_settings().unwrap();
        assert_eq!(engine.fzf, ToolCommand::new("fzf", ["--no-color"]));
        assert_eq!(
            engine.clipboard_override,
            Some(ToolCommand::new("xclip", ["-selection", "primary"]))
        );
        assert_eq!(
            engine.opener_override,
            Some(ToolCommand::new("firefox", ["--new-tab"]))
        );
        assert_eq!(engine.history_limit, 2000);
        assert_eq!(engine.tmux_socket.as_deref(), Some("/tmp/tmux-1000/work"));
    }

    #[test]
    fn no_validate_switches_to_minimal_extraction() {
        let config = parse(&["--no-validate"]);
        let settings = config.core_settings();
        assert!(!settings.validate_urls);
        assert_eq!(settings.clipboard_limit(), None);
    }

    #[test]
    fn malformed_override_is_rejected() {
        let config = parse(&["--clipboard-cmd", "xclip 'oops"]);
        let err = config.engine_settings().unwrap_err();
        assert!(format!("{err:#}").contains("--clipboard-cmd"));
    }

    #[test]
    fn log_options_parse() {
        let config = parse(&["--log", "both", "--log-level", "debug"]);
        assert_eq!(config.log, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
