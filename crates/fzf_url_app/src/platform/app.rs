use std::collections::VecDeque;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use fzf_url_core::{update, AppState, Effect, ExitKind, Msg};
use fzf_url_engine::{Backend, EngineHandle};
use fzf_url_logging::{url_info, url_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;

pub fn run_app() -> Result<ExitCode> {
    let config = AppConfig::parse();
    logging::initialize(config.log, config.log_level);
    url_info!("fzf-url {} starting", env!("CARGO_PKG_VERSION"));

    let engine = EngineHandle::new(config.engine_settings()?);
    let runner = EffectRunner::new(engine);
    let exit = drive(AppState::new(config.core_settings()), &runner);

    url_info!("Exiting with {:?}", exit);
    Ok(ExitCode::from(exit.code()))
}

/// Feeds messages through `update` and runs the resulting effects until one
/// of them asks to exit.
fn drive<B: Backend>(mut state: AppState, runner: &EffectRunner<B>) -> ExitKind {
    let mut inbox = VecDeque::from([Msg::Started]);
    while let Some(msg) = inbox.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        for effect in effects {
            if let Effect::Exit(kind) = effect {
                return kind;
            }
            if let Some(reply) = runner.run(effect) {
                inbox.push_back(reply);
            }
        }
    }
    url_warn!("Message loop ended in phase {:?} without an exit", state.phase());
    ExitKind::Success
}
