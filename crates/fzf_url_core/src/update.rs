use fzf_url_logging::{url_debug, url_info, url_warn};

use crate::{
    clipboard_text, fzf_args, newest_first_unique, notice, AppState, Effect, ExitKind, Msg, Phase,
    PickerRequest, PopupSize, Selection, SelectionAction,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages that do not belong to the current phase are dropped without
/// effects, and nothing happens once an exit has been requested.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match (state.phase(), msg) {
        (Phase::Done, msg) => {
            url_debug!("Ignoring {:?} after exit", msg);
            Vec::new()
        }
        (Phase::Idle, Msg::Started) => {
            state.set_phase(Phase::Capturing);
            vec![Effect::CaptureScrollback]
        }
        (Phase::Capturing, Msg::ScrollbackCaptured(text)) => {
            let found = state.settings().extractor().extract_all(&text);
            let found_count = found.len();
            let candidates = newest_first_unique(found);
            url_info!(
                "Scrollback lines={} matches={} unique={}",
                text.lines().count(),
                found_count,
                candidates.len()
            );
            if candidates.is_empty() {
                halt(&mut state, notice::NO_URLS)
            } else {
                state.set_candidates(candidates);
                state.set_phase(Phase::Sizing);
                vec![Effect::QueryClientSize]
            }
        }
        (Phase::Capturing, Msg::ScrollbackUnavailable(reason)) => {
            url_warn!("Scrollback capture failed: {}", reason);
            state.set_phase(Phase::Done);
            vec![
                Effect::ReportError(notice::NO_TMUX.to_string()),
                Effect::Exit(ExitKind::Failure),
            ]
        }
        (Phase::Sizing, Msg::ClientSizeReported(client)) => {
            let client = client.unwrap_or_else(|| {
                url_debug!("Client size unknown; using default");
                Default::default()
            });
            let settings = state.settings();
            let size = PopupSize::for_candidates(state.candidates(), &settings.header, client);
            url_debug!("Popup size {} within client {:?}", size, client);
            let request = PickerRequest {
                candidates: state.candidates().to_vec(),
                args: fzf_args(size, &settings.header, &settings.copy_key),
            };
            state.set_phase(Phase::Picking);
            vec![Effect::RunPicker(request)]
        }
        (Phase::Picking, Msg::PickerClosed(lines)) => match Selection::from_lines(lines) {
            None => {
                url_info!("Picker closed without a selection");
                finish(&mut state)
            }
            Some(selection) => {
                state.set_phase(Phase::Dispatching);
                match selection.action(&state.settings().copy_key) {
                    SelectionAction::Copy => {
                        url_info!("Copying {} URL(s)", selection.urls.len());
                        let text =
                            clipboard_text(&selection.urls, state.settings().clipboard_limit());
                        vec![Effect::CopyToClipboard { text }]
                    }
                    SelectionAction::Open => {
                        url_info!("Opening {} URL(s)", selection.urls.len());
                        vec![Effect::OpenUrls {
                            urls: selection.urls,
                        }]
                    }
                }
            }
        },
        (Phase::Dispatching, Msg::ClipboardUnavailable) => halt(&mut state, notice::NO_CLIPBOARD),
        (Phase::Dispatching, Msg::CopyFinished { ok }) => {
            let message = if ok {
                notice::COPIED
            } else {
                notice::COPY_FAILED
            };
            halt(&mut state, message)
        }
        (Phase::Dispatching, Msg::OpenerUnavailable) => halt(&mut state, notice::NO_OPENER),
        (Phase::Dispatching, Msg::UrlsOpened { opened, failed }) => {
            url_info!("Opened {} URL(s), {} failed", opened, failed);
            finish(&mut state)
        }
        (phase, msg) => {
            url_debug!("Ignoring {:?} in phase {:?}", msg, phase);
            Vec::new()
        }
    };

    (state, effects)
}

/// Show `message` and exit successfully.
fn halt(state: &mut AppState, message: &str) -> Vec<Effect> {
    state.set_phase(Phase::Done);
    vec![
        Effect::Notify(message.to_string()),
        Effect::Exit(ExitKind::Success),
    ]
}

fn finish(state: &mut AppState) -> Vec<Effect> {
    state.set_phase(Phase::Done);
    vec![Effect::Exit(ExitKind::Success)]
}
