use crate::Settings;

/// Where a run is in the capture, pick, dispatch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Capturing,
    Sizing,
    Picking,
    Dispatching,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: Settings,
    phase: Phase,
    candidates: Vec<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Unique URLs offered to the picker, newest first.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }
}
