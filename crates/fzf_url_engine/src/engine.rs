use fzf_url_logging::url_info;

use crate::{
    clipboard_candidates, first_available, opener_candidates, Clipboard, CommandClipboard,
    CommandProbe, EngineSettings, FzfPicker, Multiplexer, OpenerCommand, PathProbe, Picker,
    TmuxClient, UrlOpener,
};

/// The external programs one run needs.
///
/// Clipboard and opener are looked up lazily, only once the user has chosen
/// what to do with the selection.
pub trait Backend {
    fn multiplexer(&self) -> &dyn Multiplexer;
    fn picker(&self) -> &dyn Picker;
    fn clipboard(&self) -> Option<Box<dyn Clipboard>>;
    fn opener(&self) -> Option<Box<dyn UrlOpener>>;
}

pub struct EngineHandle {
    settings: EngineSettings,
    tmux: TmuxClient,
    picker: FzfPicker,
    probe: Box<dyn CommandProbe>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_probe(settings, Box::new(PathProbe::from_env()))
    }

    pub fn with_probe(settings: EngineSettings, probe: Box<dyn CommandProbe>) -> Self {
        let tmux = TmuxClient::new(
            settings.tmux.clone(),
            settings.tmux_socket.clone(),
            settings.history_limit,
        );
        let picker = FzfPicker::new(settings.fzf.clone());
        Self {
            settings,
            tmux,
            picker,
            probe,
        }
    }
}

impl Backend for EngineHandle {
    fn multiplexer(&self) -> &dyn Multiplexer {
        &self.tmux
    }

    fn picker(&self) -> &dyn Picker {
        &self.picker
    }

    fn clipboard(&self) -> Option<Box<dyn Clipboard>> {
        let command = match &self.settings.clipboard_override {
            Some(command) => command.clone(),
            None => first_available(&clipboard_candidates(), self.probe.as_ref())?,
        };
        url_info!("Clipboard command: {}", command);
        Some(Box::new(CommandClipboard::new(command)))
    }

    fn opener(&self) -> Option<Box<dyn UrlOpener>> {
        let command = match &self.settings.opener_override {
            Some(command) => command.clone(),
            None => first_available(&opener_candidates(), self.probe.as_ref())?,
        };
        url_info!("Opener command: {}", command);
        Some(Box::new(OpenerCommand::new(command, self.settings.open_timeout)))
    }
}
