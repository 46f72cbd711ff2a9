use fzf_url_core::{ClientSize, Effect, Msg};
use fzf_url_engine::{open_all, Backend};
use fzf_url_logging::{url_debug, url_warn};

/// Performs effects against a [`Backend`] and turns the outcome into messages.
pub struct EffectRunner<B> {
    backend: B,
}

impl<B: Backend> EffectRunner<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs one effect. `Exit` is left to the caller and yields nothing.
    pub fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::CaptureScrollback => {
                let msg = match self.backend.multiplexer().capture_scrollback() {
                    Ok(text) => Msg::ScrollbackCaptured(text),
                    Err(err) => Msg::ScrollbackUnavailable(err.to_string()),
                };
                Some(msg)
            }
            Effect::QueryClientSize => {
                let size = match self.backend.multiplexer().client_size() {
                    Ok(text) => {
                        let parsed = ClientSize::parse(&text);
                        if parsed.is_none() {
                            url_warn!("Unexpected client size report {:?}", text.trim());
                        }
                        parsed
                    }
                    Err(err) => {
                        url_warn!("Client size query failed: {}", err);
                        None
                    }
                };
                Some(Msg::ClientSizeReported(size))
            }
            Effect::RunPicker(request) => {
                let lines = self
                    .backend
                    .picker()
                    .pick(&request.candidates, &request.args)
                    .unwrap_or_else(|err| {
                        url_warn!("Picker failed: {}", err);
                        Vec::new()
                    });
                Some(Msg::PickerClosed(lines))
            }
            Effect::CopyToClipboard { text } => {
                let Some(clipboard) = self.backend.clipboard() else {
                    return Some(Msg::ClipboardUnavailable);
                };
                let ok = match clipboard.copy(&text) {
                    Ok(()) => true,
                    Err(err) => {
                        url_warn!("Copy failed: {}", err);
                        false
                    }
                };
                Some(Msg::CopyFinished { ok })
            }
            Effect::OpenUrls { urls } => {
                let Some(opener) = self.backend.opener() else {
                    return Some(Msg::OpenerUnavailable);
                };
                let (opened, failed) = open_all(opener.as_ref(), &urls);
                Some(Msg::UrlsOpened { opened, failed })
            }
            Effect::Notify(message) => {
                url_debug!("Notify: {}", message);
                self.backend.multiplexer().display_message(&message);
                None
            }
            Effect::ReportError(message) => {
                eprintln!("{message}");
                None
            }
            Effect::Exit(_) => None,
        }
    }
}
