//! fzf-url core: URL extraction, picker planning and the pure state machine
//! that sequences one run.
mod dedupe;
mod effect;
mod extract;
mod msg;
mod picker;
mod popup;
mod selection;
mod settings;
mod state;
mod update;

pub use dedupe::newest_first_unique;
pub use effect::{notice, Effect, ExitKind};
pub use extract::{has_location, UrlExtractor, MAX_URL_LENGTH, URL_PATTERN};
pub use msg::Msg;
pub use picker::{fzf_args, PickerRequest, DEFAULT_COPY_KEY, DEFAULT_HEADER};
pub use popup::{ClientSize, PopupSize, POPUP_HEIGHT_CHROME, POPUP_WIDTH_CHROME};
pub use selection::{clipboard_text, Selection, SelectionAction};
pub use settings::Settings;
pub use state::{AppState, Phase};
pub use update::update;
