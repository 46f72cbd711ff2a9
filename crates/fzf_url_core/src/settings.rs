use crate::{UrlExtractor, DEFAULT_COPY_KEY, DEFAULT_HEADER, MAX_URL_LENGTH};

/// Knobs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub header: String,
    pub copy_key: String,
    /// Length and location checks on URLs plus a cap on copied text.
    pub validate_urls: bool,
}

impl Settings {
    pub fn extractor(&self) -> UrlExtractor {
        UrlExtractor::new(self.validate_urls)
    }

    /// Room for ten maximum-length URLs.
    pub fn clipboard_limit(&self) -> Option<usize> {
        self.validate_urls.then_some(MAX_URL_LENGTH * 10)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            copy_key: DEFAULT_COPY_KEY.to_string(),
            validate_urls: true,
        }
    }
}
