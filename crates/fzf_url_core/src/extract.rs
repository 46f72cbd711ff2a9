use std::sync::OnceLock;

use regex::Regex;

/// Longest URL accepted when validation is enabled.
pub const MAX_URL_LENGTH: usize = 8192;

/// `http://`, `https://` or `file://` followed by URL-safe characters.
///
/// The body may not contain `!` and the tail may not contain `:`.
pub const URL_PATTERN: &str =
    r"(?:https?|file)://[-a-zA-Z0-9@:%_+.~#?&/=]+[-a-zA-Z0-9@%_+.~#?&/=!]+";

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is valid"))
}

/// Finds URL-like substrings in scrollback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlExtractor {
    validate: bool,
}

impl UrlExtractor {
    /// `validate` drops over-long matches and matches without a location.
    pub fn new(validate: bool) -> Self {
        Self { validate }
    }

    /// Matches in one line, left to right.
    pub fn extract_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        url_regex()
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(|candidate| !self.validate || is_acceptable(candidate))
            .collect()
    }

    /// Matches across all non-blank lines, in top-to-bottom order.
    pub fn extract_all(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .flat_map(|line| self.extract_line(line))
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

fn is_acceptable(candidate: &str) -> bool {
    candidate.len() <= MAX_URL_LENGTH && has_location(candidate)
}

/// `(scheme is http/https/file and netloc is non-empty) or path is non-empty`.
///
/// A non-empty path alone is enough, whatever the scheme. Netloc is the text
/// after `//` up to the first `/`, `?` or `#`; path runs from there up to the
/// first `?` or `#`.
pub fn has_location(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    let scheme_known = matches!(
        scheme.to_ascii_lowercase().as_str(),
        "http" | "https" | "file"
    );

    let netloc_end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (netloc, after_netloc) = rest.split_at(netloc_end);
    let path_end = after_netloc
        .find(|c: char| matches!(c, '?' | '#'))
        .unwrap_or(after_netloc.len());
    let path = &after_netloc[..path_end];

    (scheme_known && !netloc.is_empty()) || !path.is_empty()
}
