use std::collections::HashSet;

/// Unique URLs, most recent occurrence first.
///
/// `urls` is in scrollback order (oldest first). Comparison is exact.
pub fn newest_first_unique(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    urls.into_iter()
        .rev()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
