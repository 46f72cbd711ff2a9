use fzf_url_core::{newest_first_unique, UrlExtractor, MAX_URL_LENGTH};
use pretty_assertions::assert_eq;
use regex::Regex;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn extracts_urls_in_scrollback_order() {
    let text = "\
build finished, see https://ci.example.com/job/42 for logs
   
  docs: http://docs.example.com/guide?page=2#install and file:///tmp/report.html
plain text without links
";
    let urls = UrlExtractor::default().extract_all(text);
    assert_eq!(
        urls,
        strings(&[
            "https://ci.example.com/job/42",
            "http://docs.example.com/guide?page=2#install",
            "file:///tmp/report.html",
        ])
    );
}

#[test]
fn never_returns_non_url_text() {
    let text = "see (https://a.example.com/x) or <http://b.example.com>, ftp://c.example.com\n\
                \"https://d.example.com/q?x=1&y=2\" mailto:e@example.com www.f.example.com";
    let pattern = Regex::new(fzf_url_core::URL_PATTERN).unwrap();
    let urls = UrlExtractor::default().extract_all(text);
    assert_eq!(
        urls,
        strings(&[
            "https://a.example.com/x",
            "http://b.example.com",
            "https://d.example.com/q?x=1&y=2",
        ])
    );
    for url in &urls {
        let found = pattern.find(url).unwrap();
        assert_eq!(found.as_str(), url.as_str());
    }
}

#[test]
fn trailing_punctuation_follows_character_classes() {
    let urls = UrlExtractor::default().extract_all("wow https://example.com/yay! and http://host.example:8080:");
    assert_eq!(
        urls,
        strings(&["https://example.com/yay!", "http://host.example:8080"])
    );
}

#[test]
fn bang_is_only_rejected_right_after_the_scheme() {
    let urls = UrlExtractor::new(false).extract_all("https://example.com/a!b http://!x http://a:b");
    assert_eq!(urls, strings(&["https://example.com/a!b", "http://a:b"]));
}

#[test]
fn validation_drops_matches_without_location() {
    let text = "http://?q=1 https://#top https://ok.example.com";
    assert_eq!(
        UrlExtractor::new(true).extract_all(text),
        strings(&["https://ok.example.com"])
    );
    assert_eq!(
        UrlExtractor::new(false).extract_all(text),
        strings(&["http://?q=1", "https://#top", "https://ok.example.com"])
    );
}

#[test]
fn validation_drops_overlong_matches() {
    let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
    let exact = format!(
        "https://example.com/{}",
        "b".repeat(MAX_URL_LENGTH - "https://example.com/".len())
    );
    let text = format!("{long}\n{exact}\n");

    let validated = UrlExtractor::new(true).extract_all(&text);
    assert_eq!(validated, vec![exact.clone()]);

    let minimal = UrlExtractor::new(false).extract_all(&text);
    assert_eq!(minimal, vec![long, exact]);
}

#[test]
fn empty_scrollback_yields_nothing() {
    assert!(UrlExtractor::default().extract_all("").is_empty());
    assert!(UrlExtractor::default().extract_all("\n   \n\t\n").is_empty());
}

#[test]
fn dedupe_orders_by_most_recent_occurrence() {
    let input = strings(&[
        "http://a.com",
        "http://b.com",
        "http://a.com",
        "http://c.com",
        "http://b.com",
    ]);
    assert_eq!(
        newest_first_unique(input),
        strings(&["http://b.com", "http://c.com", "http://a.com"])
    );
}

#[test]
fn dedupe_is_exact_match_only() {
    let input = strings(&["http://a.com", "http://a.com/", "HTTP://A.COM"]);
    assert_eq!(
        newest_first_unique(input),
        strings(&["HTTP://A.COM", "http://a.com/", "http://a.com"])
    );
}

#[test]
fn dedupe_of_empty_is_empty() {
    assert!(newest_first_unique(Vec::new()).is_empty());
}
