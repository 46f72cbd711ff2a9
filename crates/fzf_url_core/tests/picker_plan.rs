use fzf_url_core::{
    clipboard_text, fzf_args, ClientSize, PopupSize, Selection, SelectionAction, DEFAULT_COPY_KEY,
    DEFAULT_HEADER,
};
use pretty_assertions::assert_eq;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn popup_width_uses_header_when_it_is_widest() {
    let header = "x".repeat(36);
    let size = PopupSize::for_candidates(
        &strings(&["http://x.com"]),
        &header,
        ClientSize::new(200, 50),
    );
    assert_eq!(size, PopupSize { width: 44, height: 8 });
}

#[test]
fn popup_is_clamped_to_client() {
    let header = "x".repeat(36);
    let size = PopupSize::for_candidates(&strings(&["http://x.com"]), &header, ClientSize::new(40, 5));
    assert_eq!(size, PopupSize { width: 40, height: 5 });
}

#[test]
fn popup_width_uses_longest_candidate() {
    let long = format!("https://example.com/{}", "p".repeat(60));
    let candidates = vec![long.clone(), "http://a.com".to_string()];
    let size = PopupSize::for_candidates(&candidates, DEFAULT_HEADER, ClientSize::default());
    assert_eq!(size.width, 80);
    assert_eq!(size.height, 9);

    let wide = PopupSize::for_candidates(&candidates, DEFAULT_HEADER, ClientSize::new(300, 60));
    assert_eq!(wide.width, long.len() + 8);
}

#[test]
fn client_size_parses_tmux_output() {
    assert_eq!(ClientSize::parse("213 57\n"), Some(ClientSize::new(213, 57)));
    assert_eq!(ClientSize::parse(""), None);
    assert_eq!(ClientSize::parse("213"), None);
    assert_eq!(ClientSize::parse("wide tall"), None);
    assert_eq!(ClientSize::parse("1 2 3"), None);
    assert_eq!(ClientSize::default(), ClientSize::new(80, 24));
}

#[test]
fn fzf_args_carry_size_key_and_header() {
    let args = fzf_args(PopupSize { width: 44, height: 8 }, DEFAULT_HEADER, DEFAULT_COPY_KEY);
    assert_eq!(
        args,
        strings(&[
            "--tmux",
            "44,8",
            "--multi",
            "--no-margin",
            "--no-padding",
            "--wrap",
            "--expect",
            "ctrl-y",
            "--style",
            "default",
            "--header",
            "Press CTRL-Y to copy URL to clipboard",
            "--header-border",
            "top",
            "--highlight-line",
            "--header-first",
            "--info",
            "inline-right",
            "--padding",
            "1,1,0,1",
            "--border-label",
            " URLs ",
        ])
    );
}

#[test]
fn selection_needs_key_line_and_one_url() {
    assert_eq!(Selection::from_lines(Vec::new()), None);
    assert_eq!(Selection::from_lines(strings(&["ctrl-y"])), None);
    assert_eq!(Selection::from_lines(strings(&[""])), None);
}

#[test]
fn selection_splits_key_from_urls() {
    let selection =
        Selection::from_lines(strings(&["ctrl-y", "http://a.com", "http://b.com"])).unwrap();
    assert_eq!(selection.key, "ctrl-y");
    assert_eq!(selection.urls, strings(&["http://a.com", "http://b.com"]));
    assert_eq!(selection.action(DEFAULT_COPY_KEY), SelectionAction::Copy);

    let selection = Selection::from_lines(strings(&["", "http://a.com"])).unwrap();
    assert_eq!(selection.action(DEFAULT_COPY_KEY), SelectionAction::Open);
}

#[test]
fn clipboard_text_is_joined_and_trimmed() {
    let text = clipboard_text(&strings(&["http://a.com", "http://b.com"]), None);
    assert_eq!(text, "http://a.com\nhttp://b.com");

    let text = clipboard_text(&strings(&["  http://a.com", "http://b.com \n"]), Some(100));
    assert_eq!(text, "http://a.com\nhttp://b.com");
}

#[test]
fn clipboard_text_respects_limit() {
    let text = clipboard_text(&strings(&["http://a.com", "http://b.com"]), Some(14));
    assert_eq!(text, "http://a.com\nh");
}
