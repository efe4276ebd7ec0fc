use rs_instasort::{parse_count, sort_html, sort_html_bytes, Options, NO_POSTS_MESSAGE};

#[test]
fn parse_count_is_total() {
    for input in ["", " ", "abc", "K", "M views", "..", ",,,", "∞", "views 12", "-5", "1e9"] {
        let value = parse_count(input);
        assert!(value.is_finite(), "{input:?} gave {value}");
        assert!(value >= 0.0, "{input:?} gave {value}");
    }
}

#[test]
fn parse_count_reference_values() {
    assert_eq!(parse_count("12.3K"), 12_300.0);
    assert_eq!(parse_count("1,234"), 1_234.0);
    assert_eq!(parse_count("2.1M views"), 2_100_000.0);
    assert_eq!(parse_count(""), 0.0);
    assert_eq!(parse_count("abc"), 0.0);
}

#[test]
fn sort_does_not_panic_on_malformed_html() {
    for html in [
        "<article>12 views",
        "<main><article><div></article></main>",
        "<div role=\"button\" tabindex=\"0\">3 plays<div role=\"button\" tabindex=\"0\">9 plays",
        "&amp views &lt;",
        "",
    ] {
        let outcome = sort_html(html, &Options::default());
        assert!(
            outcome.response.success || outcome.response.message == NO_POSTS_MESSAGE,
            "{html:?}: {}",
            outcome.response.message
        );
    }
}

#[test]
fn nested_tiles_collapse_to_one_post() {
    let html = r#"<main id="feed">
        <article id="a">
            <div role="button" tabindex="0"><span>7 views</span></div>
            <div role="button" tabindex="0"><span>photo</span></div>
        </article>
        <article id="b"><span>8 views</span></article>
    </main>"#;

    let outcome = sort_html(html, &Options::default());
    assert_eq!(outcome.response.posts_found, Some(2));
    assert!(outcome.html.find(r#"id="b""#) < outcome.html.find(r#"id="a""#));
}

#[test]
fn windows_1252_page_is_decoded_before_sorting() {
    let html = b"<html><head><meta charset=\"windows-1252\"></head><body><main>\
        <article id=\"a\">Caf\xE9 \x96 4 views</article>\
        <article id=\"b\">Caf\xE9 \x96 40 views</article>\
        </main></body></html>";

    let outcome = sort_html_bytes(html, &Options::default());
    assert!(outcome.response.success);
    assert!(outcome.html.contains("Café"));
    assert!(outcome.html.find(r#"id="b""#) < outcome.html.find(r#"id="a""#));
}
