//! Decoding of saved page bytes.
//!
//! Pages saved from the browser are usually UTF-8, but the CLI accepts any
//! bytes: a byte-order mark or a `<meta>` charset declaration in the head
//! selects the decoder, and UTF-8 is the fallback.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches `<meta charset=...>` and the `http-equiv` content-type form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("META_CHARSET regex")
});

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Picks the encoding of `html`.
///
/// A byte-order mark wins, then the first `<meta>` charset declaration in
/// the first kilobyte, then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    declared_encoding(html).unwrap_or(UTF_8)
}

/// Reads the `<meta>` charset declaration, if any names a known encoding.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Decodes `html` to a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing.
///
/// ```
/// use rs_instasort::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced malformed {} sequences", encoding.name());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_the_default() {
        assert_eq!(detect_encoding(b"<html><body>1.2K views</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset_is_honoured() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // WHATWG maps latin1 labels to windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_charset_is_honoured() {
        let html = br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=Shift_JIS">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn bom_beats_meta() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        assert_eq!(detect_encoding(br#"<meta charset="klingon">"#), UTF_8);
    }

    #[test]
    fn decode_replaces_invalid_bytes() {
        let text = decode_html(b"<p>12 views \xFF\xFE</p>");
        assert!(text.contains("12 views"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn decode_strips_bom() {
        let text = decode_html(b"\xEF\xBB\xBF<p>x</p>");
        assert_eq!(text, "<p>x</p>");
    }
}
