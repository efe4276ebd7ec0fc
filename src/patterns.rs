//! Compiled regex patterns for view-count detection.
//!
//! All patterns are compiled once at first use with `LazyLock`. Digit and
//! suffix classes are spelled out as ASCII: `\d` and `(?i)` would also
//! accept other scripts' digits and the Kelvin sign.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches the word that marks a counter as a view counter.
pub static VIEW_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)views?|plays?").expect("VIEW_KEYWORD regex"));

/// Matches any ASCII digit.
pub static HAS_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("HAS_DIGIT regex"));

/// Matches a numeric token followed by "views"/"plays" in free text.
///
/// Group 1 is the numeric token (digits, separators and K/M/B suffixes).
pub static VIEW_COUNT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9.,KMBkmb]+)\s*(?i-u:(views?|plays?))").expect("VIEW_COUNT_TEXT regex")
});

/// Matches every character a count token cannot contain.
pub static NON_COUNT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,KMBkmb]").expect("NON_COUNT_CHARS regex"));

/// Matches a leading decimal number, the part `parseFloat` would accept.
pub static LEADING_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)").expect("LEADING_FLOAT regex"));
