//! Parsing of human-readable view counts.
//!
//! Instagram abbreviates counts ("12.3K", "2.1M views", "1,234 plays").
//! [`parse_count`] turns any such string into a plain number and never
//! fails: input it cannot read yields `0.0`, which callers treat as
//! "no count found".

use crate::patterns::{LEADING_FLOAT, NON_COUNT_CHARS};

/// Parses a human-readable count into a number.
///
/// Keeps only digits, `.`, `,` and the suffix letters K/M/B, picks a
/// multiplier from the first suffix present (K before M before B), and
/// reads the leading decimal number of what remains.
///
/// # Example
///
/// ```rust
/// use rs_instasort::parse_count;
///
/// assert_eq!(parse_count("12.3K"), 12_300.0);
/// assert_eq!(parse_count("1,234"), 1_234.0);
/// assert_eq!(parse_count("2.1M views"), 2_100_000.0);
/// assert_eq!(parse_count("abc"), 0.0);
/// ```
#[must_use]
pub fn parse_count(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let cleaned = NON_COUNT_CHARS.replace_all(text, "");
    let multiplier = suffix_multiplier(&cleaned);

    let numeric: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let value = LEADING_FLOAT
        .find(&numeric)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    let count = value * multiplier;
    if count.is_finite() {
        count
    } else {
        0.0
    }
}

/// Multiplier for the first K/M/B suffix letter present, K taking precedence.
fn suffix_multiplier(cleaned: &str) -> f64 {
    let lower = cleaned.to_ascii_lowercase();
    if lower.contains('k') {
        1_000.0
    } else if lower.contains('m') {
        1_000_000.0
    } else if lower.contains('b') {
        1_000_000_000.0
    } else {
        1.0
    }
}
