//! Configuration options for sorting.
//!
//! The `Options` struct controls how candidate posts are found, which
//! labels count as view counters, and whether the grid row layout is
//! rebuilt after sorting.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Default CSS selector for candidate post elements.
pub const DEFAULT_CANDIDATE_SELECTOR: &str = r#"article, div[role="button"][tabindex="0"]"#;

/// Default canonical post tag that candidates normalize to.
pub const DEFAULT_ROOT_TAG: &str = "article";

/// Default host the sorter targets.
pub const DEFAULT_TARGET_HOST: &str = "instagram.com";

/// Configuration options for sorting.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the Instagram feed settings.
///
/// # Example
///
/// ```rust
/// use rs_instasort::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Rebuild a three-column reels grid after sorting
/// let options = Options {
///     row_size: Some(3),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// CSS selector matching candidate post elements.
    ///
    /// Default: `article, div[role="button"][tabindex="0"]`
    pub candidate_selector: String,

    /// Tag name of the canonical post root.
    ///
    /// Each candidate is replaced by its closest ancestor (or itself) with
    /// this tag, so nested fragments of one post collapse into one root.
    ///
    /// Default: `article`
    pub root_tag: String,

    /// Substrings of `aria-label` that mark an explicit view counter.
    ///
    /// Matching is case-insensitive. A counter label containing one of these
    /// is read as a view count even without the word "views".
    ///
    /// Default: `["view", "play"]`
    pub label_keywords: Vec<String>,

    /// Substrings of `data-testid` that mark an explicit view counter.
    ///
    /// Default: `["view"]`
    pub testid_keywords: Vec<String>,

    /// Number of tiles per grid row.
    ///
    /// When set and the sorted posts live in row containers that share one
    /// grid container, tiles are redistributed across all rows instead of
    /// being sorted within a single row.
    ///
    /// Default: `None`
    pub row_size: Option<usize>,

    /// CSS selector for grid row containers.
    ///
    /// When `None`, rows are the element children of the sorted group's
    /// grandparent.
    ///
    /// Default: `None`
    pub row_selector: Option<String>,

    /// URL of the page being sorted.
    ///
    /// When provided, its host must be `target_host` or a subdomain of it.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Host the sorter is meant for.
    ///
    /// Default: `instagram.com`
    pub target_host: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            candidate_selector: DEFAULT_CANDIDATE_SELECTOR.to_string(),
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            label_keywords: vec!["view".to_string(), "play".to_string()],
            testid_keywords: vec!["view".to_string()],
            row_size: None,
            row_selector: None,
            url: None,
            target_host: DEFAULT_TARGET_HOST.to_string(),
        }
    }
}

impl Options {
    /// Decodes options from a JSON document and validates them.
    ///
    /// Missing fields take their default values.
    ///
    /// ```rust
    /// use rs_instasort::Options;
    ///
    /// let options = Options::from_json(r#"{"row_size": 3}"#)?;
    /// assert_eq!(options.row_size, Some(3));
    /// assert_eq!(options.root_tag, "article");
    /// # Ok::<(), rs_instasort::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that the options describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        if self.candidate_selector.trim().is_empty() {
            return Err(Error::InvalidOptions(
                "candidate_selector must not be empty".to_string(),
            ));
        }
        if self.root_tag.trim().is_empty() {
            return Err(Error::InvalidOptions("root_tag must not be empty".to_string()));
        }
        if self.row_size == Some(0) {
            return Err(Error::InvalidOptions("row_size must be at least 1".to_string()));
        }
        if self
            .row_selector
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            return Err(Error::InvalidOptions(
                "row_selector must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Checks `url` against `target_host`.
    ///
    /// Passes when no URL is configured.
    pub fn check_site(&self) -> Result<()> {
        let Some(raw) = self.url.as_deref() else {
            return Ok(());
        };

        let host = Url::parse(raw)
            .ok()
            .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
            .ok_or_else(|| Error::UnsupportedSite(raw.to_string()))?;

        let target = self.target_host.to_ascii_lowercase();
        let matches = host == target
            || host
                .strip_suffix(target.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'));

        if matches {
            Ok(())
        } else {
            Err(Error::UnsupportedSite(host))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_target_instagram_feed() {
        let options = Options::default();
        assert_eq!(options.candidate_selector, DEFAULT_CANDIDATE_SELECTOR);
        assert_eq!(options.root_tag, "article");
        assert_eq!(options.label_keywords, vec!["view", "play"]);
        assert!(options.row_size.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let options = Options::from_json(r#"{"root_tag": "li"}"#).unwrap();
        assert_eq!(options.root_tag, "li");
        assert_eq!(options.target_host, "instagram.com");
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = Options::from_json(r#"{"rowsize": 3}"#).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn validate_rejects_zero_row_size() {
        let options = Options {
            row_size: Some(0),
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn validate_rejects_blank_selector() {
        let options = Options {
            candidate_selector: "  ".to_string(),
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn check_site_accepts_target_and_subdomains() {
        for url in [
            "https://instagram.com/reels/",
            "https://www.instagram.com/explore/",
            "https://WWW.Instagram.com/",
        ] {
            let options = Options {
                url: Some(url.to_string()),
                ..Options::default()
            };
            assert!(options.check_site().is_ok(), "{url}");
        }
    }

    #[test]
    fn check_site_rejects_other_hosts() {
        for url in ["https://example.com/", "https://notinstagram.com/", "not a url"] {
            let options = Options {
                url: Some(url.to_string()),
                ..Options::default()
            };
            assert!(matches!(options.check_site(), Err(Error::UnsupportedSite(_))), "{url}");
        }
    }

    #[test]
    fn check_site_passes_without_url() {
        assert!(Options::default().check_site().is_ok());
    }
}
