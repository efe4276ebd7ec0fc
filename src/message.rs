//! Request and response messages exchanged with the triggering UI.
//!
//! The popup sends one JSON message per click and waits for one JSON
//! response. Field names follow the extension's camelCase wire format.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Message shown when no post carries a view count.
pub const NO_POSTS_MESSAGE: &str = "No posts with detectable views found on this page.";

/// Message shown after a successful sort.
pub const SORTED_MESSAGE: &str = "Sorted by views";

/// Message shown when the grid has no rows to report.
pub const NO_ROWS_MESSAGE: &str = "No reel rows found on this page.";

/// An action requested by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Sort the feed by views and reorder the page.
    SortByViews,

    /// Report how many grid rows the reels page has.
    LogReelRows,
}

/// Wire shape accepted for requests.
///
/// Current clients send `{"action": "sortByViews"}`; the older popup sent
/// `{"type": "LOG_REEL_ROWS"}`.
#[derive(Debug, Deserialize)]
struct RawRequest {
    action: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl Request {
    /// Decodes a request from its JSON message.
    ///
    /// ```rust
    /// use rs_instasort::Request;
    ///
    /// let request = Request::from_json(r#"{"action": "sortByViews"}"#)?;
    /// assert_eq!(request, Request::SortByViews);
    /// # Ok::<(), rs_instasort::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRequest = serde_json::from_str(json)?;
        let name = raw
            .action
            .or(raw.kind)
            .ok_or_else(|| Error::ParseError("request has no action".to_string()))?;

        match name.as_str() {
            "sortByViews" | "SORT_BY_VIEWS" => Ok(Self::SortByViews),
            "logReelRows" | "LOG_REEL_ROWS" => Ok(Self::LogReelRows),
            _ => Err(Error::UnsupportedAction(name)),
        }
    }
}

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Whether the action completed.
    pub success: bool,

    /// Human-readable outcome.
    pub message: String,

    /// Size of the active group before moving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_found: Option<usize>,

    /// Number of posts actually moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_sorted: Option<usize>,

    /// Number of grid rows, for `logReelRows`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_found: Option<usize>,
}

impl Response {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            posts_found: None,
            posts_sorted: None,
            rows_found: None,
        }
    }

    /// Successful sort.
    #[must_use]
    pub fn sorted(posts_found: usize, posts_sorted: usize) -> Self {
        Self {
            success: true,
            message: SORTED_MESSAGE.to_string(),
            posts_found: Some(posts_found),
            posts_sorted: Some(posts_sorted),
            rows_found: None,
        }
    }

    /// Nothing to sort.
    #[must_use]
    pub fn no_posts() -> Self {
        Self::failure(NO_POSTS_MESSAGE.to_string())
    }

    /// Row count report.
    #[must_use]
    pub fn rows(rows_found: usize) -> Self {
        if rows_found == 0 {
            return Self::failure(NO_ROWS_MESSAGE.to_string());
        }
        Self {
            success: true,
            message: format!("Found {rows_found} reel rows"),
            posts_found: None,
            posts_sorted: None,
            rows_found: Some(rows_found),
        }
    }

    /// The page is not on the targeted site.
    #[must_use]
    pub fn wrong_site(target_host: &str) -> Self {
        Self::failure(format!(
            "Open {target_host} in the active tab, then click again."
        ))
    }

    /// Failure raised while sorting.
    #[must_use]
    pub fn error(err: &Error) -> Self {
        Self::failure(format!("Error sorting posts: {err}"))
    }

    /// Failure decoding or dispatching the request itself.
    #[must_use]
    pub fn rejected(err: &Error) -> Self {
        match err {
            Error::UnsupportedAction(_) => Self::failure(err.to_string()),
            _ => Self::failure(format!("Failed to sort posts: {err}")),
        }
    }

    /// Serializes the response as its JSON message.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"success":{},"message":"response encoding failed"}}"#, self.success)
        })
    }
}
