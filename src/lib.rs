//! # rs-instasort
//!
//! Reorders the posts and reels of an Instagram feed page by their view
//! counts, scraped straight from the page's markup.
//!
//! The page is a live [`dom::Document`]. A sort finds the post roots,
//! reads one view count per post, picks the largest set of posts sharing
//! one container, and moves those nodes into descending view order at their
//! original position. Nothing else on the page moves.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_instasort::{sort_html, Options};
//!
//! let html = r#"<html><body><main>
//!     <article id="a">10K views</article>
//!     <article id="b">1.5M views</article>
//! </main></body></html>"#;
//!
//! let outcome = sort_html(html, &Options::default());
//! assert!(outcome.response.success);
//! assert_eq!(outcome.response.posts_sorted, Some(2));
//! assert!(outcome.html.find(r#"id="b""#) < outcome.html.find(r#"id="a""#));
//! ```
//!
//! ## Message boundary
//!
//! The extension popup talks to the page with one JSON request per click.
//! [`handle_message`] takes that request and returns the JSON-serializable
//! [`Response`], so the same flow can sit behind any transport.

mod error;
mod message;
mod options;
mod patterns;
mod sort;

/// DOM operations adapter over `dom_query` node handles.
pub mod dom;

/// Human-readable count parsing.
pub mod count;

/// Post discovery and view-count extraction.
pub mod extractor;

/// View records, grouping by container, and ordering.
pub mod sorter;

/// Moving post nodes into sorted order.
pub mod reorder;

/// Grid row redistribution for the reels tab.
pub mod grid;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use count::parse_count;
pub use error::{Error, Result};
pub use message::{Request, Response, NO_POSTS_MESSAGE, NO_ROWS_MESSAGE, SORTED_MESSAGE};
pub use options::{Options, DEFAULT_CANDIDATE_SELECTOR, DEFAULT_ROOT_TAG, DEFAULT_TARGET_HOST};

use dom::Document;

/// Response of a sort over an HTML string, with the rewritten page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Response the UI would receive.
    pub response: Response,

    /// The page after sorting. Unchanged markup when nothing was sorted.
    pub html: String,
}

/// Sorts the posts of a live document by views.
///
/// Never fails: problems are reported through [`Response::success`] and
/// [`Response::message`].
///
/// # Example
///
/// ```rust
/// use rs_instasort::{dom, sort_by_views, Options, NO_POSTS_MESSAGE};
///
/// let doc = dom::parse("<main><article>no counter here</article></main>");
/// let response = sort_by_views(&doc, &Options::default());
/// assert!(!response.success);
/// assert_eq!(response.message, NO_POSTS_MESSAGE);
/// ```
#[must_use]
pub fn sort_by_views(doc: &Document, options: &Options) -> Response {
    sort::sort_by_views(doc, options)
}

/// Handles one decoded request against a live document.
#[must_use]
pub fn handle_request(doc: &Document, request: Request, options: &Options) -> Response {
    sort::handle_request(doc, request, options)
}

/// Decodes a JSON request message and handles it.
///
/// # Example
///
/// ```rust
/// use rs_instasort::{dom, handle_message, Options};
///
/// let doc = dom::parse(r#"<main><article>3 views</article><article>9 views</article></main>"#);
/// let response = handle_message(&doc, r#"{"action":"sortByViews"}"#, &Options::default());
/// assert_eq!(response.to_json(), r#"{"success":true,"message":"Sorted by views","postsFound":2,"postsSorted":2}"#);
/// ```
#[must_use]
pub fn handle_message(doc: &Document, message: &str, options: &Options) -> Response {
    sort::handle_message(doc, message, options)
}

/// Parses `html`, sorts it, and serializes the result.
#[must_use]
pub fn sort_html(html: &str, options: &Options) -> SortOutcome {
    let doc = dom::parse(html);
    let response = sort::sort_by_views(&doc, options);
    SortOutcome {
        response,
        html: doc.html().to_string(),
    }
}

/// Like [`sort_html`] for raw bytes, decoding them first.
///
/// The encoding comes from a byte-order mark or a `<meta>` charset
/// declaration and defaults to UTF-8.
#[must_use]
pub fn sort_html_bytes(html: &[u8], options: &Options) -> SortOutcome {
    let decoded = encoding::decode_html(html);
    sort_html(&decoded, options)
}
