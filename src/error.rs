//! Error types for rs-instasort.
//!
//! This module defines the error types returned by sorting operations.
//! Most of them never reach callers of [`crate::handle_request`]: they are
//! converted into a failure [`crate::Response`] at the message boundary.

/// Error type for sorting operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request or configuration document could not be decoded.
    #[error("Parse failed: {0}")]
    ParseError(String),

    /// A tree manipulation precondition did not hold.
    #[error("DOM operation failed: {0}")]
    DomError(String),

    /// The request named an action this crate does not handle.
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    /// Options failed validation.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The page URL is not on the targeted site.
    #[error("Unsupported site: {0}")]
    UnsupportedSite(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type alias for sorting operations.
pub type Result<T> = std::result::Result<T, Error>;
