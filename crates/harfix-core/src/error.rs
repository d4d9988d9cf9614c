//! Error type shared by the canonicalizer and the HAR file loader.

use std::path::PathBuf;

/// Errors surfaced by harfix-core. Nothing here is retried or recovered
/// internally except a missing file in [`crate::har::read_har_file`].
#[derive(Debug, thiserror::Error)]
pub enum HarfixError {
    /// Fixture file does not exist (strict loaders only).
    #[error("HAR file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("read/write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not a valid HAR JSON document.
    #[error("parse HAR JSON {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Request `data` was present but is not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("serialize HAR document: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarfixError>;
