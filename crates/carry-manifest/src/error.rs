//! Error types for manifest decoding and encoding.

use thiserror::Error;

/// Errors produced while decoding or encoding a resource manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The text is not valid JSON, or could not be serialized.
    #[error("malformed manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("manifest must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// An entry is neither a string nor an object.
    #[error("invalid manifest entry {key:?}: {reason}")]
    InvalidEntry { key: String, reason: String },
}

/// Result alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;
