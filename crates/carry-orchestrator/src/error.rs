//! Error types for carryover orchestration.

use thiserror::Error;

/// Errors that abort a carryover.
#[derive(Debug, Error)]
pub enum CarryoverError {
    /// Loading or saving a project failed.
    #[error("store error: {0}")]
    Store(#[from] carry_store::StoreError),

    /// A resource manifest field could not be merged.
    #[error("failed to merge field {field}: {source}")]
    Merge {
        field: String,
        #[source]
        source: carry_merge::MergeError,
    },

    /// The carryover configuration could not be parsed.
    #[error("invalid carryover config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias for carryover results.
pub type CarryoverResult<T> = Result<T, CarryoverError>;
