use thiserror::Error;

/// Errors from project store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No project is stored under this header id.
    #[error("project not found: {0}")]
    NotFound(String),

    /// The project could not be persisted.
    #[error("failed to write project {id}: {reason}")]
    Write { id: String, reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
