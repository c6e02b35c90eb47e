//! Error types for the reconciliation engine.

use carry_manifest::ManifestError;

/// Which merge input an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Loser,
    Winner,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loser => write!(f, "loser"),
            Self::Winner => write!(f, "winner"),
        }
    }
}

/// Errors that can occur while reconciling two manifests.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// One of the input manifests could not be decoded.
    #[error("failed to decode {side} manifest: {source}")]
    Decode {
        side: Side,
        #[source]
        source: ManifestError,
    },

    /// The merged manifest could not be encoded.
    #[error("failed to encode merged manifest: {0}")]
    Encode(#[source] ManifestError),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
