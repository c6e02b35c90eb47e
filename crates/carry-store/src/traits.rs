use async_trait::async_trait;

use crate::error::StoreResult;
use crate::project::Project;

/// Storage backend for learner projects.
///
/// Implementations must be thread-safe (`Send + Sync`). Loads are read-only
/// and may run concurrently; a save replaces the stored project atomically.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Load the project stored under `header_id`.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if there
    /// is none.
    async fn load_project(&self, header_id: &str) -> StoreResult<Project>;

    /// Persist `project` under its header id, replacing any previous version.
    async fn save_project(&self, project: &Project) -> StoreResult<()>;
}
