use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::project::Project;
use crate::traits::ProjectStore;

/// In-memory, HashMap-based project store.
///
/// Intended for tests and embedding. Projects are cloned on load and save.
/// Load and save calls are counted, and writes can be switched off to
/// exercise failure paths.
pub struct InMemoryProjectStore {
    projects: RwLock<HashMap<String, Project>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    read_only: AtomicBool,
}

impl InMemoryProjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            read_only: AtomicBool::new(false),
        }
    }

    /// Seed a project without counting it as a save.
    pub fn insert(&self, project: Project) {
        self.projects
            .write()
            .expect("lock poisoned")
            .insert(project.header_id.clone(), project);
    }

    /// Current stored version of a project, without counting a load.
    pub fn get(&self, header_id: &str) -> Option<Project> {
        self.projects
            .read()
            .expect("lock poisoned")
            .get(header_id)
            .cloned()
    }

    /// Number of projects stored.
    pub fn len(&self) -> usize {
        self.projects.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `load_project` calls so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `save_project` calls so far, failed ones included.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every subsequent save fail with [`StoreError::Write`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn load_project(&self, header_id: &str) -> StoreResult<Project> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let projects = self.projects.read().expect("lock poisoned");
        projects
            .get(header_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(header_id.to_string()))
    }

    async fn save_project(&self, project: &Project) -> StoreResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                id: project.header_id.clone(),
                reason: "store is read-only".into(),
            });
        }
        let mut projects = self.projects.write().expect("lock poisoned");
        projects.insert(project.header_id.clone(), project.clone());
        debug!(header_id = %project.header_id, fields = project.fields.len(), "project saved");
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryProjectStore")
            .field("project_count", &self.len())
            .field("loads", &self.load_count())
            .field("saves", &self.save_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project::new(id).with_field("main.ts", format!("// {id}"))
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemoryProjectStore::new();
        store.save_project(&project("h1")).await.unwrap();

        let loaded = store.load_project("h1").await.unwrap();
        assert_eq!(loaded, project("h1"));
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_count(), 1);
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let store = InMemoryProjectStore::new();
        let err = store.load_project("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id == "nope"));
    }

    #[tokio::test]
    async fn save_replaces_whole_project() {
        let store = InMemoryProjectStore::new();
        store.insert(project("h1").with_field("extra.ts", "x"));
        store.save_project(&project("h1")).await.unwrap();
        assert!(store.get("h1").unwrap().field("extra.ts").is_none());
    }

    #[tokio::test]
    async fn read_only_store_rejects_writes() {
        let store = InMemoryProjectStore::new();
        store.insert(project("h1"));
        store.set_read_only(true);

        let err = store
            .save_project(&project("h1").with_field("main.py", "pass"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Write { ref id, .. } if id == "h1"));
        assert_eq!(store.get("h1").unwrap(), project("h1"));
    }

    #[test]
    fn insert_does_not_count_as_save() {
        let store = InMemoryProjectStore::default();
        assert!(store.is_empty());
        store.insert(project("h1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn debug_format() {
        let store = InMemoryProjectStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryProjectStore"));
        assert!(debug.contains("project_count"));
    }
}
