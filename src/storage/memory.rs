/// In-memory project storage
///
/// Map from id to project guarded by a tokio `RwLock`: lookups share the read
/// lock, inserts take the write lock. Entries are cloned out under the lock so
/// a reader never holds a reference into the map.

use super::{ProjectRepository, StorageError};
use crate::project::Project;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    projects: RwLock<HashMap<String, Project>>,
}

impl MemoryProjectRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository preloaded with the fixture project `"1"`
    pub fn seeded() -> Self {
        let mut projects = HashMap::new();
        projects.insert("1".to_string(), Project::new("1", "test", "test"));
        Self {
            projects: RwLock::new(projects),
        }
    }

    /// Insert or overwrite a project
    ///
    /// Seeding and test helper; not reachable over HTTP.
    pub async fn put(&self, id: impl Into<String>, project: Project) {
        let id = id.into();
        tracing::debug!("Storing project in memory: {}", id);
        self.projects.write().await.insert(id, project);
    }

    /// Number of stored projects
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    /// Whether no project is stored
    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn get(&self, id: &str) -> Result<Project, StorageError> {
        let projects = self.projects.read().await;
        projects.get(id).cloned().ok_or(StorageError::NotFound)
    }
}
