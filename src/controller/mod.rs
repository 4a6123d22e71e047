/// Project controller
///
/// Sits between the HTTP layer and storage. Storage-level `NotFound` becomes
/// the controller's own [`ControllerError::NotFound`] so handlers never match on
/// storage error identities; every other storage error passes through as-is.

use crate::project::Project;
use crate::storage::{ProjectRepository, StorageError};
use std::sync::Arc;
use thiserror::Error;

/// Entity label used in not-found messages
pub const PROJECT_ENTITY: &str = "Project";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("{entity} with ID {id} was not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Storage(StorageError),
}

#[derive(Clone)]
pub struct ProjectController {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectController {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Resolve a project by id with a single storage call
    pub async fn get(&self, id: &str) -> Result<Project, ControllerError> {
        self.repository.get(id).await.map_err(|e| match e {
            StorageError::NotFound => ControllerError::NotFound {
                entity: PROJECT_ENTITY,
                id: id.to_string(),
            },
            other => ControllerError::Storage(other),
        })
    }
}

impl std::fmt::Debug for ProjectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectController").finish_non_exhaustive()
    }
}
