/// Storage layer for projects
///
/// Defines the read capability every backend satisfies and the error taxonomy
/// backends report through it:
/// - In-memory map behind a reader/writer lock
/// - Relational database through a bounded sqlx pool

use crate::project::Project;
use async_trait::async_trait;
use thiserror::Error;

// Lock-guarded in-memory backend, used for local runs and tests
pub mod memory;

// SQL backend reading the `project` table
pub mod database;

// Connection pool construction for the SQL backend
pub mod pool;

pub use database::DatabaseProjectRepository;
pub use memory::MemoryProjectRepository;
pub use pool::{close_pool, connect_pool};

/// Failures a storage backend may report
///
/// Backends classify raw driver errors into this taxonomy before returning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No project is stored under the requested id
    #[error("not found")]
    NotFound,

    /// Any other backend failure (already logged by the backend)
    #[error("unknown error")]
    Unknown,
}

/// Read access to projects by id
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Fetch a single project
    async fn get(&self, id: &str) -> Result<Project, StorageError>;
}
