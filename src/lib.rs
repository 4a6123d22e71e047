/// ilm: read-only project service
///
/// Serves `GET /api/v1/projects?id=...` from either an in-memory store or a
/// relational database, through a handler → controller → repository chain.

// Configuration loading (YAML file + environment overrides)
pub mod config;

// Project entity
pub mod project;

// Storage backends and the repository capability they implement
pub mod storage;

// Domain layer between HTTP and storage
pub mod controller;

// HTTP API layer - handlers and response envelope
pub mod api;

// SIGINT/SIGTERM handling
pub mod shutdown;

// Server setup and initialization
pub mod server;

pub use api::JsonResponse;
pub use config::Config;
pub use controller::{ControllerError, ProjectController};
pub use project::Project;
pub use server::{create_router, start_server, Storage};
pub use storage::{ProjectRepository, StorageError};
