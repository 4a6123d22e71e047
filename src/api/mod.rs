/// HTTP API Layer
///
/// Request handlers and the JSON envelope they render.

// Project read endpoint
pub mod projects;

// Success/error JSON envelope
pub mod response;

pub use projects::{create_project_routes, AppState, API_PREFIX};
pub use response::{ErrorDetail, JsonResponse};
