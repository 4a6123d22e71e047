/// Project read endpoint
///
/// GET /api/v1/projects?id={id}
///
/// Status policy, applied to every outcome:
/// - missing or empty `id`, or an unparsable query string: 400 with an error envelope
/// - found: 200 with the project as `data`
/// - not found: 200 with a `NOT_FOUND` error envelope
/// - anything else: 500 with `{"error": "500"}`, cause logged only

use crate::api::response::JsonResponse;
use crate::controller::{ControllerError, ProjectController};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::sync::Arc;

/// Versioned prefix shared by all API routes
pub const API_PREFIX: &str = "/api/v1";

/// Shared state for project routes
#[derive(Clone, Debug)]
pub struct AppState {
    pub controller: Arc<ProjectController>,
}

/// Query parameters of the project lookup
///
/// The id is opaque and kept verbatim, surrounding whitespace included.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub id: Option<String>,
}

impl ProjectQuery {
    /// Build from raw query pairs; the first `id` wins when it repeats
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            id: pairs.into_iter().find(|(key, _)| key == "id").map(|(_, value)| value),
        }
    }
}

pub fn create_project_routes() -> Router<AppState> {
    Router::new().route(&format!("{}/projects", API_PREFIX), get(get_project))
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(JsonResponse::failure(StatusCode::BAD_REQUEST, message)),
    )
        .into_response()
}

async fn get_project(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(pairs)) => ProjectQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!("Rejected project query: {}", rejection.body_text());
            return bad_request("invalid query string");
        }
    };

    let id = match query.id {
        Some(id) if !id.is_empty() => id,
        _ => {
            tracing::warn!("Project lookup without id");
            return bad_request("query parameter 'id' is required");
        }
    };

    tracing::debug!("🔍 Looking up project: {}", id);

    match state.controller.get(&id).await {
        Ok(project) => (StatusCode::OK, Json(JsonResponse::success(project))).into_response(),
        Err(e @ ControllerError::NotFound { .. }) => {
            tracing::debug!("{}", e);
            (
                StatusCode::OK,
                Json(JsonResponse::failure(StatusCode::NOT_FOUND, e.to_string())),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get project {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "500" }))).into_response()
        }
    }
}
