/// Uniform JSON envelope for API responses
///
/// Success: `{ "code": 200, "status": "OK", "data": ... }`
/// Failure: `{ "code": 404, "status": "NOT_FOUND", "error": { "message": ... } }`

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonResponse<T = Value> {
    pub code: u16,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn new(code: u16, status: impl Into<String>, data: T) -> Self {
        Self {
            code,
            status: status.into(),
            data: Some(data),
            error: None,
        }
    }

    /// 200 / `OK` envelope around `data`
    pub fn success(data: T) -> Self {
        Self::new(StatusCode::OK.as_u16(), status_label(StatusCode::OK), data)
    }
}

impl JsonResponse {
    pub fn error(code: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            status: status.into(),
            data: None,
            error: Some(ErrorDetail {
                message: message.into(),
            }),
        }
    }

    /// Error envelope labelled after `status`
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::error(status.as_u16(), status_label(status), message)
    }
}

/// Upper snake case label for a status code ("Not Found" -> "NOT_FOUND")
pub fn status_label(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_follow_reason_phrases() {
        assert_eq!(status_label(StatusCode::OK), "OK");
        assert_eq!(status_label(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_label(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(status_label(StatusCode::INTERNAL_SERVER_ERROR), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn success_omits_error() {
        let body = serde_json::to_value(JsonResponse::success(json!({ "id": "1" }))).unwrap();

        assert_eq!(body, json!({ "code": 200, "status": "OK", "data": { "id": "1" } }));
    }

    #[test]
    fn failure_omits_data() {
        let body = serde_json::to_value(JsonResponse::failure(StatusCode::NOT_FOUND, "gone")).unwrap();

        assert_eq!(
            body,
            json!({ "code": 404, "status": "NOT_FOUND", "error": { "message": "gone" } })
        );
    }
}
