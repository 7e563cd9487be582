use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;

/// Errors a route handler can surface to the client. Core game errors do
/// not appear here: placement failures recover internally and invalid
/// selections are ordinary negative results, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("round not found")]
    RoundNotFound,
    #[error("round is over")]
    RoundOver,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::RoundNotFound => StatusCode::NOT_FOUND,
            ApiError::RoundOver => StatusCode::CONFLICT,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
