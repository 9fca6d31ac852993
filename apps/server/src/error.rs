use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homeval_engine::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error body shape shared by all failure responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: &'static str,
    /// Human-readable description, safe to show to the caller.
    pub message: String,
}

/// Request-level failures surfaced by the estimation endpoints.
///
/// Both variants are client errors (400). Unexpected panics on the request
/// path are converted to generic 500 responses by the router's catch-panic
/// layer, so no internal state leaks here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body was not parseable JSON at all.
    #[error("{0}")]
    MalformedBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { status: "error", message: self.to_string() };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
