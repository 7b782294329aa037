use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::StockError;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<StockError> for AppError {
    fn from(e: StockError) -> Self {
        match &e {
            StockError::NotFound(msg) => AppError::not_found(msg.clone()),
            // Everything else reaching the handlers is a store-side fault
            // (constraint violations, lock/join failures, DuckDB errors) and
            // surfaces as a generic server error carrying the fault message.
            // Client-caused 400s arrive via extractor rejections instead.
            _ => AppError::internal(e.to_string()),
        }
    }
}
