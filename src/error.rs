//! API error taxonomy for the HTTP layer.
//!
//! Two categories, surfaced with different statuses and payloads:
//! - [`ApiError::Validation`]: the client supplied incomplete input. Mapped to
//!   400 with `{"error": <message>}`. Never logged as a server fault.
//! - [`ApiError::Store`]: the underlying store failed. Mapped to 500 with
//!   `{"error": <message>, "detalle": <driver detail>}` and logged.
//!
//! User-facing messages stay in Spanish to match the wire format the frontend
//! already consumes.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

// ---

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Store {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl ApiError {
    // ---
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Wrap a storage failure with the user-facing message for this endpoint.
    pub fn store(message: impl Into<String>) -> impl FnOnce(sqlx::Error) -> Self {
        let message = message.into();
        move |source| ApiError::Store { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Store { message, source } => {
                tracing::error!("storage error: {}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message, "detalle": source.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
