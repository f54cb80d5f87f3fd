//! HTTP server for the ordering chat agent
//!
//! Thin transport layer over the dialogue engine: one chat endpoint, a
//! catalog diagnostic endpoint, and a health check.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<&ServerError> for axum::http::StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from(&self);
        let message = match self {
            ServerError::InvalidRequest(message) | ServerError::Internal(message) => message,
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
