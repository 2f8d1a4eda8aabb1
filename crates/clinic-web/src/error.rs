//! Request errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clinic_core::DbError;
use thiserror::Error;

/// Errors a handler can fail with.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid form input: {0}")]
    InvalidForm(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WebError {
    /// Shorthand for a missing patient.
    pub fn patient_not_found(id: i64) -> Self {
        WebError::NotFound(format!("patient {}", id))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            WebError::InvalidForm(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            WebError::Database(_) | WebError::Template(_) | WebError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
