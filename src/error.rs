use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, email, message";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred.";

/// Failure outcome of a submission.
#[derive(Debug)]
pub enum SubmitError {
    /// One or more of `name`, `email`, `message` is absent.
    Validation(String),
    /// Anything else. The detail is logged, never returned to the caller.
    Internal(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(msg) => write!(f, "Validation Failed: {msg}"),
            SubmitError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmitError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmitError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let message = match &self {
            SubmitError::Validation(msg) => {
                tracing::warn!("Validation failed: {msg}");
                MISSING_FIELDS_MESSAGE
            }
            SubmitError::Internal(msg) => {
                tracing::error!("Error processing request: {msg}");
                INTERNAL_ERROR_MESSAGE
            }
        };

        let body = json!({ "error": message });
        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        SubmitError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Internal(format!("Invalid JSON body: {err}"))
    }
}

/// Last-resort response for a panic inside request handling.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
