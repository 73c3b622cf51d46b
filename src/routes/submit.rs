use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::SubmitError;
use crate::state::SharedState;
use crate::submission::pipeline;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

pub async fn submit(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, SubmitError> {
    let body = body.map_err(|e| {
        tracing::info!("Received request: {method} {uri} (unreadable body)");
        SubmitError::Internal(format!("Failed to read request body: {e}"))
    })?;

    tracing::info!("Received request: {method} {uri} ({} bytes)", body.len());
    tracing::debug!("Request body: {}", String::from_utf8_lossy(&body));

    pipeline::run(state.store.as_ref(), &body).await?;

    Ok((StatusCode::OK, Json(json!({ "message": SUCCESS_MESSAGE }))).into_response())
}

pub async fn submit_options() -> Response {
    (
        [
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
            ("Access-Control-Max-Age", "86400"),
        ],
        StatusCode::NO_CONTENT,
    )
        .into_response()
}
