pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::any::Any;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::response::Response;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

pub fn build_app(store: Arc<dyn SubmissionStore>, config: &Config) -> Router {
    let state: SharedState = Arc::new(AppState { store });

    Router::new()
        .merge(routes::submit_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Error processing request: handler panicked: {detail}");

    error::internal_error_response()
}
