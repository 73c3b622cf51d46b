pub mod submit;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn submit_routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(submit::submit).options(submit::submit_options))
        .route("/submit", post(submit::submit).options(submit::submit_options))
}
