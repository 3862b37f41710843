//! Route configuration for the condensation backend

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{self, CondenseState};

/// Build the backend router
pub fn build_router(state: CondenseState) -> Router {
    Router::new()
        .route("/v1/condense", post(handlers::condense_text))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
