use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{handle_metrics, health, home, AppState};

/// Builds the HTTP surface: landing page, health probe and the metrics
/// endpoint under the configured path.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route(&state.config.metrics_path, get(handle_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
