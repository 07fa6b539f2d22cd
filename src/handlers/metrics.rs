use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use prometheus::{Encoder, Registry, TextEncoder};

use super::AppState;
use crate::collector::{self, InrowMetrics};

/// One full scrape cycle: fresh registry, poll every target, encode.
///
/// Per-target failures are already folded into the `up` gauge; only a broken
/// registry setup turns into an HTTP error. Encoding is best-effort.
pub async fn handle_metrics(State(state): State<AppState>) -> Response {
    let registry = Registry::new();
    let metrics = match InrowMetrics::register(&registry) {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::error!(error = %e, "failed to set up scrape registry");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    collector::collect_all(&state.config.targets, state.factory.clone(), &metrics).await;

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        tracing::error!(error = %e, "failed to encode metrics");
    }

    ([(header::CONTENT_TYPE, encoder.format_type().to_owned())], buffer).into_response()
}
