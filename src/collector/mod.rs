//! Per-target collection: poll every configured InRow unit once and emit the
//! resulting gauges.

use std::sync::Arc;

use crate::snmp::SessionFactory;

pub mod inrow;
pub mod metrics;

pub use metrics::InrowMetrics;

use self::inrow::{telemetry_oids, LOCATION_OID, NAME_OID, TELEMETRY};

/// Polls all targets concurrently and waits for every one to finish.
///
/// One task per target; a slow or unreachable device delays only its own
/// task. Results land in `metrics` as they are produced, so ordering across
/// targets is unspecified.
pub async fn collect_all(targets: &[String], factory: Arc<dyn SessionFactory>, metrics: &InrowMetrics) {
    let mut handles = Vec::with_capacity(targets.len());
    for target in targets {
        let target = target.clone();
        let factory = Arc::clone(&factory);
        let metrics = metrics.clone();
        handles.push(tokio::spawn(async move {
            collect_target(&target, factory.as_ref(), &metrics).await;
        }));
    }
    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "collection task panicked");
        }
    }
}

/// Polls one target. Every exit path emits exactly one `up` sample; telemetry
/// gauges appear only when both queries succeed.
async fn collect_target(target: &str, factory: &dyn SessionFactory, metrics: &InrowMetrics) {
    let mut session = match factory.open(target).await {
        Ok(session) => session,
        Err(e) => {
            tracing::info!(%target, error = %e, "failed to open session");
            metrics.up.with_label_values(&[target]).set(0.0);
            return;
        }
    };

    let identity = match session.get_values(&[NAME_OID, LOCATION_OID]).await {
        Ok(values) => values,
        Err(e) => {
            tracing::info!(%target, error = %e, "identity query failed");
            metrics.up.with_label_values(&[target]).set(0.0);
            return;
        }
    };
    // Both identity values must be present strings to label the telemetry;
    // a wrong-shape response is treated the same as a failed query.
    let (name, location) = match (
        identity.first().and_then(|v| v.as_str()),
        identity.get(1).and_then(|v| v.as_str()),
    ) {
        (Some(name), Some(location)) => (name.to_owned(), location.to_owned()),
        _ => {
            tracing::info!(%target, "malformed identity response");
            metrics.up.with_label_values(&[target]).set(0.0);
            return;
        }
    };

    let values = match session.get_values(&telemetry_oids()).await {
        Ok(values) => values,
        Err(e) => {
            tracing::info!(%target, error = %e, "telemetry query failed");
            metrics.up.with_label_values(&[target]).set(0.0);
            return;
        }
    };

    let labels = [target, name.as_str(), location.as_str()];
    for ((desc, gauge), value) in TELEMETRY.iter().zip(&metrics.telemetry).zip(&values) {
        // The device reports no value for quantities it does not measure;
        // those are skipped rather than zero-filled.
        if let Some(raw) = value.as_int() {
            gauge
                .with_label_values(&labels)
                .set(raw as f64 / desc.divisor);
        }
    }

    metrics.up.with_label_values(&[target]).set(1.0);
}
