use anyhow::{Context, Result};
use prometheus::{GaugeVec, Opts, Registry};

use super::inrow::{PREFIX, TELEMETRY};

/// The gauge set for one scrape cycle.
///
/// Built fresh per request and registered into that request's registry, so no
/// sample can outlive its scrape. The vecs are the shared output stream: they
/// are internally synchronized, and every per-target task writes into the
/// same clones.
#[derive(Clone)]
pub struct InrowMetrics {
    /// `apc_inrow_up{target}`, set to 1 when the device was fully polled
    /// this cycle.
    pub up: GaugeVec,
    /// One gauge per entry of [`TELEMETRY`], same order, labeled
    /// `{target, name, location}`.
    pub telemetry: Vec<GaugeVec>,
}

impl InrowMetrics {
    pub fn register(registry: &Registry) -> Result<Self> {
        let up = GaugeVec::new(
            Opts::new(format!("{}up", PREFIX), "Scrape of target was successful"),
            &["target"],
        )
        .context("failed to build up gauge")?;
        registry
            .register(Box::new(up.clone()))
            .context("failed to register up gauge")?;

        let mut telemetry = Vec::with_capacity(TELEMETRY.len());
        for desc in &TELEMETRY {
            let gauge = GaugeVec::new(
                Opts::new(format!("{}{}", PREFIX, desc.name), desc.help),
                &["target", "name", "location"],
            )
            .context(format!("failed to build {} gauge", desc.name))?;
            registry
                .register(Box::new(gauge.clone()))
                .context(format!("failed to register {} gauge", desc.name))?;
            telemetry.push(gauge);
        }

        Ok(Self { up, telemetry })
    }
}
