use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Resolved process configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to expose metrics on, `host:port` or bare `:port`.
    pub listen_address: String,
    /// HTTP path under which metrics are served.
    pub metrics_path: String,
    /// Hosts to poll, one session each per scrape.
    pub targets: Vec<String>,
    /// Shared SNMP community string.
    pub community: String,
}

impl AppConfig {
    pub fn new(
        listen_address: String,
        metrics_path: String,
        targets: &str,
        community: String,
    ) -> Self {
        Self {
            listen_address,
            metrics_path: normalize_path(metrics_path),
            targets: split_targets(targets),
            community,
        }
    }

    /// Resolves the listen address. A bare `:9335` binds all interfaces.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = if self.listen_address.starts_with(':') {
            format!("0.0.0.0{}", self.listen_address)
        } else {
            self.listen_address.clone()
        };
        addr.parse()
            .context(format!("invalid listen address: {}", self.listen_address))
    }
}

/// Ensures the metrics path has a leading slash. The router rejects paths
/// without one, so `--path metrics` must not reach it as-is.
fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

/// Splits the comma-separated target list, dropping empty segments so an
/// unset flag means zero targets rather than one empty-named target.
fn split_targets(targets: &str) -> Vec<String> {
    targets
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
