use std::sync::Arc;

use crate::config::AppConfig;
use crate::snmp::SessionFactory;

pub mod health;
pub mod home;
pub mod metrics;

pub use health::health;
pub use home::home;
pub use metrics::handle_metrics;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub factory: Arc<dyn SessionFactory>,
}
