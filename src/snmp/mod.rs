//! Device-query boundary: "fetch named values from a host" over SNMP v2c.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

pub mod oid;
pub mod v2c;
pub mod value;

pub use oid::parse_oid;
pub use v2c::SnmpClientV2c;
pub use value::SnmpValue;

/// Fixed SNMP agent port.
pub const SNMP_PORT: u16 = 161;

/// Per-operation timeout (session open and each query round-trip).
pub const SNMP_TIMEOUT: Duration = Duration::from_secs(2);

/// One open session to a device's management interface.
#[async_trait]
pub trait Session: Send {
    /// Fetches the named values in one batch, preserving request order.
    async fn get_values(&mut self, oids: &[&str]) -> Result<Vec<SnmpValue>>;
}

/// Opens sessions to targets. The collector only sees this trait, so tests
/// can substitute fake devices.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open(&self, host: &str) -> Result<Box<dyn Session>>;
}

/// Production factory: real SNMP v2c sessions with the shared community.
pub struct V2cSessionFactory {
    community: Vec<u8>,
}

impl V2cSessionFactory {
    pub fn new(community: impl Into<Vec<u8>>) -> Self {
        Self {
            community: community.into(),
        }
    }
}

#[async_trait]
impl SessionFactory for V2cSessionFactory {
    async fn open(&self, host: &str) -> Result<Box<dyn Session>> {
        let client = SnmpClientV2c::open(host, &self.community).await?;
        Ok(Box::new(client))
    }
}
