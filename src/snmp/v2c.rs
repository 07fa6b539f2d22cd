use anyhow::{Context, Result};
use async_trait::async_trait;
use snmp2::AsyncSession;
use tokio::time::timeout;

use super::oid::parse_oid;
use super::value::SnmpValue;
use super::{Session, SNMP_PORT, SNMP_TIMEOUT};

/// SNMP v2c session against a single device.
pub struct SnmpClientV2c {
    session: AsyncSession,
}

impl SnmpClientV2c {
    /// Opens a session to `host` on the standard SNMP port.
    pub async fn open(host: &str, community: &[u8]) -> Result<Self> {
        let addr = format!("{}:{}", host, SNMP_PORT);
        let session = timeout(SNMP_TIMEOUT, AsyncSession::new_v2c(&addr, community, 0))
            .await
            .context("timed out opening SNMP session")?
            .context("failed to open SNMP session")?;

        Ok(Self { session })
    }

    async fn get_one(&mut self, oid_str: &str) -> Result<SnmpValue> {
        let oid = parse_oid(oid_str)?;
        let resp = timeout(SNMP_TIMEOUT, self.session.get(&oid))
            .await
            .context("SNMP GET timed out")?
            .context("SNMP GET failed")?;

        let (_, value) = resp
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty SNMP response"))?;

        Ok(SnmpValue::from_varbind(&value))
    }
}

#[async_trait]
impl Session for SnmpClientV2c {
    /// Fetches one value per OID, in order. A transport failure on any OID
    /// fails the whole batch; a value the device does not have comes back as
    /// [`SnmpValue::Absent`].
    async fn get_values(&mut self, oids: &[&str]) -> Result<Vec<SnmpValue>> {
        let mut values = Vec::with_capacity(oids.len());
        for oid in oids {
            values.push(self.get_one(oid).await?);
        }
        Ok(values)
    }
}
