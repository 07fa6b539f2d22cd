use anyhow::{Context, Result};
use snmp2::Oid;

/// Parses a dotted-decimal OID string into an [`Oid`].
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.context(format!("invalid OID: {}", s))?;
    Oid::from(&parts).map_err(|e| anyhow::anyhow!("failed to build Oid from {}: {:?}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_decimal() {
        let oid = parse_oid("1.3.6.1.4.1.318.1.1.13.3.2.2.1.2.0").unwrap();
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.318.1.1.13.3.2.2.1.2.0");
    }

    #[test]
    fn tolerates_leading_dot_and_whitespace() {
        let oid = parse_oid(" .1.3.6.1.2.1.1.2.0 ").unwrap();
        assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.2.0");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_oid("1.3.not-an-oid").is_err());
    }
}
