use snmp2::Value;

/// Owned, tagged result of a single SNMP varbind.
///
/// The device legitimately reports no value for some OIDs (noSuchObject,
/// noSuchInstance, Null); that is `Absent`, not an error. All numeric SNMP
/// types are widened into `Integer` so the conversion step never has to
/// inspect the wire type again.
#[derive(Debug, Clone, PartialEq)]
pub enum SnmpValue {
    Absent,
    Integer(i64),
    Str(String),
}

impl SnmpValue {
    pub fn from_varbind(value: &Value<'_>) -> Self {
        match value {
            Value::Integer(i) => SnmpValue::Integer(*i),
            Value::Counter32(n) => SnmpValue::Integer(i64::from(*n)),
            Value::Unsigned32(n) => SnmpValue::Integer(i64::from(*n)),
            Value::Timeticks(t) => SnmpValue::Integer(i64::from(*t)),
            // A counter past i64::MAX cannot be represented; report it as
            // not-present rather than as a negative gauge.
            Value::Counter64(n) => i64::try_from(*n).map_or(SnmpValue::Absent, SnmpValue::Integer),
            Value::OctetString(bytes) => {
                SnmpValue::Str(String::from_utf8_lossy(bytes).into_owned())
            }
            // Null, noSuchObject, noSuchInstance, endOfMibView and anything
            // else we cannot turn into a gauge or a label.
            _ => SnmpValue::Absent,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SnmpValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SnmpValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_variants_widen() {
        assert_eq!(
            SnmpValue::from_varbind(&Value::Integer(215)),
            SnmpValue::Integer(215)
        );
        assert_eq!(
            SnmpValue::from_varbind(&Value::Counter32(42)),
            SnmpValue::Integer(42)
        );
    }

    #[test]
    fn counter64_in_range_widens_but_overflow_is_absent() {
        assert_eq!(
            SnmpValue::from_varbind(&Value::Counter64(7)),
            SnmpValue::Integer(7)
        );
        assert_eq!(
            SnmpValue::from_varbind(&Value::Counter64(u64::MAX)),
            SnmpValue::Absent
        );
    }

    #[test]
    fn octet_string_becomes_str() {
        let v = SnmpValue::from_varbind(&Value::OctetString(b"InRow RC"));
        assert_eq!(v.as_str(), Some("InRow RC"));
    }

    #[test]
    fn null_is_absent() {
        assert_eq!(SnmpValue::from_varbind(&Value::Null), SnmpValue::Absent);
        assert_eq!(SnmpValue::Absent.as_int(), None);
    }
}
