//! Fixed APC InRow MIB contract: queried OIDs, metric names and scaling.

/// Prefix shared by every exported metric name.
pub const PREFIX: &str = "apc_inrow_";

/// Device name, used as the `name` label.
pub const NAME_OID: &str = "1.3.6.1.4.1.318.1.1.13.3.2.2.1.2.0";

/// Device location, used as the `location` label.
pub const LOCATION_OID: &str = "1.3.6.1.4.1.318.1.1.13.3.2.2.1.3.0";

/// One telemetry quantity: where it lives in the MIB and how to turn the raw
/// fixed-point integer into a physical value.
pub struct TelemetryDesc {
    pub name: &'static str,
    pub help: &'static str,
    pub oid: &'static str,
    pub divisor: f64,
}

/// The seven telemetry quantities, in query order. OIDs are a fixed vendor
/// contract and must not change.
pub const TELEMETRY: [TelemetryDesc; 7] = [
    TelemetryDesc {
        name: "airflow",
        help: "Air flow in liters per second.",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.5.0",
        divisor: 100.0,
    },
    TelemetryDesc {
        name: "rack_inlet_temp",
        help: "Rack inlet temp",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.7.0",
        divisor: 10.0,
    },
    TelemetryDesc {
        name: "supply_air_temp",
        help: "Supply air temp",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.9.0",
        divisor: 10.0,
    },
    TelemetryDesc {
        name: "return_air_temp",
        help: "Return air temp",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.11.0",
        divisor: 10.0,
    },
    TelemetryDesc {
        name: "fan_speed",
        help: "Fan speed",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.16.0",
        divisor: 10.0,
    },
    TelemetryDesc {
        name: "entering_fluid_temp",
        help: "Entering fluid temp",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.24.0",
        divisor: 10.0,
    },
    TelemetryDesc {
        name: "leaving_fluid_temp",
        help: "Leaving fluid temp",
        oid: "1.3.6.1.4.1.318.1.1.13.3.2.2.2.26.0",
        divisor: 10.0,
    },
];

/// Telemetry OIDs in descriptor order, for the batched query.
pub fn telemetry_oids() -> Vec<&'static str> {
    TELEMETRY.iter().map(|d| d.oid).collect()
}
