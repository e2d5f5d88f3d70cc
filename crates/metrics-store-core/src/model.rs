//! Telemetry wire model.
//!
//! Field names follow the published JSON contract, including the irregular
//! `HDDSpace` casing. Missing fields decode to zero values; only
//! `internalTemp` has a distinct "not reported" state. `Deserialize` for
//! [`TelemetryRecord`] lives in [`crate::codec`].

use serde::Serialize;

/// One reported snapshot of a machine's health.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    /// Server-assigned identifier. Client-supplied values are discarded.
    pub id: String,
    pub machine_id: i64,
    pub stats: MachineStats,
    pub last_logged_in: String,
    /// Opaque client timestamp; never parsed.
    pub sys_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineStats {
    pub cpu_temp: i64,
    pub fan_speed: i64,
    #[serde(rename = "HDDSpace")]
    pub hdd_space: i64,
    /// `None` means "not reported" and is omitted from output entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_temp: Option<i64>,
}
