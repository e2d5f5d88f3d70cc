//! JSON codec for telemetry records.
//!
//! Decoding is single-pass over the request body: one JSON value, then only
//! whitespace. Object entries are applied in document order onto a zeroed
//! record, with these rules:
//! - keys match field names case-insensitively (`hddSpace` fills `HDDSpace`)
//! - `null` leaves a field untouched, except `internalTemp` where it means
//!   "not reported"
//! - a repeated key overwrites the earlier value; repeated `stats` objects merge
//! - unknown keys are skipped, or rejected when the decoder is strict

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::error::{MetricsStoreError, Result};
use crate::model::{MachineStats, TelemetryRecord};

pub const TRAILING_CONTENT_MSG: &str = "request body can only contain one JSON object";

const RECORD_FIELDS: &[&str] = &["id", "machineId", "stats", "lastLoggedIn", "sysTime"];
const STATS_FIELDS: &[&str] = &["cpuTemp", "fanSpeed", "HDDSpace", "internalTemp"];

#[derive(Debug, Clone, Copy)]
enum RecordField {
    Id,
    MachineId,
    Stats,
    LastLoggedIn,
    SysTime,
}

impl RecordField {
    fn lookup(key: &str) -> Option<Self> {
        const ALL: [RecordField; 5] = [
            RecordField::Id,
            RecordField::MachineId,
            RecordField::Stats,
            RecordField::LastLoggedIn,
            RecordField::SysTime,
        ];
        RECORD_FIELDS
            .iter()
            .zip(ALL)
            .find_map(|(name, f)| name.eq_ignore_ascii_case(key).then_some(f))
    }
}

#[derive(Debug, Clone, Copy)]
enum StatsField {
    CpuTemp,
    FanSpeed,
    HddSpace,
    InternalTemp,
}

impl StatsField {
    fn lookup(key: &str) -> Option<Self> {
        const ALL: [StatsField; 4] = [
            StatsField::CpuTemp,
            StatsField::FanSpeed,
            StatsField::HddSpace,
            StatsField::InternalTemp,
        ];
        STATS_FIELDS
            .iter()
            .zip(ALL)
            .find_map(|(name, f)| name.eq_ignore_ascii_case(key).then_some(f))
    }
}

/// Overwrite `slot` unless the wire value was `null`.
fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

struct RecordSeed<'a> {
    target: &'a mut TelemetryRecord,
    strict: bool,
}

impl<'de> DeserializeSeed<'de> for RecordSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<(), D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for RecordSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a telemetry record object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<(), A::Error> {
        let target = self.target;
        while let Some(key) = map.next_key::<String>()? {
            match RecordField::lookup(&key) {
                Some(RecordField::Id) => assign(&mut target.id, map.next_value()?),
                Some(RecordField::MachineId) => assign(&mut target.machine_id, map.next_value()?),
                Some(RecordField::Stats) => map.next_value_seed(StatsSeed {
                    target: &mut target.stats,
                    strict: self.strict,
                })?,
                Some(RecordField::LastLoggedIn) => {
                    assign(&mut target.last_logged_in, map.next_value()?)
                }
                Some(RecordField::SysTime) => assign(&mut target.sys_time, map.next_value()?),
                None if self.strict => return Err(de::Error::unknown_field(&key, RECORD_FIELDS)),
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(())
    }
}

struct StatsSeed<'a> {
    target: &'a mut MachineStats,
    strict: bool,
}

impl<'de> DeserializeSeed<'de> for StatsSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<(), D::Error> {
        deserializer.deserialize_option(self)
    }
}

impl<'de> Visitor<'de> for StatsSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a stats object")
    }

    // `"stats": null` keeps whatever was decoded so far.
    fn visit_none<E: de::Error>(self) -> std::result::Result<(), E> {
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<(), E> {
        Ok(())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<(), D::Error> {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<(), A::Error> {
        let target = self.target;
        while let Some(key) = map.next_key::<String>()? {
            match StatsField::lookup(&key) {
                Some(StatsField::CpuTemp) => assign(&mut target.cpu_temp, map.next_value()?),
                Some(StatsField::FanSpeed) => assign(&mut target.fan_speed, map.next_value()?),
                Some(StatsField::HddSpace) => assign(&mut target.hdd_space, map.next_value()?),
                Some(StatsField::InternalTemp) => target.internal_temp = map.next_value()?,
                None if self.strict => return Err(de::Error::unknown_field(&key, STATS_FIELDS)),
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(())
    }
}

/// Lenient decoding: unknown fields are ignored.
impl<'de> Deserialize<'de> for TelemetryRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut record = TelemetryRecord::default();
        RecordSeed { target: &mut record, strict: false }.deserialize(deserializer)?;
        Ok(record)
    }
}

/// Decodes POST bodies into [`TelemetryRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder {
    allow_unknown_fields: bool,
}

impl RecordDecoder {
    pub fn new(allow_unknown_fields: bool) -> Self {
        Self { allow_unknown_fields }
    }

    /// Decode exactly one JSON object from `body`.
    pub fn decode(&self, body: &[u8]) -> Result<TelemetryRecord> {
        let mut record = TelemetryRecord::default();
        let mut de = serde_json::Deserializer::from_slice(body);

        RecordSeed { target: &mut record, strict: !self.allow_unknown_fields }
            .deserialize(&mut de)
            .map_err(|e| MetricsStoreError::BadRequest(format!("error parsing request body: {e}")))?;

        // Anything but whitespace after the first value is rejected, even if it
        // would itself be a valid object.
        de.end()
            .map_err(|_| MetricsStoreError::BadRequest(TRAILING_CONTENT_MSG.into()))?;

        Ok(record)
    }
}

/// Encode records as a pretty-printed JSON array (`[]` when empty).
pub fn encode_records(records: &[Arc<TelemetryRecord>]) -> Result<Vec<u8>> {
    let view: Vec<&TelemetryRecord> = records.iter().map(Arc::as_ref).collect();
    serde_json::to_vec_pretty(&view)
        .map_err(|e| MetricsStoreError::Internal(format!("encode records failed: {e}")))
}
