//! CPU-count extraction.

use crate::extract::error::ExtractError;
use crate::extract::record::VmRecord;
use crate::extract::units::integer_field;
use crate::extract::{locate, FieldSource};
use serde_json::Value;

/// Known layouts, newest first: a top-level `cpu_count` (current releases
/// report it as a decimal string), then `resources.cpus`.
const CPU_SOURCES: &[FieldSource] = &[cpu_count, resources_cpus];

fn cpu_count(record: &VmRecord) -> Option<&Value> {
    record.get("cpu_count")
}

fn resources_cpus(record: &VmRecord) -> Option<&Value> {
    record.get("resources")?.get("cpus")
}

pub fn cpu(record: &VmRecord) -> Result<u32, ExtractError> {
    let raw = locate(record, CPU_SOURCES).ok_or(ExtractError::FieldMissing("cpu_count"))?;
    let count = integer_field("cpu_count", raw)?;
    u32::try_from(count).map_err(|_| ExtractError::Format {
        field: "cpu_count",
        value: raw.to_string(),
    })
}
