//! Memory-size extraction.

use crate::extract::error::ExtractError;
use crate::extract::record::VmRecord;
use crate::extract::units::{bytes_to_mib, integer_field};
use crate::extract::{locate, FieldSource};
use serde_json::Value;

/// Current layout: a `memory` object carrying `total` (and `used`) byte
/// counts. A `memory` value of any other shape does not count as a hit.
const MEMORY_SOURCES: &[FieldSource] = &[memory_total];

fn memory_total(record: &VmRecord) -> Option<&Value> {
    record.get("memory")?.get("total")
}

pub fn memory_mib(record: &VmRecord) -> Result<u64, ExtractError> {
    if let Some(raw) = locate(record, MEMORY_SOURCES) {
        let bytes = integer_field("memory.total", raw)?;
        return Ok(bytes_to_mib(bytes));
    }

    // Older releases report memory under `resources` in a human-readable
    // unit ("2.0GiB" style). Refuse instead of misreading it as bytes.
    if record
        .get("resources")
        .and_then(|resources| resources.get("memory"))
        .is_some()
    {
        return Err(ExtractError::UnsupportedFormat(
            "resources.memory is not bytes; needs parser",
        ));
    }

    Err(ExtractError::FieldMissing("memory.total"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> VmRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_memory_total_as_string() {
        let vm = record(json!({"memory": {"total": "4294967296", "used": "531054592"}}));
        assert_eq!(memory_mib(&vm).unwrap(), 4096);
    }

    #[test]
    fn test_memory_total_as_number() {
        let vm = record(json!({"memory": {"total": 2147483648u64}}));
        assert_eq!(memory_mib(&vm).unwrap(), 2048);
    }

    #[test]
    fn test_resources_memory_is_refused() {
        let vm = record(json!({"resources": {"memory": "2.0GiB"}}));
        let err = memory_mib(&vm).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_memory_without_total_falls_to_refusal_check() {
        let vm = record(json!({"memory": "2048M", "resources": {"memory": "2.0GiB"}}));
        let err = memory_mib(&vm).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_everywhere() {
        let err = memory_mib(&record(json!({"state": "Running"}))).unwrap_err();
        assert!(matches!(err, ExtractError::FieldMissing("memory.total")));
    }

    #[test]
    fn test_malformed_total_is_a_format_error() {
        let vm = record(json!({"memory": {"total": "lots"}}));
        let err = memory_mib(&vm).unwrap_err();
        assert!(matches!(err, ExtractError::Format { field: "memory.total", .. }));
    }
}
