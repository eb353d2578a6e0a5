//! Disk-size extraction.

use crate::extract::error::ExtractError;
use crate::extract::record::VmRecord;
use crate::extract::units::{bytes_to_mib, integer_field};
use crate::extract::{locate, FieldSource};
use serde_json::Value;
use tracing::warn;

const DISK_SOURCES: &[FieldSource] = &[disks_field];

fn disks_field(record: &VmRecord) -> Option<&Value> {
    record.get("disks")
}

/// Reports the capacity of the single largest disk, never the sum: a
/// multi-disk VM's effective spec is dominated by its biggest volume.
pub fn disk_mib(record: &VmRecord) -> Result<u64, ExtractError> {
    let disks = locate(record, DISK_SOURCES)
        .and_then(Value::as_object)
        .ok_or(ExtractError::FieldMissing("disks.*.total"))?;

    let mut largest: Option<u64> = None;
    for (id, disk) in disks {
        let Some(total) = disk.get("total") else {
            continue;
        };
        match integer_field("disks.*.total", total) {
            Ok(bytes) => {
                let mib = bytes_to_mib(bytes);
                largest = Some(largest.map_or(mib, |current| current.max(mib)));
            }
            Err(_) => warn!("disk {}: ignoring unusable total {}", id, total),
        }
    }

    largest.ok_or(ExtractError::FieldMissing("disks.*.total"))
}
