//! Extraction pipeline: one status document in, one [`ResourceSpec`] out.
//!
//! The VM-status command's JSON layout has varied across releases, so each
//! logical field (CPU count, memory size, disk size) is read through an
//! ordered list of [`FieldSource`] probes: the first layout present in the
//! record wins, and parsing of the located value happens afterwards so a
//! present-but-malformed value fails loudly instead of sliding into an
//! older layout.

pub mod error;

mod cpu;
mod disk;
mod memory;
mod record;
mod units;

pub use error::ExtractError;
pub use record::{StatusDocument, VmRecord};
pub use units::bytes_to_mib;

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// One historical layout of a logical field: yields the raw JSON value when
/// the record uses that layout.
pub(crate) type FieldSource = fn(&VmRecord) -> Option<&Value>;

/// Tries each source in order; first hit wins.
pub(crate) fn locate<'a>(record: &'a VmRecord, sources: &[FieldSource]) -> Option<&'a Value> {
    sources.iter().find_map(|source| source(record))
}

/// Normalized resource figures for one VM. Memory and disk are in MiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    pub cpu: u32,
    pub memory_mib: u64,
    pub disk_mib: u64,
}

impl fmt::Display for ResourceSpec {
    /// The script-facing line: three integers, single spaces, nothing else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.cpu, self.memory_mib, self.disk_mib)
    }
}

/// Resolves `name` in the document and extracts its resource figures.
///
/// Extraction order is CPU, memory, disk; the first failure aborts the rest,
/// so the caller never sees a partial result.
pub fn resource_spec(document: &StatusDocument, name: &str) -> Result<ResourceSpec, ExtractError> {
    let record = record::require_vm(document.resolve_vm(name), name)?;
    debug!("resolved record for {} ({} fields)", name, record.len());

    Ok(ResourceSpec {
        cpu: cpu::cpu(record)?,
        memory_mib: memory::memory_mib(record)?,
        disk_mib: disk::disk_mib(record)?,
    })
}

/// One-shot convenience: parse the raw document, then extract.
pub fn resource_spec_from_str(input: &str, name: &str) -> Result<ResourceSpec, ExtractError> {
    let document = StatusDocument::parse(input)?;
    resource_spec(&document, name)
}
