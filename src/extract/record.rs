//! Status-document parsing and VM record resolution.

use crate::extract::error::ExtractError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One VM's sub-object inside the status document. All fields are optional
/// and shape-variable, so the record stays an untyped JSON map and the
/// per-field extractors probe it layout by layout.
pub type VmRecord = Map<String, Value>;

/// Top-level status document as produced by `multipass info --format json`
/// and compatible commands. Only the `info` mapping is read; everything
/// else (error lists, version banners) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct StatusDocument {
    #[serde(default)]
    info: Map<String, Value>,
}

impl StatusDocument {
    /// Parses one complete JSON document.
    pub fn parse(input: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Looks up `name` in the `info` mapping, falling back to the first
    /// record in document order. The fallback is a convenience: when the
    /// caller's expected name is wrong but exactly one VM exists, the run
    /// still succeeds.
    pub fn resolve_vm(&self, name: &str) -> Option<&Value> {
        self.info.get(name).or_else(|| self.info.values().next())
    }
}

/// Rejects an unusable resolution. A record is usable only if it is a
/// non-empty JSON object; anything else reports the requested name.
pub fn require_vm<'a>(
    resolved: Option<&'a Value>,
    name: &str,
) -> Result<&'a VmRecord, ExtractError> {
    resolved
        .and_then(Value::as_object)
        .filter(|record| !record.is_empty())
        .ok_or_else(|| ExtractError::VmNotFound(name.to_string()))
}
