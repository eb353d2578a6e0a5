use thiserror::Error;

/// Closed error set for the extraction pipeline.
///
/// Every failure mode is a distinct variant so callers can match on the kind
/// when mapping to exit codes. All variants are terminal: the first failing
/// extraction aborts the run, there is no recovery path.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input stream was not a valid status document.
    #[error("Invalid status JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The requested VM is absent and the document holds no usable record.
    #[error("VM not found: {0}")]
    VmNotFound(String),

    /// A required field is absent in every known shape variant. The payload
    /// is the field's logical path, e.g. `memory.total` or `disks.*.total`.
    #[error("Missing required field: {0}")]
    FieldMissing(&'static str),

    /// A field is present but not convertible to the expected type.
    #[error("Invalid value for {field}: {value} (must be a non-negative integer)")]
    Format { field: &'static str, value: String },

    /// A recognized but unhandled legacy layout was detected. Refusing is
    /// deliberate: the operator should extend the parser instead of letting
    /// the program guess at units.
    #[error("Unsupported status format: {0}")]
    UnsupportedFormat(&'static str),
}
