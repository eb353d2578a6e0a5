//! vmspec - normalized VM resource figures from status JSON
//!
//! This library extracts three resource figures (CPU count, memory size,
//! disk size) describing one virtual machine from the JSON status document
//! of a Multipass-style VM manager. The upstream command's JSON layout has
//! varied across releases, so every logical field is read through an ordered
//! chain of shape-variant probes with a closed, typed error set.
//!
//! # Example Usage
//!
//! ```
//! use vmspec::extract::resource_spec_from_str;
//!
//! let status = r#"{"info": {"primary": {
//!     "cpu_count": "4",
//!     "memory": {"total": "4294967296"},
//!     "disks": {"sda1": {"total": "10737418240"}}
//! }}}"#;
//!
//! let spec = resource_spec_from_str(status, "primary").unwrap();
//! assert_eq!(spec.to_string(), "4 4096 10240");
//! ```
//!
//! # Project Structure
//!
//! - [`extract`]: document parsing, VM resolution, per-field extraction
//! - [`cli`]: argument surface and output formatting for the `vmspec` binary

// Public modules
pub mod cli;
pub mod extract;

// Re-export key types for convenient access
pub use extract::{ExtractError, ResourceSpec, StatusDocument};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
