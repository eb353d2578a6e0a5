//! Output formatting for the extracted resource figures.
//!
//! `Plain` is the script contract: exactly one line of three space-separated
//! integers. `Json` serializes the same figures for other tooling.

use crate::extract::ResourceSpec;
use anyhow::{Context, Result};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Three space-separated integers (machine-readable, the default)
    Plain,
    /// Pretty-printed JSON object
    Json,
}

/// Output formatter for resource specs
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a resource spec according to the configured format
    pub fn format(&self, spec: &ResourceSpec) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(spec.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(spec)
                .context("Failed to serialize resource spec to JSON"),
        }
    }
}
