//! # Violation Record
//!
//! The flattened, serializable form of one schema nonconformance. Field
//! names are part of the host contract and must not be renamed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single point of nonconformance between a document and a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Human-readable description from the schema engine.
    pub message: String,
    /// Location in the document, segments joined by `.`.
    pub data_path: String,
    /// Location in the document as a JSONPath (`$.a[0]`).
    pub json_path: String,
    /// Location of the failing keyword in the schema, segments joined by `.`.
    pub schema_path: String,
    /// The schema object holding the failing keyword.
    pub relative_schema: Value,
    /// The failing keyword's declared value.
    pub expected: Value,
    /// Name of the failing keyword.
    pub validator: String,
    /// The offending value from the document.
    pub found: Value,
}

impl Violation {
    /// The `msg` line for this violation.
    pub fn summary_line(&self) -> String {
        format!("At '{}' {}.", self.schema_path, self.message)
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary_line())
    }
}
