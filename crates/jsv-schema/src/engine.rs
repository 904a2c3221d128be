//! # Schema Engine Capability
//!
//! The adapter never interprets schemas itself. It is handed a
//! [`SchemaEngine`] at construction time and asks it for the errors of one
//! (schema, document) pair under one draft.
//!
//! Each error is reported as a [`RawViolation`] carrying everything needed
//! to build a [`Violation`] record: message, document path, schema path, the
//! schema fragment holding the failing keyword, the keyword and its declared
//! value, and the offending document value.

use serde_json::Value;
use thiserror::Error;

use jsv_core::path::{data_path, json_path, PathSegment};
use jsv_core::{Draft, Violation};

/// Library name reported when no engine is available.
pub const ENGINE_LIBRARY: &str = "jsonschema";

/// Failure of the engine itself, as opposed to a schema violation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The criteria could not be compiled under the selected draft.
    #[error("invalid {draft} schema: {reason}")]
    InvalidSchema {
        /// Draft the schema was compiled under.
        draft: Draft,
        /// Compiler error text.
        reason: String,
    },

    /// Any other engine failure.
    #[error("schema engine error: {0}")]
    Backend(String),
}

/// One engine-reported nonconformance, before flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct RawViolation {
    /// Human-readable description.
    pub message: String,
    /// Path from the document root to the offending value.
    pub absolute_path: Vec<PathSegment>,
    /// Path from the schema root to the failing keyword.
    pub relative_schema_path: Vec<PathSegment>,
    /// The schema object holding the failing keyword.
    pub schema: Value,
    /// The failing keyword's declared value.
    pub validator_value: Value,
    /// Name of the failing keyword.
    pub validator: String,
    /// The offending document value.
    pub instance: Value,
}

impl RawViolation {
    /// Flatten into the serializable record.
    pub fn into_violation(self) -> Violation {
        Violation {
            message: self.message,
            data_path: data_path(&self.absolute_path),
            json_path: json_path(&self.absolute_path),
            schema_path: data_path(&self.relative_schema_path),
            relative_schema: self.schema,
            expected: self.validator_value,
            validator: self.validator,
            found: self.instance,
        }
    }
}

/// A schema-validation library exposing one rule-set per [`Draft`].
pub trait SchemaEngine: Send + Sync {
    /// Name of the library backing this engine.
    fn library(&self) -> &'static str;

    /// Validate `document` against `schema` under `draft`, returning every error.
    ///
    /// Errors are returned in engine order; the adapter sorts them.
    fn iter_errors(
        &self,
        draft: Draft,
        schema: &Value,
        document: &Value,
    ) -> Result<Vec<RawViolation>, EngineError>;
}

/// The engine compiled into this build, if any.
pub fn default_engine() -> Option<Box<dyn SchemaEngine>> {
    #[cfg(feature = "jsonschema-backend")]
    {
        Some(Box::new(crate::backend::JsonSchemaEngine))
    }
    #[cfg(not(feature = "jsonschema-backend"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_violation_formats_paths() {
        let raw = RawViolation {
            message: "3 is less than the minimum of 5".to_string(),
            absolute_path: vec![
                PathSegment::Key("items".to_string()),
                PathSegment::Index(2),
                PathSegment::Key("size".to_string()),
            ],
            relative_schema_path: vec![
                PathSegment::Key("properties".to_string()),
                PathSegment::Key("items".to_string()),
                PathSegment::Key("items".to_string()),
                PathSegment::Key("properties".to_string()),
                PathSegment::Key("size".to_string()),
                PathSegment::Key("minimum".to_string()),
            ],
            schema: json!({"minimum": 5}),
            validator_value: json!(5),
            validator: "minimum".to_string(),
            instance: json!(3),
        };

        let violation = raw.into_violation();
        assert_eq!(violation.data_path, "items.2.size");
        assert_eq!(violation.json_path, "$.items[2].size");
        assert_eq!(violation.schema_path, "properties.items.items.properties.size.minimum");
        assert_eq!(violation.expected, json!(5));
        assert_eq!(violation.found, json!(3));
        assert_eq!(violation.validator, "minimum");
    }

    #[cfg(feature = "jsonschema-backend")]
    #[test]
    fn test_default_engine_present() {
        let engine = default_engine().expect("jsonschema-backend is enabled");
        assert_eq!(engine.library(), ENGINE_LIBRARY);
    }
}
