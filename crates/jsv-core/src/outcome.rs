//! # Validation Outcome
//!
//! The result of one `validate()` call. In Rust it is a tagged enum; on the
//! wire it keeps the mapping shapes hosts already branch on:
//!
//! | Variant | Serialized form |
//! |---------|-----------------|
//! | `Passed` | `{}` |
//! | `Failed` | `{"errors": [<violation>, ...], "msg": "<one line per violation>"}` |
//! | `Fault` | `{"errors": "<error text>"}` |
//!
//! Consumers of the serialized form must handle `errors` being either a list
//! of records or a single string.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::violation::Violation;

/// Outcome of validating a document against its criteria.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireOutcome")]
pub enum ValidationOutcome {
    /// The document conforms to every criteria item.
    Passed,
    /// One or more violations were found.
    Failed {
        /// Violations, ordered by criteria item then document path.
        errors: Vec<Violation>,
        /// One `At '<schema_path>' <message>.` line per violation.
        msg: String,
    },
    /// Validation could not run to completion (for example, an invalid schema).
    Fault(String),
}

impl ValidationOutcome {
    /// Build the outcome for a list of violations; empty means `Passed`.
    pub fn from_violations(errors: Vec<Violation>) -> Self {
        if errors.is_empty() {
            return Self::Passed;
        }
        let msg = errors
            .iter()
            .map(Violation::summary_line)
            .collect::<Vec<_>>()
            .join("\n");
        Self::Failed { errors, msg }
    }

    /// True only for [`ValidationOutcome::Passed`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Violations found, empty unless `Failed`.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Failed { errors, .. } => errors,
            Self::Passed | Self::Fault(_) => &[],
        }
    }

    /// The accumulated message, if any violations were found.
    pub fn msg(&self) -> Option<&str> {
        match self {
            Self::Failed { msg, .. } => Some(msg),
            Self::Passed | Self::Fault(_) => None,
        }
    }

    /// The fault text, if validation could not complete.
    pub fn fault(&self) -> Option<&str> {
        match self {
            Self::Fault(text) => Some(text),
            Self::Passed | Self::Failed { .. } => None,
        }
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Passed => serializer.serialize_map(Some(0))?.end(),
            Self::Failed { errors, msg } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("errors", errors)?;
                map.serialize_entry("msg", msg)?;
                map.end()
            }
            Self::Fault(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("errors", text)?;
                map.end()
            }
        }
    }
}

/// Accepted serialized shapes, tried in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireOutcome {
    Failed {
        errors: Vec<Violation>,
        #[serde(default)]
        msg: String,
    },
    Fault {
        errors: String,
    },
    Passed {},
}

impl From<WireOutcome> for ValidationOutcome {
    fn from(wire: WireOutcome) -> Self {
        match wire {
            WireOutcome::Failed { errors, msg } if errors.is_empty() && msg.is_empty() => {
                Self::Passed
            }
            WireOutcome::Failed { errors, msg } => Self::Failed { errors, msg },
            WireOutcome::Fault { errors } => Self::Fault(errors),
            WireOutcome::Passed {} => Self::Passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violation(path: &str, message: &str) -> Violation {
        Violation {
            message: message.to_string(),
            data_path: path.to_string(),
            json_path: format!("$.{path}"),
            schema_path: format!("properties.{path}.type"),
            relative_schema: json!({"type": "string"}),
            expected: json!("string"),
            validator: "type".to_string(),
            found: json!(1),
        }
    }

    #[test]
    fn test_empty_violations_pass() {
        let outcome = ValidationOutcome::from_violations(Vec::new());
        assert!(outcome.is_valid());
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({}));
    }

    #[test]
    fn test_failed_msg_has_one_line_per_violation() {
        let outcome = ValidationOutcome::from_violations(vec![
            violation("a", "first"),
            violation("b", "second"),
        ]);
        assert_eq!(
            outcome.msg(),
            Some("At 'properties.a.type' first.\nAt 'properties.b.type' second.")
        );
        assert_eq!(outcome.violations().len(), 2);
    }

    #[test]
    fn test_failed_wire_shape() {
        let outcome = ValidationOutcome::from_violations(vec![violation("a", "bad")]);
        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value["errors"].is_array());
        assert_eq!(value["errors"][0]["json_path"], "$.a");
        assert_eq!(value["msg"], "At 'properties.a.type' bad.");
    }

    #[test]
    fn test_fault_wire_shape() {
        let outcome = ValidationOutcome::Fault("schema is broken".to_string());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"errors": "schema is broken"})
        );
    }

    #[test]
    fn test_deserialize_all_shapes() {
        let failed = ValidationOutcome::from_violations(vec![violation("a", "bad")]);
        let fault = ValidationOutcome::Fault("boom".to_string());
        for outcome in [ValidationOutcome::Passed, failed, fault] {
            let text = serde_json::to_string(&outcome).unwrap();
            let parsed: ValidationOutcome = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, outcome);
        }
    }
}
