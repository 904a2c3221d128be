//! # Input Normalization
//!
//! Turns the host-supplied `data` and `criteria` option values into JSON
//! value trees the schema engine can consume. Strings are parsed as JSON
//! text here and nowhere else; any value of the wrong shape is rejected with
//! an [`InputError`] before a validator is built.

use serde_json::Value;

use crate::error::InputError;

/// `data` and `criteria` after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInputs {
    /// The document to validate.
    pub data: Value,
    /// One schema per criteria item, in the order supplied.
    pub criteria: Vec<Value>,
}

impl NormalizedInputs {
    /// Normalize raw option values.
    ///
    /// `data` must be a mapping or a JSON string. `criteria` may be a single
    /// mapping or JSON string, or an array of them.
    ///
    /// # Errors
    ///
    /// Returns the matching [`InputError`] variant for a value of the wrong
    /// type or for a string that fails to parse.
    pub fn normalize(data: &Value, criteria: &Value) -> Result<Self, InputError> {
        Ok(Self {
            data: normalize_data(data)?,
            criteria: normalize_criteria(criteria)?,
        })
    }
}

fn normalize_data(data: &Value) -> Result<Value, InputError> {
    match data {
        Value::Object(_) => Ok(data.clone()),
        Value::String(text) => serde_json::from_str(text).map_err(|e| InputError::DataParse {
            reason: e.to_string(),
        }),
        other => Err(InputError::DataType {
            received: json_type_name(other),
        }),
    }
}

fn normalize_criteria(criteria: &Value) -> Result<Vec<Value>, InputError> {
    let items: &[Value] = match criteria {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };

    items
        .iter()
        .map(|item| match item {
            Value::Object(_) => Ok(item.clone()),
            Value::String(text) => {
                serde_json::from_str(text).map_err(|e| InputError::CriteriaParse {
                    reason: e.to_string(),
                })
            }
            other => Err(InputError::CriteriaType {
                received: json_type_name(other),
            }),
        })
        .collect()
}

/// JSON type name of a value, as reported in input errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
