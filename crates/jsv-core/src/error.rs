//! # Error Types
//!
//! Hard failures of the adapter. Both kinds propagate to the host and stop
//! execution; schema violations are never errors (they are a
//! [`ValidationOutcome`](crate::ValidationOutcome)).

use thiserror::Error;

/// Top-level error type for the adapter.
#[derive(Error, Debug)]
pub enum JsvError {
    /// The schema-validation library the adapter delegates to is not available.
    #[error("missing required library '{library}': this build has no schema engine for it")]
    MissingDependency {
        /// Name of the library that was required.
        library: String,
    },

    /// `data` or `criteria` could not be normalized into JSON.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Malformed `data` or `criteria` option values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// `data` was neither a mapping nor a string.
    #[error("expected value of 'data' option to be a mapping or a JSON string, received type '{received}'")]
    DataType {
        /// JSON type name of the value received.
        received: &'static str,
    },

    /// `data` was a string that is not valid JSON text.
    #[error("'data' option value is invalid, it should be a mapping or a JSON string of one; failed to read with error '{reason}'")]
    DataParse {
        /// Parser error text.
        reason: String,
    },

    /// A `criteria` element was neither a mapping nor a string.
    #[error("expected value of 'criteria' option to be a mapping, a JSON string, or a list of them, received type '{received}'")]
    CriteriaType {
        /// JSON type name of the offending element.
        received: &'static str,
    },

    /// A `criteria` element was a string that is not valid JSON text.
    #[error("'criteria' option value is invalid, it should be a mapping or a JSON string of one; failed to read with error '{reason}'")]
    CriteriaParse {
        /// Parser error text.
        reason: String,
    },
}
