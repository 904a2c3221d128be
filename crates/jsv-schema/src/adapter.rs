//! # Validator Adapter
//!
//! The entry point a host calls once per validation request.
//!
//! ## Error Propagation
//!
//! | Condition | Result |
//! |-----------|--------|
//! | No schema engine in this build | `Err(JsvError::MissingDependency)` at construction |
//! | `data`/`criteria` malformed | `Err(JsvError::InvalidInput)` before any validator runs |
//! | Document violates criteria | `Ok(ValidationOutcome::Failed)` |
//! | Engine failure (e.g. invalid schema) | `Ok(ValidationOutcome::Fault)` |

use serde_json::Value;

use jsv_core::{Draft, EngineOptions, JsvError, NormalizedInputs, ValidationOutcome};

use crate::engine::{default_engine, EngineError, RawViolation, SchemaEngine, ENGINE_LIBRARY};

/// Validates documents against JSON Schema criteria under one configured draft.
pub struct ValidatorAdapter {
    engine: Box<dyn SchemaEngine>,
    options: EngineOptions,
}

impl std::fmt::Debug for ValidatorAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorAdapter")
            .field("engine", &self.engine.library())
            .field("options", &self.options)
            .finish()
    }
}

impl ValidatorAdapter {
    /// Create an adapter backed by the engine compiled into this build.
    ///
    /// # Errors
    ///
    /// Returns `JsvError::MissingDependency` when the crate was built
    /// without the `jsonschema-backend` feature.
    pub fn new(options: EngineOptions) -> Result<Self, JsvError> {
        Self::from_engine(default_engine(), options)
    }

    /// Create an adapter from an optionally available engine.
    ///
    /// # Errors
    ///
    /// Returns `JsvError::MissingDependency` when `engine` is `None`.
    pub fn from_engine(
        engine: Option<Box<dyn SchemaEngine>>,
        options: EngineOptions,
    ) -> Result<Self, JsvError> {
        let engine = engine.ok_or_else(|| JsvError::MissingDependency {
            library: ENGINE_LIBRARY.to_string(),
        })?;
        Ok(Self::with_engine(engine, options))
    }

    /// Create an adapter around a specific engine.
    pub fn with_engine(engine: Box<dyn SchemaEngine>, options: EngineOptions) -> Self {
        Self { engine, options }
    }

    /// The draft every criteria item is interpreted under.
    pub fn draft(&self) -> Draft {
        self.options.draft
    }

    /// Validate `data` against every item of `criteria`.
    ///
    /// Violations of each criteria item are sorted by document path and
    /// appended in criteria order.
    ///
    /// # Errors
    ///
    /// Returns `JsvError::InvalidInput` if either value cannot be normalized.
    /// Engine failures are not errors: they become [`ValidationOutcome::Fault`].
    pub fn validate(&self, data: &Value, criteria: &Value) -> Result<ValidationOutcome, JsvError> {
        let inputs = NormalizedInputs::normalize(data, criteria)?;

        let outcome = match self.run(&inputs) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, draft = %self.draft(), "validation did not complete");
                ValidationOutcome::Fault(e.to_string())
            }
        };

        tracing::info!(
            draft = %self.draft(),
            criteria = inputs.criteria.len(),
            violations = outcome.violations().len(),
            valid = outcome.is_valid(),
            "validation finished"
        );
        Ok(outcome)
    }

    fn run(&self, inputs: &NormalizedInputs) -> Result<ValidationOutcome, EngineError> {
        let draft = self.draft();
        let mut violations = Vec::new();

        for (index, schema) in inputs.criteria.iter().enumerate() {
            let mut found = self.engine.iter_errors(draft, schema, &inputs.data)?;
            found.sort_by(|a, b| a.absolute_path.cmp(&b.absolute_path));
            tracing::debug!(criteria = index, %draft, violations = found.len(), "evaluated criteria item");
            violations.extend(found.into_iter().map(RawViolation::into_violation));
        }

        Ok(ValidationOutcome::from_violations(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_core::path::PathSegment;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Engine returning canned errors and recording the drafts it was asked for.
    #[derive(Default)]
    struct StubEngine {
        errors: Vec<RawViolation>,
        fail: bool,
        drafts: Arc<Mutex<Vec<Draft>>>,
    }

    impl SchemaEngine for StubEngine {
        fn library(&self) -> &'static str {
            "stub"
        }

        fn iter_errors(
            &self,
            draft: Draft,
            _schema: &Value,
            _document: &Value,
        ) -> Result<Vec<RawViolation>, EngineError> {
            self.drafts.lock().unwrap().push(draft);
            if self.fail {
                return Err(EngineError::Backend("engine exploded".to_string()));
            }
            Ok(self.errors.clone())
        }
    }

    fn raw(path: &[&str], message: &str) -> RawViolation {
        RawViolation {
            message: message.to_string(),
            absolute_path: path.iter().map(|p| PathSegment::Key(p.to_string())).collect(),
            relative_schema_path: vec![PathSegment::Key("type".to_string())],
            schema: json!({"type": "string"}),
            validator_value: json!("string"),
            validator: "type".to_string(),
            instance: json!(1),
        }
    }

    #[test]
    fn test_missing_engine_is_missing_dependency() {
        let err = ValidatorAdapter::from_engine(None, EngineOptions::default()).unwrap_err();
        match err {
            JsvError::MissingDependency { library } => assert_eq!(library, "jsonschema"),
            other => panic!("expected MissingDependency, got {other}"),
        }
    }

    #[test]
    fn test_errors_sorted_per_criteria_item() {
        let engine = StubEngine {
            errors: vec![raw(&["b"], "second"), raw(&["a"], "first")],
            ..Default::default()
        };
        let adapter = ValidatorAdapter::with_engine(Box::new(engine), EngineOptions::default());

        let outcome = adapter.validate(&json!({}), &json!([{}, {}])).unwrap();
        let paths: Vec<&str> = outcome.violations().iter().map(|v| v.data_path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b", "a", "b"]);
        assert_eq!(outcome.msg().unwrap().lines().count(), 4);
    }

    #[test]
    fn test_configured_draft_passed_to_engine() {
        let engine = StubEngine::default();
        let seen = Arc::clone(&engine.drafts);
        let adapter =
            ValidatorAdapter::with_engine(Box::new(engine), EngineOptions::with_draft(Draft::Draft4));
        assert!(adapter.validate(&json!({}), &json!([{}, {}])).unwrap().is_valid());
        assert_eq!(adapter.draft(), Draft::Draft4);
        assert_eq!(*seen.lock().unwrap(), vec![Draft::Draft4, Draft::Draft4]);
    }

    #[test]
    fn test_engine_failure_becomes_fault() {
        let engine = StubEngine {
            fail: true,
            ..Default::default()
        };
        let adapter = ValidatorAdapter::with_engine(Box::new(engine), EngineOptions::default());
        let outcome = adapter.validate(&json!({}), &json!({})).unwrap();
        assert_eq!(outcome.fault(), Some("schema engine error: engine exploded"));
    }

    #[test]
    fn test_invalid_input_stops_before_engine() {
        let engine = StubEngine::default();
        let seen = Arc::clone(&engine.drafts);
        let adapter = ValidatorAdapter::with_engine(Box::new(engine), EngineOptions::default());
        let err = adapter.validate(&json!(7), &json!({})).unwrap_err();
        assert!(matches!(err, JsvError::InvalidInput(_)));
        assert!(seen.lock().unwrap().is_empty());
    }
}
