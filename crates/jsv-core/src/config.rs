//! # Engine Options
//!
//! Resolves the adapter's single option, `draft`, from the sources a host
//! provides. Precedence, highest first:
//!
//! 1. an explicit option value,
//! 2. the [`DRAFT_ENV_VAR`] environment variable,
//! 3. the [`DRAFT_HOST_VAR`] entry of the host variables mapping,
//! 4. the default, `draft7`.
//!
//! The first source that is present wins, and its value then goes through
//! the permissive [`Draft::from_setting`] mapping.

use serde_json::{Map, Value};

use crate::draft::Draft;

/// Environment variable consulted for the draft option.
pub const DRAFT_ENV_VAR: &str = "ANSIBLE_VALIDATE_JSONSCHEMA_DRAFT";

/// Host variable consulted for the draft option.
pub const DRAFT_HOST_VAR: &str = "ansible_validate_jsonschema_draft";

/// Resolved configuration for one validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Rule-set used to interpret every criteria item.
    pub draft: Draft,
}

impl EngineOptions {
    /// Options with an explicitly chosen draft.
    pub fn with_draft(draft: Draft) -> Self {
        Self { draft }
    }

    /// Resolve options, reading [`DRAFT_ENV_VAR`] from the process environment.
    pub fn resolve(explicit: Option<&str>, host_vars: &Map<String, Value>) -> Self {
        let env = std::env::var(DRAFT_ENV_VAR).ok();
        Self::resolve_with(explicit, env.as_deref(), host_vars)
    }

    /// Resolve options from explicitly supplied sources.
    pub fn resolve_with(
        explicit: Option<&str>,
        env: Option<&str>,
        host_vars: &Map<String, Value>,
    ) -> Self {
        let draft = if let Some(value) = explicit {
            tracing::debug!(source = "option", value, "resolved draft option");
            Draft::from_setting(value)
        } else if let Some(value) = env {
            tracing::debug!(source = "env", value, "resolved draft option");
            Draft::from_setting(value)
        } else if let Some(value) = host_vars.get(DRAFT_HOST_VAR) {
            tracing::debug!(source = "vars", %value, "resolved draft option");
            match value.as_str() {
                Some(s) => Draft::from_setting(s),
                None => {
                    tracing::warn!(%value, "non-string draft host variable, using default");
                    Draft::default()
                }
            }
        } else {
            Draft::default()
        };
        Self { draft }
    }
}
