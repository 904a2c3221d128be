//! # Draft — Supported JSON Schema Rule-Sets
//!
//! The adapter interprets criteria under exactly one of four JSON Schema
//! drafts. Every `match` on [`Draft`] is exhaustive, so adding a rule-set
//! forces each constructor site to handle it.
//!
//! Configuration values are permissive: [`Draft::from_setting`] maps any
//! unrecognized string to the newest draft. Strict parsing through
//! [`FromStr`] is available for callers that want to reject typos.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A draft name that is not one of the four supported rule-sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown JSON Schema draft {0:?}; expected one of draft3, draft4, draft6, draft7")]
pub struct UnknownDraft(pub String);

/// JSON Schema specification version used to interpret criteria.
///
/// Ordered oldest to newest. The default is the newest, `Draft7`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Draft {
    /// Draft 3.
    Draft3,
    /// Draft 4.
    Draft4,
    /// Draft 6.
    Draft6,
    /// Draft 7.
    #[default]
    Draft7,
}

impl Draft {
    /// Returns all supported drafts, oldest first.
    pub fn all() -> &'static [Draft] {
        &[Self::Draft3, Self::Draft4, Self::Draft6, Self::Draft7]
    }

    /// Returns the configuration identifier for this draft.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft3 => "draft3",
            Self::Draft4 => "draft4",
            Self::Draft6 => "draft6",
            Self::Draft7 => "draft7",
        }
    }

    /// Map a configuration value onto a draft, falling back to [`Draft::Draft7`].
    ///
    /// An unrecognized value is not an error: it is logged and the newest
    /// supported rule-set is used.
    pub fn from_setting(value: &str) -> Self {
        match value.parse() {
            Ok(draft) => draft,
            Err(UnknownDraft(name)) => {
                tracing::warn!(value = %name, fallback = %Self::default(), "unrecognized draft option, using default");
                Self::default()
            }
        }
    }
}

impl std::fmt::Display for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Draft {
    type Err = UnknownDraft;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft3" => Ok(Self::Draft3),
            "draft4" => Ok(Self::Draft4),
            "draft6" => Ok(Self::Draft6),
            "draft7" => Ok(Self::Draft7),
            other => Err(UnknownDraft(other.to_string())),
        }
    }
}
