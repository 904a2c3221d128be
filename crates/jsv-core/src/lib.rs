//! # jsv-core — Foundational Types for the Schema Adapter
//!
//! Defines the data model shared by the adapter and its host: the `Draft`
//! enum, option resolution, input normalization, the flattened violation
//! record, and the `ValidationOutcome` returned to callers.
//!
//! ## Key Design Principles
//!
//! 1. **One `Draft` enum.** Four variants, exhaustive `match` everywhere.
//!    Unknown configuration strings fall back to `Draft7` instead of failing.
//!
//! 2. **Inputs are parsed once, at the boundary.** `NormalizedInputs` is the
//!    only way the adapter receives data and criteria; strings are parsed as
//!    JSON text exactly once and malformed input never reaches a validator.
//!
//! 3. **Typed outcome, legacy wire form.** `ValidationOutcome` is a tagged
//!    enum in Rust but serializes to the `{errors, msg}` / `{errors: "..."}`
//!    mappings hosts already consume.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod draft;
pub mod error;
pub mod input;
pub mod outcome;
pub mod path;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use config::{EngineOptions, DRAFT_ENV_VAR, DRAFT_HOST_VAR};
pub use draft::Draft;
pub use error::{InputError, JsvError};
pub use input::NormalizedInputs;
pub use outcome::ValidationOutcome;
pub use path::{data_path, json_path, parse_pointer, PathSegment};
pub use violation::Violation;
