//! # jsv-schema — JSON Schema Validate Adapter
//!
//! Runs a document through one or more criteria schemas under a configured
//! draft and reports the result as a [`ValidationOutcome`].
//!
//! ## Layout
//!
//! - [`engine`] — the [`SchemaEngine`] capability the adapter delegates
//!   schema interpretation to, and the [`RawViolation`] it yields.
//! - `backend` — the built-in engine over the `jsonschema` crate, present
//!   with the `jsonschema-backend` feature (on by default).
//! - [`draft3`] — keyword translation that lets draft3 criteria run on the
//!   draft4 rule-set.
//! - [`adapter`] — [`ValidatorAdapter::validate`], the entry point hosts call.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsv-core` internally.
//! - Malformed input is a hard error; engine failures are absorbed into
//!   [`ValidationOutcome::Fault`]; violations are ordinary output.

pub mod adapter;
#[cfg(feature = "jsonschema-backend")]
pub mod backend;
pub mod draft3;
pub mod engine;

pub use adapter::ValidatorAdapter;
#[cfg(feature = "jsonschema-backend")]
pub use backend::JsonSchemaEngine;
pub use engine::{default_engine, EngineError, RawViolation, SchemaEngine};

pub use jsv_core::{Draft, EngineOptions, JsvError, ValidationOutcome, Violation};
