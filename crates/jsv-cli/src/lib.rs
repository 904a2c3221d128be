//! # jsv-cli — Command-Line Host for the Schema Adapter
//!
//! Plays the part of the host automation engine: reads `data` and
//! `criteria` from files, resolves the `draft` option from flag,
//! environment, or a host variables file, calls the adapter once, and
//! prints the result mapping.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `jsv-schema`; no validation logic lives here.
//! - stdout carries only the result; logs go to stderr.

pub mod document;
pub mod validate;
