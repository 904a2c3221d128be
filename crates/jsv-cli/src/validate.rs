//! # Validate Subcommand
//!
//! `jsv validate --data <PATH> --criteria <PATH>... [--draft <NAME>] [--vars <PATH>]`
//!
//! Exit codes: 0 when the document conforms, 1 on violations or a fault,
//! 2 on operational errors (unreadable files, invalid input, missing engine).

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::{Map, Value};

use jsv_core::{EngineOptions, ValidationOutcome};
use jsv_schema::ValidatorAdapter;

use crate::document::{load_host_vars, load_option_value};

/// Arguments for the `jsv validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate (.json text, or .yaml/.yml).
    #[arg(long, value_name = "PATH")]
    pub data: PathBuf,

    /// Schema criteria; repeat for several (.json text, or .yaml/.yml).
    #[arg(long, value_name = "PATH", required = true)]
    pub criteria: Vec<PathBuf>,

    /// JSON Schema draft: draft3, draft4, draft6 or draft7. Unknown values use draft7.
    #[arg(long)]
    pub draft: Option<String>,

    /// Host variables mapping consulted for the draft option.
    #[arg(long, value_name = "PATH")]
    pub vars: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The result mapping as pretty-printed JSON.
    Json,
    /// `OK`, one line per violation, or `ERROR: <fault>`.
    Text,
}

/// Execute the validate subcommand, printing to stdout.
///
/// The draft is resolved from `--draft`, then the process environment, then
/// the `--vars` mapping.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let host_vars = load_vars(args)?;
    let options = EngineOptions::resolve(args.draft.as_deref(), &host_vars);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, options, &mut out)
}

/// Execute with already-resolved options and an explicit output sink.
pub fn execute(args: &ValidateArgs, options: EngineOptions, out: &mut impl Write) -> Result<u8> {
    tracing::debug!(draft = %options.draft, "resolved engine options");

    let data = load_option_value(&args.data)?;
    let criteria = args
        .criteria
        .iter()
        .map(|path| load_option_value(path))
        .collect::<Result<Vec<_>>>()?;

    let adapter = ValidatorAdapter::new(options).context("cannot construct validator")?;
    let outcome = adapter
        .validate(&data, &Value::Array(criteria))
        .context("validation input rejected")?;

    print_outcome(&outcome, args.format, out)?;

    Ok(if outcome.is_valid() { 0 } else { 1 })
}

fn load_vars(args: &ValidateArgs) -> Result<Map<String, Value>> {
    match &args.vars {
        Some(path) => load_host_vars(path),
        None => Ok(Map::new()),
    }
}

fn print_outcome(outcome: &ValidationOutcome, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match outcome {
            ValidationOutcome::Passed => writeln!(out, "OK")?,
            ValidationOutcome::Failed { msg, .. } => writeln!(out, "{msg}")?,
            ValidationOutcome::Fault(text) => writeln!(out, "ERROR: {text}")?,
        },
    }
    Ok(())
}
