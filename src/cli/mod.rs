//! Command-line front end
//!
//! Loads and validates the configuration file named on the command line,
//! prints the report, and decides validity under the active strictness
//! mode.

pub mod args;
pub mod report;

use std::io::Write;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::Validator;
use crate::error::Result;

/// Runs one validation and writes the report to stdout.
///
/// Returns whether the configuration is valid under `--strict` (if set).
///
/// # Errors
///
/// Returns an error only if the report cannot be written.
pub fn run(cli: &Cli) -> Result<bool> {
    tracing::info!(file = %cli.config.display(), strict = cli.strict, "validating configuration");

    let result = Validator::new().validate_file(&cli.config);

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => report::write_human(&mut stdout, &cli.config, &result, cli.strict)?,
        OutputFormat::Json => report::write_json(&mut stdout, &cli.config, &result, cli.strict)?,
    }
    stdout.flush()?;

    let valid = result.is_valid(cli.strict);
    tracing::info!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        valid,
        "validation finished"
    );
    Ok(valid)
}
