//! Validation report rendering.
//!
//! Writes a [`ValidationResult`] either as the human-readable block format
//! (banner, errors, warnings, verdict) or as a single JSON object.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::config::ValidationResult;
use crate::error::{Result, ValidationIssue};

const RULE_WIDTH: usize = 50;

/// Overall outcome, independent of strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No errors, no warnings.
    Valid,
    /// No errors, at least one warning.
    ValidWithWarnings,
    /// At least one error.
    HasErrors,
}

impl Verdict {
    /// Classifies a validation result.
    #[must_use]
    pub fn of(result: &ValidationResult) -> Self {
        if result.has_errors() {
            Self::HasErrors
        } else if result.has_warnings() {
            Self::ValidWithWarnings
        } else {
            Self::Valid
        }
    }

    /// The one-line verdict printed at the end of a human report.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Valid => "Configuration is valid!",
            Self::ValidWithWarnings => "Configuration is valid (with warnings)",
            Self::HasErrors => "Configuration has errors!",
        }
    }
}

/// Writes the human-readable report.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_human(
    out: &mut impl Write,
    path: &Path,
    result: &ValidationResult,
    strict: bool,
) -> Result<()> {
    writeln!(out, "Validating configuration: {}", path.display())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    write_block(out, "ERRORS:", &result.errors)?;
    write_block(out, "WARNINGS:", &result.warnings)?;

    let verdict = Verdict::of(result);
    writeln!(out, "{}", verdict.message())?;
    if strict && verdict == Verdict::ValidWithWarnings {
        writeln!(out, "Strict mode: warnings are treated as errors")?;
    }
    Ok(())
}

fn write_block(out: &mut impl Write, heading: &str, issues: &[ValidationIssue]) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    writeln!(out, "{heading}")?;
    for issue in issues {
        writeln!(out, "  {}: {}", issue.severity, issue.message)?;
    }
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    strict: bool,
    valid: bool,
    verdict: Verdict,
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

/// Writes the report as one JSON object followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn write_json(
    out: &mut impl Write,
    path: &Path,
    result: &ValidationResult,
    strict: bool,
) -> Result<()> {
    let report = JsonReport {
        file: path.display().to_string(),
        strict,
        valid: result.is_valid(strict),
        verdict: Verdict::of(result),
        errors: &result.errors,
        warnings: &result.warnings,
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
