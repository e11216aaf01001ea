//! Error and diagnostic types for `shadowdefender-config`
//!
//! Load failures are modelled as [`ConfigError`]; once validation runs, every
//! problem found in the document becomes a [`ValidationIssue`] instead of an
//! error value.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes.
pub struct ExitCode;

impl ExitCode {
    /// Configuration is valid under the active strictness mode.
    pub const SUCCESS: i32 = 0;

    /// Configuration is invalid, or the report could not be written.
    pub const INVALID: i32 = 1;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for the command-line front end.
///
/// Validation findings and load failures never surface here; this only
/// covers failures that prevent a report from being written.
#[derive(Debug, Error)]
pub enum CheckError {
    /// I/O error while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Json(_) => ExitCode::INVALID,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Failures while reading or parsing a configuration file.
///
/// Each variant halts validation; its `Display` text becomes the single
/// diagnostic of the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist
    #[error("Configuration file not found: {}", path.display())]
    MissingFile {
        /// Path that was requested
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("Configuration file could not be read: {}: {source}", path.display())]
    Unreadable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file exceeds the loader size cap
    #[error("Configuration file too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// YAML parsing failed
    #[error("YAML syntax error: {message}")]
    ParseError {
        /// Parser message, including the line and column when known
        message: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single diagnostic found while validating a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path to the field (e.g. `"bot_protection.auto_ban_duration"`),
    /// empty for document-level issues
    pub path: String,
    /// Human-readable description
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.severity, self.message)
        } else {
            write!(f, "{}: {} at {}", self.severity, self.message, self.path)
        }
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Makes the configuration invalid
    Error,
    /// Outside a recommended range; only fails under `--strict`
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for command-line operations.
pub type Result<T> = std::result::Result<T, CheckError>;

// ============================================================================
// Tests
// ============================================================================
