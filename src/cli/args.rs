//! CLI argument definitions
//!
//! Clap derive structs for `shadowdefender-config` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Validate a ShadowDefender plugin configuration file before the plugin
/// loads it.
#[derive(Parser, Debug)]
#[command(name = "shadowdefender-config", author, version, about)]
pub struct Cli {
    /// Path to the YAML configuration file.
    pub config: PathBuf,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Report format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log line format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,

    /// Color output control for log lines.
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
