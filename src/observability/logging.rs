//! Diagnostic logging for validator runs.
//!
//! The report owns stdout, so every log line goes to stderr. At the default
//! level nothing is printed unless a file fails to load; `-v` shows the file
//! being checked and the final counts, `-vv` adds the per-file read and
//! skipped sections, and `-vvv` traces each section visited.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// How log lines on stderr are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Plain text, colored when stderr is a terminal.
    #[default]
    Human,
    /// One JSON object per line, for CI log collectors.
    Json,
}

/// Level directive for a `-v` count. Counts past three stay at `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber for one validator run.
///
/// The level comes only from `verbosity`. Module targets are shown from
/// `-vv` on, where loader and validator events interleave. A second call
/// is a no-op.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(verbosity_to_directive(verbosity)))
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(use_ansi(color)).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}
