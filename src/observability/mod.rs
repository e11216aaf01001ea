//! Observability module
//!
//! Diagnostic logging for the validator itself. Validation findings are
//! part of the report on stdout; log lines go to stderr.

pub mod logging;

pub use logging::{LogFormat, init_logging};
