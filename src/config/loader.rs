//! Configuration loader
//!
//! Reads a single YAML file from disk and lowers it into a [`ConfigValue`]:
//! 1. Existence and size check
//! 2. Raw read (UTF-8 BOM stripped)
//! 3. YAML parsing via `serde_yaml`
//!
//! Each failure maps to a distinct [`ConfigError`] variant so the validator
//! can report "not found" and "syntax error" differently.

use std::io::ErrorKind;
use std::path::Path;

use crate::config::value::ConfigValue;
use crate::error::ConfigError;

// ============================================================================
// Public API
// ============================================================================

/// Maximum accepted configuration size: 10 MiB.
pub const DEFAULT_MAX_CONFIG_SIZE: u64 = 10 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Maximum configuration file size in bytes.
    pub max_config_size: u64,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_config_size: DEFAULT_MAX_CONFIG_SIZE,
        }
    }
}

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Loads and parses a configuration file.
    ///
    /// An empty file parses to [`ConfigValue::Null`]; rejecting a non-mapping
    /// root is left to the validator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read or exceeds the size cap
    /// - YAML parsing fails (including invalid UTF-8)
    pub fn load(&self, path: &Path) -> Result<ConfigValue, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

        if metadata.len() > self.options.max_config_size {
            return Err(ConfigError::TooLarge {
                size: metadata.len(),
                limit: self.options.max_config_size,
            });
        }

        let raw = std::fs::read(path).map_err(|e| io_error(path, e))?;
        tracing::debug!(file = %path.display(), bytes = raw.len(), "read configuration");

        Self::parse(&raw, path)
    }

    /// Parses raw YAML bytes. `path` is only used in log output.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the bytes are not a single valid
    /// YAML document.
    pub fn parse(raw: &[u8], path: &Path) -> Result<ConfigValue, ConfigError> {
        let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);

        let root: serde_yaml::Value =
            serde_yaml::from_slice(raw).map_err(|e| {
                tracing::debug!(
                    file = %path.display(),
                    line = e.location().map(|l| l.line()),
                    "YAML parse failed"
                );
                ConfigError::ParseError {
                    message: e.to_string(),
                }
            })?;

        Ok(ConfigValue::from(root))
    }
}

/// Splits "does not exist" from every other read failure.
fn io_error(path: &Path, err: std::io::Error) -> ConfigError {
    if err.kind() == ErrorKind::NotFound {
        ConfigError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
