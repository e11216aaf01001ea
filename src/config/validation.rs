//! Configuration validation
//!
//! Applies the [`schema`](crate::config::schema) rule table to a parsed
//! document. Validation collects ALL issues (it does not stop at the first)
//! so users get complete feedback; only a load failure or a non-mapping root
//! halts a run early.

use std::net::IpAddr;
use std::path::Path;

use regex::RegexBuilder;

use crate::config::loader::ConfigLoader;
use crate::config::schema::{self, Check, FieldRule, SECTIONS};
use crate::config::value::{ConfigValue, Mapping};
use crate::error::{Severity, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// Message reported when the document root is not a mapping.
pub const ROOT_NOT_MAPPING: &str = "Configuration document must be a mapping";

/// Result of configuration validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Validation errors, in section then field order.
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings, in section then field order.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` if validation passed: no errors, and under `strict`
    /// no warnings either.
    #[must_use]
    pub fn is_valid(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }
}

/// Configuration validator.
///
/// A validator can be reused; every call starts from empty issue lists and
/// hands them out by value.
#[derive(Debug, Default)]
pub struct Validator {
    loader: ConfigLoader,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator with the default loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a parsed document.
    pub fn validate(&mut self, document: &ConfigValue) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        if let Some(root) = document.as_mapping() {
            for section in SECTIONS {
                self.validate_section(root, section);
            }
        } else {
            tracing::debug!(kind = document.kind(), "document root is not a mapping");
            self.add_error("", ROOT_NOT_MAPPING.to_string());
        }

        self.finish()
    }

    /// Loads, parses and validates the file at `path`.
    ///
    /// Load and syntax failures are reported as a single error; no section
    /// checks run in that case.
    pub fn validate_file(&mut self, path: &Path) -> ValidationResult {
        match self.loader.load(path) {
            Ok(document) => self.validate(&document),
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "failed to load configuration");
                self.errors.clear();
                self.warnings.clear();
                self.add_error("", err.to_string());
                self.finish()
            }
        }
    }

    // ========================================================================
    // Section Validation
    // ========================================================================

    /// Applies every rule of `section`. An absent section behaves like an
    /// empty mapping; a present section that is not a mapping is skipped
    /// without a diagnostic.
    fn validate_section(&mut self, root: &Mapping, section: &str) {
        let empty = Mapping::new();
        let body = match root.get(section) {
            None => &empty,
            Some(ConfigValue::Mapping(body)) => body,
            Some(other) => {
                tracing::debug!(section, kind = other.kind(), "section is not a mapping, skipping");
                return;
            }
        };

        tracing::trace!(section, fields = body.len(), "validating section");
        for rule in schema::rules_for(section) {
            let Some(value) = schema::resolve(body, section, rule.field) else {
                continue;
            };
            for message in violations(rule, &value, body) {
                self.add(rule, message);
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add(&mut self, rule: &FieldRule, message: String) {
        match rule.severity {
            Severity::Error => self.add_error(&rule.path(), message),
            Severity::Warning => self.add_warning(&rule.path(), message),
        }
    }

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: String) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message,
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: String) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message,
            severity: Severity::Warning,
        });
    }

    fn finish(&mut self) -> ValidationResult {
        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }
}

/// Validates a parsed document with a fresh [`Validator`].
#[must_use]
pub fn validate(document: &ConfigValue) -> ValidationResult {
    Validator::new().validate(document)
}

/// Validates the file at `path` with a fresh [`Validator`].
#[must_use]
pub fn validate_file(path: &Path) -> ValidationResult {
    Validator::new().validate_file(path)
}

// ============================================================================
// Rule Evaluation
// ============================================================================

/// Messages produced by applying `rule` to the resolved `value`. Most checks
/// yield zero or one message; per-entry checks yield one per bad entry.
fn violations(rule: &FieldRule, value: &ConfigValue, body: &Mapping) -> Vec<String> {
    let passed = match rule.check {
        Check::Boolean => value.as_bool().is_some(),
        Check::String => value.as_str().is_some(),
        Check::Mapping => value.as_mapping().is_some(),
        Check::StringList => string_list(value).is_some(),
        Check::IntegerAtLeast(min) => value.as_integer().is_some_and(|n| n >= i128::from(min)),
        Check::IntegerAtMost(max) => value.as_integer().is_none_or(|n| n <= i128::from(max)),
        Check::IntegerAtLeastField(other) => value.as_integer().is_some_and(|n| {
            schema::resolve(body, rule.section, other)
                .and_then(|v| v.as_integer())
                .is_none_or(|floor| n >= floor)
        }),
        Check::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        Check::Contains(needle) => value.as_str().is_none_or(|s| s.contains(needle)),
        Check::EachRegex => {
            return entry_violations(rule, value, |entry| {
                RegexBuilder::new(entry).case_insensitive(true).build().is_ok()
            });
        }
        Check::EachIpAddress => return entry_violations(rule, value, is_address_or_range),
    };

    if passed {
        Vec::new()
    } else {
        vec![rule.message.to_string()]
    }
}

/// Accepts a bare address or `address/prefix` with a prefix that fits the
/// address family.
fn is_address_or_range(entry: &str) -> bool {
    let entry = entry.trim();
    let Some((addr, prefix)) = entry.split_once('/') else {
        return entry.parse::<IpAddr>().is_ok();
    };
    let max_prefix = match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => 32,
        Ok(IpAddr::V6(_)) => 128,
        Err(_) => return false,
    };
    prefix.parse::<u8>().is_ok_and(|bits| bits <= max_prefix)
}

/// Returns the entries if `value` is a sequence made only of strings.
fn string_list(value: &ConfigValue) -> Option<Vec<&str>> {
    value
        .as_sequence()?
        .iter()
        .map(ConfigValue::as_str)
        .collect::<Option<Vec<_>>>()
}

/// One message per entry that fails `accept`. Values that are not string
/// lists are left to the field's `StringList` rule.
fn entry_violations(
    rule: &FieldRule,
    value: &ConfigValue,
    accept: impl Fn(&str) -> bool,
) -> Vec<String> {
    string_list(value)
        .unwrap_or_default()
        .into_iter()
        .filter(|&entry| !accept(entry))
        .map(|entry| format!("{}: '{entry}'", rule.message))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
