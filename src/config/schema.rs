//! Configuration schema for the ShadowDefender plugin.
//!
//! The schema is a static, ordered table of [`FieldRule`]s. The validator
//! visits [`SECTIONS`] in order and, within each section, applies the rules
//! in table order, so diagnostic ordering is fixed by this file.

use std::borrow::Cow;

use crate::config::value::{ConfigValue, Mapping};
use crate::error::Severity;

// ============================================================================
// Sections
// ============================================================================

/// Top-level sections, in visitation order.
pub const SECTIONS: [&str; 7] = [
    "plugin",
    "bot_protection",
    "vpn_detection",
    "challenge_mode",
    "rate_limiting",
    "logging",
    "advanced",
];

/// Accepted `vpn_detection.api_provider` values.
pub const API_PROVIDERS: &[&str] = &["ip-api", "iphub", "proxycheck"];

/// Accepted `vpn_detection.action` values.
pub const VPN_ACTIONS: &[&str] = &["kick", "warn", "log"];

/// Accepted `logging.log_level` values.
pub const LOG_LEVELS: &[&str] = &["DEBUG", "INFO", "WARN", "ERROR"];

/// Placeholder the plugin substitutes with the verification code.
pub const CODE_PLACEHOLDER: &str = "{CODE}";

// ============================================================================
// Rule Types
// ============================================================================

/// Value the plugin assumes when a field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// String default.
    Str(&'static str),
    /// Empty list.
    EmptyList,
    /// Empty mapping.
    EmptyMapping,
}

impl FieldDefault {
    /// Materializes the default as a value node.
    #[must_use]
    pub fn to_value(self) -> ConfigValue {
        match self {
            Self::Bool(b) => ConfigValue::Bool(b),
            Self::Integer(n) => ConfigValue::from(n),
            Self::Str(s) => ConfigValue::from(s),
            Self::EmptyList => ConfigValue::Sequence(Vec::new()),
            Self::EmptyMapping => ConfigValue::Mapping(Mapping::new()),
        }
    }
}

/// The predicate a field value must satisfy.
///
/// Range checks that start with `Integer` fail on any non-integer value,
/// except [`Check::IntegerAtMost`], which only constrains integers and leaves
/// type reporting to a sibling rule on the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Must be a boolean.
    Boolean,
    /// Must be a string.
    String,
    /// Must be a mapping.
    Mapping,
    /// Must be a sequence whose entries are all strings.
    StringList,
    /// Must be an integer `>=` the bound.
    IntegerAtLeast(i64),
    /// If an integer, must be `<=` the bound.
    IntegerAtMost(i64),
    /// Must be an integer `>=` the resolved value of another field in the
    /// same section. The comparison is skipped when that value is not an
    /// integer.
    IntegerAtLeastField(&'static str),
    /// Must be a string equal to one of the listed values (case-sensitive).
    OneOf(&'static [&'static str]),
    /// If a string, must contain the substring.
    Contains(&'static str),
    /// Each entry of a string list must compile as a case-insensitive regex.
    EachRegex,
    /// Each entry of a string list must parse as an IP address.
    EachIpAddress,
}

/// One row of the schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Section name.
    pub section: &'static str,
    /// Field name within the section.
    pub field: &'static str,
    /// Value used when the field is absent.
    pub default: FieldDefault,
    /// Predicate to apply.
    pub check: Check,
    /// Severity of a failure.
    pub severity: Severity,
    /// Diagnostic text. Per-entry checks append the offending entry.
    pub message: &'static str,
}

impl FieldRule {
    /// Dotted path of the field, e.g. `"advanced.cache_duration"`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.field)
    }
}

const fn rule(
    section: &'static str,
    field: &'static str,
    default: FieldDefault,
    check: Check,
    severity: Severity,
    message: &'static str,
) -> FieldRule {
    FieldRule {
        section,
        field,
        default,
        check,
        severity,
        message,
    }
}

use self::Check::{
    Boolean, Contains, EachIpAddress, EachRegex, IntegerAtLeast, IntegerAtLeastField,
    IntegerAtMost, OneOf, StringList,
};
use self::FieldDefault::{Bool, EmptyList, EmptyMapping, Integer, Str};
use Severity::{Error, Warning};

// ============================================================================
// Rule Table
// ============================================================================

/// Every field rule, grouped by section in [`SECTIONS`] order.
pub static RULES: &[FieldRule] = &[
    // plugin
    rule("plugin", "enabled", Bool(true), Boolean, Error, "plugin.enabled must be boolean"),
    // bot_protection
    rule(
        "bot_protection",
        "max_joins_per_ip_per_second",
        Integer(3),
        IntegerAtLeast(1),
        Error,
        "max_joins_per_ip_per_second must be positive integer",
    ),
    rule(
        "bot_protection",
        "max_joins_per_ip_per_10_seconds",
        Integer(5),
        IntegerAtLeastField("max_joins_per_ip_per_second"),
        Error,
        "max_joins_per_ip_per_10_seconds must be >= max_joins_per_ip_per_second",
    ),
    rule(
        "bot_protection",
        "auto_ban_duration",
        Integer(300),
        IntegerAtLeast(30),
        Warning,
        "auto_ban_duration should be at least 30 seconds",
    ),
    rule(
        "bot_protection",
        "enabled",
        Bool(true),
        Boolean,
        Error,
        "bot_protection.enabled must be boolean",
    ),
    rule(
        "bot_protection",
        "whitelist_usernames",
        EmptyList,
        StringList,
        Error,
        "whitelist_usernames must be a list of strings",
    ),
    rule(
        "bot_protection",
        "suspicious_username_patterns",
        EmptyList,
        StringList,
        Error,
        "suspicious_username_patterns must be a list of strings",
    ),
    rule(
        "bot_protection",
        "suspicious_username_patterns",
        EmptyList,
        EachRegex,
        Warning,
        "suspicious_username_patterns entry is not a valid regular expression and will be ignored",
    ),
    // vpn_detection
    rule(
        "vpn_detection",
        "api_provider",
        Str("ip-api"),
        OneOf(API_PROVIDERS),
        Error,
        "api_provider must be one of: ip-api, iphub, proxycheck",
    ),
    rule(
        "vpn_detection",
        "timeout",
        Integer(5000),
        IntegerAtLeast(1000),
        Warning,
        "VPN API timeout should be at least 1000ms",
    ),
    rule(
        "vpn_detection",
        "action",
        Str("kick"),
        OneOf(VPN_ACTIONS),
        Error,
        "VPN action must be one of: kick, warn, log",
    ),
    rule(
        "vpn_detection",
        "enabled",
        Bool(true),
        Boolean,
        Error,
        "vpn_detection.enabled must be boolean",
    ),
    rule(
        "vpn_detection",
        "message",
        Str("&cVPN/Proxy connections are not allowed on this server!"),
        Check::String,
        Error,
        "vpn_detection.message must be a string",
    ),
    rule(
        "vpn_detection",
        "whitelist_ips",
        EmptyList,
        StringList,
        Error,
        "whitelist_ips must be a list of strings",
    ),
    rule(
        "vpn_detection",
        "whitelist_ips",
        EmptyList,
        EachIpAddress,
        Warning,
        "whitelist_ips entry is not a valid IP address or CIDR range",
    ),
    rule(
        "vpn_detection",
        "apis",
        EmptyMapping,
        Check::Mapping,
        Error,
        "vpn_detection.apis must be a mapping",
    ),
    // challenge_mode
    rule(
        "challenge_mode",
        "trigger_threshold",
        Integer(10),
        IntegerAtLeast(5),
        Warning,
        "trigger_threshold should be at least 5",
    ),
    rule(
        "challenge_mode",
        "verification_timeout",
        Integer(60),
        IntegerAtLeast(30),
        Warning,
        "verification_timeout should be at least 30 seconds",
    ),
    rule(
        "challenge_mode",
        "enabled",
        Bool(true),
        Boolean,
        Error,
        "challenge_mode.enabled must be boolean",
    ),
    rule(
        "challenge_mode",
        "duration",
        Integer(300),
        IntegerAtLeast(1),
        Error,
        "challenge_mode.duration must be at least 1 second",
    ),
    rule(
        "challenge_mode",
        "limbo_world",
        Str("limbo"),
        Check::String,
        Error,
        "limbo_world must be a string",
    ),
    rule(
        "challenge_mode",
        "welcome_message",
        Str(DEFAULT_WELCOME_MESSAGE),
        Check::String,
        Error,
        "welcome_message must be a string",
    ),
    rule(
        "challenge_mode",
        "welcome_message",
        Str(DEFAULT_WELCOME_MESSAGE),
        Contains(CODE_PLACEHOLDER),
        Warning,
        "welcome_message should contain the {CODE} placeholder",
    ),
    rule(
        "challenge_mode",
        "kick_message",
        Str("&cVerification timeout! Please rejoin and verify quickly."),
        Check::String,
        Error,
        "kick_message must be a string",
    ),
    // rate_limiting
    rule(
        "rate_limiting",
        "max_packets_per_second",
        Integer(100),
        IntegerAtLeast(10),
        Warning,
        "max_packets_per_second seems very low",
    ),
    rule(
        "rate_limiting",
        "max_connections_per_ip",
        Integer(5),
        IntegerAtLeast(1),
        Error,
        "max_connections_per_ip must be at least 1",
    ),
    rule(
        "rate_limiting",
        "enabled",
        Bool(true),
        Boolean,
        Error,
        "rate_limiting.enabled must be boolean",
    ),
    rule(
        "rate_limiting",
        "connection_throttle",
        Integer(1000),
        IntegerAtLeast(0),
        Error,
        "connection_throttle must be a non-negative integer",
    ),
    // logging
    rule(
        "logging",
        "log_level",
        Str("INFO"),
        OneOf(LOG_LEVELS),
        Error,
        "log_level must be one of: DEBUG, INFO, WARN, ERROR",
    ),
    rule(
        "logging",
        "max_file_size",
        Integer(10_485_760),
        IntegerAtLeast(1_048_576),
        Warning,
        "max_file_size should be at least 1MB",
    ),
    rule("logging", "console", Bool(true), Boolean, Error, "logging.console must be boolean"),
    rule("logging", "file", Bool(true), Boolean, Error, "logging.file must be boolean"),
    rule(
        "logging",
        "file_path",
        Str("plugins/ShadowDefenderMC/logs/security.log"),
        Check::String,
        Error,
        "logging.file_path must be a string",
    ),
    // advanced
    rule(
        "advanced",
        "thread_pool_size",
        Integer(4),
        IntegerAtLeast(1),
        Error,
        "thread_pool_size must be at least 1",
    ),
    rule(
        "advanced",
        "thread_pool_size",
        Integer(4),
        IntegerAtMost(16),
        Warning,
        "thread_pool_size > 16 may not improve performance",
    ),
    rule(
        "advanced",
        "cache_duration",
        Integer(300),
        IntegerAtLeast(60),
        Warning,
        "cache_duration should be at least 60 seconds",
    ),
    rule(
        "advanced",
        "use_async_processing",
        Bool(true),
        Boolean,
        Error,
        "use_async_processing must be boolean",
    ),
    rule(
        "advanced",
        "cleanup_interval",
        Integer(60),
        IntegerAtLeast(1),
        Error,
        "cleanup_interval must be at least 1 second",
    ),
    rule(
        "advanced",
        "max_cached_ips",
        Integer(10_000),
        IntegerAtLeast(1),
        Error,
        "max_cached_ips must be at least 1",
    ),
];

const DEFAULT_WELCOME_MESSAGE: &str = "&e&lSERVER PROTECTION ACTIVE\n&7Please verify yourself by typing:\n&a/verify {CODE}\n&7Your verification code: &b{CODE}";

// ============================================================================
// Lookup
// ============================================================================

/// Rules belonging to `section`, in table order.
pub fn rules_for(section: &str) -> impl Iterator<Item = &'static FieldRule> + '_ {
    RULES.iter().filter(move |r| r.section == section)
}

/// Default value of `section.field`, if the schema knows the field.
#[must_use]
pub fn default_for(section: &str, field: &str) -> Option<FieldDefault> {
    RULES
        .iter()
        .find(|r| r.section == section && r.field == field)
        .map(|r| r.default)
}

/// Resolves `field` in a section body: the present value (including an
/// explicit `null`), otherwise the schema default.
#[must_use]
pub fn resolve<'a>(body: &'a Mapping, section: &str, field: &str) -> Option<Cow<'a, ConfigValue>> {
    body.get(field).map(Cow::Borrowed).or_else(|| {
        default_for(section, field).map(|d| Cow::Owned(d.to_value()))
    })
}
