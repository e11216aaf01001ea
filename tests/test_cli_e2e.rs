mod common;

use common::{ValidatorProcess, stdout};

// ============================================================================
// Human report
// ============================================================================

#[test]
fn shipped_defaults_are_valid() {
    let output = ValidatorProcess::validate_fixture("default_config.yml", &[]);
    let text = stdout(&output);
    assert!(output.status.success(), "defaults should validate: {text}");
    assert!(text.ends_with("Configuration is valid!\n"), "{text}");
    assert!(!text.contains("ERRORS:"));
    assert!(!text.contains("WARNINGS:"));
}

#[test]
fn empty_mapping_is_valid() {
    let output = ValidatorProcess::validate_fixture("empty_mapping.yml", &["--strict"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Configuration is valid!"));
}

#[test]
fn banner_names_the_file() {
    let output = ValidatorProcess::validate_fixture("empty_mapping.yml", &[]);
    let text = stdout(&output);
    let first = text.lines().next().unwrap_or_default();
    assert!(first.starts_with("Validating configuration: "), "{text}");
    assert!(first.ends_with("empty_mapping.yml"), "{text}");
    assert_eq!(text.lines().nth(1), Some("=".repeat(50).as_str()));
}

#[test]
fn join_window_error_fails() {
    let output = ValidatorProcess::validate_fixture("join_window.yml", &[]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains(
        "  error: max_joins_per_ip_per_10_seconds must be >= max_joins_per_ip_per_second\n"
    ));
    assert!(!text.contains("WARNINGS:"));
    assert!(text.ends_with("Configuration has errors!\n"));
}

#[test]
fn warnings_pass_without_strict() {
    let output = ValidatorProcess::validate_fixture("warnings_only.yml", &[]);
    let text = stdout(&output);
    assert!(output.status.success(), "{text}");
    assert!(text.contains("  warning: thread_pool_size > 16 may not improve performance\n"));
    assert!(text.contains("Configuration is valid (with warnings)"));
}

#[test]
fn warnings_fail_with_strict() {
    let output = ValidatorProcess::validate_fixture("warnings_only.yml", &["--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Strict mode: warnings are treated as errors"));
}

#[test]
fn errors_are_listed_before_warnings() {
    let output = ValidatorProcess::validate_fixture("mixed.yml", &[]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1));

    let errors_at = text.find("ERRORS:").expect("errors block");
    let warnings_at = text.find("WARNINGS:").expect("warnings block");
    let verdict_at = text.find("Configuration has errors!").expect("verdict");
    assert!(errors_at < warnings_at && warnings_at < verdict_at, "{text}");
    assert_eq!(text.matches("  error: ").count(), 2, "{text}");
    assert_eq!(text.matches("  warning: ").count(), 2, "{text}");
}

// ============================================================================
// Load failures
// ============================================================================

#[test]
fn missing_file_reports_single_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    let path = path.to_str().unwrap();

    let output = ValidatorProcess::spawn_command(&[path]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains(&format!("  error: Configuration file not found: {path}\n")));
    assert_eq!(text.matches("  error: ").count(), 1);
    assert!(text.ends_with("Configuration has errors!\n"));
}

#[test]
fn yaml_syntax_error_reported() {
    let output = ValidatorProcess::validate_fixture("bad_yaml.yml", &[]);
    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("  error: YAML syntax error: "), "{text}");
    assert_eq!(text.matches("  error: ").count(), 1);
}

#[test]
fn binary_content_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.yml");
    std::fs::write(&path, b"\x00\x01\x02\x03\xff\xfe\xfd\xfc").unwrap();

    let output = ValidatorProcess::spawn_command(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("YAML syntax error"));
}

#[test]
fn non_mapping_root_rejected() {
    let output = ValidatorProcess::validate_fixture("not_a_mapping.yml", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("  error: Configuration document must be a mapping\n"));
}

// ============================================================================
// JSON report
// ============================================================================

#[test]
fn json_output() {
    let output = ValidatorProcess::validate_fixture("mixed.yml", &["--format", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let text = stdout(&output);
    let parsed: serde_json::Value =
        serde_json::from_str(&text).expect("output should be valid JSON");
    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["verdict"], "has_errors");
    assert_eq!(parsed["errors"][0]["path"], "vpn_detection.api_provider");
    assert_eq!(parsed["errors"][1]["path"], "logging.log_level");
    assert_eq!(parsed["warnings"].as_array().map(Vec::len), Some(2));
}

#[test]
fn json_output_strict() {
    let output =
        ValidatorProcess::validate_fixture("warnings_only.yml", &["--strict", "--format", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["strict"], true);
    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["verdict"], "valid_with_warnings");
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn missing_argument_is_usage_error() {
    let output = ValidatorProcess::spawn_command(&[]);
    assert_eq!(output.status.code(), Some(2));
}
