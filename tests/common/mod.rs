//! Shared integration-test harness for running the `shadowdefender-config`
//! binary against fixture files.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the built binary.
pub struct ValidatorProcess;

impl ValidatorProcess {
    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_shadowdefender-config"))
            .args(args)
            .arg("--quiet")
            .output()
            .expect("failed to run shadowdefender-config")
    }

    /// Runs the binary against a fixture file, with extra leading `args`.
    pub fn validate_fixture(name: &str, args: &[&str]) -> Output {
        let path = Self::fixture_path(name);
        let path = path.to_str().expect("non-UTF-8 fixture path");
        let mut all: Vec<&str> = args.to_vec();
        all.push(path);
        Self::spawn_command(&all)
    }

    /// Absolute path of a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Stdout of a finished process as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
