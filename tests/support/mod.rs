//! Test support utilities for sesame integration tests.
//!
//! Provides an isolated working directory and helpers to drive the binary.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::{
    assert_aborted, assert_exit, assert_stderr_contains, assert_stdout_contains, assert_success,
    stderr, stdout,
};
#[allow(unused_imports)]
pub use fixtures::{
    EMPTY_CONFIG, EMPTY_YAML_CONFIG, MALFORMED_CONFIG, UNKNOWN_KEY_CONFIG, UNSET_PREFIX_CONFIG,
};

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()`, so no process-global state is
/// mutated and tests can run in parallel.
pub struct Test {
    /// Working directory for the sesame invocation
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `sesame.toml` written.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write("sesame.toml", contents);
        t
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}
