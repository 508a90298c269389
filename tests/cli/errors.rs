//! Tests for fatal paths: usage, configuration and exec failures.

use crate::support::*;

#[test]
fn test_no_arguments_prints_usage() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
    assert_stdout_contains(&output, "--config");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_missing_config_fails_before_command() {
    let t = Test::new();

    let output = t.run(&["sh", "-c", "echo SHOULD_NOT_RUN"]);

    assert_aborted(&output);
    assert_stderr_contains(&output, "configuration file not found");
    assert_stderr_contains(&output, "--config FILE");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::with_config(MALFORMED_CONFIG);

    let output = t.run(&["sh", "-c", "echo SHOULD_NOT_RUN"]);

    assert_aborted(&output);
    assert_stderr_contains(&output, "failed to parse toml configuration");
}

#[test]
fn test_unknown_config_key_fails() {
    let t = Test::with_config(UNKNOWN_KEY_CONFIG);

    let output = t.run(&["true"]);

    assert_aborted(&output);
    assert_stderr_contains(&output, "prefixes");
}

#[test]
fn test_prefix_empty_after_expansion_fails() {
    let t = Test::with_config(UNSET_PREFIX_CONFIG);

    let output = t
        .cmd()
        .env_remove("SESAME_TEST_UNSET_VARIABLE")
        .args(["--", "sh", "-c", "echo SHOULD_NOT_RUN"])
        .output()
        .unwrap();

    assert_aborted(&output);
    assert_stderr_contains(&output, "empty after expansion");
}

#[test]
fn test_missing_command_fails() {
    let t = Test::with_config(EMPTY_CONFIG);

    let output = t.cmd().arg("--human").output().unwrap();

    assert_aborted(&output);
    assert_stderr_contains(&output, "no command specified");
    assert_stderr_contains(&output, "usage:");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::with_config(EMPTY_CONFIG);

    let output = t.run(&["sesame-definitely-not-a-command"]);

    assert_aborted(&output);
    assert_stderr_contains(&output, "command not found");
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let t = Test::new();

    let output = t.cmd().arg("--no-such-flag").output().unwrap();

    assert_exit(&output, 2);
    assert_stderr_contains(&output, "--no-such-flag");
}
