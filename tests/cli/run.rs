//! Tests for running a command through sesame.
//!
//! Configurations here name no prefixes or secrets, so no AWS client is
//! created and the command runs with the host environment.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_passes_host_environment() {
    let t = Test::with_config(EMPTY_CONFIG);

    let output = t
        .cmd()
        .env("SESAME_TEST_HOST_VAR", "from-host")
        .args(["--", "sh", "-c", "echo $SESAME_TEST_HOST_VAR"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "from-host");
}

#[cfg(unix)]
#[test]
fn test_run_passes_arguments_verbatim() {
    let t = Test::with_config(EMPTY_CONFIG);

    let output = t.run(&["sh", "-c", "printf '%s|' \"$@\"", "sh", "-v", "--flag", "a b"]);

    assert_success(&output);
    assert_stdout_contains(&output, "-v|--flag|a b|");
}

#[cfg(unix)]
#[test]
fn test_exit_code_is_the_targets() {
    let t = Test::with_config(EMPTY_CONFIG);

    let output = t.run(&["sh", "-c", "exit 42"]);
    assert_exit(&output, 42);
}

#[cfg(unix)]
#[test]
fn test_process_is_replaced_not_spawned() {
    let t = Test::with_config(EMPTY_CONFIG);

    let child = std::process::Command::new(env!("CARGO_BIN_EXE_sesame"))
        .current_dir(t.dir.path())
        .env_remove("SESAME_CONFIG")
        .args(["--", "sh", "-c", "echo $$"])
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    let pid = child.id();
    let output = child.wait_with_output().unwrap();

    assert_success(&output);
    assert_eq!(stdout(&output).trim(), pid.to_string());
}

#[cfg(unix)]
#[test]
fn test_stdout_is_left_to_the_target() {
    let t = Test::with_config(EMPTY_CONFIG);

    let output = t
        .cmd()
        .args(["--verbose", "--", "echo", "only-this"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(stdout(&output), "only-this\n");
}

#[cfg(unix)]
#[test]
fn test_yaml_config_is_accepted() {
    let t = Test::new();
    t.write("sesame.yaml", EMPTY_YAML_CONFIG);

    let output = t.run_with("sesame.yaml", &["echo", "yaml-ok"]);

    assert_success(&output);
    assert_stdout_contains(&output, "yaml-ok");
}

#[cfg(unix)]
#[test]
fn test_config_path_from_environment() {
    let t = Test::new();
    t.write("custom.toml", EMPTY_CONFIG);

    let output = t
        .cmd()
        .env("SESAME_CONFIG", "custom.toml")
        .args(["--", "echo", "env-config"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "env-config");
}

#[cfg(unix)]
#[test]
fn test_command_path_with_separator() {
    let t = Test::with_config(EMPTY_CONFIG);
    let script = t.write("hello.sh", "#!/bin/sh\necho from-script\n");
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    let output = t.run(&["./hello.sh"]);

    assert_success(&output);
    assert_stdout_contains(&output, "from-script");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_host_variable_reaches_target_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let t = Test::with_config(EMPTY_CONFIG);

    let output = t
        .cmd()
        .env("SESAME_TEST_BYTES", OsStr::from_bytes(b"a\xffb"))
        .args(["--", "sh", "-c", "printf %s \"$SESAME_TEST_BYTES\" | od -An -tx1"])
        .output()
        .unwrap();

    assert_success(&output);
    let bytes: Vec<String> = stdout(&output).split_whitespace().map(str::to_string).collect();
    assert_eq!(bytes, ["61", "ff", "62"]);
}
