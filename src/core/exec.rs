//! Process handoff.
//!
//! Replaces the current process image with the target command. On success
//! nothing after the call runs; signals, I/O and the exit status belong to
//! the target.

use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::core::env::{lookup, split_entry};
use crate::error::ExecError;

/// Locate `command` using the `PATH` found in `env`.
///
/// Commands containing a `/` are resolved against the working directory.
///
/// # Errors
///
/// Returns `ExecError::NotFound` if no executable matches.
pub fn locate(command: &str, env: &[OsString]) -> Result<PathBuf, ExecError> {
    let not_found = |reason: String| ExecError::NotFound {
        command: command.to_string(),
        reason,
    };

    let cwd = std::env::current_dir().map_err(|e| not_found(e.to_string()))?;
    which::which_in(command, lookup(env, "PATH"), cwd).map_err(|e| not_found(e.to_string()))
}

/// Replace the current process with `command`, passing `args` and exactly `env`.
///
/// The inherited environment is cleared; entries are applied in order so the
/// last occurrence of a name wins. The target sees `command` as typed in
/// `argv[0]`.
///
/// # Errors
///
/// Returns `ExecError::NotFound` if the command cannot be located, or
/// `ExecError::Failed` if `exec` itself fails. Never returns otherwise.
#[cfg(unix)]
pub fn exec_replace(
    command: &str,
    args: &[String],
    env: &[OsString],
) -> Result<Infallible, ExecError> {
    use std::os::unix::process::CommandExt;

    let program = locate(command, env)?;
    debug!(
        command,
        program = %program.display(),
        args = args.len(),
        vars = env.len(),
        "replacing process"
    );

    let mut cmd = std::process::Command::new(&program);
    cmd.arg0(command).args(args).env_clear();
    for (name, value) in env.iter().filter_map(|e| split_entry(e)) {
        cmd.env(name, value);
    }

    // exec only returns on failure.
    let source = cmd.exec();
    Err(ExecError::Failed {
        command: command.to_string(),
        source,
    })
}

#[cfg(not(unix))]
pub fn exec_replace(
    command: &str,
    _args: &[String],
    _env: &[OsString],
) -> Result<Infallible, ExecError> {
    Err(ExecError::Failed {
        command: command.to_string(),
        source: std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "process replacement requires a unix platform",
        ),
    })
}
