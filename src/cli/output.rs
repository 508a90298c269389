//! Usage text and the terminal hints printed next to fatal diagnostics.
//!
//! Hints go to stderr; stdout belongs to the target command and only carries
//! usage on a bare invocation. Respects NO_COLOR.

use std::io::{self, Write};

use clap::CommandFactory;
use console::style;

use crate::cli::Cli;
use crate::error::{ConfigError, Error, ExecError};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a hint message (cyan).
///
/// Example: `→ create sesame.toml or pass --config FILE`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Write usage for a bare invocation.
pub fn usage(out: &mut impl Write) -> io::Result<()> {
    Cli::command().write_help(out)
}

/// Suggested next step for an error, if one exists.
pub fn suggestion(error: &Error) -> Option<&'static str> {
    match error {
        Error::Config(ConfigError::NotFound(_)) => Some("create sesame.toml or pass --config FILE"),
        Error::Config(ConfigError::InvalidValue { .. }) => {
            Some("check that every $VAR used in prefix and secrets is set")
        }
        Error::Exec(ExecError::NoCommand) => Some("usage: sesame [OPTIONS] -- <CMD> [ARGS]..."),
        Error::Exec(ExecError::NotFound { .. }) => {
            Some("pass an absolute path or make sure the command is on PATH")
        }
        _ => None,
    }
}
