//! Run command.
//!
//! Loads the configuration, resolves parameters, builds the environment and
//! replaces this process with the target command.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::core::config::Config;
use crate::core::env;
use crate::core::exec;
use crate::core::resolver::{Resolution, Resolver};
use crate::core::store::Ssm;
use crate::error::{ExecError, Result};

/// Resolve parameters and exec the command named on the command line.
///
/// Only returns on failure.
pub fn execute(cli: Cli) -> Result<()> {
    let (command, args) = cli.command.split_first().ok_or(ExecError::NoCommand)?;

    let config = Config::load(&cli.config)?;
    let resolution = resolve(&config, cli.timeout.map(Duration::from_secs))?;

    if !resolution.is_complete() {
        warn!(
            failed_batches = resolution.failed_batches.len(),
            "continuing without some secrets"
        );
    }

    let environment = env::build(env::host_environment(), &resolution.parameters);
    info!(
        command = %command,
        resolved = resolution.parameters.len(),
        "starting command"
    );

    match exec::exec_replace(command, args, &environment) {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}

/// Resolve against SSM, skipping client setup when nothing is configured.
fn resolve(config: &Config, timeout: Option<Duration>) -> Result<Resolution> {
    if config.is_empty() {
        debug!("no prefixes or secrets configured");
        return Ok(Resolution::default());
    }

    let store = Ssm::connect(config.decrypt, timeout)?;
    Resolver::new(store, config).resolve()
}
