//! Command-line interface.

pub mod logging;
pub mod output;
pub mod run;

use clap::Parser;
use std::path::PathBuf;

use crate::core::constants;

pub use run::execute;

/// Sesame - resolve AWS SSM parameters into the environment, then exec a command.
#[derive(Parser, Debug)]
#[command(
    name = "sesame",
    about = "Resolve AWS SSM parameters into the environment, then exec a command",
    version,
    after_help = "AWS environment variables:\n  AWS_PROFILE, AWS_REGION, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY\n\nExamples:\n  sesame -c /config.toml -- bash -c env\n  sesame -v -- python main.py"
)]
pub struct Cli {
    /// Enable debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Human-readable diagnostics instead of JSON
    #[arg(short = 'H', long)]
    pub human: bool,

    /// Configuration file (.toml, or .yaml/.yml)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = constants::CONFIG_ENV,
        default_value = constants::CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Overall deadline for resolving parameters, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Command and arguments to exec
    #[arg(trailing_var_arg = true, value_name = "CMD")]
    pub command: Vec<String>,
}
