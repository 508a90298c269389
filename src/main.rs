//! Sesame - resolve AWS SSM parameters into the environment, then exec.

use clap::Parser;
use tracing::error;

use sesame::cli::{execute, logging, output, Cli};

fn main() {
    // Bare invocation prints usage and succeeds.
    if std::env::args_os().len() <= 1 {
        if let Err(e) = output::usage(&mut std::io::stdout()) {
            logging::init(false, false);
            error!(error = %e, "failed to print usage");
            std::process::exit(1);
        }
        std::process::exit(0);
    }

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.human);

    if let Err(e) = execute(cli) {
        error!(error = %e, "sesame failed");
        if let Some(hint) = output::suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
