//! Diagnostic output setup.
//!
//! Diagnostics go to stderr so that stdout stays with the target command.
//! JSON lines by default; `--human` switches to compact text.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants;

/// Build the level filter.
///
/// `SESAME_LOG` wins when set and valid; otherwise `--verbose` selects debug.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sesame=debug")
        } else {
            EnvFilter::new("sesame=warn")
        }
    })
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(verbose: bool, human: bool) {
    let human_layer = human.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });
    let json_layer = (!human).then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(false)
    });

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(human_layer)
        .with(json_layer)
        .init();
}
