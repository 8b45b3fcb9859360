use crate::utils::constants::{DEFAULT_LOG_FILTER, LABEL_MISMATCH_DIRECTIVE, VERBOSE_LOG_FILTER};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Events go to stderr so they never mix with the merged report on stdout.
/// `RUST_LOG` takes precedence over the verbosity flag, but label mismatch
/// warnings are always shown.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = build_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    );

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn build_filter(filter: EnvFilter) -> EnvFilter {
    match LABEL_MISMATCH_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
