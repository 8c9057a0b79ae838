//! Diagnostic logging to stderr.
//!
//! Filter precedence: `--verbose`/`--quiet`, then `RUST_LOG`, then the
//! configured `log.filter`.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Pick the filter directive for this run.
pub fn filter_directive(verbose: bool, quiet: bool, env: Option<&str>, configured: &str) -> String {
    if verbose {
        return "debug".to_string();
    }
    if quiet {
        return "error".to_string();
    }
    match env {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool, quiet: bool, configured: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(verbose, quiet, env.as_deref(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
