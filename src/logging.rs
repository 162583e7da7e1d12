//! Logging setup for the `respcurve` binary.

use tracing_subscriber::EnvFilter;

/// Install a compact, timestamp-free stderr logger for this crate.
///
/// `RUST_LOG` takes precedence over `verbose`. Later calls are no-ops.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
