//! Diagnostic tracing on stderr.
//!
//! The success summary and reports go to stdout through `output`; this is
//! only for diagnostics and is controlled by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `schemafix=debug` when
/// `verbose` is set. Calling it again after a subscriber is installed is a
/// no-op.
pub fn init(verbose: bool) {
    let default = if verbose { "schemafix=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // The library entry point may run several times in one process
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
