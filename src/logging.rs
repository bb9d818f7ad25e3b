//! Diagnostic logging setup using tracing.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the diagnostic subscriber.
///
/// `verbose` forces the `debug` filter; otherwise `RUST_LOG` is honored with
/// a `warn` fallback. Diagnostics go to stderr so relayed child output on
/// stdout stays clean. Calling this more than once is a no-op.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
