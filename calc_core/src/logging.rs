//! Logging infrastructure for calc.
//!
//! Provides centralized tracing setup for the binary. Audit lines appended
//! to an [`crate::OperationLog`] are echoed on the `calc::audit` target.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
/// Output goes to stderr so it stays out of the interactive menu on stdout.
pub fn init_with_level(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},calc::audit=info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
