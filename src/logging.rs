//! Tracing setup for the command-line tools.
//!
//! Events go to stderr so stdout carries only oracle records or emitted
//! harness code. Verbosity follows `RUST_LOG`, default `aes256_kat=info`.

use tracing::debug;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Call once per process.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aes256_kat=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    debug!("logging initialized");
    Ok(())
}
