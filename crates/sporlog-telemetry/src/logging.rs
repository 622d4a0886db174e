//! Diagnostics bootstrap for applications embedding sporlog.
//!
//! The library reports its own operational events (initialization, discarded
//! records, flush outcomes) through `tracing`. Embedding applications that
//! have no subscriber of their own can install one with
//! [`init_diagnostics`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sporlog_core::error::{Error, Result};

/// Install a global `tracing` subscriber with the given filter directive
/// (e.g. `"info"`, `"sporlog_telemetry=debug"`).
///
/// Call once at application startup. Fails with [`Error::Config`] for an
/// invalid directive and [`Error::AlreadyInitialized`] when a subscriber is
/// already installed.
pub fn init_diagnostics(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| Error::Config(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|_| Error::AlreadyInitialized)?;

    Ok(())
}
