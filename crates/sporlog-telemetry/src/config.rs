//! Telemetry configuration supplied once at initialize time.

use std::collections::HashMap;
use std::time::Duration;

use sporlog_core::defaults;
use sporlog_core::error::{Error, Result};
use sporlog_core::severity::Severity;

/// Configuration for [`crate::Telemetry::initialize`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name reported to the telemetry backend (non-empty).
    pub service_name: String,
    /// Service version, free-form (e.g. a semantic version).
    pub service_version: String,
    /// Logical peer keys to stable system identifiers. May be empty; the
    /// reserved `INTERNAL` entry is added regardless.
    pub peer_mappings: HashMap<String, String>,
    /// Records below this severity are discarded before hand-off.
    pub min_severity: Severity,
    /// Default deadline for `flush` when the caller supplies none.
    pub flush_timeout: Duration,
    /// Deadline for opening the emitter during initialization.
    pub setup_timeout: Duration,
}

impl TelemetryConfig {
    /// Create a configuration with default thresholds and timeouts.
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            peer_mappings: HashMap::new(),
            min_severity: Severity::Debug,
            flush_timeout: Duration::from_millis(defaults::FLUSH_TIMEOUT_MS),
            setup_timeout: Duration::from_millis(defaults::SETUP_TIMEOUT_MS),
        }
    }

    /// Create a configuration, honoring environment overrides.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `SPORLOG_MIN_SEVERITY` | `DEBUG` | Minimum severity handed to the emitter |
    /// | `SPORLOG_FLUSH_TIMEOUT_MS` | `5000` | Default flush deadline |
    pub fn from_env(
        service_name: impl Into<String>,
        service_version: impl Into<String>,
    ) -> Self {
        let mut config = Self::new(service_name, service_version);

        if let Ok(value) = std::env::var(defaults::ENV_MIN_SEVERITY) {
            if let Ok(level) = value.parse::<Severity>() {
                config.min_severity = level;
            }
        }

        if let Some(ms) = std::env::var(defaults::ENV_FLUSH_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.flush_timeout = Duration::from_millis(ms);
        }

        config
    }

    /// Replace the full peer mapping table.
    pub fn with_peer_mappings(mut self, mappings: HashMap<String, String>) -> Self {
        self.peer_mappings = mappings;
        self
    }

    /// Add a single peer mapping.
    pub fn with_peer(mut self, key: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.peer_mappings.insert(key.into(), identifier.into());
        self
    }

    /// Set the minimum severity handed to the emitter.
    pub fn with_min_severity(mut self, level: Severity) -> Self {
        self.min_severity = level;
        self
    }

    /// Set the default flush deadline.
    pub fn with_flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    /// Set the emitter setup deadline.
    pub fn with_setup_timeout(mut self, timeout: Duration) -> Self {
        self.setup_timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.service_name.is_empty() {
            return Err(Error::Config("service name must not be empty".to_string()));
        }
        Ok(())
    }
}
