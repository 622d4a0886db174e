//! Lifecycle controller: initialize-before-log, flush-before-exit.
//!
//! [`Telemetry`] is an explicit handle rather than ambient global state, so
//! tests and embedding applications can construct independent instances. A
//! process normally creates one handle, initializes it once at startup, and
//! clones it into every component that logs.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use sporlog_core::error::{Error, Result};
use sporlog_core::peers::PeerServiceRegistry;
use sporlog_core::traits::{Emitter, ServiceIdentity};
use sporlog_core::Severity;

use crate::config::TelemetryConfig;
use crate::event::Event;

/// State frozen by a successful `initialize`. Written exactly once, read
/// thereafter without locking.
struct Initialized {
    identity: ServiceIdentity,
    registry: PeerServiceRegistry,
    emitter: Arc<dyn Emitter>,
    min_severity: Severity,
    flush_timeout: Duration,
}

/// Handle to the telemetry lifecycle state.
///
/// Cheap to clone; all clones share the same underlying state. Emit-family
/// calls fail with [`Error::NotInitialized`] until [`Telemetry::initialize`]
/// succeeds — they never silently no-op, since silence would hide a class of
/// integration bugs.
///
/// ## Process exit contract
///
/// Call [`Telemetry::flush`] before process termination. Records handed to
/// the emitter but not yet exported are lost otherwise; that loss is a
/// documented caller obligation, not a defect of this component.
#[derive(Clone, Default)]
pub struct Telemetry {
    inner: Arc<OnceCell<Initialized>>,
}

impl Telemetry {
    /// Create an uninitialized handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the lifecycle state: validate the configuration, freeze
    /// the peer registry, and open the emitter bound to the service
    /// identity.
    ///
    /// A second call fails with [`Error::AlreadyInitialized`] and leaves the
    /// first call's configuration intact; re-initialization would attribute
    /// in-flight records to stale configuration. The emitter open is bounded
    /// by the configured setup timeout.
    pub async fn initialize(
        &self,
        config: TelemetryConfig,
        emitter: Arc<dyn Emitter>,
    ) -> Result<()> {
        if self.inner.get().is_some() {
            return Err(Error::AlreadyInitialized);
        }
        config.validate()?;

        let identity = ServiceIdentity::new(&config.service_name, &config.service_version);
        tokio::time::timeout(config.setup_timeout, emitter.open(&identity))
            .await
            .map_err(|_| {
                Error::Config(format!(
                    "emitter setup exceeded {:?}",
                    config.setup_timeout
                ))
            })??;

        let state = Initialized {
            identity,
            registry: PeerServiceRegistry::new(config.peer_mappings),
            emitter,
            min_severity: config.min_severity,
            flush_timeout: config.flush_timeout,
        };

        // Lost the race against a concurrent initialize.
        self.inner
            .set(state)
            .map_err(|_| Error::AlreadyInitialized)?;

        if let Some(state) = self.inner.get() {
            info!(
                service = %state.identity.name,
                version = %state.identity.version,
                emitter = state.emitter.name(),
                peers = state.registry.len(),
                "telemetry initialized"
            );
        }
        Ok(())
    }

    /// Whether `initialize` has succeeded on this handle.
    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Service name frozen at initialize time.
    pub fn service_name(&self) -> Option<&str> {
        self.inner.get().map(|s| s.identity.name.as_str())
    }

    /// Service version frozen at initialize time.
    pub fn service_version(&self) -> Option<&str> {
        self.inner.get().map(|s| s.identity.version.as_str())
    }

    fn state(&self) -> Result<&Initialized> {
        self.inner.get().ok_or(Error::NotInitialized)
    }

    /// Normalize one logging call and hand the finished record to the
    /// emitter.
    ///
    /// The peer is resolved through the registry snapshot frozen at
    /// initialize time. Records below the configured minimum severity are
    /// discarded here and the call still succeeds. The hand-off is
    /// non-blocking; only [`Telemetry::flush`] waits on the transport.
    pub fn emit(&self, event: Event) -> Result<()> {
        let state = self.state()?;

        // Validation still applies to filtered records; an empty origin is a
        // caller bug regardless of the configured threshold.
        let record = event.into_record(&state.registry)?;

        if record.severity < state.min_severity {
            debug!(
                origin = %record.origin,
                severity = %record.severity,
                "record below minimum severity, discarded"
            );
            return Ok(());
        }

        state.emitter.write(record);
        Ok(())
    }

    /// Block until the emitter confirms that all previously handed-off
    /// records are exported, or until the deadline elapses.
    ///
    /// Uses the configured default timeout when `timeout` is `None`; never
    /// an unbounded wait. Idempotent and repeatable; the handle stays
    /// initialized. Errors are advisory — report them, then proceed with
    /// shutdown, since logging infrastructure failure must not block
    /// application exit.
    pub async fn flush(&self, timeout: Option<Duration>) -> Result<()> {
        let state = self.state()?;
        let deadline = timeout.unwrap_or(state.flush_timeout);

        match tokio::time::timeout(deadline, state.emitter.flush()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                warn!(emitter = state.emitter.name(), error = %err, "flush failed");
                match err {
                    Error::FlushTransport(_) => Err(err),
                    other => Err(Error::FlushTransport(other.to_string())),
                }
            }
            Err(_) => {
                warn!(
                    emitter = state.emitter.name(),
                    ?deadline,
                    "flush deadline exceeded"
                );
                Err(Error::FlushTimeout(deadline))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::MemoryEmitter;
    use serde_json::json;

    fn config() -> TelemetryConfig {
        TelemetryConfig::new("svc", "1.0.0").with_peer("BRREG", "SYS1234567")
    }

    #[tokio::test]
    async fn test_emit_before_initialize_fails() {
        let telemetry = Telemetry::new();
        let err = telemetry
            .emit(Event::new(Severity::Info, "op", "msg"))
            .unwrap_err();
        assert!(matches!(err, Error::NotInitialized));
    }

    #[tokio::test]
    async fn test_emit_after_initialize_succeeds() {
        let telemetry = Telemetry::new();
        let emitter = Arc::new(MemoryEmitter::new());
        telemetry
            .initialize(config(), emitter.clone())
            .await
            .unwrap();

        telemetry
            .emit(Event::new(Severity::Info, "op", "msg"))
            .unwrap();
        assert_eq!(emitter.len(), 1);
    }

    #[tokio::test]
    async fn test_double_initialize_fails_and_keeps_first_config() {
        let telemetry = Telemetry::new();
        let first = Arc::new(MemoryEmitter::new());
        telemetry.initialize(config(), first.clone()).await.unwrap();

        let second = Arc::new(MemoryEmitter::new());
        let err = telemetry
            .initialize(TelemetryConfig::new("other", "9.9.9"), second.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyInitialized));

        // Still the first call's configuration.
        assert_eq!(telemetry.service_name(), Some("svc"));
        telemetry
            .emit(Event::new(Severity::Info, "op", "msg").peer("BRREG"))
            .unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 0);
        assert_eq!(first.records()[0].peer, "SYS1234567");
    }

    #[tokio::test]
    async fn test_initialize_rejects_empty_service_name() {
        let telemetry = Telemetry::new();
        let err = telemetry
            .initialize(
                TelemetryConfig::new("", "1.0.0"),
                Arc::new(MemoryEmitter::new()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!telemetry.is_initialized());
    }

    #[tokio::test]
    async fn test_min_severity_filtering() {
        let telemetry = Telemetry::new();
        let emitter = Arc::new(MemoryEmitter::new());
        telemetry
            .initialize(config().with_min_severity(Severity::Warn), emitter.clone())
            .await
            .unwrap();

        telemetry
            .emit(Event::new(Severity::Info, "op", "filtered"))
            .unwrap();
        telemetry
            .emit(Event::new(Severity::Error, "op", "kept"))
            .unwrap();

        let records = emitter.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
    }

    #[tokio::test]
    async fn test_flush_with_no_pending_records_is_ok() {
        let telemetry = Telemetry::new();
        let emitter = Arc::new(MemoryEmitter::new());
        telemetry
            .initialize(config(), emitter.clone())
            .await
            .unwrap();

        telemetry.flush(None).await.unwrap();
        telemetry.flush(None).await.unwrap();
        assert_eq!(emitter.flush_count(), 2);
        assert!(telemetry.is_initialized());
    }

    #[tokio::test]
    async fn test_flush_before_initialize_fails() {
        let telemetry = Telemetry::new();
        let err = telemetry.flush(None).await.unwrap_err();
        assert!(matches!(err, Error::NotInitialized));
    }

    #[tokio::test]
    async fn test_emit_preserves_call_order() {
        let telemetry = Telemetry::new();
        let emitter = Arc::new(MemoryEmitter::new());
        telemetry
            .initialize(config(), emitter.clone())
            .await
            .unwrap();

        for i in 0..5 {
            telemetry
                .emit(
                    Event::new(Severity::Info, "op", format!("record {i}"))
                        .input(json!({"seq": i})),
                )
                .unwrap();
        }

        let messages: Vec<String> = emitter.records().into_iter().map(|r| r.message).collect();
        assert_eq!(
            messages,
            vec!["record 0", "record 1", "record 2", "record 3", "record 4"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_emit_from_clones() {
        let telemetry = Telemetry::new();
        let emitter = Arc::new(MemoryEmitter::new());
        telemetry
            .initialize(config(), emitter.clone())
            .await
            .unwrap();

        let mut handles = Vec::new();
        for worker in 0..4 {
            let telemetry = telemetry.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    telemetry
                        .emit(Event::new(Severity::Info, "worker", format!("{worker}:{i}")))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(emitter.len(), 200);
    }
}
