//! The emitter seam between record construction and telemetry transport.

use async_trait::async_trait;

use crate::error::Result;
use crate::record::LogRecord;

/// Identity of the emitting service, fixed at initialize time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    /// Service name (non-empty).
    pub name: String,
    /// Service version, free-form (commonly a semantic version).
    pub version: String,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Telemetry sink that receives finished log records.
///
/// The emitter owns batching, encoding, network retry, and the backend
/// protocol. This crate only hands records over and asks for confirmation at
/// flush time.
///
/// # Implementation Requirements
///
/// - `write` is a non-blocking hand-off: buffer the record, never perform
///   network I/O inline, never fail the caller.
/// - `flush` must confirm that every previously written record has been
///   exported before returning. Callers bound it with a timeout.
/// - Implementations must be `Send + Sync`; `write` is called from
///   concurrent callers without external locking.
#[async_trait]
pub trait Emitter: Send + Sync {
    /// Short name identifying the emitter (e.g. `"console"`, `"file"`).
    fn name(&self) -> &'static str;

    /// Bind the emitter to the service identity and establish any transport
    /// resources. Called once during initialization, under a bounded setup
    /// timeout. The default implementation needs no setup.
    async fn open(&self, _identity: &ServiceIdentity) -> Result<()> {
        Ok(())
    }

    /// Accept one record into the emitter's buffer. Must not block on
    /// network I/O.
    fn write(&self, record: LogRecord);

    /// Block until all previously written records are exported, or fail with
    /// a transport error.
    async fn flush(&self) -> Result<()>;
}
