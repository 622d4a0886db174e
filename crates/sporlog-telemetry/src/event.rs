//! Builder for a single logging call.

use serde_json::Value;

use sporlog_core::correlation::CorrelationId;
use sporlog_core::peers::PeerServiceRegistry;
use sporlog_core::record::{LogRecord, StructuredError};
use sporlog_core::severity::Severity;
use sporlog_core::{defaults, Result};

/// Arguments of one emit call, normalized into a [`LogRecord`] by
/// [`crate::Telemetry::emit`].
///
/// `severity`, `origin`, and `message` are required up front; everything
/// else is optional. When no peer is supplied the record is tagged with the
/// reserved `INTERNAL` identifier.
#[derive(Debug, Clone)]
pub struct Event {
    pub(crate) severity: Severity,
    pub(crate) origin: String,
    pub(crate) message: String,
    pub(crate) peer: Option<String>,
    pub(crate) input: Option<Value>,
    pub(crate) output: Option<Value>,
    pub(crate) error: Option<StructuredError>,
    pub(crate) correlation_id: Option<CorrelationId>,
}

impl Event {
    /// Start building an event.
    pub fn new(
        severity: Severity,
        origin: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            origin: origin.into(),
            message: message.into(),
            peer: None,
            input: None,
            output: None,
            error: None,
            correlation_id: None,
        }
    }

    /// Logical peer key or already-resolved identifier. Resolved through the
    /// registry snapshot frozen at initialize time.
    pub fn peer(mut self, peer: impl Into<String>) -> Self {
        self.peer = Some(peer.into());
        self
    }

    /// Structured payload of the attempted operation.
    pub fn input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }

    /// Structured payload of a successful completion.
    pub fn output(mut self, output: Value) -> Self {
        self.output = Some(output);
        self
    }

    /// Structured error of a failure record.
    pub fn error(mut self, error: StructuredError) -> Self {
        self.error = Some(error);
        self
    }

    /// Correlation id grouping this record with related ones.
    pub fn correlation_id(mut self, id: CorrelationId) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// Resolve the peer and build the canonical record with a fresh
    /// timestamp.
    pub(crate) fn into_record(self, registry: &PeerServiceRegistry) -> Result<LogRecord> {
        if self.output.is_some() && self.error.is_some() {
            // Tolerated per the record contract, but worth surfacing during
            // development.
            tracing::debug!(
                origin = %self.origin,
                "event carries both output and error; well-formed calls supply at most one"
            );
        }

        let peer = registry
            .resolve(self.peer.as_deref().unwrap_or(defaults::INTERNAL_PEER))
            .to_string();

        let mut record = LogRecord::new(self.severity, self.origin, self.message, peer)?;
        record.input = self.input;
        record.output = self.output;
        record.error = self.error;
        record.correlation_id = self.correlation_id;
        Ok(record)
    }
}
