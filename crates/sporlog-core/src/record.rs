//! The canonical log record and structured error shapes.
//!
//! A [`LogRecord`] is the unit handed to the telemetry emitter. Its
//! serialized form is the cross-implementation contract: nine fields under
//! fixed camelCase names (see [`crate::schema`]), optional fields absent
//! rather than null when unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::correlation::CorrelationId;
use crate::error::{Error, Result};
use crate::severity::Severity;

/// Canonical unit emitted to the telemetry sink.
///
/// `severity`, `origin`, `message`, and `peer` are always non-empty after
/// construction; [`LogRecord::new`] rejects empty values instead of coercing
/// them. `output` and `error` are mutually exclusive in well-formed calls —
/// both present at once is a caller error that is tolerated, not rejected,
/// so that logging never aborts business logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Record severity.
    pub severity: Severity,
    /// Logical function or operation that produced the record.
    pub origin: String,
    /// Human-readable description.
    pub message: String,
    /// Resolved peer identifier; `"INTERNAL"` when no external system is
    /// involved.
    pub peer: String,
    /// Structured payload describing an attempted operation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub input: Option<Value>,
    /// Structured payload, present only on successful-completion records.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output: Option<Value>,
    /// Structured error description, present only on failure records.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<StructuredError>,
    /// Groups this record with every other record sharing the same value.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub correlation_id: Option<CorrelationId>,
    /// Construction time, UTC.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Construct a record with a fresh timestamp.
    ///
    /// Fails with [`Error::EmptyField`] when `origin`, `message`, or `peer`
    /// is empty — callers must supply them.
    pub fn new(
        severity: Severity,
        origin: impl Into<String>,
        message: impl Into<String>,
        peer: impl Into<String>,
    ) -> Result<Self> {
        let origin = origin.into();
        let message = message.into();
        let peer = peer.into();

        if origin.is_empty() {
            return Err(Error::EmptyField("origin"));
        }
        if message.is_empty() {
            return Err(Error::EmptyField("message"));
        }
        if peer.is_empty() {
            return Err(Error::EmptyField("peer"));
        }

        Ok(Self {
            severity,
            origin,
            message,
            peer,
            input: None,
            output: None,
            error: None,
            correlation_id: None,
            timestamp: Utc::now(),
        })
    }

    /// Attach the input payload of an attempted operation.
    pub fn with_input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }

    /// Attach the output payload of a successful completion.
    pub fn with_output(mut self, output: Value) -> Self {
        self.output = Some(output);
        self
    }

    /// Attach a structured error description.
    pub fn with_error(mut self, error: StructuredError) -> Self {
        self.error = Some(error);
        self
    }

    /// Attach a correlation id.
    pub fn with_correlation_id(mut self, id: CorrelationId) -> Self {
        self.correlation_id = Some(id);
        self
    }
}

/// Caller-supplied error information normalized to a fixed shape.
///
/// Normalization is total: every constructor succeeds, and unrecognized
/// error representations degrade to `{kind: "unknown", message: <best-effort
/// string form>}` rather than failing the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredError {
    /// Error classification label (e.g. `"NotFound"`, `"Timeout"`).
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional nested detail (cause chains, provider payloads).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<Value>,
}

impl StructuredError {
    /// Fallback kind used when the caller's error carries no classification.
    pub const UNKNOWN_KIND: &'static str = "unknown";

    /// Build from an explicit kind and message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// Attach nested detail.
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Normalize any [`std::error::Error`] value. The source chain, when
    /// present, is captured into `detail` as `{"causes": [...]}`.
    pub fn from_error(kind: impl Into<String>, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        let detail = if causes.is_empty() {
            None
        } else {
            Some(serde_json::json!({ "causes": causes }))
        };

        Self {
            kind: kind.into(),
            message: err.to_string(),
            detail,
        }
    }

    /// Universal fallback for error representations with no classification:
    /// best-effort string form under the `"unknown"` kind.
    pub fn unknown(value: impl std::fmt::Display) -> Self {
        Self {
            kind: Self::UNKNOWN_KIND.to_string(),
            message: value.to_string(),
            detail: None,
        }
    }
}
