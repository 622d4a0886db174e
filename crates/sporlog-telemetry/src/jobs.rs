//! Job tracking shapes for long-running batch operations.
//!
//! Two thin wrappers over [`Telemetry::emit`], no storage of their own. A
//! job is tracked with status records (lifecycle) and progress records
//! (per-item). Correlation topology is the caller's choice: typically one id
//! for the whole job shared by status and progress records, and optionally
//! one independent id per item for that item's own start/outcome records.

use serde_json::Value;

use sporlog_core::correlation::CorrelationId;
use sporlog_core::severity::Severity;
use sporlog_core::Result;

use crate::event::Event;
use crate::telemetry::Telemetry;

impl Telemetry {
    /// Emit a job lifecycle record with the message `"{job_name}: {status}"`.
    ///
    /// `status` is a free-form label — commonly `"Started"`, `"Completed"`,
    /// or `"Failed"` — and unknown labels are never rejected. `payload`
    /// becomes the record's `input`.
    #[allow(clippy::too_many_arguments)]
    pub fn emit_job_status(
        &self,
        severity: Severity,
        origin: impl Into<String>,
        job_name: &str,
        status: &str,
        peer: Option<&str>,
        payload: Option<Value>,
        correlation_id: Option<CorrelationId>,
    ) -> Result<()> {
        let mut event = Event::new(severity, origin, format!("{job_name}: {status}"));
        if let Some(peer) = peer {
            event = event.peer(peer);
        }
        if let Some(payload) = payload {
            event = event.input(payload);
        }
        if let Some(id) = correlation_id {
            event = event.correlation_id(id);
        }
        self.emit(event)
    }

    /// Emit a per-item progress record with the message
    /// `"Processing {item_label} ({item_index}/{total_items})"`.
    ///
    /// `item_index` is 1-based and `total_items` is the batch size known up
    /// front. No bounds validation is performed — an index past the total is
    /// logged verbatim, since the logging layer must never abort business
    /// logic.
    #[allow(clippy::too_many_arguments)]
    pub fn emit_job_progress(
        &self,
        severity: Severity,
        origin: impl Into<String>,
        item_label: &str,
        item_index: usize,
        total_items: usize,
        peer: Option<&str>,
        payload: Option<Value>,
        correlation_id: Option<CorrelationId>,
    ) -> Result<()> {
        let mut event = Event::new(
            severity,
            origin,
            format!("Processing {item_label} ({item_index}/{total_items})"),
        );
        if let Some(peer) = peer {
            event = event.peer(peer);
        }
        if let Some(payload) = payload {
            event = event.input(payload);
        }
        if let Some(id) = correlation_id {
            event = event.correlation_id(id);
        }
        self.emit(event)
    }
}
