//! # sporlog-telemetry
//!
//! Lifecycle controller, emit API, and job tracking shapes for sporlog's
//! structured, trace-correlated telemetry logging.
//!
//! This crate provides:
//! - The [`Telemetry`] handle: initialize-before-log, flush-before-exit
//! - The [`Event`] builder normalizing a logging call into the canonical record
//! - Job status and progress shapes for long-running batch operations
//! - Reference emitters (console, file, in-memory)
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sporlog_telemetry::{
//!     CorrelationId, Event, Severity, Telemetry, TelemetryConfig,
//!     emitters::ConsoleEmitter,
//! };
//!
//! let telemetry = Telemetry::new();
//! let config = TelemetryConfig::new("lookup-svc", "1.0.0")
//!     .with_peer("BRREG", "SYS1234567");
//! telemetry.initialize(config, Arc::new(ConsoleEmitter::default())).await?;
//!
//! let correlation = CorrelationId::generate();
//! telemetry.emit(
//!     Event::new(Severity::Info, "lookupCompany", "Looking up company 971277882")
//!         .peer("BRREG")
//!         .input(serde_json::json!({"organisasjonsnummer": "971277882"}))
//!         .correlation_id(correlation.clone()),
//! )?;
//!
//! // Flush before exit, or buffered records may be lost.
//! if let Err(err) = telemetry.flush(None).await {
//!     eprintln!("flush failed: {err}");
//! }
//! ```

pub mod config;
pub mod emitters;
pub mod event;
pub mod jobs;
pub mod logging;
pub mod telemetry;

// Re-export core types
pub use sporlog_core::*;

pub use config::TelemetryConfig;
pub use event::Event;
pub use logging::init_diagnostics;
pub use telemetry::Telemetry;
