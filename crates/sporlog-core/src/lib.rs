//! # sporlog-core
//!
//! Canonical record model and shared abstractions for sporlog's structured,
//! trace-correlated telemetry logging.
//!
//! This crate provides the types every port of the contract reproduces
//! bit-for-bit: the [`LogRecord`] shape, ordered [`Severity`] levels, the
//! [`PeerServiceRegistry`] with its reserved `INTERNAL` entry, opaque
//! [`CorrelationId`] tokens, total [`StructuredError`] normalization, and
//! the [`Emitter`] trait the telemetry transport plugs into.

pub mod correlation;
pub mod defaults;
pub mod error;
pub mod peers;
pub mod record;
pub mod schema;
pub mod severity;
pub mod traits;

// Re-export commonly used types at crate root
pub use correlation::CorrelationId;
pub use error::{Error, Result};
pub use peers::PeerServiceRegistry;
pub use record::{LogRecord, StructuredError};
pub use severity::Severity;
pub use traits::{Emitter, ServiceIdentity};
