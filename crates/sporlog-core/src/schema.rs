//! Canonical field name constants for the serialized log record.
//!
//! Every sporlog port serializes the same nine fields under these names so
//! that file and console output stays comparable across implementations and
//! aggregation tools can query by a standardized schema.

/// Record severity, upper-case level name.
pub const SEVERITY: &str = "severity";

/// Logical function or operation that produced the record.
pub const ORIGIN: &str = "origin";

/// Human-readable description.
pub const MESSAGE: &str = "message";

/// Resolved peer identifier; `"INTERNAL"` when no external system is involved.
pub const PEER: &str = "peer";

/// Structured payload describing an attempted operation. Absent when unset.
pub const INPUT: &str = "input";

/// Structured payload present only on successful-completion records.
pub const OUTPUT: &str = "output";

/// Structured error description present only on failure records.
pub const ERROR: &str = "error";

/// Opaque token grouping records of one logical transaction or job.
pub const CORRELATION_ID: &str = "correlationId";

/// Record construction time, UTC, RFC 3339.
pub const TIMESTAMP: &str = "timestamp";
