//! Centralized default constants for sporlog.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// PEER RESOLUTION
// =============================================================================

/// Reserved peer key and identifier for operations that concern no external
/// system. Always present in every registry; a caller-supplied mapping for
/// this key is overwritten.
pub const INTERNAL_PEER: &str = "INTERNAL";

// =============================================================================
// LIFECYCLE TIMEOUTS
// =============================================================================

/// Default deadline for `flush` when the caller supplies none (milliseconds).
/// Flush is never an unbounded wait.
pub const FLUSH_TIMEOUT_MS: u64 = 5_000;

/// Deadline for opening the emitter during `initialize` (milliseconds).
pub const SETUP_TIMEOUT_MS: u64 = 3_000;

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

/// Environment variable overriding the minimum severity threshold.
pub const ENV_MIN_SEVERITY: &str = "SPORLOG_MIN_SEVERITY";

/// Environment variable overriding the default flush timeout (milliseconds).
pub const ENV_FLUSH_TIMEOUT_MS: &str = "SPORLOG_FLUSH_TIMEOUT_MS";
