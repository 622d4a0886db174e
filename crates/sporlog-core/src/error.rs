//! Error types for sporlog.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using sporlog's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sporlog operations.
///
/// Lifecycle errors (`AlreadyInitialized`, `NotInitialized`) are programming
/// errors surfaced to the caller. Flush errors are advisory: callers should
/// report them and still proceed with shutdown.
#[derive(Error, Debug)]
pub enum Error {
    /// `initialize` was called more than once on the same handle
    #[error("Telemetry already initialized")]
    AlreadyInitialized,

    /// An emit-family call was made before `initialize` succeeded
    #[error("Telemetry not initialized: call initialize before emitting")]
    NotInitialized,

    /// A required record field was supplied empty
    #[error("Required field must not be empty: {0}")]
    EmptyField(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// `flush` exceeded its deadline
    #[error("Flush deadline exceeded after {0:?}")]
    FlushTimeout(Duration),

    /// The emitter reported a failure during flush
    #[error("Flush transport error: {0}")]
    FlushTransport(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
