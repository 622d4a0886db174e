//! Reference emitter implementations.
//!
//! These sinks serialize the canonical record shape as JSON lines. They
//! cover local development, cross-implementation comparison of output files,
//! and tests; batching, retry, and backend protocol belong to a real
//! telemetry SDK plugged in behind the same [`sporlog_core::Emitter`] trait.

mod console;
mod file;
mod memory;

pub use console::{ConsoleEmitter, ConsoleStream};
pub use file::FileEmitter;
pub use memory::MemoryEmitter;
