//! In-memory emitter for tests and assertions on emitted records.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use sporlog_core::record::LogRecord;
use sporlog_core::traits::Emitter;
use sporlog_core::Result;

/// Emitter capturing records in memory, in hand-off order.
///
/// Test double for the external telemetry sink: assertions can inspect the
/// captured records and how many times `flush` was called.
#[derive(Default)]
pub struct MemoryEmitter {
    records: Mutex<Vec<LogRecord>>,
    flushes: AtomicUsize,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `flush` has been called.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Emitter for MemoryEmitter {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write(&self, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }

    async fn flush(&self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sporlog_core::Severity;

    #[tokio::test]
    async fn test_memory_emitter_captures_in_order() {
        let emitter = MemoryEmitter::new();
        assert!(emitter.is_empty());

        emitter.write(LogRecord::new(Severity::Info, "op", "first", "INTERNAL").unwrap());
        emitter.write(LogRecord::new(Severity::Warn, "op", "second", "INTERNAL").unwrap());

        let records = emitter.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].message, "second");
    }

    #[tokio::test]
    async fn test_memory_emitter_counts_flushes() {
        let emitter = MemoryEmitter::new();
        assert_eq!(emitter.flush_count(), 0);
        emitter.flush().await.unwrap();
        emitter.flush().await.unwrap();
        assert_eq!(emitter.flush_count(), 2);
    }
}
