//! File sink appending canonical JSON lines.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::warn;

use sporlog_core::record::LogRecord;
use sporlog_core::traits::Emitter;
use sporlog_core::Result;

/// Emitter appending one JSON line per record to a file.
///
/// Writes land in a buffered writer; `flush` drains the buffer to disk.
/// Serialization or write failures degrade to a diagnostic warning rather
/// than failing the caller.
#[derive(Debug)]
pub struct FileEmitter {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileEmitter {
    /// Open (or create) the file in append mode.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Emitter for FileEmitter {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&self, record: LogRecord) {
        // A poisoned lock only means another writer panicked mid-append;
        // keep accepting records.
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let outcome = serde_json::to_writer(&mut *writer, &record)
            .map_err(std::io::Error::from)
            .and_then(|_| writer.write_all(b"\n"));
        if let Err(err) = outcome {
            warn!(path = %self.path.display(), error = %err, "failed to append log record");
        }
    }

    async fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sporlog_core::Severity;

    #[tokio::test]
    async fn test_file_emitter_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");

        let emitter = FileEmitter::create(&path).unwrap();
        for i in 1..=3 {
            let record = LogRecord::new(
                Severity::Info,
                "batchLookup",
                format!("record {i}"),
                "SYS1234567",
            )
            .unwrap()
            .with_input(json!({"seq": i}));
            emitter.write(record);
        }
        emitter.flush().await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["severity"], "INFO");
        assert_eq!(first["peer"], "SYS1234567");
        assert_eq!(first["input"]["seq"], 1);
    }

    #[tokio::test]
    async fn test_file_emitter_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");

        for _ in 0..2 {
            let emitter = FileEmitter::create(&path).unwrap();
            emitter.write(LogRecord::new(Severity::Info, "op", "msg", "INTERNAL").unwrap());
            emitter.flush().await.unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let err = FileEmitter::create("/nonexistent-dir/records.jsonl").unwrap_err();
        assert!(matches!(err, sporlog_core::Error::Io(_)));
    }
}
