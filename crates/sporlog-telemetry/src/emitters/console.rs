//! Console sink writing canonical JSON lines.

use std::io::Write;

use async_trait::async_trait;
use tracing::warn;

use sporlog_core::record::LogRecord;
use sporlog_core::traits::Emitter;
use sporlog_core::Result;

/// Target stream for [`ConsoleEmitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    /// Standard output (default).
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

/// Emitter writing one JSON line per record to stdout or stderr.
///
/// Writes go straight to the locked stream, so per-caller order is
/// preserved. A record that fails to serialize or write degrades to a
/// diagnostic warning; the caller never sees the failure.
#[derive(Debug, Default)]
pub struct ConsoleEmitter {
    stream: ConsoleStream,
}

impl ConsoleEmitter {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        match self.stream {
            ConsoleStream::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{line}")
            }
            ConsoleStream::Stderr => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                writeln!(handle, "{line}")
            }
        }
    }
}

#[async_trait]
impl Emitter for ConsoleEmitter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write(&self, record: LogRecord) {
        match serde_json::to_string(&record) {
            Ok(line) => {
                if let Err(err) = self.write_line(&line) {
                    warn!(error = %err, "failed to write log record to console");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize log record"),
        }
    }

    async fn flush(&self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }
}
