//! Correlation identifiers linking logically-related log records.
//!
//! A correlation id is an opaque token; equality of the string is the only
//! operation the rest of the system performs on it. Callers decide the
//! topology: a fresh id per call (no correlation), one id shared by the
//! start and outcome records of a transaction, or one id per batch job with
//! optional independent per-item ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque correlation token, unique with high probability across calls and
/// processes.
///
/// Generated ids are 128-bit random values encoded as 32 lower-case hex
/// characters. Ids received from upstream systems can be carried verbatim via
/// [`From<String>`] / [`From<&str>`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh id from the process entropy source.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// String form of the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CorrelationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CorrelationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
