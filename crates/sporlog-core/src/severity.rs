//! Severity levels for log records.
//!
//! The level set is fixed and ordered; the derived `Ord` is what minimum-level
//! filtering relies on.
//!
//! ## Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Operation failed, requires operator attention |
//! | WARN  | Recoverable issue, fallback applied |
//! | INFO  | Operation attempts and completions, lifecycle events |
//! | DEBUG | Decision points, intermediate values |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordered log severity: `Debug < Info < Warn < Error`.
///
/// Serialized as upper-case strings (`"DEBUG"`, `"INFO"`, `"WARN"`,
/// `"ERROR"`) in the canonical record shape.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Decision points and intermediate values.
    #[default]
    Debug,
    /// Operation attempts, completions, and lifecycle events.
    Info,
    /// Recoverable issues where a fallback was applied.
    Warn,
    /// Failures that require operator attention.
    Error,
}

impl Severity {
    /// Upper-case wire name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Parses a level name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            other => Err(Error::Config(format!("unknown severity: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_for_filtering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_display_round_trip() {
        for level in [
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
        ] {
            let parsed: Severity = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
    }

    #[test]
    fn test_from_str_unknown_fails() {
        let err = "VERBOSE".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("VERBOSE"));
    }

    #[test]
    fn test_json_encoding_is_upper_case() {
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), r#""INFO""#);
        assert_eq!(
            serde_json::from_str::<Severity>(r#""DEBUG""#).unwrap(),
            Severity::Debug
        );
    }
}
