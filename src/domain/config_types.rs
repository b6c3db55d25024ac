//! Validated values read from the `application` and `logging` settings

use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Host address the HTTP server binds to
#[nutype(
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Host(String);

/// Port number for network services
#[nutype(
    validate(predicate = |port| (1..=65535).contains(port)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Port(u16);

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_validation() {
        assert!(Host::try_new("localhost".to_string()).is_ok());
        assert!(Host::try_new("0.0.0.0".to_string()).is_ok());
        assert!(Host::try_new("".to_string()).is_err());
        assert!(Host::try_new("a".repeat(256)).is_err());
    }

    #[test]
    fn test_port_validation() {
        assert!(Port::try_new(80).is_ok());
        assert!(Port::try_new(8000).is_ok());
        assert!(Port::try_new(65535).is_ok());
        assert!(Port::try_new(0).is_err());
    }

    #[test]
    fn test_log_settings_deserialize_lowercase() {
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(format, LogFormat::Json);
        assert!(serde_json::from_str::<LogFormat>("\"yaml\"").is_err());
    }

    #[test]
    fn test_log_level_filter_directive() {
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::default().as_str(), "info");
    }
}
