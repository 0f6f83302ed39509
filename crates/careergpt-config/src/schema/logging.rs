//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive covering all CareerGPT crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "careergpt=debug",
            LogLevel::Info => "careergpt=info",
            LogLevel::Warning => "careergpt=warn",
            LogLevel::Error => "careergpt=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
