use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::security::{PolicyTables, SecuritySupport};

/// Settings for one configuration pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Security root directory holding the node's credentials
    pub root: Option<PathBuf>,

    /// Fail when the security root is incomplete instead of running unsecured
    pub enforce: bool,

    /// Override the detected plugin security support
    pub support: Option<SecuritySupport>,

    /// Logging configuration
    pub logging: LogSettings,

    /// File and property name tables
    pub tables: PolicyTables,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,

    /// Log format
    pub format: LogFormat,

    /// Optional log file path
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    /// Pretty-printed format
    #[serde(rename = "pretty")]
    Pretty,

    /// JSON format
    #[serde(rename = "json")]
    Json,

    /// Compact format
    #[serde(rename = "compact")]
    Compact,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: None,
            enforce: false,
            support: None,
            logging: LogSettings::default(),
            tables: PolicyTables::default(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            file: None,
        }
    }
}
