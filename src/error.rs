//! Error types for security policy construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for security policy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for security policy construction
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory credential or policy file is not readable under the security root
    #[error("couldn't find all security files in {}", root.display())]
    MissingSecurityFile { root: PathBuf },

    /// A resolved security file path cannot be written as a `file://` URI
    #[error("security file path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Logging descriptor names a QoS profile outside the catalog
    #[error("failed to set security logging profile: {0} is not a supported profile")]
    UnknownQosProfile(String),

    /// A descriptor element is present but carries no text
    #[error("failed to set security logging {0}: improper format")]
    MalformedField(String),

    /// Logging descriptor is not a well-formed `security_log` document
    #[error("malformed security logging descriptor: {0}")]
    MalformedLoggingDescriptor(String),

    /// The hosting middleware was built without security plugin support
    #[error(
        "security plugin support is unavailable in this build; \
         enable the `security` feature to configure DDS Security"
    )]
    PluginSecuritySupportUnavailable,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error came from an incomplete security root
    pub fn is_missing_files(&self) -> bool {
        matches!(self, Error::MissingSecurityFile { .. })
    }
}
