//! Whether the hosting middleware carries the DDS Security plugins.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Security plugin capability, detected once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecuritySupport {
    Available,
    Unavailable,
}

impl SecuritySupport {
    /// Capability of this build
    pub fn detect() -> Self {
        if cfg!(feature = "security") {
            SecuritySupport::Available
        } else {
            SecuritySupport::Unavailable
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, SecuritySupport::Available)
    }

    pub fn ensure(self) -> Result<()> {
        match self {
            SecuritySupport::Available => Ok(()),
            SecuritySupport::Unavailable => Err(Error::PluginSecuritySupportUnavailable),
        }
    }
}

impl Default for SecuritySupport {
    fn default() -> Self {
        Self::detect()
    }
}
