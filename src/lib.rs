//! # dds-security-policy
//!
//! Builds the DDS Security property policy for a middleware node.
//!
//! Given a security root directory holding the node's certificates, key,
//! governance and permissions documents, this crate produces the ordered
//! name/value properties that configure the builtin PKI-DH authentication,
//! AES-GCM-GMAC cryptography, Access-Permissions access control and
//! DDS_LogTopic logging plugins.
//!
//! ```no_run
//! use dds_security_policy::{PolicyTables, SecurityPolicyBuilder};
//! use std::path::Path;
//!
//! let tables = PolicyTables::default();
//! let outcome = SecurityPolicyBuilder::new(&tables)
//!     .build(Some(Path::new("/etc/dds/keystore/talker")), true)?;
//! for property in outcome.properties() {
//!     println!("{} = {}", property.name, property.value);
//! }
//! # Ok::<(), dds_security_policy::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod security;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use security::{
    LoggingConfigParser, PolicyTables, Property, PropertyCollection, SecurityConfiguration,
    SecurityPolicyBuilder, SecuritySupport,
};
