//! DDS Security property policy construction
//!
//! Turns a node's security root directory, plus an optional `logging.xml`
//! descriptor inside it, into the ordered property list consumed by the
//! builtin authentication, access control, cryptographic and logging
//! plugins.

pub mod document;
pub mod files;
pub mod logging_config;
pub mod policy;
pub mod property;
pub mod qos;
pub mod support;
pub mod tables;

pub use document::{DocumentReader, Element, XmlDocument, XmlElement};
pub use files::{
    path_to_uri, FileLocator, FsLocator, SecurityFileResolver, SecurityFileRole, SecurityFileSet,
};
pub use logging_config::LoggingConfigParser;
pub use policy::{
    build_from_settings, SecurityConfiguration, SecurityPolicyBuilder, UnconfiguredReason,
};
pub use property::{Property, PropertyCollection};
pub use qos::{BuiltinProfileCatalog, ProfileCatalog, ProfileResolver, QosProfile};
pub use support::SecuritySupport;
pub use tables::{PluginIdentifiers, PolicyTables, PropertyNames, SecurityFileNames};
