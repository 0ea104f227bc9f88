//! Fixed names shared by the file resolver, the logging parser and the
//! policy builder.
//!
//! The property names are the wire contract with the DDS Security plugin
//! framework and must match it byte for byte. They are grouped here so
//! every component reads the same table instead of restating literals.

use serde::{Deserialize, Serialize};

/// File names expected under a security root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityFileNames {
    pub identity_ca_cert: String,
    pub permissions_ca_cert: String,
    pub governance: String,
    pub cert: String,
    pub key: String,
    pub permissions: String,
    pub logging: String,
}

impl Default for SecurityFileNames {
    fn default() -> Self {
        Self {
            identity_ca_cert: "identity_ca.cert.pem".to_string(),
            permissions_ca_cert: "permissions_ca.cert.pem".to_string(),
            governance: "governance.p7s".to_string(),
            cert: "cert.pem".to_string(),
            key: "key.pem".to_string(),
            permissions: "permissions.p7s".to_string(),
            logging: "logging.xml".to_string(),
        }
    }
}

/// Property names understood by the builtin plugins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    // Authentication (PKI-DH)
    pub auth_plugin: String,
    pub identity_ca: String,
    pub identity_certificate: String,
    pub private_key: String,

    // Cryptography
    pub crypto_plugin: String,

    // Access control (Access-Permissions)
    pub access_plugin: String,
    pub permissions_ca: String,
    pub governance: String,
    pub permissions: String,

    // Logging (DDS_LogTopic)
    pub logging_plugin: String,
    pub log_file: String,
    pub verbosity: String,
    pub distribute_enable: String,
    pub distribute_depth: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            auth_plugin: "dds.sec.auth.plugin".to_string(),
            identity_ca: "dds.sec.auth.builtin.PKI-DH.identity_ca".to_string(),
            identity_certificate: "dds.sec.auth.builtin.PKI-DH.identity_certificate".to_string(),
            private_key: "dds.sec.auth.builtin.PKI-DH.private_key".to_string(),
            crypto_plugin: "dds.sec.crypto.plugin".to_string(),
            access_plugin: "dds.sec.access.plugin".to_string(),
            permissions_ca: "dds.sec.access.builtin.Access-Permissions.permissions_ca".to_string(),
            governance: "dds.sec.access.builtin.Access-Permissions.governance".to_string(),
            permissions: "dds.sec.access.builtin.Access-Permissions.permissions".to_string(),
            logging_plugin: "dds.sec.log.plugin".to_string(),
            log_file: "dds.sec.log.builtin.DDS_LogTopic.log_file".to_string(),
            // `logging_level` is the older spelling; the builtin logger reads this one
            verbosity: "dds.sec.log.builtin.DDS_LogTopic.event_log_level".to_string(),
            distribute_enable: "dds.sec.log.builtin.DDS_LogTopic.distribute".to_string(),
            distribute_depth: "com.rti.serv.secure.logging.distribute.writer_history_depth"
                .to_string(),
        }
    }
}

/// Builtin plugin identifiers written as property values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginIdentifiers {
    pub authentication: String,
    pub cryptography: String,
    pub access_control: String,
    pub logging: String,
}

impl Default for PluginIdentifiers {
    fn default() -> Self {
        Self {
            authentication: "builtin.PKI-DH".to_string(),
            cryptography: "builtin.AES-GCM-GMAC".to_string(),
            access_control: "builtin.Access-Permissions".to_string(),
            logging: "builtin.DDS_LogTopic".to_string(),
        }
    }
}

/// Immutable table injected into every policy component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyTables {
    pub files: SecurityFileNames,
    pub properties: PropertyNames,
    pub plugins: PluginIdentifiers,
}
