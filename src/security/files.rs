//! Discovery of the credential and policy files under a security root.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::security::tables::SecurityFileNames;

/// Filesystem access needed to locate security files
pub trait FileLocator {
    fn join(&self, base: &Path, name: &str) -> PathBuf;

    fn is_readable(&self, path: &Path) -> bool;
}

impl<L: FileLocator + ?Sized> FileLocator for &L {
    fn join(&self, base: &Path, name: &str) -> PathBuf {
        (**self).join(base, name)
    }

    fn is_readable(&self, path: &Path) -> bool {
        (**self).is_readable(path)
    }
}

/// [`FileLocator`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLocator;

impl FileLocator for FsLocator {
    fn join(&self, base: &Path, name: &str) -> PathBuf {
        base.join(name)
    }

    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && File::open(path).is_ok()
    }
}

/// Role a file plays in the security configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityFileRole {
    IdentityCaCert,
    PermissionsCaCert,
    Governance,
    Cert,
    Key,
    Permissions,
    Logging,
}

impl SecurityFileRole {
    /// Mandatory roles in probe order
    pub const MANDATORY: [SecurityFileRole; 6] = [
        SecurityFileRole::IdentityCaCert,
        SecurityFileRole::PermissionsCaCert,
        SecurityFileRole::Governance,
        SecurityFileRole::Cert,
        SecurityFileRole::Key,
        SecurityFileRole::Permissions,
    ];

    pub fn is_mandatory(self) -> bool {
        !matches!(self, SecurityFileRole::Logging)
    }

    pub fn file_name(self, names: &SecurityFileNames) -> &str {
        match self {
            SecurityFileRole::IdentityCaCert => &names.identity_ca_cert,
            SecurityFileRole::PermissionsCaCert => &names.permissions_ca_cert,
            SecurityFileRole::Governance => &names.governance,
            SecurityFileRole::Cert => &names.cert,
            SecurityFileRole::Key => &names.key,
            SecurityFileRole::Permissions => &names.permissions,
            SecurityFileRole::Logging => &names.logging,
        }
    }
}

impl fmt::Display for SecurityFileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecurityFileRole::IdentityCaCert => "identity CA certificate",
            SecurityFileRole::PermissionsCaCert => "permissions CA certificate",
            SecurityFileRole::Governance => "governance document",
            SecurityFileRole::Cert => "node certificate",
            SecurityFileRole::Key => "node private key",
            SecurityFileRole::Permissions => "permissions document",
            SecurityFileRole::Logging => "logging descriptor",
        };
        f.write_str(label)
    }
}

/// Resolved file paths for one security root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityFileSet {
    pub identity_ca_cert: PathBuf,
    pub permissions_ca_cert: PathBuf,
    pub governance: PathBuf,
    pub cert: PathBuf,
    pub key: PathBuf,
    pub permissions: PathBuf,
    pub logging: Option<PathBuf>,
}

impl SecurityFileSet {
    pub fn path(&self, role: SecurityFileRole) -> Option<&Path> {
        match role {
            SecurityFileRole::IdentityCaCert => Some(&self.identity_ca_cert),
            SecurityFileRole::PermissionsCaCert => Some(&self.permissions_ca_cert),
            SecurityFileRole::Governance => Some(&self.governance),
            SecurityFileRole::Cert => Some(&self.cert),
            SecurityFileRole::Key => Some(&self.key),
            SecurityFileRole::Permissions => Some(&self.permissions),
            SecurityFileRole::Logging => self.logging.as_deref(),
        }
    }
}

/// Convert a file path to the `file://` URI form the plugins expect.
///
/// Paths that are not valid UTF-8 are rejected rather than rewritten, so the
/// URI always names the file that was probed.
pub fn path_to_uri(path: &Path) -> Result<String> {
    let path_str = path
        .to_str()
        .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
    Ok(format!("file://{}", path_str))
}

/// Locates the fixed set of security files under a root directory
#[derive(Debug, Clone)]
pub struct SecurityFileResolver<'t, L = FsLocator> {
    locator: L,
    names: &'t SecurityFileNames,
}

impl<'t> SecurityFileResolver<'t, FsLocator> {
    pub fn new(names: &'t SecurityFileNames) -> Self {
        Self::with_locator(FsLocator, names)
    }
}

impl<'t, L: FileLocator> SecurityFileResolver<'t, L> {
    pub fn with_locator(locator: L, names: &'t SecurityFileNames) -> Self {
        Self { locator, names }
    }

    /// Resolve every file under `root`.
    ///
    /// Fails as a whole if any mandatory file is unreadable. A missing
    /// logging descriptor leaves [`SecurityFileSet::logging`] unset.
    pub fn resolve(&self, root: &Path) -> Result<SecurityFileSet> {
        let files = SecurityFileSet {
            identity_ca_cert: self.require(root, SecurityFileRole::IdentityCaCert)?,
            permissions_ca_cert: self.require(root, SecurityFileRole::PermissionsCaCert)?,
            governance: self.require(root, SecurityFileRole::Governance)?,
            cert: self.require(root, SecurityFileRole::Cert)?,
            key: self.require(root, SecurityFileRole::Key)?,
            permissions: self.require(root, SecurityFileRole::Permissions)?,
            // Missing the logging descriptor is non-fatal
            logging: self.probe(root, SecurityFileRole::Logging),
        };

        info!(
            root = %root.display(),
            logging = files.logging.is_some(),
            "resolved security files"
        );
        Ok(files)
    }

    fn require(&self, root: &Path, role: SecurityFileRole) -> Result<PathBuf> {
        self.probe(root, role)
            .ok_or_else(|| Error::MissingSecurityFile {
                root: root.to_path_buf(),
            })
    }

    fn probe(&self, root: &Path, role: SecurityFileRole) -> Option<PathBuf> {
        let path = self.locator.join(root, role.file_name(self.names));
        if self.locator.is_readable(&path) {
            Some(path)
        } else {
            debug!(%role, path = %path.display(), "security file not readable");
            None
        }
    }
}
