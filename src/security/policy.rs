//! Assembly of the full DDS Security property policy for one node.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::security::files::{path_to_uri, FileLocator, FsLocator, SecurityFileResolver, SecurityFileSet};
use crate::security::logging_config::LoggingConfigParser;
use crate::security::property::PropertyCollection;
use crate::security::qos::{BuiltinProfileCatalog, ProfileCatalog};
use crate::security::support::SecuritySupport;
use crate::security::tables::PolicyTables;

static NO_PROPERTIES: PropertyCollection = PropertyCollection::new();

/// Why a node ends up without security configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnconfiguredReason {
    /// No security root was supplied
    NoRootConfigured,
    /// Mandatory files were missing and enforcement was off
    FilesIncomplete,
}

/// Outcome of a successful configuration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityConfiguration {
    Unconfigured(UnconfiguredReason),
    Configured(PropertyCollection),
}

impl SecurityConfiguration {
    pub fn is_configured(&self) -> bool {
        matches!(self, SecurityConfiguration::Configured(_))
    }

    /// Properties to hand to the plugin framework; empty when unconfigured
    pub fn properties(&self) -> &PropertyCollection {
        match self {
            SecurityConfiguration::Configured(properties) => properties,
            SecurityConfiguration::Unconfigured(_) => &NO_PROPERTIES,
        }
    }

    pub fn into_properties(self) -> PropertyCollection {
        match self {
            SecurityConfiguration::Configured(properties) => properties,
            SecurityConfiguration::Unconfigured(_) => PropertyCollection::new(),
        }
    }
}

/// Builds the property policy from a security root directory
#[derive(Debug, Clone)]
pub struct SecurityPolicyBuilder<'t, L = FsLocator, C = BuiltinProfileCatalog> {
    tables: &'t PolicyTables,
    locator: L,
    catalog: C,
    support: SecuritySupport,
}

impl<'t> SecurityPolicyBuilder<'t> {
    pub fn new(tables: &'t PolicyTables) -> Self {
        Self {
            tables,
            locator: FsLocator,
            catalog: BuiltinProfileCatalog,
            support: SecuritySupport::detect(),
        }
    }
}

impl<'t, L: FileLocator, C: ProfileCatalog> SecurityPolicyBuilder<'t, L, C> {
    pub fn with_locator<L2: FileLocator>(self, locator: L2) -> SecurityPolicyBuilder<'t, L2, C> {
        SecurityPolicyBuilder {
            tables: self.tables,
            locator,
            catalog: self.catalog,
            support: self.support,
        }
    }

    pub fn with_catalog<C2: ProfileCatalog>(self, catalog: C2) -> SecurityPolicyBuilder<'t, L, C2> {
        SecurityPolicyBuilder {
            tables: self.tables,
            locator: self.locator,
            catalog,
            support: self.support,
        }
    }

    pub fn with_support(mut self, support: SecuritySupport) -> Self {
        self.support = support;
        self
    }

    /// Run one configuration pass.
    ///
    /// With no `root` the node is left unconfigured. Missing mandatory
    /// files fail the pass when `enforce` is set and leave the node
    /// unconfigured otherwise. Any logging descriptor error is fatal.
    pub fn build(&self, root: Option<&Path>, enforce: bool) -> Result<SecurityConfiguration> {
        let Some(root) = root else {
            debug!("no security root configured");
            return Ok(SecurityConfiguration::Unconfigured(
                UnconfiguredReason::NoRootConfigured,
            ));
        };

        self.support.ensure()?;

        let resolver = SecurityFileResolver::with_locator(&self.locator, &self.tables.files);
        let files = match resolver.resolve(root) {
            Ok(files) => files,
            Err(err) if err.is_missing_files() && !enforce => {
                warn!(
                    root = %root.display(),
                    "security files incomplete, continuing without security"
                );
                return Ok(SecurityConfiguration::Unconfigured(
                    UnconfiguredReason::FilesIncomplete,
                ));
            }
            Err(err) => return Err(err),
        };

        let mut properties = self.core_properties(&files)?;

        if let Some(logging) = &files.logging {
            let parser = LoggingConfigParser::with_catalog(&self.catalog, self.tables)
                .with_support(self.support);
            properties.merge(parser.parse_file(logging)?);
        }

        info!(
            root = %root.display(),
            properties = properties.len(),
            "security policy built"
        );
        Ok(SecurityConfiguration::Configured(properties))
    }

    /// The nine authentication, cryptography and access control properties
    pub fn core_properties(&self, files: &SecurityFileSet) -> Result<PropertyCollection> {
        let names = &self.tables.properties;
        let plugins = &self.tables.plugins;

        let mut properties = PropertyCollection::new();
        properties.upsert(names.auth_plugin.clone(), plugins.authentication.clone());
        properties.upsert(names.identity_ca.clone(), path_to_uri(&files.identity_ca_cert)?);
        properties.upsert(names.identity_certificate.clone(), path_to_uri(&files.cert)?);
        properties.upsert(names.private_key.clone(), path_to_uri(&files.key)?);
        properties.upsert(names.crypto_plugin.clone(), plugins.cryptography.clone());
        properties.upsert(names.access_plugin.clone(), plugins.access_control.clone());
        properties.upsert(names.permissions_ca.clone(), path_to_uri(&files.permissions_ca_cert)?);
        properties.upsert(names.governance.clone(), path_to_uri(&files.governance)?);
        properties.upsert(names.permissions.clone(), path_to_uri(&files.permissions)?);
        Ok(properties)
    }
}

/// Run a configuration pass described entirely by `settings`
pub fn build_from_settings(settings: &Settings) -> Result<SecurityConfiguration> {
    let mut builder = SecurityPolicyBuilder::new(&settings.tables);
    if let Some(support) = settings.support {
        builder = builder.with_support(support);
    }
    builder.build(settings.root.as_deref(), settings.enforce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::security::files::SecurityFileRole;
    use std::cell::Cell;
    use std::path::PathBuf;

    /// Locator that reports every file readable and counts probes
    #[derive(Default)]
    struct CountingLocator {
        probes: Cell<usize>,
    }

    impl FileLocator for CountingLocator {
        fn join(&self, base: &Path, name: &str) -> PathBuf {
            base.join(name)
        }

        fn is_readable(&self, path: &Path) -> bool {
            self.probes.set(self.probes.get() + 1);
            !path.ends_with("logging.xml")
        }
    }

    #[test]
    fn test_no_root_is_unconfigured() {
        let tables = PolicyTables::default();
        let builder = SecurityPolicyBuilder::new(&tables);

        let outcome = builder.build(None, true).unwrap();
        assert_eq!(
            outcome,
            SecurityConfiguration::Unconfigured(UnconfiguredReason::NoRootConfigured)
        );
        assert!(outcome.properties().is_empty());
    }

    #[test]
    fn test_core_properties_order_and_values() {
        let tables = PolicyTables::default();
        let builder = SecurityPolicyBuilder::new(&tables).with_locator(CountingLocator::default());

        let outcome = builder.build(Some(Path::new("/keys/talker")), true).unwrap();
        let props = outcome.into_properties();

        let listed: Vec<(&str, &str)> = props
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("dds.sec.auth.plugin", "builtin.PKI-DH"),
                (
                    "dds.sec.auth.builtin.PKI-DH.identity_ca",
                    "file:///keys/talker/identity_ca.cert.pem"
                ),
                (
                    "dds.sec.auth.builtin.PKI-DH.identity_certificate",
                    "file:///keys/talker/cert.pem"
                ),
                (
                    "dds.sec.auth.builtin.PKI-DH.private_key",
                    "file:///keys/talker/key.pem"
                ),
                ("dds.sec.crypto.plugin", "builtin.AES-GCM-GMAC"),
                ("dds.sec.access.plugin", "builtin.Access-Permissions"),
                (
                    "dds.sec.access.builtin.Access-Permissions.permissions_ca",
                    "file:///keys/talker/permissions_ca.cert.pem"
                ),
                (
                    "dds.sec.access.builtin.Access-Permissions.governance",
                    "file:///keys/talker/governance.p7s"
                ),
                (
                    "dds.sec.access.builtin.Access-Permissions.permissions",
                    "file:///keys/talker/permissions.p7s"
                ),
            ]
        );
    }

    #[test]
    fn test_unsupported_build_skips_filesystem() {
        let tables = PolicyTables::default();
        let locator = CountingLocator::default();
        let builder = SecurityPolicyBuilder::new(&tables)
            .with_locator(&locator)
            .with_support(SecuritySupport::Unavailable);

        let err = builder.build(Some(Path::new("/keys/talker")), false).unwrap_err();
        assert!(matches!(err, Error::PluginSecuritySupportUnavailable));
        assert_eq!(locator.probes.get(), 0);

        // Without a root there is nothing to refuse
        assert!(builder.build(None, true).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_root_fails_build() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tables = PolicyTables::default();
        let builder = SecurityPolicyBuilder::new(&tables).with_locator(CountingLocator::default());
        let root = Path::new(OsStr::from_bytes(b"/keys/\xfftalker"));

        // Files probe as readable, but no property may name a rewritten path
        for enforce in [true, false] {
            let err = builder.build(Some(root), enforce).unwrap_err();
            assert!(matches!(err, Error::NonUtf8Path(ref p) if p.starts_with(root)));
        }
    }

    #[test]
    fn test_core_properties_from_file_set() {
        let tables = PolicyTables::default();
        let builder = SecurityPolicyBuilder::new(&tables);
        let root = Path::new("/r");
        let files = SecurityFileSet {
            identity_ca_cert: root.join("a"),
            permissions_ca_cert: root.join("b"),
            governance: root.join("c"),
            cert: root.join("d"),
            key: root.join("e"),
            permissions: root.join("f"),
            logging: None,
        };

        let props = builder.core_properties(&files).unwrap();
        assert_eq!(props.len(), 9);
        assert_eq!(
            props.find(&tables.properties.governance),
            Some("file:///r/c")
        );
        assert!(files.path(SecurityFileRole::Logging).is_none());
    }
}
