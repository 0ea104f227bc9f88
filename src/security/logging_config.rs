//! Translation of a `security_log` XML descriptor into logging plugin
//! properties.
//!
//! ```xml
//! <security_log version="1">
//!   <file>/var/log/dds/security.log</file>
//!   <verbosity>CRITICAL</verbosity>
//!   <distribute>true</distribute>
//!   <qos>
//!     <profile>DEFAULT</profile>
//!     <depth>42</depth>
//!   </qos>
//! </security_log>
//! ```
//!
//! Every child is optional. A `qos/profile` is applied before `qos/depth`,
//! so an explicit depth always overrides the profile's.

use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::security::document::{DocumentReader, Element, XmlDocument};
use crate::security::property::PropertyCollection;
use crate::security::qos::{BuiltinProfileCatalog, ProfileCatalog, ProfileResolver};
use crate::security::support::SecuritySupport;
use crate::security::tables::PolicyTables;

/// Name of the descriptor's root element
pub const ROOT_ELEMENT: &str = "security_log";

/// Parses logging descriptors against a [`PolicyTables`]
#[derive(Debug, Clone)]
pub struct LoggingConfigParser<'t, C = BuiltinProfileCatalog> {
    tables: &'t PolicyTables,
    profiles: ProfileResolver<'t, C>,
    support: SecuritySupport,
}

impl<'t> LoggingConfigParser<'t, BuiltinProfileCatalog> {
    pub fn new(tables: &'t PolicyTables) -> Self {
        Self::with_catalog(BuiltinProfileCatalog, tables)
    }
}

impl<'t, C: ProfileCatalog> LoggingConfigParser<'t, C> {
    pub fn with_catalog(catalog: C, tables: &'t PolicyTables) -> Self {
        Self {
            tables,
            profiles: ProfileResolver::with_catalog(catalog, &tables.properties),
            support: SecuritySupport::detect(),
        }
    }

    pub fn with_support(mut self, support: SecuritySupport) -> Self {
        self.support = support;
        self
    }

    /// Load and parse the descriptor at `path`
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<PropertyCollection> {
        self.support.ensure()?;
        let path = path.as_ref();
        debug!(path = %path.display(), "loading security logging descriptor");
        let document = XmlDocument::load(path)?;
        self.parse(&document)
    }

    /// Parse and merge into `target`. `target` is left untouched on failure.
    pub fn parse_into<D: DocumentReader>(
        &self,
        document: &D,
        target: &mut PropertyCollection,
    ) -> Result<()> {
        let parsed = self.parse(document)?;
        target.merge(parsed);
        Ok(())
    }

    pub fn parse<D: DocumentReader>(&self, document: &D) -> Result<PropertyCollection> {
        self.support.ensure()?;

        let root = document.root_element(ROOT_ELEMENT)?.ok_or_else(|| {
            warn!("logging descriptor missing '{}'", ROOT_ELEMENT);
            Error::MalformedLoggingDescriptor("missing root element".to_string())
        })?;

        let names = &self.tables.properties;
        let mut properties = PropertyCollection::new();
        properties.upsert(
            names.logging_plugin.clone(),
            self.tables.plugins.logging.clone(),
        );

        set_from_child(&mut properties, &names.log_file, root, "file")?;
        set_from_child(&mut properties, &names.verbosity, root, "verbosity")?;
        set_from_child(&mut properties, &names.distribute_enable, root, "distribute")?;

        if let Some(qos) = root.child("qos") {
            // Profile first, so the explicit fields below can customize it
            if let Some(profile) = qos.child("profile") {
                let profile_name = profile
                    .text()
                    .ok_or_else(|| Error::MalformedField("profile".to_string()))?;
                let profile = self.profiles.resolve(profile_name)?;
                properties.merge(self.profiles.derive_properties(&profile));
            }

            set_from_child(&mut properties, &names.distribute_depth, qos, "depth")?;
        }

        debug!(count = properties.len(), "parsed security logging descriptor");
        Ok(properties)
    }
}

fn set_from_child<E: Element>(
    properties: &mut PropertyCollection,
    property_name: &str,
    element: &E,
    tag: &str,
) -> Result<()> {
    if let Some(child) = element.child(tag) {
        let text = child
            .text()
            .ok_or_else(|| Error::MalformedField(tag.to_string()))?;
        properties.upsert(property_name, text);
    }
    Ok(())
}
