//! QoS profile catalog and profile-derived logging properties.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::security::property::PropertyCollection;
use crate::security::tables::PropertyNames;

/// History kind of a QoS profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPolicy {
    SystemDefault,
    KeepLast,
    KeepAll,
}

/// Reliability kind of a QoS profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityPolicy {
    SystemDefault,
    Reliable,
    BestEffort,
}

/// Durability kind of a QoS profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurabilityPolicy {
    SystemDefault,
    TransientLocal,
    Volatile,
}

/// Named bundle of QoS defaults. Only `depth` feeds the property policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QosProfile {
    pub history: HistoryPolicy,
    pub depth: usize,
    pub reliability: ReliabilityPolicy,
    pub durability: DurabilityPolicy,
}

impl QosProfile {
    pub const SENSOR_DATA: QosProfile = QosProfile {
        history: HistoryPolicy::KeepLast,
        depth: 5,
        reliability: ReliabilityPolicy::BestEffort,
        durability: DurabilityPolicy::Volatile,
    };

    pub const PARAMETERS: QosProfile = QosProfile {
        history: HistoryPolicy::KeepLast,
        depth: 1000,
        reliability: ReliabilityPolicy::Reliable,
        durability: DurabilityPolicy::Volatile,
    };

    pub const DEFAULT: QosProfile = QosProfile {
        history: HistoryPolicy::KeepLast,
        depth: 10,
        reliability: ReliabilityPolicy::Reliable,
        durability: DurabilityPolicy::Volatile,
    };

    pub const SERVICES_DEFAULT: QosProfile = QosProfile {
        history: HistoryPolicy::KeepLast,
        depth: 10,
        reliability: ReliabilityPolicy::Reliable,
        durability: DurabilityPolicy::Volatile,
    };

    pub const PARAMETER_EVENTS: QosProfile = QosProfile {
        history: HistoryPolicy::KeepLast,
        depth: 1000,
        reliability: ReliabilityPolicy::Reliable,
        durability: DurabilityPolicy::Volatile,
    };

    pub const SYSTEM_DEFAULT: QosProfile = QosProfile {
        history: HistoryPolicy::SystemDefault,
        depth: 0,
        reliability: ReliabilityPolicy::SystemDefault,
        durability: DurabilityPolicy::SystemDefault,
    };
}

/// Source of named QoS profiles
pub trait ProfileCatalog {
    /// Exact, case-sensitive lookup
    fn lookup(&self, name: &str) -> Option<QosProfile>;
}

impl<C: ProfileCatalog + ?Sized> ProfileCatalog for &C {
    fn lookup(&self, name: &str) -> Option<QosProfile> {
        (**self).lookup(name)
    }
}

/// The fixed catalog of six builtin profiles
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProfileCatalog;

impl BuiltinProfileCatalog {
    pub const ENTRIES: [(&'static str, QosProfile); 6] = [
        ("SENSOR_DATA", QosProfile::SENSOR_DATA),
        ("PARAMETERS", QosProfile::PARAMETERS),
        ("DEFAULT", QosProfile::DEFAULT),
        ("SERVICES_DEFAULT", QosProfile::SERVICES_DEFAULT),
        ("PARAMETER_EVENTS", QosProfile::PARAMETER_EVENTS),
        ("SYSTEM_DEFAULT", QosProfile::SYSTEM_DEFAULT),
    ];

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ENTRIES.iter().map(|(name, _)| *name)
    }
}

impl ProfileCatalog for BuiltinProfileCatalog {
    fn lookup(&self, name: &str) -> Option<QosProfile> {
        Self::ENTRIES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, profile)| *profile)
    }
}

/// Resolves profile names and turns profiles into properties
#[derive(Debug, Clone)]
pub struct ProfileResolver<'t, C = BuiltinProfileCatalog> {
    catalog: C,
    names: &'t PropertyNames,
}

impl<'t> ProfileResolver<'t, BuiltinProfileCatalog> {
    pub fn new(names: &'t PropertyNames) -> Self {
        Self::with_catalog(BuiltinProfileCatalog, names)
    }
}

impl<'t, C: ProfileCatalog> ProfileResolver<'t, C> {
    pub fn with_catalog(catalog: C, names: &'t PropertyNames) -> Self {
        Self { catalog, names }
    }

    pub fn resolve(&self, name: &str) -> Result<QosProfile> {
        let profile = self
            .catalog
            .lookup(name)
            .ok_or_else(|| Error::UnknownQosProfile(name.to_string()))?;
        debug!(profile = name, depth = profile.depth, "resolved QoS profile");
        Ok(profile)
    }

    /// Properties implied by `profile`; currently only the distribution depth
    pub fn derive_properties(&self, profile: &QosProfile) -> PropertyCollection {
        let mut properties = PropertyCollection::new();
        properties.upsert(self.names.distribute_depth.clone(), profile.depth.to_string());
        properties
    }
}
