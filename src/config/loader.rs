use super::types::Settings;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::PathBuf;

/// Environment variable prefix, e.g. `DDS_SECURITY_ROOT=/keys/talker`
pub const ENV_PREFIX: &str = "DDS_SECURITY";

/// Settings file looked up when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "dds-security";

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    load_env: bool,
    root_override: Option<PathBuf>,
    enforce_override: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            config_file: None,
            load_env: false,
            root_override: None,
            enforce_override: None,
        }
    }

    /// Load configuration from file
    pub fn load_from_file<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.config_file = path.map(Into::into);
        self
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Security root given on the command line, applied last
    pub fn with_root<P: Into<PathBuf>>(mut self, root: Option<P>) -> Self {
        self.root_override = root.map(Into::into);
        self
    }

    /// Enforcement flag given on the command line, applied last
    pub fn with_enforce(mut self, enforce: Option<bool>) -> Self {
        self.enforce_override = enforce;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Settings> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Settings::default()).context("Failed to encode default settings")?,
        );

        // Add configuration file if specified
        if let Some(config_path) = &self.config_file {
            let path = config_path
                .to_str()
                .with_context(|| format!("Non UTF-8 settings path: {}", config_path.display()))?;
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
        } else {
            builder = builder
                .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
                .add_source(File::with_name(&format!("config/{}", DEFAULT_CONFIG_FILE)).required(false));
        }

        // Add environment variables if requested
        if self.load_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        // Build the configuration
        let mut settings: Settings = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if let Some(root) = self.root_override {
            settings.root = Some(root);
        }
        if let Some(enforce) = self.enforce_override {
            settings.enforce = enforce;
        }

        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
