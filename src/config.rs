//! Layered settings: defaults, then a TOML file, then `DDS_SECURITY_*`
//! environment variables, then command line overrides.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use types::{LogFormat, LogSettings, Settings};

use anyhow::{Context, Result};
use std::path::Path;

impl Settings {
    /// Render a commented sample settings file
    pub fn sample_toml() -> Result<String> {
        let sample = Settings {
            root: Some("/etc/dds/keystore/enclaves/talker".into()),
            enforce: true,
            ..Settings::default()
        };

        let toml_content =
            toml::to_string_pretty(&sample).context("Failed to render sample settings")?;

        Ok(format!(
            r#"# dds-security-policy settings
#
# Save as {file}.toml. Every key can be overridden from the environment,
# e.g. {prefix}_ROOT=/path/to/enclave or {prefix}_LOGGING__LEVEL=debug.
#
# root     = directory holding identity_ca.cert.pem, permissions_ca.cert.pem,
#            governance.p7s, cert.pem, key.pem, permissions.p7s and
#            optionally logging.xml
# enforce  = fail when any mandatory file is missing instead of running
#            without security
# [tables] = file and property names; only change these to match a
#            non-standard plugin build

{content}"#,
            file = DEFAULT_CONFIG_FILE,
            prefix = ENV_PREFIX,
            content = toml_content
        ))
    }

    /// Write the sample settings file to `path`
    pub fn write_sample<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, Self::sample_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
