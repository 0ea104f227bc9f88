//! Test Data
//!
//! Security roots and logging descriptors written to temporary directories

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Mandatory files of a complete security root
pub const MANDATORY_FILES: [&str; 6] = [
    "identity_ca.cert.pem",
    "permissions_ca.cert.pem",
    "governance.p7s",
    "cert.pem",
    "key.pem",
    "permissions.p7s",
];

/// A security root directory that is removed on drop
pub struct SecurityRoot {
    dir: TempDir,
}

impl SecurityRoot {
    /// Root holding every mandatory file
    pub fn complete() -> Self {
        Self::with_files(&MANDATORY_FILES)
    }

    /// Root holding every mandatory file except `missing`
    pub fn without(missing: &str) -> Self {
        let files: Vec<&str> = MANDATORY_FILES
            .iter()
            .copied()
            .filter(|f| *f != missing)
            .collect();
        Self::with_files(&files)
    }

    pub fn with_files(files: &[&str]) -> Self {
        let dir = TempDir::new().expect("create security root");
        for file in files {
            std::fs::write(dir.path().join(file), format!("placeholder for {}", file))
                .expect("write security file");
        }
        Self { dir }
    }

    /// Add a `logging.xml` with `body` inside the `security_log` root
    pub fn with_logging(self, body: &str) -> Self {
        write_logging_xml(self.path(), body);
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn uri(&self, file: &str) -> String {
        format!("file://{}", self.path().join(file).display())
    }
}

/// Write a logging descriptor wrapping `body` and return its path
pub fn write_logging_xml(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("logging.xml");
    let xml = format!(
        "<?xml version='1.0' encoding='UTF-8'?>\n<security_log version='1'>\n{}\n</security_log>\n",
        body
    );
    std::fs::write(&path, xml).expect("write logging.xml");
    path
}
