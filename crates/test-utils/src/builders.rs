#![allow(dead_code)]

use std::path::PathBuf;

use launchspec::config::{RawAppConfig, RawEcosystemFile};
use launchspec::spec::EcosystemFile;

/// Builder for descriptor files to simplify test setup.
pub struct EcosystemBuilder {
    raw: RawEcosystemFile,
}

impl EcosystemBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawEcosystemFile { apps: Vec::new() },
        }
    }

    pub fn with_app(mut self, app: RawAppConfig) -> Self {
        self.raw.apps.push(app);
        self
    }

    /// The raw, unvalidated model (for tests exercising validation itself).
    pub fn build_raw(self) -> RawEcosystemFile {
        self.raw
    }

    pub fn build(self) -> EcosystemFile {
        EcosystemFile::try_from(self.raw).expect("Failed to build valid ecosystem from builder")
    }
}

impl Default for EcosystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `[[apps]]` entry.
pub struct AppConfigBuilder {
    app: RawAppConfig,
}

impl AppConfigBuilder {
    pub fn new(name: &str, script: &str) -> Self {
        Self {
            app: RawAppConfig {
                name: Some(name.to_string()),
                script: Some(PathBuf::from(script)),
                ..RawAppConfig::default()
            },
        }
    }

    pub fn interpreter(mut self, value: &str) -> Self {
        self.app.interpreter = Some(value.to_string());
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.app.args.push(arg.to_string());
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.app.cwd = Some(PathBuf::from(cwd));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.app.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> RawAppConfig {
        self.app
    }
}
