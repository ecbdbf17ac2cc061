//! Programmatic configuration builder for integration tests

use faultline_config::{Config, SecuredAreaConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Require a bearer token under the given path prefixes
    pub fn with_secured_area(mut self, paths: &[&str], token: &str) -> Self {
        self.config.server.secured_area = Some(SecuredAreaConfig {
            enabled: true,
            paths: paths.iter().map(|p| (*p).to_owned()).collect(),
            token: SecretString::from(token),
        });
        self
    }

    /// Move the health endpoint
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
