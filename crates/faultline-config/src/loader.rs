use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Expands `{{ env.VAR }}` placeholders, then deserializes and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, the TOML is invalid, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder cannot be expanded, the TOML is
    /// invalid, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health()?;
        self.validate_secured_area()?;
        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got `{}`", health.path);
        }

        Ok(())
    }

    fn validate_secured_area(&self) -> anyhow::Result<()> {
        let Some(ref area) = self.server.secured_area else {
            return Ok(());
        };

        if !area.enabled {
            return Ok(());
        }

        if area.token.expose_secret().is_empty() {
            anyhow::bail!("server.secured_area.token must not be empty when the secured area is enabled");
        }

        if area.paths.is_empty() {
            anyhow::bail!("server.secured_area.paths must list at least one path prefix");
        }

        if let Some(path) = area.paths.iter().find(|p| !p.starts_with('/')) {
            anyhow::bail!("server.secured_area.paths entries must start with '/', got `{path}`");
        }

        Ok(())
    }
}
