use secrecy::SecretString;
use serde::Deserialize;

/// Path prefixes that require a bearer token
///
/// Requests under any of `paths` must carry `Authorization: Bearer <token>`;
/// anything else is answered as an access-denied error.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecuredAreaConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Protected path prefixes (e.g. `/admin`)
    pub paths: Vec<String>,
    /// Expected bearer token
    pub token: SecretString,
}

impl SecuredAreaConfig {
    /// Whether `path` falls under one of the protected prefixes
    pub fn covers(&self, path: &str) -> bool {
        self.paths.iter().any(|prefix| {
            path.strip_prefix(prefix.trim_end_matches('/'))
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}
