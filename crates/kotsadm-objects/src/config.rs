//! Image location configuration.
//!
//! The builders take the registry and tag as an explicit value rather than
//! reading process-wide state, so callers (and tests) control exactly which
//! image a generated object references.

use std::env;

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming the registry that hosts kotsadm images.
pub const REGISTRY_ENV: &str = "KOTSADM_REGISTRY";

/// Environment variable naming the image tag to deploy.
pub const TAG_ENV: &str = "KOTSADM_TAG";

/// Registry used when none is configured.
const DEFAULT_REGISTRY: &str = "kotsadm";

/// Where kotsadm images are pulled from.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Registry prefix, without a trailing slash.
    pub registry: String,

    /// Tag applied to every kotsadm image.
    pub tag: String,
}

impl ImageConfig {
    /// Build a config from explicit values.
    pub fn new(registry: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            registry: registry.into(),
            tag: tag.into(),
        }
    }

    /// Load the image location from the environment.
    ///
    /// `KOTSADM_REGISTRY` falls back to the public registry when unset.
    /// `KOTSADM_TAG` has no safe fallback and must be set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(REGISTRY_ENV).ok(), env::var(TAG_ENV).ok())
    }

    fn from_vars(registry: Option<String>, tag: Option<String>) -> Result<Self, ConfigError> {
        let registry = registry.unwrap_or_else(|| DEFAULT_REGISTRY.to_string());
        let tag = tag.ok_or(ConfigError::MissingTag(TAG_ENV))?;

        debug!("Resolved image location: registry={}, tag={}", registry, tag);

        Ok(Self { registry, tag })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_pass_through() {
        let images = ImageConfig::new("registry.example.com", "v1.2.3");
        assert_eq!(images.registry, "registry.example.com");
        assert_eq!(images.tag, "v1.2.3");
    }

    #[test]
    fn test_registry_defaults_when_unset() {
        let images =
            ImageConfig::from_vars(None, Some("v1.2.3".to_string())).expect("tag is set");
        assert_eq!(images.registry, DEFAULT_REGISTRY);
        assert_eq!(images.tag, "v1.2.3");
    }

    #[test]
    fn test_missing_tag_is_an_error() {
        let err = ImageConfig::from_vars(Some("registry.example.com".to_string()), None);
        assert!(matches!(err, Err(ConfigError::MissingTag(TAG_ENV))));
    }
}
