//! Test utilities for unit testing object builders
//!
//! This module provides helpers for creating test data and building objects
//! with deterministic tokens.

use k8s_openapi::api::core::v1::Pod;

use crate::config::ImageConfig;
use crate::migrations::migrations_pod;
use crate::options::DeployOptions;
use crate::token::FixedToken;

/// Token used by every fixture built through [`build_test_pod`].
pub const TEST_TOKEN: &str = "1234567890";

/// Helper to create test DeployOptions
pub fn test_options(namespace: &str, is_openshift: bool) -> DeployOptions {
    DeployOptions {
        namespace: namespace.to_string(),
        is_openshift,
    }
}

/// Helper to create a test image location
pub fn test_images() -> ImageConfig {
    ImageConfig::new("registry.example.com", "v1.2.3")
}

/// Build a migration pod with fixture options and a fixed token
pub fn build_test_pod(namespace: &str, is_openshift: bool) -> Pod {
    migrations_pod(
        &test_options(namespace, is_openshift),
        &test_images(),
        &FixedToken(TEST_TOKEN.to_string()),
    )
}
