//! Error types for builder configuration.
//!
//! The builders themselves are total and raise nothing; only resolving
//! configuration from the environment can fail.

use thiserror::Error;

/// Errors that can occur while resolving builder configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Image tag not configured
    #[error("image tag is not configured: set {0}")]
    MissingTag(&'static str),
}
