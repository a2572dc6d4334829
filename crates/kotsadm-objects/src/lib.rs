//! Kubernetes object builders for the kotsadm deployment tooling
//!
//! Assembles the objects the installer submits to the cluster. This crate
//! only builds values; it holds no client, performs no I/O, and never
//! submits anything. Submission, scheduling, and retry all belong to the
//! caller and the API server.
//!
//! # Example
//!
//! ```no_run
//! use kotsadm_objects::{migrations_pod, DeployOptions, ImageConfig, WallClock};
//!
//! # fn example() -> Result<(), kotsadm_objects::ConfigError> {
//! let options = DeployOptions {
//!     namespace: "kots-ns".to_string(),
//!     is_openshift: false,
//! };
//! let images = ImageConfig::from_env()?;
//!
//! // The caller submits the pod to the cluster and watches it there.
//! let pod = migrations_pod(&options, &images, &WallClock);
//! # let _ = pod;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod migrations;
pub mod options;
pub mod token;

#[cfg(test)]
mod test_utils;

pub use config::ImageConfig;
pub use error::ConfigError;
pub use migrations::{migrations_pod, MIGRATIONS_POD_PREFIX};
pub use options::DeployOptions;
pub use token::{TokenSource, WallClock};

#[cfg(any(test, feature = "test-util"))]
pub use token::FixedToken;
