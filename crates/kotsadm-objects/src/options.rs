//! Deployment options supplied by the installer.

use serde::{Deserialize, Serialize};

/// Caller-supplied options describing where the admin console is deployed.
///
/// Only the fields the object builders consume live here. The record is
/// immutable for the duration of a build call; builders copy what they need
/// and retain no reference to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployOptions {
    /// Target namespace for generated objects. Existence is not checked
    /// here; an empty or unknown namespace is rejected by the API server
    /// when the object is submitted.
    pub namespace: String,

    /// True when deploying to OpenShift. OpenShift assigns the pod's
    /// uid/fsGroup from the namespace's security context constraints, so
    /// generated pods must not pin a fixed identity there.
    pub is_openshift: bool,
}
