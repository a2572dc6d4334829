//! Schema-migration workload objects.
//!
//! The admin console's database schema is applied by a one-shot migration
//! pod that runs schemahero against the postgres instance and exits. This
//! module assembles that pod; running it and watching it finish is the
//! caller's job.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    Container, EnvVar, EnvVarSource, Pod, PodSecurityContext, PodSpec, ResourceRequirements,
    SecretKeySelector,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::config::ImageConfig;
use crate::options::DeployOptions;
use crate::token::TokenSource;

/// Prefix of generated migration pod names. The full name carries a
/// uniqueness token so reruns don't collide with finished pods.
pub const MIGRATIONS_POD_PREFIX: &str = "kotsadm-migrations";

/// Image name, resolved against the configured registry.
const MIGRATIONS_IMAGE: &str = "kotsadm-migrations";

/// Secret holding the postgres connection URI. The kubelet resolves it at
/// pod start; it is referenced by name only and never read here.
const POSTGRES_SECRET_NAME: &str = "kotsadm-postgres";
const POSTGRES_SECRET_URI_KEY: &str = "uri";

/// uid/fsGroup the migration pod runs as on platforms that let us pick.
/// Matches the ownership conventions of the postgres data volume.
const MIGRATIONS_RUN_AS: i64 = 1001;

/// Build the one-shot schema-migration pod.
///
/// Pure assembly: no I/O, cannot fail, and the returned pod is not retained
/// or mutated here. The pod restarts on failure under the kubelet's policy;
/// any rejection at create time (duplicate name, unknown namespace) is
/// surfaced to the caller by the API server, not by this function.
pub fn migrations_pod(
    options: &DeployOptions,
    images: &ImageConfig,
    tokens: &dyn TokenSource,
) -> Pod {
    let name = format!("{}-{}", MIGRATIONS_POD_PREFIX, tokens.token());

    // OpenShift assigns uid/fsGroup from the namespace's security context
    // constraints and rejects pods that pin their own.
    let security_context = if options.is_openshift {
        None
    } else {
        Some(PodSecurityContext {
            run_as_user: Some(MIGRATIONS_RUN_AS),
            fs_group: Some(MIGRATIONS_RUN_AS),
            ..Default::default()
        })
    };

    Pod {
        metadata: ObjectMeta {
            name: Some(name.clone()),
            namespace: Some(options.namespace.clone()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            security_context,
            restart_policy: Some("OnFailure".to_string()),
            containers: vec![Container {
                name,
                image: Some(format!(
                    "{}/{}:{}",
                    images.registry, MIGRATIONS_IMAGE, images.tag
                )),
                image_pull_policy: Some("Always".to_string()),
                env: Some(vec![
                    EnvVar {
                        name: "SCHEMAHERO_DRIVER".to_string(),
                        value: Some("postgres".to_string()),
                        ..Default::default()
                    },
                    EnvVar {
                        name: "SCHEMAHERO_SPEC_FILE".to_string(),
                        value: Some("/tables".to_string()),
                        ..Default::default()
                    },
                    EnvVar {
                        name: "SCHEMAHERO_URI".to_string(),
                        value_from: Some(EnvVarSource {
                            secret_key_ref: Some(SecretKeySelector {
                                name: POSTGRES_SECRET_NAME.to_string(),
                                key: POSTGRES_SECRET_URI_KEY.to_string(),
                                ..Default::default()
                            }),
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                ]),
                resources: Some(ResourceRequirements {
                    requests: Some(quantities(&[("cpu", "20m"), ("memory", "128Mi")])),
                    limits: Some(quantities(&[("cpu", "200m"), ("memory", "256Mi")])),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn quantities(entries: &[(&str, &str)]) -> BTreeMap<String, Quantity> {
    entries
        .iter()
        .map(|(resource, amount)| ((*resource).to_string(), Quantity((*amount).to_string())))
        .collect()
}
