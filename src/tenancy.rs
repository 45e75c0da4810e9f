//! The `tenancy.x-k8s.io/v1alpha1` VirtualCluster type: a tenant's
//! logical cluster identity and credential descriptor. Its UID, namespace
//! and name are immutable for its lifetime and are the sole inputs to the
//! namespace key derivation in [`crate::key`].

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

use crate::constants;

pub const GROUP: &str = "tenancy.x-k8s.io";
pub const VERSION: &str = "v1alpha1";
pub const KIND: &str = "VirtualCluster";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VirtualCluster {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: VirtualClusterSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VirtualClusterStatus>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualClusterSpec {
    /// DNS domain of the tenant control plane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_domain: Option<String>,
    /// Name of the ClusterVersion describing the control-plane components
    /// to stand up for this tenant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_version_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualClusterStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VirtualCluster {
    pub fn uid(&self) -> &str {
        self.metadata.uid.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("")
    }

    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or("")
    }

    /// The inline admin kubeconfig annotation, if the provisioner set one.
    pub fn admin_kubeconfig_annotation(&self) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(constants::LABEL_ADMIN_KUBECONFIG))
            .map(String::as_str)
    }
}
