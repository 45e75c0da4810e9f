//! Locates a tenant's administrative kubeconfig: inline on the
//! VirtualCluster when the provisioner embedded it, otherwise in the
//! generated secret inside the cluster-key namespace. There is no silent
//! fallback; every missing piece is a distinct error.

use async_trait::async_trait;
use base64::Engine;
use k8s_openapi::api::core::v1::Secret;
use kube::api::Api;
use kube::Client;

use crate::constants;
use crate::key;
use crate::tenancy::VirtualCluster;
use crate::{Error, Result};

/// Read-only secret access, keyed by namespace and name.
#[async_trait]
pub trait SecretReader {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret>;
}

#[async_trait]
impl SecretReader for Client {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret> {
        let secrets = Api::<Secret>::namespaced(self.clone(), namespace);
        match secrets.get(name).await {
            Ok(secret) => Ok(secret),
            Err(kube::Error::Api(response)) if response.code == 404 => Err(Error::SecretNotFound {
                namespace: namespace.to_owned(),
                name: name.to_owned(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns the admin kubeconfig bytes for `vc`.
///
/// An inline base64 annotation wins; a decode failure there is an error,
/// not a reason to fall through. Otherwise the `admin-kubeconfig` secret
/// is fetched from the cluster-key namespace and its matching data key
/// returned. Absence of the secret is reported as not-found so callers
/// can retry while provisioning is still in flight.
pub async fn admin_kubeconfig<S>(secrets: &S, vc: &VirtualCluster) -> Result<Vec<u8>>
where
    S: SecretReader + ?Sized,
{
    if let Some(encoded) = vc.admin_kubeconfig_annotation() {
        return base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(Error::KubeconfigDecode);
    }

    let cluster_namespace = key::cluster_key(vc);
    log::trace!(
        "loading {} secret from {}",
        constants::ADMIN_KUBECONFIG_SECRET,
        cluster_namespace
    );
    let secret = secrets
        .get_secret(&cluster_namespace, constants::ADMIN_KUBECONFIG_SECRET)
        .await?;
    let data = secret
        .data
        .as_ref()
        .and_then(|data| data.get(constants::ADMIN_KUBECONFIG_SECRET))
        .ok_or_else(|| Error::SecretKeyMissing {
            namespace: cluster_namespace,
            name: constants::ADMIN_KUBECONFIG_SECRET.to_owned(),
            key: constants::ADMIN_KUBECONFIG_SECRET.to_owned(),
        })?;
    Ok(data.0.clone())
}
