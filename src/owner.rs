//! The inverse of projection: recover a physical object's originating
//! tenant cluster and namespace from the annotations written by
//! [`crate::conversion`].

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::Api;

use crate::constants;
use crate::{Error, Result};

/// Read-only namespace access, keyed by physical namespace name. The
/// caller supplies the implementation and owns timeout/cancellation
/// around it.
#[async_trait]
pub trait NamespaceLister {
    async fn get_namespace(&self, name: &str) -> Result<Namespace>;
}

#[async_trait]
impl NamespaceLister for Api<Namespace> {
    async fn get_namespace(&self, name: &str) -> Result<Namespace> {
        match self.get(name).await {
            Ok(ns) => Ok(ns),
            Err(kube::Error::Api(response)) if response.code == 404 => {
                Err(Error::NamespaceNotFound(name.to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Resolves the (cluster key, tenant namespace) pair that a physical
/// namespace was projected from, e.g. to route an event created directly
/// in the super cluster back to its tenant.
///
/// Fails if the namespace cannot be fetched. A namespace without the
/// ownership annotations is not a projection; both strings come back
/// empty in that case.
pub async fn virtual_namespace_of<L>(lister: &L, physical_namespace: &str) -> Result<(String, String)>
where
    L: NamespaceLister + ?Sized,
{
    let ns = lister.get_namespace(physical_namespace).await?;
    Ok(virtual_owner_of(&ns.metadata))
}

/// The same annotation read, applied to an object that carries the
/// ownership annotations itself. Empty strings when they are absent.
pub fn virtual_owner_of(meta: &ObjectMeta) -> (String, String) {
    let read = |annotation_key: &str| {
        meta.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(annotation_key))
            .cloned()
            .unwrap_or_default()
    };
    (read(constants::LABEL_CLUSTER), read(constants::LABEL_NAMESPACE))
}
