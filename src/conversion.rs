//! Metadata translation across the tenant/super boundary.
//!
//! A projected object must look newborn to the super cluster (no inherited
//! resource version, UID, finalizers, ...) while still recording where it
//! came from. Origin is recorded purely in annotations so it survives
//! round trips and needs no side index: the annotations written here are
//! exactly what [`crate::owner`] reads back.

use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::Metadata;

use crate::constants;
use crate::key;
use crate::{Error, Result};

/// Clears every super-cluster-assigned identity field. Idempotent; does
/// not touch name, namespace, labels or annotations.
pub fn reset_metadata(meta: &mut ObjectMeta) {
    meta.self_link = None;
    meta.uid = None;
    meta.resource_version = None;
    meta.generation = None;
    meta.deletion_timestamp = None;
    meta.deletion_grace_period_seconds = None;
    meta.owner_references = None;
    meta.finalizers = None;
    meta.cluster_name = None;
}

/// Projects a tenant object into the super cluster.
///
/// The copy gets a reset identity, moves to `target_namespace` when one is
/// given, and gains the ownership annotation set: cluster key, original
/// UID and namespace, the original owner references serialized to JSON,
/// and the owning VirtualCluster's name and namespace. The same
/// VirtualCluster pair is also merged into the labels for selection.
/// Annotations and labels already on the object are kept.
///
/// Fails only if the existing owner references cannot be serialized.
pub fn project_metadata<K>(
    cluster: &str,
    vc_namespace: &str,
    vc_name: &str,
    target_namespace: &str,
    obj: &K,
) -> Result<K>
where
    K: Metadata<Ty = ObjectMeta> + Clone,
{
    let mut target = obj.clone();
    let meta = target.metadata_mut();

    let owner_references =
        serde_json::to_string(&meta.owner_references.clone().unwrap_or_default())
            .map_err(Error::OwnerReferencesEncode)?;
    let original_uid = meta.uid.clone().unwrap_or_default();
    let original_namespace = meta.namespace.clone().unwrap_or_default();

    reset_metadata(meta);
    if !target_namespace.is_empty() {
        meta.namespace = Some(target_namespace.to_owned());
    }

    let annotations = meta.annotations.get_or_insert_with(Default::default);
    annotations.insert(constants::LABEL_CLUSTER.to_owned(), cluster.to_owned());
    annotations.insert(constants::LABEL_UID.to_owned(), original_uid);
    annotations.insert(
        constants::LABEL_OWNER_REFERENCES.to_owned(),
        owner_references,
    );
    annotations.insert(constants::LABEL_NAMESPACE.to_owned(), original_namespace);
    annotations.insert(constants::LABEL_VC_NAME.to_owned(), vc_name.to_owned());
    annotations.insert(
        constants::LABEL_VC_NAMESPACE.to_owned(),
        vc_namespace.to_owned(),
    );

    let labels = meta.labels.get_or_insert_with(Default::default);
    labels.insert(constants::LABEL_VC_NAME.to_owned(), vc_name.to_owned());
    labels.insert(
        constants::LABEL_VC_NAMESPACE.to_owned(),
        vc_namespace.to_owned(),
    );

    Ok(target)
}

/// Projects a tenant namespace into the super cluster.
///
/// Namespaces are the special case: owner references cannot point across
/// namespaces, so the owning VirtualCluster (name, namespace, UID) is
/// recorded in annotations instead. The gc scanning for orphaned physical
/// namespaces relies on exactly these keys. The projected name comes from
/// [`key::physical_namespace_name`].
pub fn project_namespace(
    cluster: &str,
    vc_name: &str,
    vc_namespace: &str,
    vc_uid: &str,
    ns: &Namespace,
) -> Namespace {
    let mut target = ns.clone();
    let original_uid = target.metadata.uid.clone().unwrap_or_default();
    let original_name = target.metadata.name.clone().unwrap_or_default();

    let annotations = target
        .metadata
        .annotations
        .get_or_insert_with(Default::default);
    annotations.insert(constants::LABEL_CLUSTER.to_owned(), cluster.to_owned());
    annotations.insert(constants::LABEL_UID.to_owned(), original_uid);
    annotations.insert(constants::LABEL_NAMESPACE.to_owned(), original_name.clone());
    annotations.insert(constants::LABEL_VC_NAME.to_owned(), vc_name.to_owned());
    annotations.insert(
        constants::LABEL_VC_NAMESPACE.to_owned(),
        vc_namespace.to_owned(),
    );
    annotations.insert(constants::LABEL_VC_UID.to_owned(), vc_uid.to_owned());

    reset_metadata(&mut target.metadata);
    target.metadata.name = Some(key::physical_namespace_name(cluster, &original_name));
    target
}
