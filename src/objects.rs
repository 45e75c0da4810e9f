//! Per-kind projections for the downward, super-to-tenant direction.
//! All of them assume an already-typed source object and do no I/O;
//! failures, where possible at all, come from the metadata translation
//! underneath and are propagated unchanged.

use k8s_openapi::api::core::v1::{Event, PersistentVolume, PersistentVolumeClaim};
use k8s_openapi::api::scheduling::v1::PriorityClass;
use k8s_openapi::api::storage::v1::StorageClass;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1beta1::CustomResourceDefinition;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::conversion::{project_metadata, reset_metadata};
use crate::Result;

/// Rebinds a super-cluster event to the tenant object it concerns.
///
/// The involved-object pointer gets the tenant object's namespace and UID
/// and drops its stale resource version. Free-text messages often embed
/// physical names, which metadata stripping cannot catch, so every
/// occurrence of the cluster key (with and without the trailing `-`) is
/// removed from the message.
pub fn virtual_event(cluster: &str, p_event: &Event, v_obj: &ObjectMeta) -> Event {
    let mut v_event = p_event.clone();
    reset_metadata(&mut v_event.metadata);
    v_event.metadata.namespace = v_obj.namespace.clone();
    v_event.involved_object.namespace = v_obj.namespace.clone();
    v_event.involved_object.uid = v_obj.uid.clone();
    v_event.involved_object.resource_version = None;

    if let Some(message) = v_event.message.take() {
        let prefixed = format!("{}-", cluster);
        v_event.message = Some(message.replace(&prefixed, "").replace(cluster, ""));
    }
    v_event
}

/// Storage classes are cluster-scoped policy objects with nothing tenant
/// specific to rewrite: copy and reset.
pub fn virtual_storage_class(p_storage_class: &StorageClass) -> StorageClass {
    let mut v_storage_class = p_storage_class.clone();
    reset_metadata(&mut v_storage_class.metadata);
    v_storage_class
}

pub fn virtual_priority_class(p_priority_class: &PriorityClass) -> PriorityClass {
    let mut v_priority_class = p_priority_class.clone();
    reset_metadata(&mut v_priority_class.metadata);
    v_priority_class
}

pub fn virtual_crd(p_crd: &CustomResourceDefinition) -> CustomResourceDefinition {
    let mut v_crd = p_crd.clone();
    reset_metadata(&mut v_crd.metadata);
    v_crd
}

/// Projects a super-cluster persistent volume for the tenant, bound to
/// the tenant's matching claim. Volume-to-claim binding lives in the
/// claim ref's namespace and UID, so both are rewritten to the tenant
/// claim; the physical binding target must not leak through.
pub fn virtual_persistent_volume(
    cluster: &str,
    vc_namespace: &str,
    vc_name: &str,
    p_pv: &PersistentVolume,
    v_pvc: &PersistentVolumeClaim,
) -> Result<PersistentVolume> {
    let mut v_pv = project_metadata(cluster, vc_namespace, vc_name, "", p_pv)?;
    if let Some(claim_ref) = v_pv.spec.as_mut().and_then(|spec| spec.claim_ref.as_mut()) {
        claim_ref.namespace = v_pvc.metadata.namespace.clone();
        claim_ref.uid = v_pvc.metadata.uid.clone();
    }
    Ok(v_pv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{ObjectReference, PersistentVolumeSpec};

    const CLUSTER: &str = "team-a-9f86d0-dev";

    fn physical_event() -> Event {
        Event {
            metadata: ObjectMeta {
                name: Some("web.1234".to_owned()),
                namespace: Some("team-a-9f86d0-dev-default".to_owned()),
                uid: Some("ev-uid".to_owned()),
                resource_version: Some("9".to_owned()),
                ..Default::default()
            },
            involved_object: ObjectReference {
                kind: Some("Pod".to_owned()),
                name: Some("web".to_owned()),
                namespace: Some("team-a-9f86d0-dev-default".to_owned()),
                uid: Some("p-pod-uid".to_owned()),
                resource_version: Some("8".to_owned()),
                ..Default::default()
            },
            message: Some(format!(
                "Successfully assigned {}-default/web to node-1",
                CLUSTER
            )),
            reason: Some("Scheduled".to_owned()),
            ..Default::default()
        }
    }

    fn tenant_pod_meta() -> ObjectMeta {
        ObjectMeta {
            name: Some("web".to_owned()),
            namespace: Some("default".to_owned()),
            uid: Some("v-pod-uid".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn event_rebinds_to_tenant_object() {
        let v_event = virtual_event(CLUSTER, &physical_event(), &tenant_pod_meta());
        assert_eq!(v_event.metadata.namespace.as_deref(), Some("default"));
        assert_eq!(v_event.metadata.uid, None);
        assert_eq!(v_event.involved_object.namespace.as_deref(), Some("default"));
        assert_eq!(v_event.involved_object.uid.as_deref(), Some("v-pod-uid"));
        assert_eq!(v_event.involved_object.resource_version, None);
    }

    #[test]
    fn event_message_is_scrubbed_of_the_cluster_key() {
        let v_event = virtual_event(CLUSTER, &physical_event(), &tenant_pod_meta());
        let message = v_event.message.unwrap();
        assert!(!message.contains(CLUSTER), "{:?}", message);
        assert_eq!(message, "Successfully assigned default/web to node-1");

        // bare key, no trailing separator
        let mut p_event = physical_event();
        p_event.message = Some(format!("namespace {} is full", CLUSTER));
        let scrubbed = virtual_event(CLUSTER, &p_event, &tenant_pod_meta())
            .message
            .unwrap();
        assert!(!scrubbed.contains(CLUSTER));
    }

    #[test]
    fn class_projections_only_reset_identity() {
        let p_sc = StorageClass {
            metadata: ObjectMeta {
                name: Some("fast".to_owned()),
                uid: Some("sc-uid".to_owned()),
                resource_version: Some("3".to_owned()),
                ..Default::default()
            },
            provisioner: "example.com/ssd".to_owned(),
            ..Default::default()
        };
        let v_sc = virtual_storage_class(&p_sc);
        assert_eq!(v_sc.metadata.name.as_deref(), Some("fast"));
        assert_eq!(v_sc.metadata.uid, None);
        assert_eq!(v_sc.provisioner, "example.com/ssd");

        let p_pc = PriorityClass {
            metadata: ObjectMeta {
                name: Some("high".to_owned()),
                uid: Some("pc-uid".to_owned()),
                ..Default::default()
            },
            value: 1000,
            ..Default::default()
        };
        let v_pc = virtual_priority_class(&p_pc);
        assert_eq!(v_pc.metadata.uid, None);
        assert_eq!(v_pc.value, 1000);

        let p_crd = CustomResourceDefinition {
            metadata: ObjectMeta {
                name: Some("widgets.example.com".to_owned()),
                resource_version: Some("5".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        };
        let v_crd = virtual_crd(&p_crd);
        assert_eq!(v_crd.metadata.resource_version, None);
        assert_eq!(v_crd.metadata.name.as_deref(), Some("widgets.example.com"));
    }

    #[test]
    fn persistent_volume_binds_to_tenant_claim() {
        let p_pv = PersistentVolume {
            metadata: ObjectMeta {
                name: Some("pv-1".to_owned()),
                uid: Some("pv-uid".to_owned()),
                ..Default::default()
            },
            spec: Some(PersistentVolumeSpec {
                claim_ref: Some(ObjectReference {
                    kind: Some("PersistentVolumeClaim".to_owned()),
                    name: Some("data".to_owned()),
                    namespace: Some("team-a-9f86d0-dev-default".to_owned()),
                    uid: Some("p-pvc-uid".to_owned()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let v_pvc = PersistentVolumeClaim {
            metadata: ObjectMeta {
                name: Some("data".to_owned()),
                namespace: Some("default".to_owned()),
                uid: Some("v-pvc-uid".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        };

        let v_pv = virtual_persistent_volume(CLUSTER, "team-a", "dev", &p_pv, &v_pvc).unwrap();
        let claim_ref = v_pv.spec.as_ref().unwrap().claim_ref.as_ref().unwrap();
        assert_eq!(claim_ref.namespace.as_deref(), Some("default"));
        assert_eq!(claim_ref.uid.as_deref(), Some("v-pvc-uid"));
        assert_eq!(v_pv.metadata.uid, None);
        assert!(v_pv.metadata.annotations.is_some());
    }
}
