//! Decides which super-cluster service stands in for the tenant's
//! built-in API endpoint.

use k8s_openapi::api::core::v1::Service;

use crate::constants;
use crate::key;
use featuregate::FeatureSet;

/// Whether `service` is the bootstrap/default API endpoint the tenant
/// control plane identified by `cluster` should see as its own.
///
/// Gate precedence, in order:
/// 1. default: the cluster's projected default namespace, service
///    `kubernetes`;
/// 2. `SuperClusterServiceNetwork`: the cluster-key namespace itself,
///    service `apiserver-svc`;
/// 3. `SuperClusterPooling`: back to the tenant defaults, overriding 2
///    when both gates are enabled.
pub fn is_control_plane_service(service: &Service, cluster: &str, gates: &FeatureSet) -> bool {
    let mut expected_namespace = key::physical_namespace_name(cluster, constants::DEFAULT_NAMESPACE);
    let mut expected_name = constants::BOOTSTRAP_SERVICE;

    if gates.enabled(featuregate::SUPER_CLUSTER_SERVICE_NETWORK) {
        expected_namespace = cluster.to_owned();
        expected_name = constants::APISERVER_SERVICE;
    }
    // pooling wins over service networking
    if gates.enabled(featuregate::SUPER_CLUSTER_POOLING) {
        expected_namespace = constants::DEFAULT_NAMESPACE.to_owned();
        expected_name = constants::BOOTSTRAP_SERVICE;
    }

    service.metadata.namespace.as_deref() == Some(expected_namespace.as_str())
        && service.metadata.name.as_deref() == Some(expected_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    const CLUSTER: &str = "team-a-9f86d0-dev";

    fn service(namespace: &str, name: &str) -> Service {
        Service {
            metadata: ObjectMeta {
                name: Some(name.to_owned()),
                namespace: Some(namespace.to_owned()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn default_expects_the_projected_default_namespace() {
        let gates = FeatureSet::default();
        let expected_ns = key::physical_namespace_name(CLUSTER, "default");
        assert!(is_control_plane_service(
            &service(&expected_ns, "kubernetes"),
            CLUSTER,
            &gates
        ));
        assert!(!is_control_plane_service(
            &service(&expected_ns, "apiserver-svc"),
            CLUSTER,
            &gates
        ));
        assert!(!is_control_plane_service(
            &service("default", "kubernetes"),
            CLUSTER,
            &gates
        ));
    }

    #[test]
    fn service_network_expects_the_apiserver_service() {
        let gates = FeatureSet::default()
            .with(featuregate::SUPER_CLUSTER_SERVICE_NETWORK, true)
            .unwrap();
        assert!(is_control_plane_service(
            &service(CLUSTER, "apiserver-svc"),
            CLUSTER,
            &gates
        ));
        let projected_default = key::physical_namespace_name(CLUSTER, "default");
        assert!(!is_control_plane_service(
            &service(&projected_default, "kubernetes"),
            CLUSTER,
            &gates
        ));
    }

    #[test]
    fn pooling_wins_when_both_gates_are_enabled() {
        let gates = FeatureSet::default()
            .with(featuregate::SUPER_CLUSTER_SERVICE_NETWORK, true)
            .unwrap()
            .with(featuregate::SUPER_CLUSTER_POOLING, true)
            .unwrap();
        assert!(is_control_plane_service(
            &service("default", "kubernetes"),
            CLUSTER,
            &gates
        ));
        assert!(!is_control_plane_service(
            &service(CLUSTER, "apiserver-svc"),
            CLUSTER,
            &gates
        ));
    }

    #[test]
    fn same_inputs_same_answer() {
        let gates = FeatureSet::default();
        let svc = service(&key::physical_namespace_name(CLUSTER, "default"), "kubernetes");
        let first = is_control_plane_service(&svc, CLUSTER, &gates);
        assert_eq!(first, is_control_plane_service(&svc, CLUSTER, &gates));
    }
}
