//! Fixed key vocabulary written onto projected objects, plus the
//! well-known names the syncer agrees on with the provisioning side.
//! Keys are versioned by their group prefix; add new keys, never repurpose
//! old ones, so older projected objects keep resolving.

/// Annotation: cluster key of the owning virtual cluster.
pub const LABEL_CLUSTER: &str = "tenancy.x-k8s.io/cluster";
/// Annotation: UID the object had in the tenant cluster.
pub const LABEL_UID: &str = "tenancy.x-k8s.io/uid";
/// Annotation: namespace the object had in the tenant cluster.
pub const LABEL_NAMESPACE: &str = "tenancy.x-k8s.io/namespace";
/// Annotation: JSON-serialized owner references from the tenant cluster.
pub const LABEL_OWNER_REFERENCES: &str = "tenancy.x-k8s.io/ownerReferences";
/// Annotation on a VirtualCluster: inline base64 admin kubeconfig.
pub const LABEL_ADMIN_KUBECONFIG: &str = "tenancy.x-k8s.io/admin-kubeconfig";
/// Annotation and label: name of the owning VirtualCluster object.
pub const LABEL_VC_NAME: &str = "tenancy.x-k8s.io/vcname";
/// Annotation and label: namespace of the owning VirtualCluster object.
pub const LABEL_VC_NAMESPACE: &str = "tenancy.x-k8s.io/vcnamespace";
/// Annotation: UID of the owning VirtualCluster object.
pub const LABEL_VC_UID: &str = "tenancy.x-k8s.io/vcuid";

/// Name of both the generated admin kubeconfig secret and its data key.
pub const ADMIN_KUBECONFIG_SECRET: &str = "admin-kubeconfig";

pub const DEFAULT_NAMESPACE: &str = "default";
/// The built-in API service every tenant sees in its default namespace.
pub const BOOTSTRAP_SERVICE: &str = "kubernetes";
/// Aggregation-point service used under SuperClusterServiceNetwork.
pub const APISERVER_SERVICE: &str = "apiserver-svc";

/// Namespace names are DNS labels; derived names must stay within this.
pub const DNS_LABEL_MAX: usize = 63;
