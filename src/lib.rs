//! Conversion layer between a tenant's virtual cluster and the shared
//! super cluster its workloads actually run in.
//!
//! Every tenant gets an API-compatible object universe of its own; this
//! crate holds the deterministic, pure translations the sync loops apply
//! per object:
//!
//! - [`key`] derives the collision-resistant namespace names that keep
//!   tenants apart inside the super cluster.
//! - [`conversion`] strips super-cluster-assigned identity from objects
//!   crossing the boundary and records their tenant origin in a fixed
//!   annotation vocabulary ([`constants`]).
//! - [`objects`] applies the per-kind rewrites (events, storage and
//!   priority classes, CRDs, persistent volumes) for the downward,
//!   super-to-tenant direction.
//! - [`owner`] is the inverse read: given a projected object or its
//!   namespace, recover the owning tenant.
//! - [`control_plane`] decides which super-cluster service stands in for
//!   the tenant's built-in API endpoint, under the injected feature-gate
//!   snapshot.
//! - [`credential`] locates the tenant's admin kubeconfig.
//!
//! Nothing here watches, queues, or retries: callers own ordering and
//! at-most-one in-flight projection per object identity. Apart from the
//! two seam traits ([`owner::NamespaceLister`], [`credential::SecretReader`])
//! every function is pure over its typed inputs and safe to call from any
//! number of tasks.

use thiserror::Error;

pub mod constants;
pub mod control_plane;
pub mod conversion;
pub mod credential;
pub mod key;
pub mod objects;
pub mod owner;
pub mod tenancy;

pub use featuregate::{FeatureSet, SUPER_CLUSTER_POOLING, SUPER_CLUSTER_SERVICE_NETWORK};
pub use tenancy::VirtualCluster;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to encode owner references: {0}")]
    OwnerReferencesEncode(#[source] serde_json::Error),
    #[error("failed to decode admin kubeconfig annotation: {0}")]
    KubeconfigDecode(#[source] base64::DecodeError),
    #[error("namespace {0:?} not found")]
    NamespaceNotFound(String),
    #[error("secret {namespace}/{name} not found")]
    SecretNotFound { namespace: String, name: String },
    #[error("secret {namespace}/{name} has no {key:?} key")]
    SecretKeyMissing {
        namespace: String,
        name: String,
        key: String,
    },
    #[error("kube error: {0}")]
    Kube(#[from] kube::Error),
}
pub type Result<T> = std::result::Result<T, Error>;
