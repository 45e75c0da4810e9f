//! Derivation of the per-tenant namespace names used inside the super
//! cluster. Both functions are pure and total: same inputs, same output,
//! no lookups.

use sha2::{Digest, Sha256};

use crate::constants;
use crate::tenancy::VirtualCluster;

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Unique key for a virtual cluster, used as the root of every physical
/// name derived for it. Format: `<namespace>-<hash6>-<name>`, where
/// `hash6` is the first 6 hex chars of the SHA-256 of the UID, keeping
/// the key short and human-traceable without a lookup table.
pub fn cluster_key(vc: &VirtualCluster) -> String {
    let digest = sha256_hex(vc.uid());
    format!("{}-{}-{}", vc.namespace(), &digest[..6], vc.name())
}

/// Namespace in the super cluster backing the tenant namespace `ns` of
/// the cluster identified by `cluster` (a [`cluster_key`] value).
///
/// The joined name usually fits a DNS label; when it does not, the first
/// 57 chars are kept and 5 hex chars of the full name's digest are
/// appended, so the result is always valid and still near-unique.
pub fn physical_namespace_name(cluster: &str, ns: &str) -> String {
    let joined = format!("{}-{}", cluster, ns);
    if joined.len() <= constants::DNS_LABEL_MAX {
        return joined;
    }
    let digest = sha256_hex(&joined);
    format!("{}-{}", &joined[..57], &digest[..5])
}
