//! Feature-gate snapshots for the syncer.
//!
//! Gates are carried as an explicit, read-only [`FeatureSet`] value handed
//! to the functions that consult them, so behavior stays reproducible in
//! tests without mutating process-wide state.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Route the tenant bootstrap service to the real apiserver service
/// living in the cluster-key namespace.
pub const SUPER_CLUSTER_SERVICE_NETWORK: &str = "SuperClusterServiceNetwork";
/// Share a pool of super clusters; the service in the tenant default
/// namespace is used as-is. Takes precedence over
/// [`SUPER_CLUSTER_SERVICE_NETWORK`] when both are enabled.
pub const SUPER_CLUSTER_POOLING: &str = "SuperClusterPooling";

const KNOWN_GATES: &[(&str, bool)] = &[
    (SUPER_CLUSTER_SERVICE_NETWORK, false),
    (SUPER_CLUSTER_POOLING, false),
];

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown feature gate {0:?}")]
    UnknownGate(String),
    #[error("invalid value {value:?} for feature gate {gate:?}")]
    InvalidValue { gate: String, value: String },
}
pub type Result<T> = std::result::Result<T, Error>;

/// An immutable-once-built set of named on/off toggles.
#[derive(Clone, Debug)]
pub struct FeatureSet {
    gates: FxHashMap<&'static str, bool>,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            gates: KNOWN_GATES.iter().copied().collect(),
        }
    }
}

impl FeatureSet {
    /// Whether `gate` is enabled. Unknown gates read as disabled.
    pub fn enabled(&self, gate: &str) -> bool {
        self.gates.get(gate).copied().unwrap_or(false)
    }

    pub fn set(&mut self, gate: &str, on: bool) -> Result<()> {
        let (name, _) = *KNOWN_GATES
            .iter()
            .find(|(name, _)| *name == gate)
            .ok_or_else(|| Error::UnknownGate(gate.to_owned()))?;
        self.gates.insert(name, on);
        Ok(())
    }

    pub fn with(mut self, gate: &str, on: bool) -> Result<Self> {
        self.set(gate, on)?;
        Ok(self)
    }

    /// Parse a `"Gate=true,OtherGate=false"` flag string, starting from
    /// the defaults.
    pub fn from_flags(flags: &str) -> Result<Self> {
        let mut set = Self::default();
        for part in flags.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (gate, value) = part
                .split_once('=')
                .ok_or_else(|| Error::InvalidValue {
                    gate: part.to_owned(),
                    value: String::new(),
                })?;
            let on = value.parse::<bool>().map_err(|_| Error::InvalidValue {
                gate: gate.to_owned(),
                value: value.to_owned(),
            })?;
            set.set(gate, on)?;
        }
        Ok(set)
    }
}
