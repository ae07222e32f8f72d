//! A single causal event.

use std::fmt;

use chronicle_core::ReplicaId;

/// One causal event: the `version`-th event produced by `replica`.
///
/// Dots are only minted by [`VersionVector::increment`](crate::VersionVector::increment)
/// and by the wire decoder, so `version` is always at least 1.
///
/// The derived ordering is lexicographic by `(replica, version)`. It exists for
/// deterministic display and carries no causal meaning across replicas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionDot {
    replica: ReplicaId,
    version: u64,
}

impl VersionDot {
    pub(crate) fn new(replica: ReplicaId, version: u64) -> Self {
        debug_assert!(version >= 1, "dots are never minted for version 0");
        Self { replica, version }
    }

    pub fn replica(&self) -> &ReplicaId {
        &self.replica
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl fmt::Display for VersionDot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dot({},{})", self.replica, self.version)
    }
}
