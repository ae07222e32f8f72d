//! Version vector for causal ordering.
//!
//! Each replica owns one entry, counting the events it has produced. Merge is
//! component-wise max, so vectors form a join-semilattice with the empty
//! vector as identity.
//!
//! # Examples
//!
//! ```
//! use chronicle_clock::{CausalOrder, VersionVector};
//! use chronicle_core::{NodeId, ReplicaId};
//!
//! let a = ReplicaId::from(NodeId(1));
//! let b = ReplicaId::from(NodeId(2));
//!
//! let mut v1 = VersionVector::new();
//! v1.increment(a.clone());
//!
//! let mut v2 = v1.clone();
//! v2.increment(a.clone());
//!
//! let mut w1 = v1.clone();
//! w1.increment(b.clone());
//!
//! assert_eq!(v2.compare(&w1), CausalOrder::Concurrent);
//!
//! let joined = v2.merged(&w1);
//! assert_eq!(joined.get(&a), 2);
//! assert_eq!(joined.get(&b), 1);
//! assert_eq!(joined.compare(&v2), CausalOrder::After);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use chronicle_core::ReplicaId;
use tracing::debug;

use crate::dot::VersionDot;

/// Causal relationship between two version vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CausalOrder {
    /// Every replica has the same version on both sides.
    Equal,
    /// `self` is a causal ancestor of `other`.
    Before,
    /// `self` causally dominates `other`.
    After,
    /// Neither side dominates the other.
    Concurrent,
}

impl CausalOrder {
    /// The relation seen from the other side.
    pub fn reverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            Self::Equal => Self::Equal,
            Self::Concurrent => Self::Concurrent,
        }
    }
}

/// A mapping from replica to the highest version observed for it.
///
/// Absent replicas are at version 0, and zero entries are never stored, so
/// structural equality coincides with causal equality. Entries only move up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionVector {
    /// Replica → highest observed version (always ≥ 1).
    state: HashMap<ReplicaId, u64>,
}

impl VersionVector {
    /// Create an empty vector: no history.
    pub fn new() -> Self {
        Self {
            state: HashMap::new(),
        }
    }

    /// Build a vector from `(replica, version)` pairs.
    ///
    /// Zero versions are dropped and repeated replicas keep their maximum.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ReplicaId, u64)>,
    {
        let mut vector = Self::new();
        for (replica, version) in entries {
            vector.observe(replica, version);
        }
        vector
    }

    /// Record a new local event for `replica` and return its dot.
    ///
    /// Must only be called with the identity of the replica that owns this
    /// vector.
    ///
    /// # Panics
    ///
    /// Panics if the counter is already at `u64::MAX`. Wrapping would corrupt
    /// causal order, and no replica can produce that many events.
    pub fn increment(&mut self, replica: ReplicaId) -> VersionDot {
        let entry = self.state.entry(replica.clone()).or_insert(0);
        *entry = match entry.checked_add(1) {
            Some(next) => next,
            None => panic!("version counter overflow for replica {replica}"),
        };
        VersionDot::new(replica, *entry)
    }

    /// Merge with another vector: component-wise max.
    ///
    /// Commutative, associative, and idempotent, so it is safe to retry and
    /// to apply out of order.
    pub fn merge(&mut self, other: &Self) {
        for (replica, &version) in &other.state {
            self.observe(replica.clone(), version);
        }
        debug!(
            replicas = self.state.len(),
            incoming = other.state.len(),
            "merged version vector"
        );
    }

    /// Non-mutating form of [`merge`](Self::merge).
    pub fn merged(&self, other: &Self) -> Self {
        let mut joined = self.clone();
        joined.merge(other);
        joined
    }

    /// Compare two vectors under the full dominance relation.
    ///
    /// Every replica present on either side is checked; an absent replica
    /// counts as version 0.
    pub fn compare(&self, other: &Self) -> CausalOrder {
        let mut self_ahead = false;
        let mut other_ahead = false;

        for (replica, &version) in &self.state {
            match version.cmp(&other.get(replica)) {
                Ordering::Greater => self_ahead = true,
                Ordering::Less => other_ahead = true,
                Ordering::Equal => {}
            }
        }

        // Replicas only `other` has seen are ahead of our implicit 0.
        if !other_ahead {
            other_ahead = other
                .state
                .keys()
                .any(|replica| !self.state.contains_key(replica));
        }

        match (self_ahead, other_ahead) {
            (false, false) => CausalOrder::Equal,
            (false, true) => CausalOrder::Before,
            (true, false) => CausalOrder::After,
            (true, true) => CausalOrder::Concurrent,
        }
    }

    /// Whether the event `dot` has already been observed.
    pub fn contains(&self, dot: &VersionDot) -> bool {
        self.contains_version(dot.replica(), dot.version())
    }

    /// Whether `replica` has been observed at `version` or later.
    pub fn contains_version(&self, replica: &ReplicaId, version: u64) -> bool {
        self.get(replica) >= version
    }

    /// Returns true if `self` is a causal ancestor of `other`.
    pub fn happened_before(&self, other: &Self) -> bool {
        self.compare(other) == CausalOrder::Before
    }

    /// Returns true if `self` causally dominates `other`.
    pub fn happened_after(&self, other: &Self) -> bool {
        self.compare(other) == CausalOrder::After
    }

    /// Returns true if neither vector dominates the other.
    pub fn is_concurrent_with(&self, other: &Self) -> bool {
        self.compare(other) == CausalOrder::Concurrent
    }

    /// Entries where `self` is strictly ahead of `other`.
    ///
    /// Merging the result into `other` has the same effect as merging `self`.
    pub fn delta_since(&self, other: &Self) -> Self {
        let state = self
            .state
            .iter()
            .filter(|(replica, version)| **version > other.get(replica))
            .map(|(replica, &version)| (replica.clone(), version))
            .collect();
        Self { state }
    }

    /// Version for `replica` (0 if absent).
    pub fn get(&self, replica: &ReplicaId) -> u64 {
        self.state.get(replica).copied().unwrap_or(0)
    }

    /// Number of replicas with a recorded version.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if no event has been observed: the "no history" state.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Replicas in unspecified order.
    pub fn replicas(&self) -> impl Iterator<Item = &ReplicaId> {
        self.state.keys()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ReplicaId, u64)> {
        self.state.iter().map(|(replica, &version)| (replica, version))
    }

    /// Entries sorted by replica, for display and stable encoding.
    pub fn sorted_entries(&self) -> Vec<(&ReplicaId, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Raise `replica` to at least `version`. Zero is a no-op.
    fn observe(&mut self, replica: ReplicaId, version: u64) {
        if version == 0 {
            return;
        }
        let entry = self.state.entry(replica).or_insert(0);
        *entry = (*entry).max(version);
    }
}

impl PartialOrd for VersionVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            CausalOrder::Equal => Some(Ordering::Equal),
            CausalOrder::Before => Some(Ordering::Less),
            CausalOrder::After => Some(Ordering::Greater),
            CausalOrder::Concurrent => None,
        }
    }
}

impl FromIterator<(ReplicaId, u64)> for VersionVector {
    fn from_iter<I: IntoIterator<Item = (ReplicaId, u64)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl fmt::Display for VersionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (replica, version)) in self.sorted_entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{replica}: {version}")?;
        }
        f.write_str("]")
    }
}
