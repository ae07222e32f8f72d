//! Property tests for chronicle-clock: lattice laws, dominance, and codecs.

use proptest::prelude::*;

use chronicle_clock::wire::{decode, encode_compact, encode_full, NodeCatalogue};
use chronicle_clock::{CausalOrder, VersionVector};
use chronicle_core::{
    ActorAddress, ActorIdentity, ActorPath, ClockError, Node, NodeId, ReplicaId, UniqueNode,
};

/// Node-keyed replicas drawn from a small pool so that vectors overlap.
fn node_replica() -> impl Strategy<Value = ReplicaId> {
    (0u64..6).prop_map(|nid| {
        let endpoint = Node::new("system", format!("10.0.0.{nid}"), 7337).unwrap();
        ReplicaId::from(UniqueNode::new(endpoint, nid))
    })
}

fn any_replica() -> impl Strategy<Value = ReplicaId> {
    prop_oneof![
        node_replica(),
        (0u64..4).prop_map(|nid| ReplicaId::from(NodeId(100 + nid))),
        (0u32..3).prop_map(|i| ReplicaId::from(ActorIdentity::from(format!("actor-{i}")))),
        (0u32..3).prop_map(|i| {
            let owner = UniqueNode::new(Node::new("system", "127.0.0.1", 7337).unwrap(), 1);
            ReplicaId::from(ActorAddress::new(owner, ActorPath::new(["user", "w"]), i))
        }),
    ]
}

fn vector_of(replica: impl Strategy<Value = ReplicaId>) -> impl Strategy<Value = VersionVector> {
    prop::collection::vec((replica, 0u64..8), 0..8).prop_map(VersionVector::from_entries)
}

fn any_vector() -> impl Strategy<Value = VersionVector> {
    vector_of(any_replica())
}

// =============================================================================
// Join-semilattice laws
// =============================================================================
proptest! {
    #[test]
    fn merge_is_idempotent(a in any_vector()) {
        prop_assert_eq!(a.merged(&a), a);
    }

    #[test]
    fn merge_is_commutative(a in any_vector(), b in any_vector()) {
        prop_assert_eq!(a.merged(&b), b.merged(&a));
    }

    #[test]
    fn merge_is_associative(a in any_vector(), b in any_vector(), c in any_vector()) {
        prop_assert_eq!(a.merged(&b).merged(&c), a.merged(&b.merged(&c)));
    }

    #[test]
    fn empty_is_merge_identity(a in any_vector()) {
        prop_assert_eq!(a.merged(&VersionVector::new()), a);
    }

    #[test]
    fn merge_dominates_both_inputs(a in any_vector(), b in any_vector()) {
        let joined = a.merged(&b);
        prop_assert!(matches!(joined.compare(&a), CausalOrder::After | CausalOrder::Equal));
        prop_assert!(matches!(joined.compare(&b), CausalOrder::After | CausalOrder::Equal));
    }
}

// =============================================================================
// Monotonicity
// =============================================================================
proptest! {
    #[test]
    fn increment_advances_exactly_one_entry(v in any_vector(), r in any_replica()) {
        let mut next = v.clone();
        let dot = next.increment(r.clone());
        prop_assert_eq!(next.get(&r), v.get(&r) + 1);
        prop_assert_eq!(dot.version(), next.get(&r));
        for (replica, version) in v.iter() {
            if replica != &r {
                prop_assert_eq!(next.get(replica), version);
            }
        }
        prop_assert_eq!(v.compare(&next), CausalOrder::Before);
    }
}

// =============================================================================
// Dominance correctness
// =============================================================================
proptest! {
    #[test]
    fn compare_is_antisymmetric(a in any_vector(), b in any_vector()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn compare_matches_pointwise_definition(a in any_vector(), b in any_vector()) {
        let keys: Vec<&ReplicaId> = a.replicas().chain(b.replicas()).collect();
        let le = keys.iter().all(|k| a.get(k) <= b.get(k));
        let ge = keys.iter().all(|k| a.get(k) >= b.get(k));
        let expected = match (le, ge) {
            (true, true) => CausalOrder::Equal,
            (true, false) => CausalOrder::Before,
            (false, true) => CausalOrder::After,
            (false, false) => CausalOrder::Concurrent,
        };
        prop_assert_eq!(a.compare(&b), expected);
        prop_assert_eq!(a.compare(&b) == CausalOrder::Equal, a == b);
    }
}

// =============================================================================
// Contains consistency
// =============================================================================
proptest! {
    #[test]
    fn contains_matches_single_key_dominance(
        base in any_vector(),
        steps in prop::collection::vec(any_replica(), 1..10),
        cut in 0usize..10,
    ) {
        let mut ancestor = base.clone();
        let mut dots = Vec::new();
        for (i, r) in steps.iter().enumerate() {
            dots.push(ancestor.increment(r.clone()));
            if i == cut.min(steps.len() - 1) {
                break;
            }
        }
        let mut descendant = ancestor.clone();
        for r in &steps {
            dots.push(descendant.increment(r.clone()));
        }

        for dot in &dots {
            prop_assert_eq!(
                ancestor.contains(dot),
                ancestor.get(dot.replica()) >= dot.version()
            );
            prop_assert!(descendant.contains(dot));
        }
    }
}

// =============================================================================
// Wire round-trips
// =============================================================================
proptest! {
    #[test]
    fn full_round_trip(v in any_vector()) {
        let bytes = encode_full(&v).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), v);
    }

    #[test]
    fn compact_round_trip_after_rehydration(v in vector_of(node_replica())) {
        let mut catalogue = NodeCatalogue::new();
        let bytes = encode_compact(&v, &mut catalogue).unwrap();
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(catalogue.rehydrate(&decoded).unwrap(), v);
    }

    #[test]
    fn compact_never_collapses_nodes_sharing_an_id(
        entries in prop::collection::vec((0u64..4, 0u64..3, 1u64..8), 0..8)
    ) {
        // Hosts vary independently of ids, so distinct nodes may share an id.
        let v: VersionVector = entries
            .into_iter()
            .map(|(nid, host, version)| {
                let endpoint = Node::new("system", format!("10.1.0.{host}"), 7337).unwrap();
                (ReplicaId::from(UniqueNode::new(endpoint, nid)), version)
            })
            .collect();
        let mut catalogue = NodeCatalogue::new();
        match encode_compact(&v, &mut catalogue) {
            Ok(bytes) => {
                let decoded = decode(&bytes).unwrap();
                prop_assert_eq!(catalogue.rehydrate(&decoded).unwrap(), v);
            }
            Err(err) => {
                let is_conflicting_node_id = matches!(err, ClockError::ConflictingNodeId { .. });
                prop_assert!(is_conflicting_node_id);
            }
        }
    }

    #[test]
    fn compact_fails_exactly_when_a_key_lacks_node_id(v in any_vector()) {
        let mut catalogue = NodeCatalogue::new();
        let compactable = v.replicas().all(|r| r.compact_node_id().is_some());
        prop_assert_eq!(encode_compact(&v, &mut catalogue).is_ok(), compactable);
    }
}
