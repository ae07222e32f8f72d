//! Node-id interning table shared by compact encoders and decoders.

use std::collections::HashMap;

use chronicle_core::{ClockError, NodeId, ReplicaId, UniqueNode};
use tracing::warn;

use crate::vector::VersionVector;

/// Append-only mapping from numeric node id to the full node descriptor.
///
/// Passed explicitly into codec calls. Registering never removes or replaces
/// an entry, so one id always names one node. The catalogue never changes
/// cluster membership.
#[derive(Debug, Clone, Default)]
pub struct NodeCatalogue {
    nodes: HashMap<NodeId, UniqueNode>,
}

impl NodeCatalogue {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Record `node` under its id and return the id.
    ///
    /// Fails with [`ClockError::ConflictingNodeId`] if the id is already bound
    /// to a different node. Existing bindings are never replaced.
    pub fn register(&mut self, node: &UniqueNode) -> Result<NodeId, ClockError> {
        self.ensure_compatible(node)?;
        self.nodes.entry(node.nid).or_insert_with(|| node.clone());
        Ok(node.nid)
    }

    /// Check that registering `node` would not rebind its id.
    pub fn ensure_compatible(&self, node: &UniqueNode) -> Result<(), ClockError> {
        match self.nodes.get(&node.nid) {
            Some(known) if known != node => {
                warn!(
                    nid = node.nid.value(),
                    known = %known,
                    rejected = %node,
                    "node id already bound to a different node"
                );
                Err(ClockError::ConflictingNodeId {
                    nid: node.nid.value(),
                    first: ReplicaId::UniqueNode(known.clone()).to_string(),
                    second: ReplicaId::UniqueNode(node.clone()).to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn resolve(&self, nid: NodeId) -> Option<&UniqueNode> {
        self.nodes.get(&nid)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace bare node-id keys with the nodes they name.
    ///
    /// Ids the catalogue does not know are kept as bare ids. The result has
    /// exactly as many entries as `vector`: if a restored node is already a
    /// key of `vector` the two entries would merge, so this fails with
    /// [`ClockError::ConflictingNodeId`] instead.
    pub fn rehydrate(&self, vector: &VersionVector) -> Result<VersionVector, ClockError> {
        let mut entries = Vec::with_capacity(vector.len());
        for (replica, version) in vector.iter() {
            let restored = match replica {
                ReplicaId::UniqueNodeId(nid) => match self.resolve(*nid) {
                    Some(node) => {
                        let full = ReplicaId::UniqueNode(node.clone());
                        if vector.get(&full) > 0 {
                            return Err(ClockError::ConflictingNodeId {
                                nid: nid.value(),
                                first: full.to_string(),
                                second: replica.to_string(),
                            });
                        }
                        full
                    }
                    None => {
                        warn!(nid = nid.value(), "node id missing from catalogue");
                        replica.clone()
                    }
                },
                _ => replica.clone(),
            };
            entries.push((restored, version));
        }
        Ok(VersionVector::from_entries(entries))
    }
}
