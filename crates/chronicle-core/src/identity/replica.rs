//! Identity of the owner of a causal history stream.
//!
//! # Examples
//!
//! ```
//! use chronicle_core::identity::{Node, NodeId, ReplicaId, UniqueNode};
//!
//! let node = UniqueNode::new(Node::new("system", "127.0.0.1", 7337).unwrap(), 42);
//! let full = ReplicaId::from(node);
//! assert_eq!(full.compact_node_id(), Some(NodeId(42)));
//!
//! let bare = ReplicaId::from(NodeId(42));
//! assert_eq!(bare.compact_node_id(), Some(NodeId(42)));
//!
//! // Different variants never compare equal, even for the same node.
//! assert_ne!(full, bare);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::actor::{ActorAddress, ActorIdentity};
use super::node::{NodeId, UniqueNode};

/// One of the four ways to name a replica.
///
/// Equality, hashing, and ordering are structural over the active variant.
/// Deployments should pick one canonical variant per replica.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplicaId {
    ActorAddress(ActorAddress),
    ActorIdentity(ActorIdentity),
    UniqueNode(UniqueNode),
    UniqueNodeId(NodeId),
}

/// Fieldless tag of a [`ReplicaId`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplicaKind {
    ActorAddress,
    ActorIdentity,
    UniqueNode,
    UniqueNodeId,
}

impl ReplicaId {
    /// The bare numeric node id, for the two node-keyed variants only.
    pub fn compact_node_id(&self) -> Option<NodeId> {
        match self {
            Self::UniqueNode(node) => Some(node.nid),
            Self::UniqueNodeId(nid) => Some(*nid),
            Self::ActorAddress(_) | Self::ActorIdentity(_) => None,
        }
    }

    pub fn kind(&self) -> ReplicaKind {
        match self {
            Self::ActorAddress(_) => ReplicaKind::ActorAddress,
            Self::ActorIdentity(_) => ReplicaKind::ActorIdentity,
            Self::UniqueNode(_) => ReplicaKind::UniqueNode,
            Self::UniqueNodeId(_) => ReplicaKind::UniqueNodeId,
        }
    }
}

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActorAddress(address) => write!(f, "actor:{address}"),
            Self::ActorIdentity(identity) => write!(f, "identity:{identity}"),
            Self::UniqueNode(node) => write!(f, "node:{node}"),
            Self::UniqueNodeId(nid) => write!(f, "{nid}"),
        }
    }
}

impl From<ActorAddress> for ReplicaId {
    fn from(address: ActorAddress) -> Self {
        Self::ActorAddress(address)
    }
}

impl From<ActorIdentity> for ReplicaId {
    fn from(identity: ActorIdentity) -> Self {
        Self::ActorIdentity(identity)
    }
}

impl From<UniqueNode> for ReplicaId {
    fn from(node: UniqueNode) -> Self {
        Self::UniqueNode(node)
    }
}

impl From<NodeId> for ReplicaId {
    fn from(nid: NodeId) -> Self {
        Self::UniqueNodeId(nid)
    }
}
