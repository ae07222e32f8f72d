//! Replica identities and the collaborator values they are built from.
//!
//! Node descriptors come from cluster membership and actor addresses from
//! the addressing layer; this module only carries their shapes.

mod actor;
mod node;
mod replica;

pub use actor::{ActorAddress, ActorIdentity, ActorPath};
pub use node::{Node, NodeId, UniqueNode};
pub use replica::{ReplicaId, ReplicaKind};
