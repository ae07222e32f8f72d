//! # chronicle-core
//!
//! Foundation crate for the Chronicle causal clock.
//! Defines replica identities, errors, and config.
//! The clock crate and its wire codec build on top of this.

pub mod config;
pub mod errors;
pub mod identity;

// Re-export the most commonly used types at the crate root.
pub use config::{ChronicleConfig, ClockConfig, WireEncoding};
pub use errors::{ChronicleError, ChronicleResult, ClockError, IdentityError};
pub use identity::{
    ActorAddress, ActorIdentity, ActorPath, Node, NodeId, ReplicaId, ReplicaKind, UniqueNode,
};
