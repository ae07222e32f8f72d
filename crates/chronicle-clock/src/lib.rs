//! # chronicle-clock
//!
//! Causal history tracking for replicated actors. A [`VersionVector`] records,
//! per replica, how many causally ordered events that replica has produced.
//!
//! ## Types
//!
//! - [`VersionDot`] — a single causal event `(replica, version)`
//! - [`VersionVector`] — replica → highest observed version; the clock proper
//! - [`CausalOrder`] — result of comparing two vectors
//! - [`NodeCatalogue`] — node-id interning table used by the compact encoding
//! - [`WireCodec`] — config-driven front door over the wire functions
//!
//! ## Mathematical Guarantees
//!
//! [`VersionVector::merge`] is a join:
//! 1. **Commutativity**: `merge(A, B) == merge(B, A)`
//! 2. **Associativity**: `merge(A, merge(B, C)) == merge(merge(A, B), C)`
//! 3. **Idempotency**: `merge(A, A) == A`
//! 4. **Identity**: `merge(A, empty) == A`

pub mod dot;
pub mod vector;
pub mod wire;

// Re-export public API
pub use dot::VersionDot;
pub use vector::{CausalOrder, VersionVector};
pub use wire::{
    decode, encode_compact, encode_full, NodeCatalogue, VersionVectorMessage, WireCodec,
};
