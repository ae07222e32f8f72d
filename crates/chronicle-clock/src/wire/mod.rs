//! Wire representation of version vectors, replica ids, and dots.
//!
//! Two encodings share one envelope ([`VersionVectorMessage`]):
//!
//! - **full**: every entry carries its replica's complete identity. Always possible.
//! - **compact**: every entry carries only a numeric node id. Only possible when
//!   each replica is node-keyed; the receiver restores full identities from a
//!   [`NodeCatalogue`].
//!
//! Byte framing is JSON.

mod catalogue;
mod codec;
mod messages;

pub use catalogue::NodeCatalogue;
pub use codec::{
    decode, decode_dot, dot_from_message, dot_to_message, encode_compact, encode_dot,
    encode_full, from_message, replica_from_message, replica_to_message, to_compact_message,
    to_full_message, WireCodec,
};
pub use messages::{
    ActorAddressMessage, ActorPathMessage, NodeMessage, ReplicaIdMessage, ReplicaVersionEntry,
    UniqueNodeMessage, VersionDotMessage, VersionVectorMessage,
};
