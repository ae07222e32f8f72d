//! Encoding and decoding between clock values and wire messages.
//!
//! # Examples
//!
//! ```
//! use chronicle_clock::wire::{decode, encode_compact, encode_full, NodeCatalogue};
//! use chronicle_clock::VersionVector;
//! use chronicle_core::{ActorIdentity, Node, ReplicaId, UniqueNode};
//!
//! let node = UniqueNode::new(Node::new("system", "127.0.0.1", 7337).unwrap(), 9);
//! let mut vector = VersionVector::new();
//! vector.increment(ReplicaId::from(node.clone()));
//!
//! let bytes = encode_full(&vector).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), vector);
//!
//! let mut catalogue = NodeCatalogue::new();
//! let compact = encode_compact(&vector, &mut catalogue).unwrap();
//! let restored = catalogue.rehydrate(&decode(&compact).unwrap()).unwrap();
//! assert_eq!(restored, vector);
//!
//! vector.increment(ReplicaId::from(ActorIdentity::from("token")));
//! assert!(encode_compact(&vector, &mut catalogue).is_err());
//! ```

use std::collections::HashMap;

use chronicle_core::config::{ClockConfig, WireEncoding};
use chronicle_core::{
    ActorAddress, ActorIdentity, ActorPath, ClockError, Node, NodeId, ReplicaId, UniqueNode,
};
use tracing::{debug, warn};

use super::catalogue::NodeCatalogue;
use super::messages::{
    ActorAddressMessage, ActorPathMessage, NodeMessage, ReplicaIdMessage, ReplicaVersionEntry,
    UniqueNodeMessage, VersionDotMessage, VersionVectorMessage,
};
use crate::dot::VersionDot;
use crate::vector::VersionVector;

// --- Vectors ---

/// Build the full-form message. Entries are sorted by replica.
pub fn to_full_message(vector: &VersionVector) -> VersionVectorMessage {
    let entries = vector
        .sorted_entries()
        .into_iter()
        .map(|(replica, version)| ReplicaVersionEntry {
            replica_id: Some(replica_to_message(replica)),
            version: Some(version),
        })
        .collect();
    VersionVectorMessage {
        entries,
        compact: false,
    }
}

/// Build the compact-form message, registering node-keyed replicas in
/// `catalogue`.
///
/// Fails with [`ClockError::UnsupportedCompaction`] if any replica is keyed by
/// an actor address or actor identity, and with
/// [`ClockError::ConflictingNodeId`] if two replicas in the vector share a node
/// id or a node's id is bound to a different node in `catalogue`. The
/// catalogue is untouched on failure.
pub fn to_compact_message(
    vector: &VersionVector,
    catalogue: &mut NodeCatalogue,
) -> Result<VersionVectorMessage, ClockError> {
    let sorted = vector.sorted_entries();
    let mut claimed: HashMap<NodeId, &ReplicaId> = HashMap::with_capacity(sorted.len());
    let mut entries = Vec::with_capacity(sorted.len());
    for (replica, version) in &sorted {
        let nid = replica
            .compact_node_id()
            .ok_or_else(|| ClockError::UnsupportedCompaction {
                replica: replica.to_string(),
            })?;
        if let Some(first) = claimed.insert(nid, *replica) {
            return Err(ClockError::ConflictingNodeId {
                nid: nid.value(),
                first: first.to_string(),
                second: replica.to_string(),
            });
        }
        if let ReplicaId::UniqueNode(node) = replica {
            catalogue.ensure_compatible(node)?;
        }
        entries.push(ReplicaVersionEntry {
            replica_id: Some(ReplicaIdMessage::UniqueNodeId(nid.value())),
            version: Some(*version),
        });
    }
    for (replica, _) in &sorted {
        if let ReplicaId::UniqueNode(node) = replica {
            catalogue.register(node)?;
        }
    }
    Ok(VersionVectorMessage {
        entries,
        compact: true,
    })
}

/// Rebuild a vector from either message form.
pub fn from_message(message: &VersionVectorMessage) -> Result<VersionVector, ClockError> {
    let mut entries = Vec::with_capacity(message.entries.len());
    for entry in &message.entries {
        let replica = entry
            .replica_id
            .as_ref()
            .ok_or(ClockError::MissingRequiredField {
                field: "replicaId",
                type_name: "ReplicaVersionEntry",
            })?;
        let version = entry.version.ok_or(ClockError::MissingRequiredField {
            field: "version",
            type_name: "ReplicaVersionEntry",
        })?;
        entries.push((replica_from_message(replica)?, version));
    }
    let vector = VersionVector::from_entries(entries);
    debug!(
        entries = message.entries.len(),
        replicas = vector.len(),
        "decoded version vector"
    );
    Ok(vector)
}

/// Serialize `vector` in full form.
pub fn encode_full(vector: &VersionVector) -> Result<Vec<u8>, ClockError> {
    Ok(serde_json::to_vec(&to_full_message(vector))?)
}

/// Serialize `vector` in compact form. See [`to_compact_message`].
pub fn encode_compact(
    vector: &VersionVector,
    catalogue: &mut NodeCatalogue,
) -> Result<Vec<u8>, ClockError> {
    Ok(serde_json::to_vec(&to_compact_message(vector, catalogue)?)?)
}

/// Parse bytes produced by either [`encode_full`] or [`encode_compact`].
///
/// Compact input yields bare node-id keys; use
/// [`NodeCatalogue::rehydrate`] to restore full node identities.
pub fn decode(bytes: &[u8]) -> Result<VersionVector, ClockError> {
    from_message(&parse_message(bytes)?)
}

fn parse_message(bytes: &[u8]) -> Result<VersionVectorMessage, ClockError> {
    serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, "version vector framing rejected");
        ClockError::from(e)
    })
}

// --- Dots ---

pub fn dot_to_message(dot: &VersionDot) -> VersionDotMessage {
    VersionDotMessage {
        replica_id: Some(replica_to_message(dot.replica())),
        version: Some(dot.version()),
    }
}

pub fn dot_from_message(message: &VersionDotMessage) -> Result<VersionDot, ClockError> {
    let replica = message
        .replica_id
        .as_ref()
        .ok_or(ClockError::MissingRequiredField {
            field: "replicaId",
            type_name: "VersionDot",
        })?;
    let version = message.version.ok_or(ClockError::MissingRequiredField {
        field: "version",
        type_name: "VersionDot",
    })?;
    let replica = replica_from_message(replica)?;
    if version == 0 {
        return Err(ClockError::InvalidDotVersion {
            replica: replica.to_string(),
        });
    }
    Ok(VersionDot::new(replica, version))
}

pub fn encode_dot(dot: &VersionDot) -> Result<Vec<u8>, ClockError> {
    Ok(serde_json::to_vec(&dot_to_message(dot))?)
}

pub fn decode_dot(bytes: &[u8]) -> Result<VersionDot, ClockError> {
    let message: VersionDotMessage = serde_json::from_slice(bytes)?;
    dot_from_message(&message)
}

// --- Replica ids ---

pub fn replica_to_message(replica: &ReplicaId) -> ReplicaIdMessage {
    match replica {
        ReplicaId::ActorAddress(address) => {
            ReplicaIdMessage::ActorAddress(ActorAddressMessage {
                node: Some(unique_node_to_message(&address.node)),
                path: Some(ActorPathMessage {
                    segments: address.path.segments.clone(),
                }),
                incarnation: address.incarnation,
            })
        }
        ReplicaId::ActorIdentity(identity) => {
            ReplicaIdMessage::ActorIdentity(identity.as_str().to_string())
        }
        ReplicaId::UniqueNode(node) => ReplicaIdMessage::UniqueNode(unique_node_to_message(node)),
        ReplicaId::UniqueNodeId(nid) => ReplicaIdMessage::UniqueNodeId(nid.value()),
    }
}

pub fn replica_from_message(message: &ReplicaIdMessage) -> Result<ReplicaId, ClockError> {
    let replica = match message {
        ReplicaIdMessage::ActorAddress(address) => {
            let node = address
                .node
                .as_ref()
                .ok_or(ClockError::MissingRequiredField {
                    field: "node",
                    type_name: "ActorAddress",
                })?;
            let path = address
                .path
                .as_ref()
                .ok_or(ClockError::MissingRequiredField {
                    field: "path",
                    type_name: "ActorAddress",
                })?;
            ReplicaId::ActorAddress(ActorAddress::new(
                unique_node_from_message(node)?,
                ActorPath::new(path.segments.iter().cloned()),
                address.incarnation,
            ))
        }
        ReplicaIdMessage::ActorIdentity(token) => {
            ReplicaId::ActorIdentity(ActorIdentity::from(token.as_str()))
        }
        ReplicaIdMessage::UniqueNode(node) => {
            ReplicaId::UniqueNode(unique_node_from_message(node)?)
        }
        ReplicaIdMessage::UniqueNodeId(nid) => ReplicaId::UniqueNodeId(NodeId(*nid)),
    };
    Ok(replica)
}

fn unique_node_to_message(node: &UniqueNode) -> UniqueNodeMessage {
    UniqueNodeMessage {
        node: Some(NodeMessage {
            protocol: node.node.protocol.clone(),
            system: node.node.system_name.clone(),
            hostname: node.node.host.clone(),
            port: node.node.port,
        }),
        nid: Some(node.nid.value()),
    }
}

fn unique_node_from_message(message: &UniqueNodeMessage) -> Result<UniqueNode, ClockError> {
    let node = message.node.as_ref().ok_or(ClockError::MissingRequiredField {
        field: "node",
        type_name: "UniqueNode",
    })?;
    let nid = message.nid.ok_or(ClockError::MissingRequiredField {
        field: "nid",
        type_name: "UniqueNode",
    })?;
    let node = Node::with_protocol(
        node.protocol.as_str(),
        node.system.as_str(),
        node.hostname.as_str(),
        node.port,
    )?;
    Ok(UniqueNode::new(node, NodeId(nid)))
}

// --- Configured codec ---

/// Encoder/decoder pair driven by [`ClockConfig`].
#[derive(Debug, Clone, Default)]
pub struct WireCodec {
    config: ClockConfig,
}

impl WireCodec {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Encode with the preferred encoding.
    ///
    /// When compact is preferred and `fallback_to_full` is set, a vector that
    /// cannot be compacted (unsupported identity or conflicting node id) is
    /// encoded in full instead of failing.
    pub fn encode(
        &self,
        vector: &VersionVector,
        catalogue: &mut NodeCatalogue,
    ) -> Result<Vec<u8>, ClockError> {
        if vector.len() > self.config.replica_warn_threshold {
            warn!(
                replicas = vector.len(),
                threshold = self.config.replica_warn_threshold,
                "version vector exceeds replica warn threshold"
            );
        }
        match self.config.preferred_encoding {
            WireEncoding::Full => encode_full(vector),
            WireEncoding::Compact => match encode_compact(vector, catalogue) {
                Err(
                    err @ (ClockError::UnsupportedCompaction { .. }
                    | ClockError::ConflictingNodeId { .. }),
                ) if self.config.fallback_to_full => {
                    warn!(error = %err, "compaction impossible, falling back to full encoding");
                    encode_full(vector)
                }
                result => result,
            },
        }
    }

    /// Decode either form.
    ///
    /// Compact messages have their node ids restored from `catalogue`; full
    /// messages are returned exactly as sent.
    pub fn decode(
        &self,
        bytes: &[u8],
        catalogue: &NodeCatalogue,
    ) -> Result<VersionVector, ClockError> {
        let message = parse_message(bytes)?;
        let vector = from_message(&message)?;
        if message.compact {
            catalogue.rehydrate(&vector)
        } else {
            Ok(vector)
        }
    }
}
