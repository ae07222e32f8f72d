//! Schema of the wire messages.
//!
//! Required sub-fields are `Option` so that their absence survives parsing and
//! is reported as `MissingRequiredField` by the decoder.

use serde::{Deserialize, Serialize};

/// Envelope for both the full and the compact encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionVectorMessage {
    #[serde(default)]
    pub entries: Vec<ReplicaVersionEntry>,
    /// Set by the compact encoder. Only compact messages are rehydrated.
    #[serde(default, skip_serializing_if = "is_false")]
    pub compact: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicaVersionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_id: Option<ReplicaIdMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

/// Exactly one identity shape per message.
///
/// The compact encoding only ever produces `UniqueNodeId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplicaIdMessage {
    ActorAddress(ActorAddressMessage),
    ActorIdentity(String),
    UniqueNode(UniqueNodeMessage),
    UniqueNodeId(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorAddressMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<UniqueNodeMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<ActorPathMessage>,
    #[serde(default)]
    pub incarnation: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPathMessage {
    #[serde(default)]
    pub segments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueNodeMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nid: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMessage {
    pub protocol: String,
    pub system: String,
    pub hostname: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDotMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_id: Option<ReplicaIdMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}
