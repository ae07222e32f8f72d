use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::IdentityError;

/// Bare numeric node discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nid:{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Network endpoint of a cluster member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    pub protocol: String,
    pub system_name: String,
    pub host: String,
    pub port: u16,
}

impl Node {
    /// Build a node endpoint using the default protocol.
    ///
    /// Fails if `host` is empty or `port` is 0.
    pub fn new(
        system_name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, IdentityError> {
        Self::with_protocol(defaults::DEFAULT_PROTOCOL, system_name, host, port)
    }

    /// Build a node endpoint with an explicit protocol.
    pub fn with_protocol(
        protocol: impl Into<String>,
        system_name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, IdentityError> {
        let host = host.into();
        if host.is_empty() {
            return Err(IdentityError::EmptyHost);
        }
        if port == 0 {
            return Err(IdentityError::InvalidPort { port });
        }
        Ok(Self {
            protocol: protocol.into(),
            system_name: system_name.into(),
            host,
            port,
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}@{}:{}",
            self.protocol, self.system_name, self.host, self.port
        )
    }
}

/// A node endpoint paired with the discriminator that makes it unique
/// across restarts on the same host and port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniqueNode {
    pub node: Node,
    pub nid: NodeId,
}

impl UniqueNode {
    pub fn new(node: Node, nid: impl Into<NodeId>) -> Self {
        Self {
            node,
            nid: nid.into(),
        }
    }
}

impl fmt::Display for UniqueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.node, self.nid.0)
    }
}
