use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::UniqueNode;

/// Hierarchical actor path, carried as opaque segments.
///
/// Segment naming rules belong to the addressing layer and are not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorPath {
    pub segments: Vec<String>,
}

impl ActorPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Fully-qualified actor address: owning node, path, and incarnation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorAddress {
    pub node: UniqueNode,
    pub path: ActorPath,
    pub incarnation: u32,
}

impl ActorAddress {
    pub fn new(node: UniqueNode, path: ActorPath, incarnation: u32) -> Self {
        Self {
            node,
            path,
            incarnation,
        }
    }
}

impl fmt::Display for ActorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}#{}", self.node, self.path, self.incarnation)
    }
}

/// Opaque, runtime-assigned actor identity token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorIdentity(pub String);

impl ActorIdentity {
    /// Mint a fresh token from a random UUID v4.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ActorIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ActorIdentity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActorIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
