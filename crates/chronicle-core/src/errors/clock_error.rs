use super::IdentityError;

/// Version vector and wire codec errors.
///
/// All of these are recoverable: a malformed message is reported to the
/// caller, who decides whether to drop it or ask for a retransmission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// A required field was absent from a decoded wire message.
    #[error("missing required field `{field}` in {type_name}")]
    MissingRequiredField {
        /// Wire name of the absent field.
        field: &'static str,
        /// Wire message type that should have carried it.
        type_name: &'static str,
    },

    /// Compact encoding was requested for a replica with no numeric node id.
    #[error("replica {replica} has no compact node id")]
    UnsupportedCompaction {
        /// Display form of the offending replica.
        replica: String,
    },

    /// Two distinct replicas would share one numeric node id on the wire.
    #[error("node id {nid} names both {first} and {second}")]
    ConflictingNodeId {
        /// The shared numeric node id.
        nid: u64,
        /// Replica already holding the id.
        first: String,
        /// Replica that would collapse into it.
        second: String,
    },

    /// A dot arrived with version 0, which is never a materialized event.
    #[error("dot for replica {replica} carries version 0")]
    InvalidDotVersion {
        /// Display form of the dot's replica.
        replica: String,
    },

    /// A decoded identity payload was rejected by its own constructor.
    #[error("invalid replica identity: {0}")]
    InvalidIdentity(#[from] IdentityError),

    /// The byte framing could not be produced or parsed.
    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for ClockError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
