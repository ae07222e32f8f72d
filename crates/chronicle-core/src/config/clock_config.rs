use serde::{Deserialize, Serialize};

use super::defaults;

/// Which wire form the codec produces by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireEncoding {
    /// Every entry carries its replica's full identity.
    #[default]
    Full,
    /// Every entry carries only a numeric node id.
    Compact,
}

/// Clock and codec configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Encoding used by `WireCodec::encode`. Default: full.
    pub preferred_encoding: WireEncoding,
    /// Fall back to full encoding when a vector cannot be compacted. Default: true.
    pub fallback_to_full: bool,
    /// Replica count above which encoding logs a warning. Default: 1024.
    pub replica_warn_threshold: usize,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            preferred_encoding: WireEncoding::Full,
            fallback_to_full: defaults::DEFAULT_FALLBACK_TO_FULL,
            replica_warn_threshold: defaults::DEFAULT_REPLICA_WARN_THRESHOLD,
        }
    }
}
