// Single source of truth for all default values.

// --- Clock / wire ---
pub const DEFAULT_FALLBACK_TO_FULL: bool = true;
pub const DEFAULT_REPLICA_WARN_THRESHOLD: usize = 1_024;

// --- Node descriptors ---
pub const DEFAULT_PROTOCOL: &str = "sact";
