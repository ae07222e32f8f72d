//! Configuration for the Chronicle clock and wire codec.
//!
//! # Examples
//!
//! ```
//! use chronicle_core::config::{ChronicleConfig, WireEncoding};
//!
//! let config = ChronicleConfig::from_toml_str(
//!     r#"
//!     [clock]
//!     preferred_encoding = "compact"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.clock.preferred_encoding, WireEncoding::Compact);
//! assert!(config.clock.fallback_to_full);
//! ```

mod clock_config;
pub mod defaults;

pub use clock_config::{ClockConfig, WireEncoding};

use serde::{Deserialize, Serialize};

use crate::errors::{ChronicleError, ChronicleResult};

/// Root configuration. Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronicleConfig {
    pub clock: ClockConfig,
}

impl ChronicleConfig {
    /// Parse a TOML document into a config.
    pub fn from_toml_str(source: &str) -> ChronicleResult<Self> {
        toml::from_str(source).map_err(|e| ChronicleError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Render the config back to TOML.
    pub fn to_toml_string(&self) -> ChronicleResult<String> {
        toml::to_string(self).map_err(|e| ChronicleError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
