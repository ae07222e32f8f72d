//! Error types for every Chronicle subsystem.
//!
//! Each concern has its own enum; [`ChronicleError`] aggregates them so
//! callers that do not care about the source can use `?` across layers.

mod clock_error;
mod identity_error;

pub use clock_error::ClockError;
pub use identity_error::IdentityError;

/// Top-level error for the Chronicle workspace.
#[derive(Debug, thiserror::Error)]
pub enum ChronicleError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Convenience alias used across the workspace.
pub type ChronicleResult<T> = Result<T, ChronicleError>;
