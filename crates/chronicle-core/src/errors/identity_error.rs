/// Construction errors for node descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("node host must not be empty")]
    EmptyHost,

    #[error("invalid node port: {port}")]
    InvalidPort { port: u16 },
}
