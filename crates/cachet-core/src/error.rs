//! Error types for caller-level operations.

use thiserror::Error;

/// Errors that can occur during caller-level operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A collaborator failed outright. Distinct from the expected
    /// "unavailable" signal, which collaborators report as `None`.
    #[error("Collaborator error: {0}")]
    Source(String),

    /// Cryptographic error.
    #[error("Crypto error: {0}")]
    Crypto(#[from] cachet_crypto::CryptoError),

    /// Protocol error.
    #[error("Protocol error: {0}")]
    Protocol(#[from] cachet_protocol::ProtocolError),
}

/// Result type for caller-level operations.
pub type Result<T> = std::result::Result<T, CoreError>;
