//! Error types for protocol operations.

use thiserror::Error;

/// Errors that can occur during protocol operations.
///
/// These are faults: the operation could not run. A signature that simply
/// does not match is not an error, it is
/// [`Verdict::Inauthentic`](crate::Verdict::Inauthentic).
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Cryptographic operation failed.
    #[error("Crypto error: {0}")]
    Crypto(#[from] cachet_crypto::CryptoError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
