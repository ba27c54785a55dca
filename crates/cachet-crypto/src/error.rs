//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key generation failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Public key components are missing, non-numeric, or unusable.
    #[error("Malformed public key: {reason}")]
    MalformedKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// Signature blob could not be decoded.
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// Private key unusable for signing (for example, too small for the
    /// padding scheme).
    #[error("Signing key error: {0}")]
    SigningKey(String),

    /// Invalid digest length.
    #[error("Invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength {
        /// Expected digest length.
        expected: usize,
        /// Actual digest length.
        actual: usize,
    },

    /// Invalid hex string format.
    #[error("Invalid hex string: {0}")]
    InvalidHexFormat(String),
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
