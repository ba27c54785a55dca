//! # cachet-crypto
//!
//! Cryptographic primitives for the cachet message-authentication stack.
//!
//! This crate provides:
//! - **SHA-256** message digests ([`Digest256`]) with hex round-tripping
//! - **RSA PKCS#1 v1.5** signing and verification ([`SigningKey`],
//!   [`VerifyingKey`])
//! - Wire-friendly public key construction from decimal `(n, e)` components
//!
//! ## Security
//!
//! Digest material implements `Zeroize`; digest comparisons are constant
//! time via `subtle`. Key types redact their `Debug` output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod digest;
pub mod error;
pub mod rsa;

#[cfg(test)]
mod proptests;

pub use digest::Digest256;
pub use error::{CryptoError, Result};
pub use crate::rsa::{SignatureScheme, SigningKey, VerifyingKey};
