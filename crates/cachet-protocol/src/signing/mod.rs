//! Message signing and verification.
//!
//! This module implements the two sides of the authentication protocol:
//! - Signing-payload construction (hash, then hex) shared by both sides
//! - Signature creation over the payload ([`sign_message`])
//! - Signature verification from the raw received bytes ([`verify_message`])
//!
//! ## Usage
//!
//! ```ignore
//! use cachet_crypto::{SignatureScheme, SigningKey};
//! use cachet_protocol::signing::{sign_message, verify_message, Verdict};
//!
//! let key = SigningKey::generate(2048)?;
//! let signature = sign_message(&key, SignatureScheme::default(), b"hello")?;
//!
//! let verdict = verify_message(&key.verifying_key(), b"hello", &signature);
//! assert_eq!(verdict, Verdict::Authentic);
//! ```

pub mod message_sig;

pub use message_sig::{sign_message, signing_payload, verify_message, MessageSignature, Verdict};
