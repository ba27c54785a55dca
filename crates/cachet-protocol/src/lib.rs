//! # cachet-protocol
//!
//! The message-authentication protocol: digest construction, signature
//! generation, signature verification, and the wire encodings the
//! counterpart speaks.
//!
//! - **Signer**: SHA-256 the message, hex-encode the digest, sign the hex
//!   payload with RSA PKCS#1 v1.5 ([`sign_message`])
//! - **Verifier**: recompute the payload from the raw received bytes and
//!   check the claimed signature ([`verify_message`], [`verify_envelope`])
//! - **Wire**: JSON `{"message": ..., "signature": ...}` envelopes with
//!   base64 signature text, and decimal-string `(n, e)` key components
//!
//! ## Outcomes
//!
//! A completed check yields [`Verdict::Authentic`] or
//! [`Verdict::Inauthentic`]. When the check itself cannot run (malformed
//! key components, undecodable signature text), the operation returns an
//! error instead — a fault is never folded into `Inauthentic`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod error;
pub mod signing;

#[cfg(test)]
mod proptests;

pub use envelope::{verify_envelope, PublicKeyComponents, SignedEnvelope};
pub use error::{ProtocolError, Result};
pub use signing::{sign_message, signing_payload, verify_message, MessageSignature, Verdict};
