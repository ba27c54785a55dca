//! Wire encodings for signed messages and public keys.
//!
//! The boundary speaks a simple keyed JSON structure:
//!
//! ```text
//! {"message": "<UTF-8 text>", "signature": "<base64>"}
//! ```
//!
//! and public keys cross as decimal-string arbitrary-precision integers:
//!
//! ```text
//! {"n": "1522605...", "e": "65537"}
//! ```
//!
//! Decoding failures here are protocol faults, reported as errors; they are
//! never collapsed into a "not authentic" verdict.

use serde::{Deserialize, Serialize};

use cachet_crypto::VerifyingKey;

use crate::error::{ProtocolError, Result};
use crate::signing::{verify_message, MessageSignature, Verdict};

/// A message and its claimed signature, as transported on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    /// UTF-8 message text.
    pub message: String,

    /// Base64-encoded signature blob.
    pub signature: String,
}

impl SignedEnvelope {
    /// Build an envelope from a message and its signature.
    pub fn new(message: impl Into<String>, signature: &MessageSignature) -> Self {
        Self {
            message: message.into(),
            signature: signature.to_base64(),
        }
    }

    /// Decode the base64 signature text.
    ///
    /// # Errors
    ///
    /// Returns the `MalformedSignature` fault when the text is not valid
    /// base64.
    pub fn signature_bytes(&self) -> Result<MessageSignature> {
        MessageSignature::from_base64(&self.signature)
    }

    /// Parse from the boundary JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Serialization` when the text is not the
    /// expected keyed structure.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }

    /// Render to the boundary JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Serialization` when encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }
}

/// Public key components as transported on the wire.
///
/// Two decimal-string arbitrary-precision integers supplied by a remote
/// party. Nothing beyond "present, numeric, non-zero" is checked until the
/// components are turned into a [`VerifyingKey`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyComponents {
    /// Modulus, decimal.
    pub n: String,

    /// Public exponent, decimal.
    pub e: String,
}

impl PublicKeyComponents {
    /// Extract the wire components of a key.
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        let (n, e) = key.to_components();
        Self { n, e }
    }

    /// Build the verifying key these components describe.
    ///
    /// # Errors
    ///
    /// Returns the `MalformedKey` fault when a component is missing-
    /// equivalent (empty), non-numeric, zero, or rejected by the RSA
    /// implementation.
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        Ok(VerifyingKey::from_components(&self.n, &self.e)?)
    }
}

/// Verify a received envelope against wire key components.
///
/// This is the three-outcome operation at the boundary: `Ok(Verdict)` when
/// the check ran to completion, `Err` for the faults (malformed key,
/// undecodable signature text) that the caller must keep distinguishable
/// from [`Verdict::Inauthentic`].
pub fn verify_envelope(
    components: &PublicKeyComponents,
    envelope: &SignedEnvelope,
) -> Result<Verdict> {
    let key = components.verifying_key()?;
    let signature = envelope.signature_bytes()?;
    Ok(verify_message(&key, envelope.message.as_bytes(), &signature))
}
