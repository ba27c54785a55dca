//! Message signature types and operations.
//!
//! Signing is layered for wire compatibility with existing counterparts:
//! the message is hashed with SHA-256, the digest is rendered as lowercase
//! hex, and the hex string's ASCII bytes are what the PKCS#1 v1.5 primitive
//! signs (the primitive re-hashes them internally with the scheme's inner
//! hash). Both stages must be preserved exactly; a counterpart speaking
//! this scheme will reject anything else.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;

use cachet_crypto::{CryptoError, Digest256, SignatureScheme, SigningKey, VerifyingKey};

use crate::error::Result;

/// Outcome of a completed signature check.
///
/// Faults (malformed keys, undecodable signature text) are reported through
/// the error channel of the surrounding operation, never as `Inauthentic`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The signature matches the message under the given key.
    Authentic,

    /// Well-formed inputs, but the signature does not match: wrong key,
    /// tampered message, or tampered signature.
    Inauthentic,
}

impl Verdict {
    /// True for [`Verdict::Authentic`].
    pub fn is_authentic(&self) -> bool {
        matches!(self, Verdict::Authentic)
    }
}

/// A PKCS#1 v1.5 signature blob.
///
/// Opaque bytes owned by the message they accompany; transported as base64
/// text at the wire boundary.
#[derive(Clone)]
pub struct MessageSignature(Vec<u8>);

impl MessageSignature {
    /// Create a signature from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the signature as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the signature, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Encode as standard base64 text for the wire.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Decode from standard base64 text.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::MalformedSignature` when the text is not valid
    /// base64. This is an environment fault, distinct from a failed
    /// authenticity check.
    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(text)
            .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Debug for MessageSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only show the first bytes to avoid log pollution
        let short_hex: String = self
            .0
            .iter()
            .take(8)
            .map(|b| format!("{:02x}", b))
            .collect();

        f.debug_struct("MessageSignature")
            .field("bytes", &format!("{}...", short_hex))
            .field("len", &self.0.len())
            .finish()
    }
}

impl PartialEq for MessageSignature {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison for signature bytes
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for MessageSignature {}

/// Compute the payload the signing primitive operates on.
///
/// Lowercase hex of the SHA-256 digest of `message`, as ASCII bytes (64 of
/// them, no separators). Signer and verifier both derive this from the raw
/// message bytes they hold; a digest computed elsewhere is never trusted.
pub fn signing_payload(message: &[u8]) -> Vec<u8> {
    Digest256::hash(message).to_hex().into_bytes()
}

/// Sign a message.
///
/// Computes the signing payload and signs it with PKCS#1 v1.5 under the
/// scheme's inner hash. Pure function of its inputs, and deterministic:
/// repeated calls with identical inputs return byte-identical signatures.
///
/// # Errors
///
/// Propagates `CryptoError::SigningKey` when the private key cannot produce
/// a signature for the scheme.
pub fn sign_message(
    key: &SigningKey,
    scheme: SignatureScheme,
    message: &[u8],
) -> Result<MessageSignature> {
    let payload = signing_payload(message);
    let bytes = key.sign(scheme, &payload)?;
    Ok(MessageSignature(bytes))
}

/// Verify a message signature.
///
/// Recomputes the signing payload from the raw `message` bytes and checks
/// `signature` against it, trialing the supported schemes for the algorithm
/// identifier embedded in the signature. Any mismatch — wrong key, tampered
/// message, tampered or truncated signature — is [`Verdict::Inauthentic`];
/// it is an expected outcome, not an error, and it never panics.
pub fn verify_message(
    key: &VerifyingKey,
    message: &[u8],
    signature: &MessageSignature,
) -> Verdict {
    let payload = signing_payload(message);
    match key.verify_any(&payload, signature.as_bytes()) {
        Some(_) => Verdict::Authentic,
        None => Verdict::Inauthentic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use std::sync::OnceLock;

    fn signer_key() -> &'static SigningKey {
        static KEY: OnceLock<SigningKey> = OnceLock::new();
        KEY.get_or_init(|| SigningKey::generate(1024).expect("test key generation"))
    }

    fn other_key() -> &'static SigningKey {
        static KEY: OnceLock<SigningKey> = OnceLock::new();
        KEY.get_or_init(|| SigningKey::generate(1024).expect("test key generation"))
    }

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        let verdict = verify_message(&key.verifying_key(), b"hello", &signature);
        assert_eq!(verdict, Verdict::Authentic);
    }

    #[test]
    fn test_empty_message_is_valid() {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"").unwrap();
        assert!(verify_message(&key.verifying_key(), b"", &signature).is_authentic());
    }

    #[test]
    fn test_signing_payload_is_hex_of_sha256() {
        // SHA-256("hello"), lowercase hex — pinned: counterparts sign this
        // exact payload.
        assert_eq!(
            signing_payload(b"hello"),
            b"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824".to_vec()
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let key = signer_key();
        let s1 = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        let s2 = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        assert_eq!(s1.as_bytes(), s2.as_bytes());
    }

    #[test]
    fn test_verify_fails_with_tampered_message() {
        // Mirrors the application's correct vs. incorrect test mode
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        let verdict = verify_message(&key.verifying_key(), b"helloFake data", &signature);
        assert_eq!(verdict, Verdict::Inauthentic);
    }

    #[test]
    fn test_verify_fails_with_wrong_key() {
        let signature = sign_message(signer_key(), SignatureScheme::Sha1, b"hello").unwrap();
        let verdict = verify_message(&other_key().verifying_key(), b"hello", &signature);
        assert_eq!(verdict, Verdict::Inauthentic);
    }

    #[test]
    fn test_verify_fails_with_tampered_signature() {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();

        let mut bytes = signature.into_bytes();
        for i in 0..bytes.len() {
            bytes[i] ^= 0x01;
            let tampered = MessageSignature::from_bytes(bytes.clone());
            assert_eq!(
                verify_message(&key.verifying_key(), b"hello", &tampered),
                Verdict::Inauthentic
            );
            bytes[i] ^= 0x01;
        }
    }

    #[test]
    fn test_verify_handles_truncated_signature() {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        let truncated = MessageSignature::from_bytes(&signature.as_bytes()[..10]);
        assert_eq!(
            verify_message(&key.verifying_key(), b"hello", &truncated),
            Verdict::Inauthentic
        );
    }

    #[test]
    fn test_verify_accepts_both_schemes() {
        let key = signer_key();
        for scheme in SignatureScheme::ALL {
            let signature = sign_message(key, scheme, b"hello").unwrap();
            assert!(verify_message(&key.verifying_key(), b"hello", &signature).is_authentic());
        }
    }

    #[test]
    fn test_base64_roundtrip() {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        let decoded = MessageSignature::from_base64(&signature.to_base64()).unwrap();
        assert_eq!(signature, decoded);
    }

    #[test]
    fn test_from_base64_rejects_invalid_text() {
        let err = MessageSignature::from_base64("not-base64!!").unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Crypto(CryptoError::MalformedSignature(_))
        ));
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(Verdict::Authentic.is_authentic());
        assert!(!Verdict::Inauthentic.is_authentic());
    }

    #[test]
    fn test_signature_debug_is_truncated() {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, b"hello").unwrap();
        let debug = format!("{:?}", signature);
        assert!(debug.contains("MessageSignature"));
        assert!(debug.contains("..."));
        assert!(debug.len() < 80);
    }
}
