//! Property-based tests for the authentication protocol.
//!
//! These verify the protocol's contract over arbitrary inputs:
//!
//! - Sign-then-verify always authenticates for the matching key
//! - A different message or key never authenticates
//! - Signing is deterministic
//! - Tampered signatures are rejected without panicking

use std::sync::OnceLock;

use proptest::prelude::*;

use cachet_crypto::{SignatureScheme, SigningKey};

use crate::envelope::{verify_envelope, PublicKeyComponents, SignedEnvelope};
use crate::signing::{sign_message, verify_message, MessageSignature, Verdict};

/// Shared keys across cases; RSA generation per case would dominate the run.
fn signer_key() -> &'static SigningKey {
    static KEY: OnceLock<SigningKey> = OnceLock::new();
    KEY.get_or_init(|| SigningKey::generate(1024).expect("test key generation"))
}

fn other_key() -> &'static SigningKey {
    static KEY: OnceLock<SigningKey> = OnceLock::new();
    KEY.get_or_init(|| SigningKey::generate(1024).expect("test key generation"))
}

proptest! {
    // RSA private-key operations dominate these cases; keep the count sane.
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// verify(m, sign(m, priv), pub) == Authentic for all m.
    #[test]
    fn sign_verify_always_authentic(message: Vec<u8>) {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, &message).unwrap();
        let verdict = verify_message(&key.verifying_key(), &message, &signature);
        prop_assert_eq!(verdict, Verdict::Authentic);
    }

    /// A signature over one message never authenticates another.
    #[test]
    fn different_message_is_inauthentic(m1: Vec<u8>, m2: Vec<u8>) {
        prop_assume!(m1 != m2);
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, &m1).unwrap();
        let verdict = verify_message(&key.verifying_key(), &m2, &signature);
        prop_assert_eq!(verdict, Verdict::Inauthentic);
    }

    /// A signature never authenticates under an unrelated key.
    #[test]
    fn wrong_key_is_inauthentic(message: Vec<u8>) {
        let signature = sign_message(signer_key(), SignatureScheme::Sha1, &message).unwrap();
        let verdict = verify_message(&other_key().verifying_key(), &message, &signature);
        prop_assert_eq!(verdict, Verdict::Inauthentic);
    }

    /// Signing is deterministic.
    #[test]
    fn signing_is_deterministic(message: Vec<u8>) {
        let key = signer_key();
        let s1 = sign_message(key, SignatureScheme::Sha1, &message).unwrap();
        let s2 = sign_message(key, SignatureScheme::Sha1, &message).unwrap();
        prop_assert_eq!(s1.as_bytes(), s2.as_bytes());
    }

    /// Flipping any single byte of a valid signature yields Inauthentic,
    /// never a crash.
    #[test]
    fn single_byte_tamper_is_inauthentic(message: Vec<u8>, index: usize, flip in 1u8..=255) {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, &message).unwrap();

        let mut bytes = signature.into_bytes();
        let index = index % bytes.len();
        bytes[index] ^= flip;

        let tampered = MessageSignature::from_bytes(bytes);
        let verdict = verify_message(&key.verifying_key(), &message, &tampered);
        prop_assert_eq!(verdict, Verdict::Inauthentic);
    }

    /// Envelope JSON round-trips and still verifies.
    #[test]
    fn envelope_roundtrip_preserves_verdict(message: String) {
        let key = signer_key();
        let signature = sign_message(key, SignatureScheme::Sha1, message.as_bytes()).unwrap();
        let envelope = SignedEnvelope::new(message, &signature);

        let parsed = SignedEnvelope::from_json(&envelope.to_json().unwrap()).unwrap();
        let components = PublicKeyComponents::from_verifying_key(&key.verifying_key());
        prop_assert_eq!(verify_envelope(&components, &parsed).unwrap(), Verdict::Authentic);
    }
}
