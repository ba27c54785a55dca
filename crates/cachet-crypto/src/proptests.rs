//! Property-based tests for cryptographic primitives.
//!
//! These tests use proptest to verify properties hold for arbitrary inputs:
//!
//! - Roundtrip properties (hex encode/decode, component encode/decode)
//! - Consistency properties (same input produces same output)
//! - Error handling properties (invalid inputs are rejected, never panic)

use std::sync::OnceLock;

use proptest::prelude::*;

use crate::{Digest256, SignatureScheme, SigningKey};

/// One shared RSA key for the whole property run; per-case generation would
/// dominate the test time.
fn test_key() -> &'static SigningKey {
    static KEY: OnceLock<SigningKey> = OnceLock::new();
    KEY.get_or_init(|| SigningKey::generate(1024).expect("test key generation"))
}

proptest! {
    // RSA private-key operations dominate the signing cases; keep the
    // count sane.
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Hashing the same bytes twice yields the same digest.
    #[test]
    fn digest_is_deterministic(data: Vec<u8>) {
        prop_assert_eq!(Digest256::hash(&data), Digest256::hash(&data));
    }

    /// Hex encoding always round-trips.
    #[test]
    fn digest_hex_roundtrip(data: Vec<u8>) {
        let digest = Digest256::hash(&data);
        let parsed = Digest256::from_hex(&digest.to_hex()).unwrap();
        prop_assert_eq!(digest, parsed);
    }

    /// Arbitrary strings never panic the hex parser.
    #[test]
    fn digest_from_hex_never_panics(s in ".*") {
        let _ = Digest256::from_hex(&s);
    }

    /// Signing is deterministic for arbitrary payloads.
    #[test]
    fn sign_is_deterministic(payload: Vec<u8>) {
        let key = test_key();
        let s1 = key.sign(SignatureScheme::Sha1, &payload).unwrap();
        let s2 = key.sign(SignatureScheme::Sha1, &payload).unwrap();
        prop_assert_eq!(s1, s2);
    }

    /// Whatever was signed verifies under the matching public key.
    #[test]
    fn sign_verify_roundtrip(payload: Vec<u8>) {
        let key = test_key();
        let signature = key.sign(SignatureScheme::Sha1, &payload).unwrap();
        prop_assert!(key.verifying_key().verify(SignatureScheme::Sha1, &payload, &signature));
    }

    /// Arbitrary bytes are not a valid signature (and never panic the verifier).
    #[test]
    fn verify_rejects_arbitrary_bytes(payload: Vec<u8>, noise: Vec<u8>) {
        let key = test_key().verifying_key();
        prop_assert_eq!(key.verify_any(&payload, &noise), None);
    }
}
