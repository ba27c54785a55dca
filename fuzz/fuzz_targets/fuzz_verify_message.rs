//! Fuzz target for signature verification.
//!
//! Tests that verification handles arbitrary signature blobs gracefully:
//! forged bytes must come back Inauthentic, never panic or crash.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;

use cachet_crypto::{SigningKey, VerifyingKey};
use cachet_protocol::{verify_message, MessageSignature, Verdict};

fn verifying_key() -> &'static VerifyingKey {
    static KEY: OnceLock<VerifyingKey> = OnceLock::new();
    KEY.get_or_init(|| {
        SigningKey::generate(1024)
            .expect("fuzz key generation")
            .verifying_key()
    })
}

fuzz_target!(|data: &[u8]| {
    // Split the input into a message and a claimed signature
    let split = data.len() / 2;
    let (message, sig_bytes) = data.split_at(split);

    let signature = MessageSignature::from_bytes(sig_bytes);
    let verdict = verify_message(verifying_key(), message, &signature);

    // Arbitrary bytes never constitute a valid signature
    assert_eq!(verdict, Verdict::Inauthentic);
});
