//! Fuzz target for MessageSignature::from_base64.
//!
//! Tests that decoding arbitrary text as a signature blob is handled safely.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cachet_protocol::MessageSignature;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Should decode valid base64 or fail cleanly - never panic
    if let Ok(signature) = MessageSignature::from_base64(text) {
        // If successful, verify roundtrip
        let roundtrip = MessageSignature::from_base64(&signature.to_base64()).unwrap();
        assert_eq!(signature, roundtrip);
    }
});
