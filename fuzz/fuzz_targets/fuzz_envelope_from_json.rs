//! Fuzz target for SignedEnvelope::from_json.
//!
//! Tests that parsing arbitrary text as a wire envelope is handled safely.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cachet_protocol::SignedEnvelope;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Should parse the keyed structure or fail cleanly - never panic
    if let Ok(envelope) = SignedEnvelope::from_json(text) {
        // If successful, verify roundtrip
        let json = envelope.to_json().unwrap();
        let roundtrip = SignedEnvelope::from_json(&json).unwrap();
        assert_eq!(envelope, roundtrip);
    }
});
