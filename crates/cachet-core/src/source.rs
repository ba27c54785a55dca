//! Collaborator seams: where keys, messages, and confirmations come from.
//!
//! The protocol core performs no I/O. Retrieval of the counterpart's public
//! key and signed messages, and server-side confirmation of signatures this
//! process produces, live behind these traits. An unavailable collaborator
//! answers `Ok(None)` — that is the expected signal the caller handles, not
//! an error; `Err` is reserved for outright failures.

use cachet_protocol::{PublicKeyComponents, SignedEnvelope};

use crate::error::Result;

/// Which flavor of exercise message to work with.
///
/// The protocol is deliberately exercised with both genuine and corrupted
/// payloads so the negative path stays tested end to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageVariant {
    /// The genuine article: signature and message agree.
    Correct,

    /// A payload whose signature check must fail.
    Corrupted,
}

/// Source of counterpart key material and signed messages.
pub trait MessageSource {
    /// The counterpart's public key components, or `None` when the
    /// counterpart is unreachable.
    fn public_key(&self) -> Result<Option<PublicKeyComponents>>;

    /// A signed message of the requested variant, or `None` when the
    /// counterpart is unreachable.
    fn signed_message(&self, variant: MessageVariant) -> Result<Option<SignedEnvelope>>;
}

/// Remote confirmation of a locally produced signature.
///
/// Treated as an opaque oracle: the counterpart answers whether the
/// signature matches the submitted message under this process's key.
pub trait VerificationOracle {
    /// Ask the counterpart whether `signature` matches `message`.
    fn confirm(&self, message: &str, signature: &[u8]) -> Result<bool>;
}
