//! Caller-level task flows: sign-and-submit and fetch-and-verify.
//!
//! One [`Client`] drives the two flows of the application against its
//! collaborators. Each invocation is independent and stateless; outcomes go
//! back to the caller, which owns all recovery (retry, abort, notify).

use tracing::{debug, info, warn};

use cachet_protocol::{sign_message, verify_envelope, Verdict};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::source::{MessageSource, MessageVariant, VerificationOracle};

/// Corruption suffix for deliberately incorrect submissions, byte-identical
/// to what the counterpart's test mode expects.
const CORRUPTION_SUFFIX: &str = "Fake data";

/// High-level client for the signing and verification tasks.
pub struct Client<S, O> {
    config: ClientConfig,
    source: S,
    oracle: O,
}

impl<S: MessageSource, O: VerificationOracle> Client<S, O> {
    /// Create a client over its collaborators.
    pub fn new(config: ClientConfig, source: S, oracle: O) -> Self {
        Self {
            config,
            source,
            oracle,
        }
    }

    /// Sign `message` and submit it for remote confirmation.
    ///
    /// The signature always covers the genuine message. For
    /// [`MessageVariant::Corrupted`] the submitted text carries the
    /// corruption suffix, so the counterpart's check must come back
    /// negative — the application's way of exercising its failure path.
    ///
    /// Returns the oracle's confirmation.
    ///
    /// # Errors
    ///
    /// Signing-key faults and oracle failures propagate; a negative
    /// confirmation is a normal `Ok(false)`.
    pub fn send_message(&self, message: &str, variant: MessageVariant) -> Result<bool> {
        info!(?variant, "signing outgoing message");

        let signature = sign_message(
            self.config.signing_key(),
            self.config.scheme(),
            message.as_bytes(),
        )?;

        let submitted = match variant {
            MessageVariant::Correct => message.to_string(),
            MessageVariant::Corrupted => format!("{message}{CORRUPTION_SUFFIX}"),
        };

        debug!(message = %submitted, "submitting message for confirmation");
        let confirmed = self.oracle.confirm(&submitted, signature.as_bytes())?;
        if confirmed {
            info!("counterpart confirmed the signature");
        } else {
            warn!("counterpart rejected the signature");
        }
        Ok(confirmed)
    }

    /// Fetch a signed message from the source and verify it locally.
    ///
    /// Returns `None` when the source cannot supply a key or a message —
    /// the expected "unavailable" signal, not a fault.
    ///
    /// # Errors
    ///
    /// Protocol faults (malformed key components, undecodable signature
    /// text) and collaborator failures propagate; a failed authenticity
    /// check is a normal `Ok(Some(Verdict::Inauthentic))`.
    pub fn fetch_and_verify(&self, variant: MessageVariant) -> Result<Option<Verdict>> {
        let Some(components) = self.source.public_key()? else {
            warn!("counterpart public key unavailable");
            return Ok(None);
        };

        let Some(envelope) = self.source.signed_message(variant)? else {
            warn!("counterpart message unavailable");
            return Ok(None);
        };

        info!(message = %envelope.message, "verifying received message");
        let verdict = verify_envelope(&components, &envelope)?;
        match verdict {
            Verdict::Authentic => info!("received message is authentic"),
            Verdict::Inauthentic => warn!("received message is not authentic"),
        }
        Ok(Some(verdict))
    }
}
