//! # cachet-core
//!
//! Caller-level flows for the cachet message-authentication stack.
//!
//! The protocol crates are pure; this crate supplies the thin layer that
//! drives them against collaborators:
//!
//! - [`MessageSource`]: where the counterpart's public key and signed
//!   messages come from
//! - [`VerificationOracle`]: server-side confirmation of locally produced
//!   signatures
//! - [`Client`]: the two task flows — sign-and-submit, fetch-and-verify
//!
//! The signing identity is explicit [`ClientConfig`] state, passed per
//! client; there is no process-wide ambient key, so multiple identities can
//! run side by side.
//!
//! ## Example
//!
//! ```ignore
//! use cachet_core::{Client, ClientConfig, MessageVariant};
//! use cachet_crypto::SigningKey;
//!
//! let config = ClientConfig::new(SigningKey::generate(2048)?)?;
//! let client = Client::new(config, source, oracle);
//!
//! // Sign locally, let the counterpart confirm
//! let confirmed = client.send_message("hello", MessageVariant::Correct)?;
//!
//! // Fetch a signed message and verify it here
//! if let Some(verdict) = client.fetch_and_verify(MessageVariant::Correct)? {
//!     println!("{:?}", verdict);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{CoreError, Result};
pub use source::{MessageSource, MessageVariant, VerificationOracle};
