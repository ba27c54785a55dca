//! Client configuration.
//!
//! The signing identity is explicit configuration, passed per client, so
//! multiple identities can be exercised independently in one process.

use cachet_crypto::{SignatureScheme, SigningKey};

use crate::error::{CoreError, Result};

/// Configuration for a [`Client`](crate::client::Client).
#[derive(Debug)]
pub struct ClientConfig {
    /// Key this client signs with.
    signing_key: SigningKey,

    /// Inner hash scheme for produced signatures.
    scheme: SignatureScheme,
}

impl ClientConfig {
    /// Build a configuration around a signing key with the default
    /// (counterpart-compatible) signature scheme.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` when the key cannot produce a
    /// signature under the scheme, for example a modulus too small for the
    /// padding.
    pub fn new(signing_key: SigningKey) -> Result<Self> {
        Self::with_scheme(signing_key, SignatureScheme::default())
    }

    /// Build a configuration with an explicit signature scheme.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` when the key cannot produce a
    /// signature under the scheme.
    pub fn with_scheme(signing_key: SigningKey, scheme: SignatureScheme) -> Result<Self> {
        // An unusable key should surface here, not mid-task
        signing_key
            .sign(scheme, b"probe")
            .map_err(|e| CoreError::Configuration(e.to_string()))?;

        Ok(Self {
            signing_key,
            scheme,
        })
    }

    /// The configured signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// The configured signature scheme.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }
}
