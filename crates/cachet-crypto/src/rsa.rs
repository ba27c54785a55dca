//! RSA PKCS#1 v1.5 signing primitives.
//!
//! The signing primitive hashes its input with an inner hash algorithm and
//! embeds that algorithm's identifier in the signature (the DigestInfo of
//! PKCS#1 v1.5), so a verifier can recover the scheme from the signature
//! itself. Counterparts in the field sign with a SHA-1 inner hash, which is
//! why [`SignatureScheme::Sha1`] is the default.
//!
//! Public keys arrive from remote parties as two decimal-string integers
//! `(n, e)`; [`VerifyingKey::from_components`] is the only validation the
//! stack performs on them.

use ::rsa::traits::PublicKeyParts;
use ::rsa::{BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use rand::rngs::OsRng;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, Result};

/// Inner hash algorithm identifier embedded in a PKCS#1 v1.5 signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignatureScheme {
    /// SHA-1 inner hash. The default: existing counterparts sign with SHA-1.
    #[default]
    Sha1,

    /// SHA-256 inner hash.
    Sha256,
}

impl SignatureScheme {
    /// All schemes a verifier will accept, in trial order.
    pub const ALL: [SignatureScheme; 2] = [SignatureScheme::Sha1, SignatureScheme::Sha256];

    /// Hash `data` with the scheme's inner hash.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            SignatureScheme::Sha1 => Sha1::digest(data).to_vec(),
            SignatureScheme::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// The PKCS#1 v1.5 padding carrying this scheme's algorithm identifier.
    fn padding(&self) -> Pkcs1v15Sign {
        match self {
            SignatureScheme::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
            SignatureScheme::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        }
    }
}

impl std::fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureScheme::Sha1 => write!(f, "SHA-1"),
            SignatureScheme::Sha256 => write!(f, "SHA-256"),
        }
    }
}

/// RSA private key used to produce PKCS#1 v1.5 signatures.
#[derive(Clone)]
pub struct SigningKey {
    inner: RsaPrivateKey,
}

impl SigningKey {
    /// Generate a fresh RSA signing key of `bits` modulus size.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyGeneration` if key generation fails.
    pub fn generate(bits: usize) -> Result<Self> {
        let inner = RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Wrap an existing RSA private key.
    pub fn from_private_key(inner: RsaPrivateKey) -> Self {
        Self { inner }
    }

    /// The verifying half of this key.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            inner: self.inner.to_public_key(),
        }
    }

    /// Sign `payload` with PKCS#1 v1.5.
    ///
    /// The primitive hashes `payload` with the scheme's inner hash and
    /// embeds the algorithm identifier in the signature. Deterministic:
    /// identical inputs produce byte-identical signatures.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::SigningKey` when the key cannot produce a
    /// signature for the scheme (for example, a modulus too small for the
    /// padding). This propagates to the caller; it is never reported as a
    /// failed authenticity check.
    pub fn sign(&self, scheme: SignatureScheme, payload: &[u8]) -> Result<Vec<u8>> {
        let digest = scheme.digest(payload);
        self.inner
            .sign(scheme.padding(), &digest)
            .map_err(|e| CryptoError::SigningKey(e.to_string()))
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        f.debug_struct("SigningKey")
            .field("modulus_bits", &(self.inner.size() * 8))
            .finish()
    }
}

/// RSA public key used to check PKCS#1 v1.5 signatures.
#[derive(Clone)]
pub struct VerifyingKey {
    inner: RsaPublicKey,
}

impl VerifyingKey {
    /// Build a key from wire components: decimal-string modulus and public
    /// exponent.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::MalformedKey` when either component is empty,
    /// non-numeric (including negative), zero, or rejected by the RSA
    /// implementation.
    pub fn from_components(modulus: &str, exponent: &str) -> Result<Self> {
        let n = parse_component("modulus", modulus)?;
        let e = parse_component("exponent", exponent)?;
        let inner = RsaPublicKey::new(n, e).map_err(|e| CryptoError::MalformedKey {
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }

    /// Wrap an existing RSA public key.
    pub fn from_public_key(inner: RsaPublicKey) -> Self {
        Self { inner }
    }

    /// The key's `(modulus, exponent)` as decimal strings, the wire encoding.
    pub fn to_components(&self) -> (String, String) {
        (self.inner.n().to_string(), self.inner.e().to_string())
    }

    /// Check a PKCS#1 v1.5 signature over `payload` for one scheme.
    ///
    /// `false` is a content mismatch (wrong key, tampered payload, tampered
    /// or truncated signature), never a fault.
    pub fn verify(&self, scheme: SignatureScheme, payload: &[u8], signature: &[u8]) -> bool {
        let digest = scheme.digest(payload);
        self.inner
            .verify(scheme.padding(), &digest, signature)
            .is_ok()
    }

    /// Recover the scheme embedded in `signature` and check it.
    ///
    /// Trials the supported schemes; the algorithm identifier baked into the
    /// PKCS#1 v1.5 DigestInfo lets at most one succeed. Returns the matching
    /// scheme, or `None` when the signature matches under no scheme.
    pub fn verify_any(&self, payload: &[u8], signature: &[u8]) -> Option<SignatureScheme> {
        SignatureScheme::ALL
            .into_iter()
            .find(|scheme| self.verify(*scheme, payload, signature))
    }
}

impl std::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("modulus_bits", &(self.inner.size() * 8))
            .finish()
    }
}

/// Parse one decimal-string key component.
fn parse_component(name: &str, value: &str) -> Result<BigUint> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CryptoError::MalformedKey {
            reason: format!("{} component is missing", name),
        });
    }
    let parsed =
        BigUint::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(|| CryptoError::MalformedKey {
            reason: format!("{} component is not a decimal integer", name),
        })?;
    if parsed == BigUint::from(0u8) {
        return Err(CryptoError::MalformedKey {
            reason: format!("{} component is zero", name),
        });
    }
    Ok(parsed)
}
