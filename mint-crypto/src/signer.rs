//! Ed25519 signer.

use std::fmt;

use ed25519_dalek::hazmat::{raw_sign, ExpandedSecretKey};
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha512};

use crate::base58::unpack58;
use crate::{CryptoError, CryptoResult};

/// Length of a private key seed.
pub const SEED_LEN: usize = 32;
/// Length of an expanded private key, `clamped scalar || nonce prefix`.
pub const PRIVATE_KEY_LEN: usize = 64;
/// Length of a public key.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Length of a signature.
pub const SIGNATURE_LEN: usize = 64;

/// Holds an expanded Ed25519 private key and signs messages with it.
#[derive(Clone)]
pub struct Signer {
    private_key: [u8; PRIVATE_KEY_LEN],
    verifying_key: VerifyingKey,
}

impl Signer {
    /// Generates a new random private key using cryptographically secure RNG.
    pub fn generate() -> Self {
        let mut seed = [0u8; SEED_LEN];
        OsRng.fill_bytes(&mut seed);
        tracing::debug!("generated new ed25519 signing key");
        Self::from_seed(&seed)
    }

    /// Expands a 32-byte seed the RFC 8032 way: SHA-512, then clamp.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let mut expanded = [0u8; PRIVATE_KEY_LEN];
        expanded.copy_from_slice(&Sha512::digest(seed));
        Self::from_expanded(expanded)
    }

    /// Derives a signer from existing private key bytes.
    ///
    /// Accepts either a 32-byte seed or a 64-byte expanded secret key
    /// (`scalar || nonce prefix`). The scalar half is clamped on the way in.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let signer = match bytes.len() {
            SEED_LEN => {
                let mut seed = [0u8; SEED_LEN];
                seed.copy_from_slice(bytes);
                Self::from_seed(&seed)
            }
            PRIVATE_KEY_LEN => {
                let mut expanded = [0u8; PRIVATE_KEY_LEN];
                expanded.copy_from_slice(bytes);
                Self::from_expanded(expanded)
            }
            actual => return Err(CryptoError::InvalidKeyLength { actual }),
        };
        tracing::debug!(len = bytes.len(), "derived ed25519 signer from private key");
        Ok(signer)
    }

    /// Derives a signer from checksummed base58 private key text.
    pub fn from_base58(text: &str) -> CryptoResult<Self> {
        Self::from_bytes(&unpack58(text)?)
    }

    fn from_expanded(mut private_key: [u8; PRIVATE_KEY_LEN]) -> Self {
        private_key[0] &= 248;
        private_key[31] &= 127;
        private_key[31] |= 64;
        let secret = ExpandedSecretKey::from_bytes(&private_key);
        let verifying_key = VerifyingKey::from(&secret);
        Self {
            private_key,
            verifying_key,
        }
    }

    /// Public key bytes.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.verifying_key.to_bytes()
    }

    /// Expanded private key bytes, `clamped scalar || nonce prefix`.
    pub fn private_key(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.private_key
    }

    /// Signs a message.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        let secret = ExpandedSecretKey::from_bytes(&self.private_key);
        raw_sign::<Sha512>(&secret, message, &self.verifying_key).to_bytes()
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Verifies an Ed25519 signature.
///
/// Returns `Ok(false)` for a well-formed signature that does not match, and
/// an error when the public key itself is invalid.
pub fn verify(
    public_key: &[u8; PUBLIC_KEY_LEN],
    message: &[u8],
    signature: &[u8; SIGNATURE_LEN],
) -> CryptoResult<bool> {
    let verifying_key = VerifyingKey::from_bytes(public_key).map_err(|e| CryptoError::InvalidKey {
        message: e.to_string(),
    })?;
    let signature = Signature::from_bytes(signature);
    Ok(verifying_key.verify(message, &signature).is_ok())
}
