//! Account key material.
//!
//! The SDK's private key is the base64 encoding of 64 bytes: the Ed25519 seed
//! followed by the public key. Only the first 32 bytes are needed to sign.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use std::fmt;

use crate::constants::{KEY_LEN_BYTES, SIGNATURE_LEN_BYTES};
use crate::encoding::encode_address;
use crate::error::{Result, UtilError};

/// An Ed25519 keypair for an account.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; KEY_LEN_BYTES]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create from a base64 private key.
    ///
    /// Only the leading 32-byte seed is read; anything after it is ignored.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let bytes = STANDARD.decode(private_key)?;
        let seed: [u8; KEY_LEN_BYTES] = bytes
            .get(..KEY_LEN_BYTES)
            .and_then(|s| s.try_into().ok())
            .ok_or(UtilError::InvalidLength {
                what: "private key",
                expected: KEY_LEN_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self::from_seed(&seed))
    }

    /// Get the raw public key.
    pub fn public_key(&self) -> [u8; KEY_LEN_BYTES] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Get the account address.
    pub fn address(&self) -> String {
        encode_address(&self.public_key())
    }

    /// Get the base64 private key (seed followed by public key).
    pub fn private_key(&self) -> String {
        STANDARD.encode(self.signing_key.to_keypair_bytes())
    }

    /// Sign a message as-is, without any domain prefix.
    ///
    /// These signatures are not domain-separated: a signature over bytes that
    /// happen to encode a transaction is a valid transaction signature. Use
    /// [`crate::sign_bytes`] for arbitrary data.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN_BYTES] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

/// Generate a new account as `(private_key, address)`.
pub fn generate_account() -> (String, String) {
    let keypair = Keypair::generate();
    (keypair.private_key(), keypair.address())
}

/// Derive the address stored in a 64-byte base64 private key.
///
/// The address comes from the trailing public key half, so the seed is not
/// re-derived.
pub fn address_from_private_key(private_key: &str) -> Result<String> {
    let bytes = STANDARD.decode(private_key)?;
    if bytes.len() != 2 * KEY_LEN_BYTES {
        return Err(UtilError::InvalidLength {
            what: "private key",
            expected: 2 * KEY_LEN_BYTES,
            actual: bytes.len(),
        });
    }

    let mut public_key = [0u8; KEY_LEN_BYTES];
    public_key.copy_from_slice(&bytes[KEY_LEN_BYTES..]);
    Ok(encode_address(&public_key))
}
