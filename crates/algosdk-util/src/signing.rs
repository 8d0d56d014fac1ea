//! Detached signing of arbitrary bytes.
//!
//! Messages are prefixed with [`BYTES_PREFIX`] (`"MX"`) before signing so a
//! signature over arbitrary bytes can never be replayed as a transaction or
//! program signature. The prefix is part of the wire format.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signature, VerifyingKey};
use tracing::trace;

use crate::account::Keypair;
use crate::constants::{BYTES_PREFIX, SIGNATURE_LEN_BYTES};
use crate::encoding::decode_address;
use crate::error::{Result, UtilError};

/// Build the message to sign (with domain separation).
fn prefixed(message: &[u8]) -> Vec<u8> {
    let mut msg = Vec::with_capacity(BYTES_PREFIX.len() + message.len());
    msg.extend_from_slice(BYTES_PREFIX);
    msg.extend_from_slice(message);
    msg
}

/// Sign bytes after prepending `"MX"`, returning a base64 signature.
///
/// `private_key` is base64 key material whose first 32 bytes are the Ed25519
/// seed. Longer material is truncated to the seed.
pub fn sign_bytes(to_sign: &[u8], private_key: &str) -> Result<String> {
    let keypair = Keypair::from_private_key(private_key)?;
    let signature = keypair.sign(&prefixed(to_sign));
    Ok(STANDARD.encode(signature))
}

/// Verify a base64 signature over `"MX" || message` against an address.
///
/// Returns `Ok(false)` when the signature is cryptographically rejected,
/// including when the address embeds bytes that are not a valid Ed25519 point
/// or a small-order point.
/// A malformed address, malformed base64, or a signature that does not decode
/// to 64 bytes is an error.
pub fn verify_bytes(message: &[u8], signature: &str, public_key: &str) -> Result<bool> {
    let public_key = decode_address(public_key)?;

    let signature = STANDARD.decode(signature)?;
    let signature = Signature::from_slice(&signature).map_err(|_| UtilError::InvalidLength {
        what: "signature",
        expected: SIGNATURE_LEN_BYTES,
        actual: signature.len(),
    })?;

    let verifying_key = match VerifyingKey::from_bytes(&public_key) {
        Ok(key) => key,
        Err(e) => {
            trace!(error = %e, "public key is not a curve point");
            return Ok(false);
        }
    };

    // Strict verification rejects small-order A and R, as libsodium does.
    match verifying_key.verify_strict(&prefixed(message), &signature) {
        Ok(()) => Ok(true),
        Err(e) => {
            trace!(error = %e, "signature rejected");
            Ok(false)
        }
    }
}
