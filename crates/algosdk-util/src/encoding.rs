//! Account address encoding.
//!
//! An address is `base32(public_key || checksum)` with the RFC 4648 alphabet and
//! no padding, where `checksum` is the last four bytes of SHA-512/256 of the
//! public key.

use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};

use crate::constants::{ADDRESS_LEN, CHECK_SUM_LEN_BYTES, KEY_LEN_BYTES};
use crate::error::{Result, UtilError};

/// Encode a raw Ed25519 public key as an address.
pub fn encode_address(public_key: &[u8; KEY_LEN_BYTES]) -> String {
    let mut bytes = Vec::with_capacity(KEY_LEN_BYTES + CHECK_SUM_LEN_BYTES);
    bytes.extend_from_slice(public_key);
    bytes.extend_from_slice(&checksum(public_key));
    BASE32_NOPAD.encode(&bytes)
}

/// Decode an address into its raw Ed25519 public key.
///
/// Fails if the address is not 58 characters of base32 or if its checksum does
/// not match the embedded key.
pub fn decode_address(address: &str) -> Result<[u8; KEY_LEN_BYTES]> {
    if address.len() != ADDRESS_LEN {
        return Err(UtilError::InvalidAddress(format!(
            "expected {ADDRESS_LEN} characters, got {}",
            address.len()
        )));
    }

    let decoded = BASE32_NOPAD
        .decode(address.as_bytes())
        .map_err(|e| UtilError::InvalidAddress(e.to_string()))?;

    let (key, check) = decoded.split_at(KEY_LEN_BYTES);
    let mut public_key = [0u8; KEY_LEN_BYTES];
    public_key.copy_from_slice(key);

    if check != checksum(&public_key).as_slice() {
        return Err(UtilError::ChecksumMismatch);
    }

    Ok(public_key)
}

/// Check whether a string is a well-formed address with a valid checksum.
pub fn is_valid_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

fn checksum(public_key: &[u8; KEY_LEN_BYTES]) -> [u8; CHECK_SUM_LEN_BYTES] {
    let hash = Sha512_256::digest(public_key);
    let mut out = [0u8; CHECK_SUM_LEN_BYTES];
    out.copy_from_slice(&hash[hash.len() - CHECK_SUM_LEN_BYTES..]);
    out
}
