//! Protocol constants shared by the signing, verification, and conversion paths.
//!
//! **CRITICAL**: these values are part of the wire format. Changing any of them
//! breaks compatibility with every other SDK.

/// Number of microalgos in one algo.
pub const MICROALGOS_TO_ALGOS_RATIO: i64 = 1_000_000;

/// Length of an Ed25519 seed and of a raw public key.
pub const KEY_LEN_BYTES: usize = 32;

/// Length of a raw Ed25519 signature.
pub const SIGNATURE_LEN_BYTES: usize = 64;

/// Domain separation prefix for arbitrary-bytes signing.
pub const BYTES_PREFIX: &[u8] = b"MX";

/// Number of trailing SHA-512/256 bytes appended to a public key in an address.
pub const CHECK_SUM_LEN_BYTES: usize = 4;

/// Length of a base32 account address.
pub const ADDRESS_LEN: usize = 58;

/// Multihash prefix of a CIDv0: sha2-256 function code, 32-byte digest length.
pub const CIDV0_PREFIX: [u8; 2] = [0x12, 0x20];
