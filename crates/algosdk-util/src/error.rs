//! Error types for the utility helpers.

use thiserror::Error;

/// Errors returned by the utility helpers.
///
/// Every decoder keeps its own variant so callers can tell which input was
/// malformed.
#[derive(Debug, Error)]
pub enum UtilError {
    /// Input was not valid Base58.
    #[error("base58 decoding error: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// Input was not valid hex.
    #[error("hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Input was not valid standard base64.
    #[error("base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A decoded value had the wrong number of bytes.
    #[error("invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A CIDv0 decoded to fewer bytes than its multihash prefix.
    #[error("CID too short: decoded to {0} bytes")]
    CidTooShort(usize),

    /// Address was not 58 characters of valid base32.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Address checksum did not match its public key.
    #[error("address checksum mismatch")]
    ChecksumMismatch,

    /// An amount did not fit the decimal or microalgo range.
    #[error("amount out of range: {0}")]
    AmountOverflow(String),
}

/// Result type for utility operations.
pub type Result<T> = std::result::Result<T, UtilError>;
