//! # algosdk-util
//!
//! Small, pure helpers used throughout the Algorand SDK.
//!
//! This crate contains no I/O and no shared state. Every function is a
//! stateless transform over a few bytes or a decimal value.
//!
//! ## Modules
//!
//! - [`amount`] - microalgo / algo conversion with exact decimal arithmetic
//! - [`cid`] - IPFS CIDv0 to and from raw 32-byte hex digests
//! - [`signing`] - `"MX"` domain-separated Ed25519 signing and verification
//! - [`encoding`] - base32 account addresses with SHA-512/256 checksums
//! - [`account`] - key material and account generation
//! - [`headers`] - request header merging for the HTTP client wrapper
//!
//! ## Usage
//!
//! ```rust
//! use algosdk_util::{generate_account, sign_bytes, verify_bytes};
//!
//! let (private_key, address) = generate_account();
//! let signature = sign_bytes(b"arbitrary bytes", &private_key).unwrap();
//! assert!(verify_bytes(b"arbitrary bytes", &signature, &address).unwrap());
//! ```

pub mod account;
pub mod amount;
pub mod cid;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod headers;
pub mod signing;

pub use account::{address_from_private_key, generate_account, Keypair};
pub use amount::{algos_to_microalgos, microalgos_to_algos};
pub use cid::{byte32_to_ipfscidv0, ipfscidv0_to_byte32};
pub use encoding::{decode_address, encode_address, is_valid_address};
pub use error::{Result, UtilError};
pub use headers::{build_headers_from, Headers};
pub use signing::{sign_bytes, verify_bytes};

pub use rust_decimal::Decimal;
