//! # algosdk-util testkit
//!
//! Testing utilities for `algosdk-util`.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known signatures, addresses, and CIDs for cross-SDK verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A test account with helpers for tampering with signed data
//!
//! ## Golden Vectors
//!
//! ```rust
//! use algosdk_util_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "{name} does not match");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use algosdk_util_testkit::generators::{keypair, message};
//!
//! proptest! {
//!     #[test]
//!     fn signatures_verify(kp in keypair(), msg in message(256)) {
//!         let sig = algosdk_util::sign_bytes(&msg, &kp.private_key()).unwrap();
//!         prop_assert!(algosdk_util::verify_bytes(&msg, &sig, &kp.address()).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use algosdk_util_testkit::fixtures::TestAccount;
//!
//! let account = TestAccount::with_seed([0x42; 32]);
//! let signature = account.sign(b"data");
//! assert!(account.verify(b"data", &signature));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestAccount;
pub use vectors::{all_cid_vectors, all_signing_vectors, verify_all_vectors, CidVector, SigningVector};
