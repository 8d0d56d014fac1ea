//! Test fixtures and helpers.
//!
//! Common setup code for signing tests, plus helpers that flip single bytes of
//! a message, signature, or address.

use algosdk_util::{decode_address, encode_address, sign_bytes, verify_bytes, Keypair};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A test account with a keypair.
pub struct TestAccount {
    pub keypair: Keypair,
}

impl TestAccount {
    /// Create a new test account with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// Get the account address.
    pub fn address(&self) -> String {
        self.keypair.address()
    }

    /// Get the base64 private key.
    pub fn private_key(&self) -> String {
        self.keypair.private_key()
    }

    /// Sign with the `"MX"` prefix, returning a base64 signature.
    ///
    /// Panics on failure; the fixture's key material is always well-formed.
    pub fn sign(&self, message: &[u8]) -> String {
        sign_bytes(message, &self.private_key()).expect("fixture key is valid")
    }

    /// Verify a signature against this account.
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        verify_bytes(message, signature, &self.address()).expect("fixture address is valid")
    }

    /// The address of this account with one public key byte flipped.
    pub fn tampered_address(&self, index: usize) -> String {
        let mut public_key = self.keypair.public_key();
        public_key[index % public_key.len()] ^= 0x01;
        encode_address(&public_key)
    }
}

impl Default for TestAccount {
    fn default() -> Self {
        Self::new()
    }
}

/// Flip one byte of a message. Empty messages are returned unchanged.
pub fn tamper_message(message: &[u8], index: usize) -> Vec<u8> {
    let mut out = message.to_vec();
    if !out.is_empty() {
        let i = index % out.len();
        out[i] ^= 0x01;
    }
    out
}

/// Flip one byte of a base64 signature, re-encoding the result.
pub fn tamper_signature(signature: &str, index: usize) -> String {
    let mut bytes = STANDARD.decode(signature).expect("signature is base64");
    let i = index % bytes.len();
    bytes[i] ^= 0x01;
    STANDARD.encode(bytes)
}

/// Create multiple test accounts with distinct deterministic seeds.
pub fn multi_account_fixtures(count: u8) -> Vec<TestAccount> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i;
            seed[31] = 0xA5;
            TestAccount::with_seed(seed)
        })
        .collect()
}

/// Check that an address round-trips through decoding.
pub fn assert_valid_address(address: &str) {
    let key = decode_address(address).expect("address decodes");
    assert_eq!(encode_address(&key), address);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{byte_index, message};
    use proptest::prelude::*;

    #[test]
    fn test_fixture_sign_verify() {
        let account = TestAccount::with_seed([0x42; 32]);
        let signature = account.sign(b"fixture");
        assert!(account.verify(b"fixture", &signature));
        assert_valid_address(&account.address());
    }

    #[test]
    fn test_accounts_are_distinct() {
        let accounts = multi_account_fixtures(4);
        let signature = accounts[0].sign(b"shared");

        assert!(accounts[0].verify(b"shared", &signature));
        for other in &accounts[1..] {
            assert_ne!(other.address(), accounts[0].address());
            assert!(!other.verify(b"shared", &signature));
        }
    }

    #[test]
    fn test_tamper_helpers_change_input() {
        assert_eq!(tamper_message(b"", 3), b"");
        assert_eq!(tamper_message(b"ab", 1), b"ac");

        let account = TestAccount::with_seed([0x01; 32]);
        let signature = account.sign(b"x");
        assert_ne!(tamper_signature(&signature, 0), signature);
        assert_ne!(account.tampered_address(0), account.address());
    }

    proptest! {
        #[test]
        fn test_tampered_message_fails(msg in message(128).prop_filter("non-empty", |m| !m.is_empty()), i in byte_index(128)) {
            let account = TestAccount::with_seed([0x11; 32]);
            let signature = account.sign(&msg);
            prop_assert!(!account.verify(&tamper_message(&msg, i), &signature));
        }

        #[test]
        fn test_tampered_signature_fails(msg in message(128), i in byte_index(64)) {
            let account = TestAccount::with_seed([0x22; 32]);
            let signature = account.sign(&msg);
            prop_assert!(!account.verify(&msg, &tamper_signature(&signature, i)));
        }

        #[test]
        fn test_tampered_address_fails(msg in message(128), i in byte_index(32)) {
            let account = TestAccount::with_seed([0x33; 32]);
            let signature = account.sign(&msg);
            let address = account.tampered_address(i);
            prop_assert!(!verify_bytes(&msg, &signature, &address).unwrap());
        }
    }
}
