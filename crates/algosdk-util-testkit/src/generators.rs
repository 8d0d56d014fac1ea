//! Proptest generators for property-based testing.

use proptest::prelude::*;
use rust_decimal::Decimal;

use algosdk_util::Keypair;

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate message bytes of specified max length.
pub fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a 32-byte digest.
pub fn digest() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Generate the hex of a 32-byte digest in either case.
pub fn digest_hex() -> impl Strategy<Value = String> {
    (digest(), any::<bool>()).prop_map(|(d, upper)| {
        let hex = hex::encode(d);
        if upper {
            hex.to_uppercase()
        } else {
            hex
        }
    })
}

/// Generate a microalgo amount.
pub fn microalgos() -> impl Strategy<Value = i64> {
    prop_oneof![
        0i64..=10_000_000_000,
        any::<i64>(),
        Just(i64::MIN),
        Just(i64::MAX),
    ]
}

/// Generate an algo amount with up to 12 fractional digits.
pub fn algos() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..=1_000_000_000_000i64, 0u32..=12)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Generate an index into a buffer of `len` bytes, for tampering.
pub fn byte_index(len: usize) -> impl Strategy<Value = usize> {
    0..len
}
