//! Golden test vectors for deterministic verification.
//!
//! Ed25519 signatures are deterministic, so every SDK must reproduce these
//! bytes exactly once the `"MX"` prefix is applied.

use algosdk_util::{byte32_to_ipfscidv0, ipfscidv0_to_byte32, sign_bytes, Keypair};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A golden signing vector.
#[derive(Debug, Clone)]
pub struct SigningVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Seed for deterministic key generation.
    pub seed: [u8; 32],
    /// Message before the domain prefix is applied.
    pub message: &'static [u8],
    /// Expected account address.
    pub expected_address: &'static str,
    /// Expected base64 signature.
    pub expected_signature: &'static str,
}

/// A golden CIDv0 vector.
#[derive(Debug, Clone)]
pub struct CidVector {
    pub name: &'static str,
    /// Lowercase hex of the 32-byte digest.
    pub digest_hex: &'static str,
    pub cid: &'static str,
}

/// Get all golden signing vectors.
pub fn all_signing_vectors() -> Vec<SigningVector> {
    vec![
        SigningVector {
            name: "zero seed, empty message",
            seed: [0x00; 32],
            message: b"",
            expected_address: "HNVCPPGOW2SC2YVDVDICU3YNONSTEFLXDXREHJR2YBEKDC2Z3IUZSC6YGI",
            expected_signature: "olAJ9kIye+3frhLBeiqbjkbxH7sLQ7sxufxG7NZPF6ttzhOydHogHlPpUs0TD3ZRUQXV8ODLADsAGQgl/ZOeBg==",
        },
        SigningVector {
            name: "zero seed, hello",
            seed: [0x00; 32],
            message: b"hello",
            expected_address: "HNVCPPGOW2SC2YVDVDICU3YNONSTEFLXDXREHJR2YBEKDC2Z3IUZSC6YGI",
            expected_signature: "YFawVOFZKCZAa39mfTHkhzR1GS2t7w5YZa7g5pwtzrJuANmQGjgNCTAo71RpHPmd0+4xlzt/AdqwLkj83sjRAg==",
        },
        SigningVector {
            name: "0x42 seed, empty message",
            seed: [0x42; 32],
            message: b"",
            expected_address: "EFJPRUM3PEOSIRJSILQV6LVLNS3476T3NJPNGAEXSYHANGEB3MJIDPXWVI",
            expected_signature: "yobrfF8i6BsIN5XfUv15hEaHXrI7RcDG/LVtpylqVVZ3iLET/UwJaGNX7/EUbqvUhtOVs4279awCbaXODnfqAQ==",
        },
        SigningVector {
            name: "0x42 seed, hello",
            seed: [0x42; 32],
            message: b"hello",
            expected_address: "EFJPRUM3PEOSIRJSILQV6LVLNS3476T3NJPNGAEXSYHANGEB3MJIDPXWVI",
            expected_signature: "OVqhzBiSYpkR6HE6lVpFismzplVjaja6McD03tPlIQSxhz1wkR5CG662lT4NXfGHuiZNIy9r4YrmryAYV7w/Bw==",
        },
    ]
}

/// Get all golden CID vectors.
pub fn all_cid_vectors() -> Vec<CidVector> {
    vec![
        CidVector {
            name: "all-zero digest",
            digest_hex: "0000000000000000000000000000000000000000000000000000000000000000",
            cid: "QmNLei78zWmzUdbeRB3CiUfAizWUrbeeZh5K1rhAQKCh51",
        },
        CidVector {
            name: "counting digest",
            digest_hex: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            cid: "QmNLfbof5rLekrACjeuLk9JmGZD2HDBHCU4z16iYKmx5SE",
        },
        CidVector {
            name: "sha256 of hello world",
            digest_hex: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
            cid: "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4",
        },
    ]
}

/// Check a signing vector against the implementation.
pub fn check_signing_vector(vector: &SigningVector) -> bool {
    let keypair = Keypair::from_seed(&vector.seed);
    if keypair.address() != vector.expected_address {
        return false;
    }

    // Both the full 64-byte key and the bare seed must sign identically.
    let full = sign_bytes(vector.message, &keypair.private_key());
    let bare = sign_bytes(vector.message, &STANDARD.encode(vector.seed));
    matches!(
        (full, bare),
        (Ok(a), Ok(b)) if a == vector.expected_signature && b == vector.expected_signature
    )
}

/// Check a CID vector in both directions.
pub fn check_cid_vector(vector: &CidVector) -> bool {
    let forward = byte32_to_ipfscidv0(vector.digest_hex).ok();
    let backward = ipfscidv0_to_byte32(vector.cid).ok();
    forward.as_deref() == Some(vector.cid) && backward.as_deref() == Some(vector.digest_hex)
}

/// Verify all golden vectors, reporting `(name, matches)` for each.
///
/// Call this to verify your implementation matches the reference.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    let signing = all_signing_vectors()
        .into_iter()
        .map(|v| (v.name.to_string(), check_signing_vector(&v)));
    let cids = all_cid_vectors()
        .into_iter()
        .map(|v| (v.name.to_string(), check_cid_vector(&v)));
    signing.chain(cids).collect()
}
