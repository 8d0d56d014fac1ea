//! IPFS CIDv0 conversion.
//!
//! A CIDv0 is `base58(0x12 || 0x20 || sha256_digest)`. Contracts and ASA
//! metadata store only the 32-byte digest, so these helpers strip and restore
//! the two-byte multihash prefix.

use tracing::debug;

use crate::constants::CIDV0_PREFIX;
use crate::error::{Result, UtilError};

/// Length of a sha2-256 digest.
const DIGEST_LEN: usize = 32;

/// Convert a CIDv0 string to the lowercase hex of its digest.
///
/// The leading two multihash bytes are dropped without validation. A CID built
/// with another hash function or digest length converts without error and loses
/// its prefix.
pub fn ipfscidv0_to_byte32(cid: &str) -> Result<String> {
    let decoded = bs58::decode(cid).into_vec()?;
    if decoded.len() < CIDV0_PREFIX.len() {
        return Err(UtilError::CidTooShort(decoded.len()));
    }

    let (prefix, digest) = decoded.split_at(CIDV0_PREFIX.len());
    if prefix != CIDV0_PREFIX.as_slice() {
        debug!(
            prefix = %hex::encode(prefix),
            "CID multihash prefix is not sha2-256/32, dropping it anyway"
        );
    }

    Ok(hex::encode(digest))
}

/// Convert the hex of a 32-byte digest to a CIDv0 string.
///
/// Accepts upper or lower case hex.
pub fn byte32_to_ipfscidv0(hexstr: &str) -> Result<String> {
    let digest = hex::decode(hexstr)?;
    if digest.len() != DIGEST_LEN {
        return Err(UtilError::InvalidLength {
            what: "digest",
            expected: DIGEST_LEN,
            actual: digest.len(),
        });
    }

    let mut multihash = Vec::with_capacity(CIDV0_PREFIX.len() + digest.len());
    multihash.extend_from_slice(&CIDV0_PREFIX);
    multihash.extend_from_slice(&digest);

    Ok(bs58::encode(multihash).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_DIGEST: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    const ZERO_CID: &str = "QmNLei78zWmzUdbeRB3CiUfAizWUrbeeZh5K1rhAQKCh51";

    // sha256("hello world")
    const HELLO_DIGEST: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
    const HELLO_CID: &str = "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4";

    #[test]
    fn test_known_vectors() {
        assert_eq!(byte32_to_ipfscidv0(ZERO_DIGEST).unwrap(), ZERO_CID);
        assert_eq!(ipfscidv0_to_byte32(ZERO_CID).unwrap(), ZERO_DIGEST);

        assert_eq!(byte32_to_ipfscidv0(HELLO_DIGEST).unwrap(), HELLO_CID);
        assert_eq!(ipfscidv0_to_byte32(HELLO_CID).unwrap(), HELLO_DIGEST);
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let upper = HELLO_DIGEST.to_uppercase();
        assert_eq!(byte32_to_ipfscidv0(&upper).unwrap(), HELLO_CID);
    }

    #[test]
    fn test_output_is_lowercase() {
        let cid = byte32_to_ipfscidv0(&"AB".repeat(32)).unwrap();
        assert_eq!(ipfscidv0_to_byte32(&cid).unwrap(), "ab".repeat(32));
    }

    #[test]
    fn test_reject_invalid_base58() {
        // '0', 'O', 'I' and 'l' are not in the Base58 alphabet.
        let result = ipfscidv0_to_byte32("Qm0OIl");
        assert!(matches!(result, Err(UtilError::Base58(_))));
    }

    #[test]
    fn test_reject_short_cid() {
        assert!(matches!(ipfscidv0_to_byte32(""), Err(UtilError::CidTooShort(0))));
        assert!(matches!(ipfscidv0_to_byte32("2"), Err(UtilError::CidTooShort(1))));
    }

    #[test]
    fn test_reject_invalid_hex() {
        let result = byte32_to_ipfscidv0("zz");
        assert!(matches!(result, Err(UtilError::Hex(_))));

        let result = byte32_to_ipfscidv0("abc");
        assert!(matches!(result, Err(UtilError::Hex(_))));
    }

    #[test]
    fn test_reject_wrong_digest_length() {
        let result = byte32_to_ipfscidv0(&"00".repeat(31));
        assert!(matches!(
            result,
            Err(UtilError::InvalidLength { expected: 32, actual: 31, .. })
        ));
    }

    #[test]
    fn test_foreign_prefix_is_dropped() {
        // sha2-512 code with the same 32 zero bytes behind it.
        let mut bytes = vec![0x13, 0x20];
        bytes.extend_from_slice(&[0u8; 32]);
        let cid = bs58::encode(bytes).into_string();

        assert_eq!(ipfscidv0_to_byte32(&cid).unwrap(), ZERO_DIGEST);
        assert_ne!(byte32_to_ipfscidv0(ZERO_DIGEST).unwrap(), cid);
    }
}
