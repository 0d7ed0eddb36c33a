//! SHA-256 fingerprint adapter.
//!
//! The digest is treated as an opaque one-way function; only its determinism
//! and avalanche behavior matter here. The bit-extraction order is fixed:
//! byte-major, most significant bit first within each byte. Sealing and
//! checking both depend on this order being identical.

use sha2::{Digest, Sha256};

use crate::DIGEST_BITS;

/// Computes the SHA-256 fingerprint of a byte sequence.
pub fn fingerprint(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Expands a digest into its 256 ordered bits (one `0`/`1` per entry).
pub fn to_bits(digest: &[u8; 32]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(DIGEST_BITS);
    for byte in digest {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let data = b"some pixel content";
        assert_eq!(fingerprint(data), fingerprint(data));
    }

    #[test]
    fn test_fingerprint_known_vector() {
        // SHA-256("abc") starts with 0xBA7816BF...
        let digest = fingerprint(b"abc");
        assert_eq!(&digest[..4], &[0xBA, 0x78, 0x16, 0xBF]);
    }

    #[test]
    fn test_to_bits_msb_first() {
        let mut digest = [0u8; 32];
        digest[0] = 0xBA; // 1011_1010

        let bits = to_bits(&digest);
        assert_eq!(bits.len(), DIGEST_BITS);
        assert_eq!(&bits[..8], &[1, 0, 1, 1, 1, 0, 1, 0]);
        assert!(bits[8..].iter().all(|&b| b == 0));
    }
}
