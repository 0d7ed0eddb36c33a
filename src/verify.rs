//! Verification policy: turns a bit-level comparison into a verdict.
//!
//! Kept separate from extraction so the match/tamper decision can evolve
//! (tolerance thresholds, per-region weighting) without touching the bit
//! mechanics. Today the policy is strict: one differing bit means tampered.

use serde::Serialize;

use crate::bitplane::BitPlaneError;

/// Outcome of comparing the embedded fingerprint to the recomputed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthStatus {
    Authenticated,
    Tampered,
}

/// Status plus the diagnostic bit-match percentage.
///
/// The percentage never feeds back into the status decision; it exists to
/// show how far off a tampered image is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    pub status: AuthStatus,
    pub match_percentage: f64,
}

/// Compares two equal-length bit sequences.
///
/// `Authenticated` iff every bit matches; `match_percentage` is
/// `100 * matching / total`. Unequal lengths are an internal invariant
/// violation.
pub fn verdict(embedded: &[u8], recomputed: &[u8]) -> Result<Verdict, BitPlaneError> {
    if embedded.len() != recomputed.len() {
        return Err(BitPlaneError::SizeMismatch {
            expected: embedded.len(),
            actual: recomputed.len(),
        });
    }

    let matching = embedded
        .iter()
        .zip(recomputed)
        .filter(|(a, b)| a == b)
        .count();

    let match_percentage = if embedded.is_empty() {
        100.0
    } else {
        100.0 * matching as f64 / embedded.len() as f64
    };

    let status = if matching == embedded.len() {
        AuthStatus::Authenticated
    } else {
        AuthStatus::Tampered
    };

    Ok(Verdict {
        status,
        match_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_authenticate() {
        let bits = vec![1u8; 256];
        let v = verdict(&bits, &bits).unwrap();

        assert_eq!(v.status, AuthStatus::Authenticated);
        assert_eq!(v.match_percentage, 100.0);
    }

    #[test]
    fn test_single_differing_bit_is_tampered() {
        let a = vec![0u8; 256];
        let mut b = a.clone();
        b[17] = 1;

        let v = verdict(&a, &b).unwrap();
        assert_eq!(v.status, AuthStatus::Tampered);
        assert_eq!(v.match_percentage, 100.0 * 255.0 / 256.0);
    }

    #[test]
    fn test_all_differing_bits() {
        let a = vec![0u8; 8];
        let b = vec![1u8; 8];

        let v = verdict(&a, &b).unwrap();
        assert_eq!(v.status, AuthStatus::Tampered);
        assert_eq!(v.match_percentage, 0.0);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let result = verdict(&[0, 1], &[0, 1, 0]);
        assert!(matches!(
            result,
            Err(BitPlaneError::SizeMismatch { expected: 2, actual: 3 })
        ));
    }
}
