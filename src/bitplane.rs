//! LSB (Least Significant Bit) access over the flattened channel sequence.
//!
//! Positions are indices into the canonical flatten order (row-major pixels,
//! R,G,B per pixel). Only bit 0 of each channel sample is ever read or
//! written; the upper seven bits are never touched.

use thiserror::Error;

/// Errors from the bit plane codec.
///
/// Both variants are internal invariant violations: the engines always pass
/// matched position/bit counts and capacity-checked positions, so neither is
/// reachable for valid callers.
#[derive(Error, Debug)]
pub enum BitPlaneError {
    #[error("Bit count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Position {position} out of range for capacity {capacity}")]
    PositionOutOfRange { position: usize, capacity: usize },
}

/// Reads one LSB per position, in position order.
pub fn read_bits(samples: &[u8], positions: &[usize]) -> Result<Vec<u8>, BitPlaneError> {
    positions
        .iter()
        .map(|&position| {
            samples
                .get(position)
                .map(|value| value & 1)
                .ok_or(BitPlaneError::PositionOutOfRange {
                    position,
                    capacity: samples.len(),
                })
        })
        .collect()
}

/// Writes one bit per position: clears bit 0, then sets it to the supplied
/// bit. Only the LSB of each `bits` entry is used.
///
/// All arguments are validated before the first write, so a failed call
/// leaves `samples` untouched.
pub fn write_bits(samples: &mut [u8], positions: &[usize], bits: &[u8]) -> Result<(), BitPlaneError> {
    if positions.len() != bits.len() {
        return Err(BitPlaneError::SizeMismatch {
            expected: positions.len(),
            actual: bits.len(),
        });
    }

    if let Some(&position) = positions.iter().find(|&&p| p >= samples.len()) {
        return Err(BitPlaneError::PositionOutOfRange {
            position,
            capacity: samples.len(),
        });
    }

    for (&position, &bit) in positions.iter().zip(bits) {
        samples[position] = (samples[position] & 0xFE) | (bit & 1);
    }

    Ok(())
}
