//! Sealing error types.

use thiserror::Error;

use crate::bitplane::BitPlaneError;

/// Errors that can occur while sealing or checking an image.
///
/// A digest mismatch during checking is not an error: it is a successful
/// computation that yields a `Tampered` verdict.
#[derive(Error, Debug)]
pub enum SealError {
    /// The decode collaborator could not parse the input bytes.
    #[error("Unsupported or corrupt image: {0}")]
    UnsupportedFormat(String),

    /// Fewer addressable channel samples than the digest and tail need.
    #[error("Image too small to seal: {capacity} channel samples, need at least {required}")]
    InsufficientCapacity { capacity: usize, required: usize },

    /// Internal invariant violation in the bit plane codec.
    #[error(transparent)]
    BitPlane(#[from] BitPlaneError),

    /// PNG encoding of the result failed.
    #[error("Image encode error: {0}")]
    ImageEncode(String),
}
