//! Sealing and checking engines.
//!
//! Sealing fingerprints the decoded pixel content and hides the fingerprint
//! in the LSBs of the first 256 channel samples. The 256 bits the overwrite
//! displaces are parked in the next 256 samples (the tail), which is what
//! makes restoration possible later. The tail region's own original LSBs are
//! the one thing permanently lost; this is an inherent limitation of keeping
//! the tail inside the image rather than a defect.
//!
//! The fingerprint is computed after the tail is in place but before the
//! digest bits land, so checking recomputes it over exactly the matrix that
//! restoration produces. Tampering with any region still perturbs the
//! comparison: the digest slots directly, the tail via a wrong restoration,
//! and everything else via the recomputed hash.

use crate::bitplane::{read_bits, write_bits};
use crate::canvas::PixelCanvas;
use crate::digest;
use crate::error::SealError;
use crate::verify::{self, Verdict};
use crate::{DIGEST_BITS, MIN_CAPACITY, SEAL_SPAN};

/// Result of checking a sealed image.
#[derive(Debug, Clone)]
pub struct Authentication {
    /// Match/tamper verdict with the diagnostic bit-match percentage.
    pub verdict: Verdict,
    /// The restored image, PNG-encoded.
    pub restored_png: Vec<u8>,
}

fn digest_slots() -> Vec<usize> {
    (0..DIGEST_BITS).collect()
}

fn tail_slots() -> Vec<usize> {
    (DIGEST_BITS..SEAL_SPAN).collect()
}

/// Fails fast before any mutation, so a too-small image is never partially
/// sealed or partially restored.
fn ensure_capacity(capacity: usize) -> Result<(), SealError> {
    if capacity < MIN_CAPACITY {
        return Err(SealError::InsufficientCapacity {
            capacity,
            required: MIN_CAPACITY,
        });
    }
    Ok(())
}

/// Seals a decoded pixel matrix in place.
pub fn seal_canvas(mut canvas: PixelCanvas) -> Result<PixelCanvas, SealError> {
    ensure_capacity(canvas.capacity())?;

    let digest_slots = digest_slots();
    let tail_slots = tail_slots();

    // The displaced bits must be captured before the digest overwrites them.
    let displaced = read_bits(canvas.samples(), &digest_slots)?;
    write_bits(canvas.samples_mut(), &tail_slots, &displaced)?;

    let digest_bits = digest::to_bits(&digest::fingerprint(canvas.samples()));
    write_bits(canvas.samples_mut(), &digest_slots, &digest_bits)?;

    Ok(canvas)
}

/// Checks a sealed pixel matrix, returning the verdict and the restored
/// matrix.
///
/// Restoration writes the tail bits back into the digest slots. The tail
/// slots themselves keep the tail they carry; their pre-seal LSBs were never
/// preserved. Everything above the tail is untouched by construction.
pub fn check_canvas(mut canvas: PixelCanvas) -> Result<(Verdict, PixelCanvas), SealError> {
    ensure_capacity(canvas.capacity())?;

    let digest_slots = digest_slots();
    let tail_slots = tail_slots();

    let embedded = read_bits(canvas.samples(), &digest_slots)?;
    let tail = read_bits(canvas.samples(), &tail_slots)?;

    write_bits(canvas.samples_mut(), &digest_slots, &tail)?;

    let recomputed = digest::to_bits(&digest::fingerprint(canvas.samples()));
    let verdict = verify::verdict(&embedded, &recomputed)?;

    Ok((verdict, canvas))
}

/// Seals an image supplied as raw container bytes; returns PNG bytes.
pub fn secure(image_bytes: &[u8]) -> Result<Vec<u8>, SealError> {
    let canvas = PixelCanvas::from_bytes(image_bytes)?;
    seal_canvas(canvas)?.to_png_bytes()
}

/// Checks an image supplied as raw container bytes.
///
/// A fingerprint mismatch is a successful check with a `Tampered` verdict,
/// not an error.
pub fn authenticate(image_bytes: &[u8]) -> Result<Authentication, SealError> {
    let canvas = PixelCanvas::from_bytes(image_bytes)?;
    let (verdict, restored) = check_canvas(canvas)?;

    Ok(Authentication {
        verdict,
        restored_png: restored.to_png_bytes()?,
    })
}
