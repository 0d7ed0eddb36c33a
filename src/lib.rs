//! # Pixelseal - tamper detection without a database
//!
//! Pixelseal embeds an integrity fingerprint directly into an image's pixel
//! data, so later tampering with the pixel content can be detected from the
//! image alone, and the untouched original pixel values can be recovered
//! from the sealed artifact.
//!
//! ## How it works
//!
//! - The decoded RGB pixels are flattened into one canonical sequence of
//!   channel samples (row-major pixels, R,G,B per pixel).
//! - A SHA-256 fingerprint of the pixel content replaces the LSBs of the
//!   first 256 samples; the displaced bits move to samples 256..511 (the
//!   tail). Everything above the tail is untouched.
//! - Checking extracts the embedded fingerprint, restores the first 256
//!   LSBs from the tail, recomputes the fingerprint over the restored
//!   pixels, and compares bit by bit.
//!
//! The sealed output is always PNG: any lossy re-encode perturbs LSBs and
//! breaks the seal by design. The scheme detects pixel-level tampering; it
//! is not a cryptographic signature, so a forger who re-seals a replaced
//! image defeats it.
//!
//! Every operation is a pure, stateless computation over caller-owned
//! buffers; calls can run concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use pixelseal::{authenticate, secure, AuthStatus};
//! use image::{DynamicImage, ImageBuffer, Rgb};
//!
//! let img = ImageBuffer::from_fn(64, 64, |x, y| Rgb([x as u8, y as u8, 128]));
//! let mut png = Vec::new();
//! DynamicImage::ImageRgb8(img)
//!     .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
//!     .unwrap();
//!
//! let sealed = secure(&png).unwrap();
//! let auth = authenticate(&sealed).unwrap();
//! assert_eq!(auth.verdict.status, AuthStatus::Authenticated);
//! assert_eq!(auth.verdict.match_percentage, 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`bitplane`]: LSB reads/writes at addressable sample positions
//! - [`canvas`]: decode/encode adapter and the canonical flatten order
//! - [`digest`]: SHA-256 adapter and fixed bit-extraction order
//! - [`engine`]: the sealing and checking engines
//! - [`verify`]: the match/tamper verification policy

/// Number of fingerprint bits embedded per image.
pub const DIGEST_BITS: usize = 256;

/// Samples reserved by a seal: digest slots 0..255 plus tail slots 256..511.
pub const SEAL_SPAN: usize = DIGEST_BITS * 2;

/// Minimum number of channel samples an image must have to be sealable.
pub const MIN_CAPACITY: usize = SEAL_SPAN;

pub mod bitplane;
pub mod canvas;
pub mod digest;
pub mod engine;
pub mod error;
pub mod verify;

// Re-export commonly used types at the crate root
pub use bitplane::BitPlaneError;
pub use canvas::PixelCanvas;
pub use engine::{authenticate, check_canvas, seal_canvas, secure, Authentication};
pub use error::SealError;
pub use verify::{verdict, AuthStatus, Verdict};
