//! Decoded pixel matrix and the canonical flatten order.
//!
//! Every input is converted to 8-bit RGB on decode (alpha dropped), so the
//! flatten order is simply the raw `RgbImage` layout: row-major pixels,
//! channels R,G,B within each pixel. Position `i` in the bit plane codec is
//! byte `i` of that raw buffer.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::SealError;

/// An owned RGB pixel matrix with byte-addressable channel samples.
pub struct PixelCanvas {
    pixels: RgbImage,
}

impl PixelCanvas {
    /// Decodes a canvas from raw container bytes, sniffing the format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SealError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| SealError::UnsupportedFormat(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Decodes a canvas from raw container bytes with an explicit format hint.
    pub fn from_bytes_with_format(bytes: &[u8], format: ImageFormat) -> Result<Self, SealError> {
        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| SealError::UnsupportedFormat(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Wraps an already-decoded image, converting to RGB8.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            pixels: image.to_rgb8(),
        }
    }

    /// Number of addressable channel samples (width * height * 3).
    pub fn capacity(&self) -> usize {
        self.pixels.as_raw().len()
    }

    /// The channel samples in flatten order.
    pub fn samples(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Mutable view of the channel samples in flatten order.
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Image dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Encodes the canvas losslessly as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, SealError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| SealError::ImageEncode(e.to_string()))?;
        Ok(bytes)
    }
}
