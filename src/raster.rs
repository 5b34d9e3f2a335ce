//! Raster bit image encoding (`GS v 0`).
//!
//! An image is first fitted to the printer: scaled so its width matches the
//! dot width, and if that makes it taller than the height limit, scaled down
//! further so the height equals the limit. The fitted image is then packed
//! 8 pixels per byte, most significant bit first, 1 meaning black.
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use log::{debug, warn};

use crate::{bitmap::MonochromeImage, command, error::Error, profile::PrinterProfile};

/// Largest row count the 16-bit `yL yH` field can carry.
pub const MAX_ROWS: u32 = 0xFFFF;

/// Size an image of `width` x `height` is scaled to before packing.
///
/// Width has priority: the image is scaled to the full dot width. When the
/// resulting height exceeds the limit, the height is clamped and the width
/// shrinks by the same factor, rounded down to a whole byte (at least 8 dots)
/// so no trailing pixels get cut off by the byte count.
pub fn fit(profile: &PrinterProfile, width: u32, height: u32) -> Result<(u32, u32), Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage { width, height });
    }
    let dot_width = profile.width();
    let max_height = profile.height_limit();

    let scale = f64::from(dot_width) / f64::from(width);
    let candidate = ((f64::from(height) * scale).round() as u32).max(1);

    if candidate <= max_height {
        return Ok((dot_width, candidate));
    }

    let ratio = f64::from(max_height) / f64::from(candidate);
    let exact = (f64::from(dot_width) * ratio).round() as u32;
    let fitted = (exact / 8 * 8).max(8);
    if fitted != exact {
        debug!(
            "capped width {} rounded down to {} to fill whole bytes",
            exact, fitted
        );
    }
    Ok((fitted, max_height))
}

/// Pack one row of pixels, leftmost pixel in bit 7.
///
/// Positions past the image width in the last byte stay white.
pub fn pack_row(image: &MonochromeImage, y: u32) -> Vec<u8> {
    let width = image.width();
    let bytes_per_row = (width + 7) / 8;
    (0..bytes_per_row)
        .map(|byte| {
            (0..8u32).fold(0u8, |acc, bit| {
                let x = byte * 8 + bit;
                if x < width && image.is_black(x, y) {
                    acc | (0x80 >> bit)
                } else {
                    acc
                }
            })
        })
        .collect()
}

/// A fitted and packed raster image ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    bytes_per_row: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Fit `image` to `profile` and pack it.
    pub fn encode(profile: &PrinterProfile, image: &MonochromeImage) -> Result<Self, Error> {
        profile.validate()?;
        let (width, height) = fit(profile, image.width(), image.height())?;
        debug!(
            "fitting {}x{} image into {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );
        let fitted = image.resize(width, height)?;
        Ok(Self::pack(&fitted))
    }

    /// Pack `image` as is, without any scaling.
    pub fn pack(image: &MonochromeImage) -> Self {
        let bytes_per_row = (image.width() + 7) / 8;
        let height = image.height();
        let mut data = Vec::with_capacity(bytes_per_row as usize * height as usize);
        for y in 0..height {
            data.extend(pack_row(image, y));
        }
        RasterImage {
            bytes_per_row,
            height,
            data,
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.bytes_per_row
    }

    /// Real number of rows, even when the header field wraps.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed rows, top to bottom.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.bytes_per_row as usize)
    }

    /// `GS v 0` header. Heights above 65535 wrap in the `yL yH` field, which
    /// is what the printer firmware has always been sent.
    pub fn header(&self) -> [u8; 8] {
        if self.height > MAX_ROWS {
            warn!(
                "raster height {} does not fit the row count field and wraps to {}",
                self.height,
                self.height & MAX_ROWS
            );
        }
        command::raster_header(self.bytes_per_row, self.height)
    }

    /// Header, rows, and the trailing line feed that flushes the line buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(8 + self.data.len() + 1);
        buf.extend_from_slice(&self.header());
        buf.extend_from_slice(&self.data);
        buf.push(command::LF);
        buf
    }
}
