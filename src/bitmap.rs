//! 1-bit images as consumed by the raster encoder.

use image::{imageops, imageops::FilterType, DynamicImage, GrayImage, Luma};
use log::debug;
use std::path::Path;

use crate::error::Error;

/// Luma value separating black from white after a smooth resize.
const MIDPOINT: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Black,
    White,
}

/// Rectangular grid of black and white pixels, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonochromeImage {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl MonochromeImage {
    /// Blank (all white) image.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        Self::from_fn(width, height, |_, _| Pixel::White)
    }

    /// Build an image by asking `f` for every pixel, row by row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImage { width, height });
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(MonochromeImage {
            width,
            height,
            pixels,
        })
    }

    /// Binarize a greyscale image: luma strictly below `threshold` is black.
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Result<Self, Error> {
        Self::from_fn(image.width(), image.height(), |x, y| {
            if image.get_pixel(x, y).0[0] < threshold {
                Pixel::Black
            } else {
                Pixel::White
            }
        })
    }

    /// Binarize any decoded image through its luma channel.
    pub fn from_dynamic(image: &DynamicImage, threshold: u8) -> Result<Self, Error> {
        Self::from_luma(&image.to_luma8(), threshold)
    }

    /// Decode an image file and binarize it.
    pub fn open<P: AsRef<Path>>(path: P, threshold: u8) -> Result<Self, Error> {
        let decoded = image::open(path.as_ref())?;
        debug!(
            "decoded {:?} as {}x{}",
            path.as_ref(),
            decoded.width(),
            decoded.height()
        );
        Self::from_dynamic(&decoded, threshold)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    pub fn is_black(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y) == Pixel::Black
    }

    /// Black as 0, white as 255.
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| match self.get_pixel(x, y) {
            Pixel::Black => Luma([0]),
            Pixel::White => Luma([255]),
        })
    }

    /// Resample to `width` x `height` with a Lanczos3 filter.
    ///
    /// Filtering happens in 8-bit grey and the result is thresholded at the
    /// midpoint again, so thin lines survive downscaling instead of being
    /// dropped the way nearest-neighbour sampling would.
    pub fn resize(&self, width: u32, height: u32) -> Result<Self, Error> {
        if (width, height) == self.dimensions() {
            return Ok(self.clone());
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidImage { width, height });
        }
        let grey = imageops::resize(&self.to_luma(), width, height, FilterType::Lanczos3);
        Self::from_luma(&grey, MIDPOINT)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_white() {
        let image = MonochromeImage::new(16, 2).unwrap();
        assert_eq!(image.dimensions(), (16, 2));
        assert!(!image.is_black(15, 1));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            MonochromeImage::new(0, 10),
            Err(Error::InvalidImage {
                width: 0,
                height: 10
            })
        ));
        assert!(matches!(
            MonochromeImage::new(10, 0),
            Err(Error::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_from_luma_threshold() {
        let grey = GrayImage::from_fn(4, 1, |x, _| Luma([[0, 127, 128, 255][x as usize]]));
        let image = MonochromeImage::from_luma(&grey, 128).unwrap();
        assert!(image.is_black(0, 0));
        assert!(image.is_black(1, 0));
        assert!(!image.is_black(2, 0));
        assert!(!image.is_black(3, 0));
    }

    #[test]
    fn test_from_dynamic_rgb() {
        let rgb = image::RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                image::Rgb([10, 10, 10])
            } else {
                image::Rgb([240, 240, 240])
            }
        });
        let image =
            MonochromeImage::from_dynamic(&DynamicImage::ImageRgb8(rgb), crate::DEFAULT_THRESHOLD)
                .unwrap();
        assert_eq!(image.get_pixel(0, 0), Pixel::Black);
        assert_eq!(image.get_pixel(1, 0), Pixel::White);
    }

    #[test]
    fn test_put_pixel() {
        let mut image = MonochromeImage::new(8, 8).unwrap();
        image.put_pixel(3, 4, Pixel::Black);
        assert!(image.is_black(3, 4));
        assert!(!image.is_black(4, 3));
    }

    #[test]
    fn test_resize_same_size_is_identity() {
        let image = MonochromeImage::from_fn(8, 8, |x, y| {
            if (x + y) % 2 == 0 {
                Pixel::Black
            } else {
                Pixel::White
            }
        })
        .unwrap();
        assert_eq!(image.resize(8, 8).unwrap(), image);
    }

    #[test]
    fn test_resize_keeps_solid_colors() {
        let black = MonochromeImage::from_fn(40, 30, |_, _| Pixel::Black).unwrap();
        let scaled = black.resize(16, 12).unwrap();
        assert_eq!(scaled.dimensions(), (16, 12));
        assert!(scaled.pixels.iter().all(|p| *p == Pixel::Black));

        let white = MonochromeImage::new(40, 30).unwrap();
        let scaled = white.resize(80, 60).unwrap();
        assert!(scaled.pixels.iter().all(|p| *p == Pixel::White));
    }

    #[test]
    fn test_resize_keeps_left_half_black() {
        let image = MonochromeImage::from_fn(64, 8, |x, _| {
            if x < 32 {
                Pixel::Black
            } else {
                Pixel::White
            }
        })
        .unwrap();
        let scaled = image.resize(32, 4).unwrap();
        assert!(scaled.is_black(0, 0));
        assert!(scaled.is_black(10, 2));
        assert!(!scaled.is_black(22, 2));
        assert!(!scaled.is_black(31, 3));
    }

    #[test]
    #[should_panic]
    fn test_get_pixel_out_of_bounds() {
        MonochromeImage::new(8, 1).unwrap().get_pixel(8, 0);
    }
}
