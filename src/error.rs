//! Error types for CSN-A2 printer operations.
//!
//! This module defines all possible errors that can occur while encoding
//! commands and images and while writing them to the printer.

use thiserror::Error;

/// Main error type for CSN-A2 printer operations.
///
/// Text that the printer can not render is never an error, unsupported
/// characters are substituted with `?` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Image with a zero width or height.
    ///
    /// The raster command can not describe an empty bitmap, so the image is
    /// rejected before anything is written to the printer.
    #[error("Invalid image size {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// Invalid configuration parameter provided.
    ///
    /// This error occurs when a printer profile has a dot width that is zero
    /// or not a multiple of 8, or a zero maximum height.
    #[error("Invalid configuration parameter: {0}")]
    InvalidConfig(String),

    /// The byte sink rejected a write.
    ///
    /// Bytes written before the failure have already reached the printer and
    /// can not be taken back, the rest of the job should be abandoned.
    #[error(transparent)]
    Transport(#[from] std::io::Error),

    #[error(transparent)]
    ImageDecode(#[from] image::ImageError),
}
