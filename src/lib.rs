//! CSN-A2 Thermal Printer Driver
//!
//! This crate encodes commands and bitmaps for the CSN-A2 TTL receipt
//! printer (and other printers speaking the same ESC/POS subset) and writes
//! them to any [`std::io::Write`] sink, typically the serial device the
//! printer hangs off.
//!
//! # Example
//!
//! ```rust,no_run
//! use csn_a2::{MonochromeImage, PrintMode, Printer, PrinterProfile};
//!
//! let mut printer = Printer::open("/dev/ttyS0", PrinterProfile::new()).unwrap();
//! printer.reset().unwrap();
//! printer.set_print_mode(PrintMode::EMPHASIZED).unwrap();
//! printer.print_text("Hello World!").unwrap();
//!
//! let photo = MonochromeImage::open("photo.jpg", csn_a2::DEFAULT_THRESHOLD).unwrap();
//! printer.print_bitmap(&photo).unwrap();
//! printer.feed(3).unwrap();
//! printer.cut_paper().unwrap();
//! printer.close().unwrap();
//! ```

mod bitmap;
pub mod command;
mod error;
mod mode;
mod printer;
mod profile;
pub mod raster;

pub use crate::{
    bitmap::{MonochromeImage, Pixel},
    error::Error,
    mode::PrintMode,
    printer::{Pacing, Printer},
    profile::PrinterProfile,
    raster::RasterImage,
};

/// Width in dots of the CSN-A2 print head with 58mm paper.
///
/// One raster row takes 48 bytes when packed (384 / 8 = 48).
pub const DEFAULT_DOT_WIDTH: u32 = 384;

/// Tallest raster image sent by default, in rows.
///
/// Taller images are scaled down, narrowing them, instead of being cropped.
pub const DEFAULT_MAX_HEIGHT: u32 = 2000;

/// Luma below which a pixel is printed black when binarizing.
pub const DEFAULT_THRESHOLD: u8 = 128;
