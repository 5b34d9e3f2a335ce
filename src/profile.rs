use crate::error::Error;

/// Hardware limits of the printer the raster encoder targets.
///
/// The dot width is the number of pixels the print head addresses per line
/// and has to be a multiple of 8 so that a row packs into whole bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterProfile {
    dot_width: u32,
    max_height: u32,
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl PrinterProfile {
    /// Profile of the CSN-A2 with 58mm paper: 384 dots, at most 2000 rows.
    pub fn new() -> Self {
        PrinterProfile {
            dot_width: crate::DEFAULT_DOT_WIDTH,
            max_height: crate::DEFAULT_MAX_HEIGHT,
        }
    }

    pub fn dot_width(self, dot_width: u32) -> Self {
        PrinterProfile { dot_width, ..self }
    }

    pub fn max_height(self, max_height: u32) -> Self {
        PrinterProfile { max_height, ..self }
    }

    pub fn width(&self) -> u32 {
        self.dot_width
    }

    pub fn height_limit(&self) -> u32 {
        self.max_height
    }

    /// Bytes needed for one full-width raster row.
    pub fn bytes_per_row(&self) -> u32 {
        self.dot_width / 8
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.dot_width == 0 || self.dot_width % 8 != 0 {
            return Err(Error::InvalidConfig(format!(
                "dot width must be a positive multiple of 8, got {}",
                self.dot_width
            )));
        }
        if self.max_height == 0 {
            return Err(Error::InvalidConfig(
                "max height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
