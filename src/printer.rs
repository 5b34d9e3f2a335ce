use image::DynamicImage;
use log::{debug, info};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    thread,
    time::Duration,
};

use crate::{
    bitmap::MonochromeImage, command, error::Error, profile::PrinterProfile, raster::RasterImage,
};

/// Settling times the printer needs between commands.
///
/// These only slow the sender down, the bytes written are the same with or
/// without them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    pub after_open: Duration,
    pub after_reset: Duration,
    /// Waited after each text line and each fed line.
    pub per_line: Duration,
    pub after_image: Duration,
    pub after_cut: Duration,
}

impl Pacing {
    /// No waiting at all, for in-memory sinks and buffered transports.
    pub fn none() -> Self {
        Self::default()
    }

    /// Timings the CSN-A2 needs on a 9600 baud TTL line.
    pub fn csn_a2() -> Self {
        Pacing {
            after_open: Duration::from_secs(2),
            after_reset: Duration::from_millis(100),
            per_line: Duration::from_millis(10),
            after_image: Duration::from_millis(100),
            after_cut: Duration::from_millis(100),
        }
    }
}

/// Handle owning the byte sink of one printer.
///
/// All commands take `&mut self`, so a job can not interleave with another
/// one on the same sink. Share a printer between threads through a `Mutex`.
pub struct Printer<W: Write> {
    sink: W,
    profile: PrinterProfile,
    pacing: Pacing,
}

impl Printer<File> {
    /// Open the serial device at `path` (e.g. `/dev/ttyS0`).
    ///
    /// Line settings such as the baud rate have to be configured on the
    /// device beforehand. Waits for the printer to come up before returning.
    pub fn open<P: AsRef<Path>>(path: P, profile: PrinterProfile) -> Result<Self, Error> {
        let file = OpenOptions::new().write(true).open(path.as_ref())?;
        info!("opened printer at {:?}", path.as_ref());
        let printer = Printer::new(file, profile)?.pacing(Pacing::csn_a2());
        printer.settle(printer.pacing.after_open);
        Ok(printer)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(sink: W, profile: PrinterProfile) -> Result<Self, Error> {
        profile.validate()?;
        Ok(Printer {
            sink,
            profile,
            pacing: Pacing::none(),
        })
    }

    pub fn pacing(self, pacing: Pacing) -> Self {
        Printer { pacing, ..self }
    }

    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Flush and hand back the sink.
    pub fn into_inner(mut self) -> Result<W, Error> {
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Flush and release the sink.
    pub fn close(self) -> Result<(), Error> {
        self.into_inner().map(|_| ())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), Error> {
        self.sink.write_all(buf)?;
        Ok(())
    }

    fn settle(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    /// Initialize printer
    pub fn reset(&mut self) -> Result<(), Error> {
        self.write(&command::reset())?;
        self.settle(self.pacing.after_reset);
        Ok(())
    }

    /// Select print mode from a [`PrintMode`](crate::PrintMode) or a raw byte.
    pub fn set_print_mode<M: Into<u8>>(&mut self, mode: M) -> Result<(), Error> {
        self.write(&command::print_mode(mode.into()))
    }

    pub fn set_line_spacing(&mut self, dots: u8) -> Result<(), Error> {
        self.write(&command::line_spacing(dots))
    }

    /// Set character magnification. Only the low 4 bits of each value count.
    pub fn set_text_size(&mut self, width: u8, height: u8) -> Result<(), Error> {
        self.write(&command::text_size(width, height))
    }

    /// Print text, one CR LF terminated line per `\n` separated segment.
    ///
    /// A trailing `\n` therefore produces an extra empty line.
    pub fn print_text(&mut self, text: &str) -> Result<(), Error> {
        for line in text.split('\n') {
            self.write(&command::text_line(line))?;
            self.settle(self.pacing.per_line);
        }
        Ok(())
    }

    pub fn feed(&mut self, lines: usize) -> Result<(), Error> {
        for _ in 0..lines {
            self.write(&[command::LF])?;
            self.settle(self.pacing.per_line);
        }
        Ok(())
    }

    /// Full cut
    pub fn cut_paper(&mut self) -> Result<(), Error> {
        self.write(&command::cut())?;
        self.settle(self.pacing.after_cut);
        Ok(())
    }

    /// Fit `image` to the printer and print it as a raster bit image.
    pub fn print_bitmap(&mut self, image: &MonochromeImage) -> Result<(), Error> {
        let raster = RasterImage::encode(&self.profile, image)?;
        self.print_raster(&raster)
    }

    /// Send an already packed raster image: header, rows, then LF.
    pub fn print_raster(&mut self, raster: &RasterImage) -> Result<(), Error> {
        debug!(
            "sending raster image: {} bytes per row, {} rows",
            raster.bytes_per_row(),
            raster.height()
        );
        self.write(&raster.header())?;
        for row in raster.rows() {
            self.write(row)?;
        }
        self.write(&[command::LF])?;
        self.settle(self.pacing.after_image);
        Ok(())
    }

    /// Threshold a decoded image at [`DEFAULT_THRESHOLD`](crate::DEFAULT_THRESHOLD)
    /// and print it.
    pub fn print_image(&mut self, image: &DynamicImage) -> Result<(), Error> {
        let bitmap = MonochromeImage::from_dynamic(image, crate::DEFAULT_THRESHOLD)?;
        self.print_bitmap(&bitmap)
    }

    /// Print a photo as its own slip: reset, image, 6 blank lines, cut.
    pub fn print_photo(&mut self, image: &MonochromeImage) -> Result<(), Error> {
        self.reset()?;
        self.print_bitmap(image)?;
        self.feed(6)?;
        self.cut_paper()
    }
}
