use bitflags::bitflags;

bitflags! {
    /// Print mode bitmask sent with `ESC !`.
    ///
    /// Bits 1, 5 and 7 are undefined on the CSN-A2. Raw values carrying them
    /// can still be sent with [`Printer::set_print_mode`](crate::Printer::set_print_mode)
    /// by passing a `u8`.
    pub struct PrintMode: u8 {
        /// Font B (9x17) instead of Font A (12x24).
        const FONT_B = 0b0000_0001;
        const EMPHASIZED = 0b0000_0100;
        const DOUBLE_HEIGHT = 0b0000_1000;
        const DOUBLE_WIDTH = 0b0001_0000;
        const STRIKE = 0b0100_0000;
    }
}

impl Default for PrintMode {
    fn default() -> Self {
        PrintMode::empty()
    }
}

impl From<PrintMode> for u8 {
    fn from(mode: PrintMode) -> u8 {
        mode.bits()
    }
}
