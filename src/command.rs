//! Raw command sequences understood by the CSN-A2.
//!
//! Every function here only builds bytes. Writing them out is the job of
//! [`Printer`](crate::Printer), which keeps this module free of I/O so the
//! framing can be checked byte by byte.
//!
//! | Command | Bytes |
//! |---------|-------|
//! | Initialize | `1B 40` |
//! | Print mode | `1B 21 n` |
//! | Line spacing | `1B 33 n` |
//! | Character size | `1D 21 n` |
//! | Raster bit image | `1D 76 30 m xL xH yL yH d1...dk` |
//! | Line feed | `0A` |
//! | Full cut | `1B 69` |

pub const ESC: u8 = 0x1B;
pub const GS: u8 = 0x1D;
pub const LF: u8 = 0x0A;
pub const CR: u8 = 0x0D;

/// Line spacing used by the printer after power on, in dots.
pub const DEFAULT_LINE_SPACING: u8 = 30;

/// Substitute for characters the printer can not render.
pub const PLACEHOLDER: u8 = b'?';

/// ESC @ : Initialize printer
pub fn reset() -> [u8; 2] {
    [ESC, b'@']
}

/// ESC ! n : Select print mode
pub fn print_mode(mode: u8) -> [u8; 3] {
    [ESC, b'!', mode]
}

/// ESC 3 n : Set line spacing to `dots`
pub fn line_spacing(dots: u8) -> [u8; 3] {
    [ESC, b'3', dots]
}

/// GS ! n : Select character size
///
/// The width multiplier lands in the upper nibble and the height multiplier
/// in the lower one. Both are masked to 4 bits, larger values wrap.
pub fn text_size(width: u8, height: u8) -> [u8; 3] {
    [GS, b'!', (width & 0x0F) << 4 | (height & 0x0F)]
}

/// GS v 0 m xL xH yL yH : Raster bit image header in normal mode
///
/// `height` is masked to 16 bits, rows beyond 65535 wrap the row count.
pub fn raster_header(bytes_per_row: u32, height: u32) -> [u8; 8] {
    [
        GS,
        b'v',
        b'0',
        0x00,
        (bytes_per_row & 0xFF) as u8,
        ((bytes_per_row >> 8) & 0xFF) as u8,
        (height & 0xFF) as u8,
        ((height >> 8) & 0xFF) as u8,
    ]
}

/// LF repeated `lines` times
pub fn feed(lines: usize) -> Vec<u8> {
    vec![LF; lines]
}

/// ESC i : Full cut
pub fn cut() -> [u8; 2] {
    [ESC, b'i']
}

/// Encode one line of text followed by CR LF.
///
/// Anything outside 7-bit ASCII becomes [`PLACEHOLDER`], one per character.
pub fn text_line(line: &str) -> Vec<u8> {
    let mut buf: Vec<u8> = line
        .chars()
        .map(|c| if c.is_ascii() { c as u8 } else { PLACEHOLDER })
        .collect();
    buf.extend_from_slice(&[CR, LF]);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        assert_eq!(reset(), [0x1B, 0x40]);
    }

    #[test]
    fn test_print_mode_every_value() {
        for mode in 0..=255u8 {
            assert_eq!(print_mode(mode), [0x1B, 0x21, mode]);
        }
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(line_spacing(DEFAULT_LINE_SPACING), [0x1B, 0x33, 30]);
        assert_eq!(line_spacing(255), [0x1B, 0x33, 0xFF]);
    }

    #[test]
    fn test_text_size_packs_nibbles() {
        assert_eq!(text_size(0, 0), [0x1D, 0x21, 0x00]);
        assert_eq!(text_size(1, 2), [0x1D, 0x21, 0x12]);
        assert_eq!(text_size(15, 15), [0x1D, 0x21, 0xFF]);
    }

    #[test]
    fn test_text_size_masks_out_of_range() {
        assert_eq!(text_size(0x13, 0xF4), [0x1D, 0x21, 0x34]);
    }

    #[test]
    fn test_raster_header_little_endian() {
        assert_eq!(
            raster_header(48, 288),
            [0x1D, 0x76, 0x30, 0x00, 0x30, 0x00, 0x20, 0x01]
        );
        assert_eq!(
            raster_header(0x0102, 0xABCD),
            [0x1D, 0x76, 0x30, 0x00, 0x02, 0x01, 0xCD, 0xAB]
        );
    }

    #[test]
    fn test_feed() {
        assert!(feed(0).is_empty());
        assert_eq!(feed(3), vec![0x0A, 0x0A, 0x0A]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(), [0x1B, 0x69]);
    }

    #[test]
    fn test_text_line_ascii() {
        assert_eq!(text_line("Hi!"), vec![b'H', b'i', b'!', 0x0D, 0x0A]);
        assert_eq!(text_line(""), vec![0x0D, 0x0A]);
    }

    #[test]
    fn test_text_line_substitutes_per_character() {
        assert_eq!(text_line("café ☕"), b"caf? ?\r\n".to_vec());
    }
}
