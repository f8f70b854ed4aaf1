//! Serialization of selected bytes for the clipboard.

use std::fmt::Write as _;

/// Largest byte value drawn with the placeholder glyph.
pub const LAST_CONTROL_BYTE: u8 = 0x1F;

/// Glyph shown for `byte` in the text pane.
///
/// Control bytes become `placeholder`; everything else maps to the
/// Unicode scalar with the same value (Latin-1).
#[must_use]
pub fn glyph_for(byte: u8, placeholder: char) -> char {
    if byte <= LAST_CONTROL_BYTE {
        placeholder
    } else {
        char::from(byte)
    }
}

/// Two uppercase hex digits per byte, single-space separated.
#[must_use]
pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().saturating_mul(3));
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02X}");
    }
    out
}

/// One glyph per byte, no separators.
#[must_use]
pub fn format_glyphs(bytes: &[u8], placeholder: char) -> String {
    bytes.iter().map(|&b| glyph_for(b, placeholder)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x0A, 0xFF, 0x41]), "0A FF 41");
        assert_eq!(format_hex(&[0x00]), "00");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn test_format_glyphs() {
        assert_eq!(format_glyphs(&[0x0A, 0xFF, 0x41], '.'), ".\u{FF}A");
        assert_eq!(format_glyphs(b"hex", '.'), "hex");
    }

    #[test]
    fn test_glyph_for_control_boundary() {
        assert_eq!(glyph_for(0x00, '.'), '.');
        assert_eq!(glyph_for(0x1F, '?'), '?');
        assert_eq!(glyph_for(0x20, '.'), ' ');
        assert_eq!(glyph_for(0xE9, '.'), 'é');
    }
}
