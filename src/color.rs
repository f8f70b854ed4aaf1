//! RGBA color type handed to the host's paint primitives.
//!
//! Colors are stored as 8-bit components since every pixel toolkit the
//! view is embedded in accepts them directly.
//!
//! # Examples
//!
//! ```
//! use hexpane::Rgba;
//!
//! let selection = Rgba::from_rgb_u8(173, 214, 255);
//! assert_eq!(Rgba::from_hex("#ADD6FF").unwrap(), selection);
//!
//! let translucent = Rgba::BLACK.with_alpha(128);
//! assert!(!translucent.is_opaque());
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb_u8(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb_u8(255, 255, 255);

    /// Medium gray used for rules and address labels.
    pub const GRAY: Self = Self::from_rgb_u8(160, 160, 164);

    /// Light gray used for the current-line band.
    pub const LIGHT_GRAY: Self = Self::from_rgb_u8(192, 192, 192);

    /// Dark gray used for the mirrored byte highlight.
    pub const DARK_GRAY: Self = Self::from_rgb_u8(128, 128, 128);

    /// Create a new color from all four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || Error::InvalidColor(hex.to_string());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Return the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Check if fully transparent.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Pack into `0xRRGGBBAA`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}
