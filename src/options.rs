//! View configuration.

use crate::error::{Error, Result};
use crate::theme::Theme;
use std::time::Duration;

/// Default caret blink interval.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Largest supported `bytes_per_line`.
pub const MAX_BYTES_PER_LINE: usize = 256;

/// Options for [`HexView::with_options`](crate::HexView::with_options).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexViewOptions {
    /// Bytes shown per line.
    pub bytes_per_line: usize,
    /// Minimum zero-padding of address labels.
    pub min_address_digits: usize,
    /// Glyph printed after each address label.
    pub address_suffix: Option<char>,
    /// Glyph for control bytes in the text pane and text export.
    pub placeholder: char,
    /// Caret blink period.
    pub blink_interval: Duration,
    /// Caret bar width in pixels; the bar also sits this far left of its column.
    pub caret_width: u32,
    pub theme: Theme,
}

impl Default for HexViewOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: 16,
            min_address_digits: 4,
            address_suffix: Some('h'),
            placeholder: '.',
            blink_interval: DEFAULT_BLINK_INTERVAL,
            caret_width: 1,
            theme: Theme::default(),
        }
    }
}

impl HexViewOptions {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BYTES_PER_LINE).contains(&self.bytes_per_line) {
            return Err(Error::InvalidOption {
                name: "bytes_per_line",
                reason: format!(
                    "{} is outside 1..={MAX_BYTES_PER_LINE}",
                    self.bytes_per_line
                ),
            });
        }
        if !(1..=16).contains(&self.min_address_digits) {
            return Err(Error::InvalidOption {
                name: "min_address_digits",
                reason: format!("{} is outside 1..=16", self.min_address_digits),
            });
        }
        if self.blink_interval.is_zero() {
            return Err(Error::InvalidOption {
                name: "blink_interval",
                reason: "must be non-zero".to_string(),
            });
        }
        if self.caret_width == 0 {
            return Err(Error::InvalidOption {
                name: "caret_width",
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Glyphs printed after each address label.
    #[must_use]
    pub fn suffix_len(&self) -> usize {
        usize::from(self.address_suffix.is_some())
    }
}
