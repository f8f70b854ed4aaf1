//! Grid geometry: pixel positions to logical `(line, column)` addresses.
//!
//! Columns live in the hex pane's grid. Byte `k` of a line owns columns
//! `3k` and `3k + 1` (its two digits) and `3k + 2` (the separator after
//! it), except the last byte of a line which has no separator. The text
//! pane shares this column space: one glyph step is one byte, i.e. three
//! columns.
//!
//! Everything here is a pure function of the [`Layout`] and the scroll
//! position; nothing is cached between calls.

mod rect;

pub use rect::{Point, Rect};

use crate::error::{Error, Result};

/// Fixed-pitch font metrics supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontMetrics {
    /// Advance width of one glyph in pixels.
    pub char_width: u32,
    /// Height of one text line in pixels.
    pub line_height: u32,
    /// Distance from the top of a line to the text baseline.
    pub ascent: u32,
}

impl FontMetrics {
    /// Create validated font metrics.
    pub fn new(char_width: u32, line_height: u32, ascent: u32) -> Result<Self> {
        let metrics = Self {
            char_width,
            line_height,
            ascent,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Reject metrics that would divide by zero in pixel lookups.
    pub fn validate(&self) -> Result<()> {
        if self.char_width == 0 || self.line_height == 0 {
            return Err(Error::InvalidMetrics {
                char_width: self.char_width,
                line_height: self.line_height,
            });
        }
        Ok(())
    }
}

/// One of the two representations of the same bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Hexadecimal digit grid.
    #[default]
    Hex,
    /// Glyph grid.
    Text,
}

/// A logical `(line, column)` position. Orders by line, then column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    pub line: usize,
    pub column: usize,
}

impl Address {
    /// Create a new address.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Number of hex-pane columns for a line of `bytes_per_line` bytes.
#[must_use]
pub const fn chars_per_line(bytes_per_line: usize) -> usize {
    (bytes_per_line * 2 + bytes_per_line).saturating_sub(1)
}

/// Byte index within a line for a column, unclamped.
///
/// A byte's two digit columns map to that byte; its separator column
/// maps to the next byte.
#[must_use]
pub const fn byte_index_from_column(column: usize) -> usize {
    (column + 1) / 3
}

/// Pixel length of `units` cells of `unit` pixels, saturating at `i32::MAX`.
pub(crate) fn px(units: usize, unit: u32) -> i32 {
    i32::try_from(units)
        .unwrap_or(i32::MAX)
        .saturating_mul(i32::try_from(unit).unwrap_or(i32::MAX))
}

/// Number of decimal digits needed to print `n`.
fn decimal_digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Derived layout for one buffer length and one set of font metrics.
///
/// Recomputed whenever either changes; never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    bytes_per_line: usize,
    chars_per_line: usize,
    metrics: FontMetrics,
    byte_len: usize,
    line_count: usize,
    address_digits: usize,
    address_width: i32,
    hex_origin_x: i32,
    ascii_origin_x: i32,
    content_width: i32,
}

impl Layout {
    /// Compute the layout.
    ///
    /// `suffix_len` is the number of glyphs printed after each address
    /// label (one for the default `h`).
    #[must_use]
    pub fn new(
        bytes_per_line: usize,
        metrics: FontMetrics,
        byte_len: usize,
        min_address_digits: usize,
        suffix_len: usize,
    ) -> Self {
        let bytes_per_line = bytes_per_line.max(1);
        let chars_per_line = chars_per_line(bytes_per_line);
        let line_count = byte_len.div_ceil(bytes_per_line);
        let address_digits = decimal_digits(line_count).max(min_address_digits);

        let cw = metrics.char_width;
        let address_width = px(address_digits + suffix_len, cw);
        let hex_origin_x = address_width.saturating_add(px(1, cw));
        let hex_width = px(chars_per_line, cw);
        let ascii_origin_x = hex_origin_x
            .saturating_add(hex_width)
            .saturating_add(px(1, cw));
        let content_width = ascii_origin_x.saturating_add(px(bytes_per_line, cw));

        Self {
            bytes_per_line,
            chars_per_line,
            metrics,
            byte_len,
            line_count,
            address_digits,
            address_width,
            hex_origin_x,
            ascii_origin_x,
            content_width,
        }
    }

    #[must_use]
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Highest column index on a full line.
    #[must_use]
    pub fn chars_per_line(&self) -> usize {
        self.chars_per_line
    }

    #[must_use]
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Lines needed to address the whole buffer; zero when empty.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Zero-padding width of address labels.
    #[must_use]
    pub fn address_digits(&self) -> usize {
        self.address_digits
    }

    /// Pixel width of the address label column.
    #[must_use]
    pub fn address_width(&self) -> i32 {
        self.address_width
    }

    #[must_use]
    pub fn hex_origin_x(&self) -> i32 {
        self.hex_origin_x
    }

    #[must_use]
    pub fn ascii_origin_x(&self) -> i32 {
        self.ascii_origin_x
    }

    /// Total pixel width of gutter plus both panes.
    #[must_use]
    pub fn content_width(&self) -> i32 {
        self.content_width
    }

    /// Number of bytes present on `line`; the last line may be short.
    #[must_use]
    pub fn bytes_on_line(&self, line: usize) -> usize {
        if line >= self.line_count {
            return 0;
        }
        (self.byte_len - line * self.bytes_per_line).min(self.bytes_per_line)
    }

    /// Largest column a position on `line` may take.
    #[must_use]
    pub fn max_column(&self, line: usize) -> usize {
        let bytes = self.bytes_on_line(line);
        if bytes == self.bytes_per_line {
            self.chars_per_line
        } else {
            (bytes * 3).min(self.chars_per_line)
        }
    }

    /// Byte index within `line` for `column`, clamped to the bytes present.
    #[must_use]
    pub fn byte_index_on_line(&self, line: usize, column: usize) -> usize {
        byte_index_from_column(column).min(self.bytes_on_line(line))
    }

    /// Absolute byte offset of an address.
    #[must_use]
    pub fn byte_offset(&self, address: Address) -> usize {
        (address.line * self.bytes_per_line + self.byte_index_on_line(address.line, address.column))
            .min(self.byte_len)
    }

    /// Which pane a content-space x coordinate falls in.
    #[must_use]
    pub fn pane_at(&self, x: i32) -> Pane {
        if x >= self.ascii_origin_x {
            Pane::Text
        } else {
            Pane::Hex
        }
    }

    /// Line under a viewport y coordinate, clamped to existing lines.
    #[must_use]
    pub fn row_for_y(&self, y: i32, first_visible_line: usize) -> usize {
        let lh = self.metrics.line_height.max(1);
        let row = y.max(0).unsigned_abs() / lh;
        let row = (row as usize).saturating_add(first_visible_line);
        row.min(self.line_count.saturating_sub(1))
    }

    /// Column under a content-space x coordinate on `line`, clamped.
    #[must_use]
    pub fn column_for_x(&self, x: i32, pane: Pane, line: usize) -> usize {
        if self.line_count == 0 {
            return 0;
        }
        let cw = i64::from(self.metrics.char_width.max(1));
        let half = cw / 2;
        let column = match pane {
            Pane::Hex => (i64::from(x) + half - i64::from(self.hex_origin_x)).div_euclid(cw),
            // One glyph step covers one byte's worth of hex columns.
            Pane::Text => {
                3 * (i64::from(x) + half - i64::from(self.ascii_origin_x)).div_euclid(cw) - 1
            }
        };
        let column = usize::try_from(column.max(0)).unwrap_or(usize::MAX);
        column.min(self.max_column(line))
    }

    /// Map a pixel position to a clamped address.
    ///
    /// `pos.x` is in content space (horizontal scroll already added),
    /// `pos.y` is in viewport space.
    #[must_use]
    pub fn address_from_pixel(&self, pos: Point, pane: Pane, first_visible_line: usize) -> Address {
        let line = self.row_for_y(pos.y, first_visible_line);
        Address::new(line, self.column_for_x(pos.x, pane, line))
    }

    /// Content-space x of a column's left edge in `pane`.
    #[must_use]
    pub fn column_x(&self, column: usize, pane: Pane) -> i32 {
        match pane {
            Pane::Hex => self
                .hex_origin_x
                .saturating_add(px(column, self.metrics.char_width)),
            Pane::Text => self.ascii_origin_x.saturating_add(px(
                byte_index_from_column(column),
                self.metrics.char_width,
            )),
        }
    }

    /// Pixel width spanned by columns `begin..end` in `pane`.
    #[must_use]
    pub fn span_width(&self, begin: usize, end: usize, pane: Pane) -> u32 {
        let cells = match pane {
            Pane::Hex => end.saturating_sub(begin),
            Pane::Text => byte_index_from_column(end).saturating_sub(byte_index_from_column(begin)),
        };
        px(cells, self.metrics.char_width).unsigned_abs()
    }

    /// Viewport y of the top of `line`; negative above the viewport.
    #[must_use]
    pub fn line_top(&self, line: usize, first_visible_line: usize) -> i32 {
        let lh = i64::from(self.metrics.line_height);
        let delta = i64::try_from(line).unwrap_or(i64::MAX)
            - i64::try_from(first_visible_line).unwrap_or(i64::MAX);
        i32::try_from(delta.saturating_mul(lh)).unwrap_or(if delta < 0 {
            i32::MIN
        } else {
            i32::MAX
        })
    }

    /// Whole lines that fit in a viewport of `height` pixels.
    #[must_use]
    pub fn lines_per_page(&self, height: u32) -> usize {
        (height / self.metrics.line_height.max(1)) as usize
    }
}
