//! Cursor and selection state machine.
//!
//! A [`TextCursor`] is in one of three states:
//!
//! - **Empty**: no anchors (fresh view, or after the buffer was replaced).
//! - **Point**: a collapsed caret tagged with the pane it was placed in.
//! - **Range**: a selection of whole bytes, possibly spanning lines.
//!
//! The raw press point (anchor) and raw drag point (focus) are kept as
//! given. The visible range is recomputed from those two on every
//! [`TextCursor::select_to`], so repeated drags never accumulate snapping
//! drift.
//!
//! # Byte boundaries
//!
//! Every column is a position between grid cells. Column `3k` sits before
//! byte `k`, column `3k + 1` sits between its two digits and column
//! `3k + 2` sits after its second digit, which is the same byte boundary
//! as `3(k + 1)`. A normalized range starts on a byte start (`3k`) and ends
//! right after the last selected digit (`3k + 2`), so it never covers a
//! separator that does not belong to a selected byte.

use crate::geometry::{Address, Pane, byte_index_from_column, chars_per_line};
use std::ops::Range;

/// Observable state of a [`TextCursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    Empty,
    Point,
    Range,
}

/// Which way the pointer moved relative to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    /// Focus at or after the anchor.
    Forward,
    /// Focus before the anchor.
    Reverting,
}

/// Direction of a drag from `anchor` to `focus`.
#[must_use]
pub fn drag_direction(anchor: Address, focus: Address) -> DragDirection {
    if focus < anchor {
        DragDirection::Reverting
    } else {
        DragDirection::Forward
    }
}

/// Caret column after placing it at `column` in `pane`.
///
/// In the hex pane a caret never rests after a byte's second digit; it
/// moves back to that byte's first digit.
#[must_use]
pub const fn snap_caret(column: usize, pane: Pane) -> usize {
    match pane {
        Pane::Hex if column % 3 == 2 => column - 2,
        _ => column,
    }
}

/// Byte boundary at or before `column` (a mid-byte column yields the
/// start of its byte).
const fn boundary_floor(column: usize) -> usize {
    byte_index_from_column(column)
}

/// Byte boundary at or after `column` (a mid-byte column yields the end
/// of its byte).
const fn boundary_ceil(column: usize) -> usize {
    (column + 2) / 3
}

/// Resolve an anchor/focus pair to a whole-byte selection.
///
/// Returns the ordered `(begin, end)` addresses, or `None` when the two
/// points coincide or there is no data. Mid-byte endpoints grow outward to
/// cover their byte. When both endpoints land on the same byte boundary
/// (for instance column `3k + 2` against column `3k + 3`) one byte in the
/// drag direction is selected, falling back to the opposite side at the
/// ends of the data.
#[must_use]
pub fn normalize_selection(
    anchor: Address,
    focus: Address,
    bytes_per_line: usize,
    byte_len: usize,
) -> Option<(Address, Address)> {
    if anchor == focus || byte_len == 0 {
        return None;
    }
    let bytes_per_line = bytes_per_line.max(1);
    let direction = drag_direction(anchor, focus);
    let (first, last) = match direction {
        DragDirection::Forward => (anchor, focus),
        DragDirection::Reverting => (focus, anchor),
    };

    let absolute = |address: Address, boundary: usize| {
        address
            .line
            .saturating_mul(bytes_per_line)
            .saturating_add(boundary.min(bytes_per_line))
            .min(byte_len)
    };
    let mut lo = absolute(first, boundary_floor(first.column));
    let mut hi = absolute(last, boundary_ceil(last.column));

    if hi <= lo {
        match direction {
            DragDirection::Forward if lo < byte_len => hi = lo + 1,
            DragDirection::Reverting if hi > 0 => lo = hi - 1,
            DragDirection::Forward => lo = hi - 1,
            DragDirection::Reverting => hi = lo + 1,
        }
    }

    let begin = Address::new(lo / bytes_per_line, 3 * (lo % bytes_per_line));
    let end = if hi % bytes_per_line == 0 {
        Address::new(hi / bytes_per_line - 1, chars_per_line(bytes_per_line))
    } else {
        Address::new(hi / bytes_per_line, 3 * (hi % bytes_per_line) - 1)
    };
    Some((begin, end))
}

/// Caret and selection over a byte grid.
#[derive(Clone, Debug)]
pub struct TextCursor {
    bytes_per_line: usize,
    byte_len: usize,
    pane: Pane,
    anchor: Option<Address>,
    focus: Option<Address>,
    range: Option<(Address, Address)>,
}

impl TextCursor {
    /// Create an empty cursor for a buffer of `byte_len` bytes.
    #[must_use]
    pub fn new(bytes_per_line: usize, byte_len: usize) -> Self {
        Self {
            bytes_per_line: bytes_per_line.max(1),
            byte_len,
            pane: Pane::Hex,
            anchor: None,
            focus: None,
            range: None,
        }
    }

    /// Drop all anchors.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.focus = None;
        self.range = None;
        self.pane = Pane::Hex;
    }

    /// Clear and adopt a new buffer length.
    pub fn reset(&mut self, byte_len: usize) {
        self.clear();
        self.byte_len = byte_len;
    }

    /// Collapse to a caret at `(line, column)` in `pane`.
    pub fn move_to(&mut self, line: usize, column: usize, pane: Pane) {
        let at = Address::new(line, snap_caret(column, pane));
        self.anchor = Some(at);
        self.focus = Some(at);
        self.range = None;
        self.pane = pane;
    }

    /// Extend from the anchor to `(line, column)`. Ignored when empty.
    pub fn select_to(&mut self, line: usize, column: usize) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let focus = Address::new(line, column);
        self.focus = Some(focus);
        self.range = normalize_selection(anchor, focus, self.bytes_per_line, self.byte_len);
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        match (self.anchor, self.range) {
            (None, _) => CursorState::Empty,
            (Some(_), None) => CursorState::Point,
            (Some(_), Some(_)) => CursorState::Range,
        }
    }

    /// True unless the cursor is empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.anchor.is_some()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.range.is_some()
    }

    #[must_use]
    pub fn has_multi_lines(&self) -> bool {
        self.range.is_some_and(|(begin, end)| begin.line != end.line)
    }

    /// Whether `line` lies inside the selected range.
    #[must_use]
    pub fn within(&self, line: usize) -> bool {
        self.range
            .is_some_and(|(begin, end)| (begin.line..=end.line).contains(&line))
    }

    /// Pane the cursor was placed in.
    #[must_use]
    pub fn pane(&self) -> Pane {
        self.pane
    }

    #[must_use]
    pub fn in_hex_pane(&self) -> bool {
        self.pane == Pane::Hex
    }

    /// Raw press point.
    #[must_use]
    pub fn anchor(&self) -> Option<Address> {
        self.anchor
    }

    /// Raw drag point.
    #[must_use]
    pub fn focus(&self) -> Option<Address> {
        self.focus
    }

    /// Caret address when collapsed.
    #[must_use]
    pub fn caret(&self) -> Option<Address> {
        match self.state() {
            CursorState::Point => self.anchor,
            _ => None,
        }
    }

    /// Earlier end, in line/column order.
    #[must_use]
    pub fn begin(&self) -> Option<Address> {
        self.range.map(|(begin, _)| begin).or(self.anchor)
    }

    /// Later end, in line/column order.
    #[must_use]
    pub fn end(&self) -> Option<Address> {
        self.range.map(|(_, end)| end).or(self.anchor)
    }

    #[must_use]
    pub fn begin_line(&self) -> Option<usize> {
        self.begin().map(|a| a.line)
    }

    #[must_use]
    pub fn end_line(&self) -> Option<usize> {
        self.end().map(|a| a.line)
    }

    #[must_use]
    pub fn begin_pos(&self) -> Option<usize> {
        self.begin().map(|a| a.column)
    }

    #[must_use]
    pub fn end_pos(&self) -> Option<usize> {
        self.end().map(|a| a.column)
    }

    /// Absolute byte offsets covered by the selection.
    #[must_use]
    pub fn selected_bytes(&self) -> Option<Range<usize>> {
        let (begin, end) = self.range?;
        let offset = |a: Address| {
            (a.line * self.bytes_per_line
                + byte_index_from_column(a.column).min(self.bytes_per_line))
            .min(self.byte_len)
        };
        Some(offset(begin)..offset(end))
    }
}
