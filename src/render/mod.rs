//! Virtualized renderer.
//!
//! Paints the address gutter, hex digits, glyphs, selection fills and the
//! caret for the lines that intersect a dirty rectangle, and nothing else.
//! Painting reads state and never changes it: the same [`Scene`] always
//! produces the same commands.

use crate::cursor::TextCursor;
use crate::export::glyph_for;
use crate::geometry::{Layout, Pane, Point, Rect, px};
use crate::options::HexViewOptions;
use crate::paint::Painter;
use std::fmt::Write as _;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Everything a paint pass reads.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub data: &'a [u8],
    pub layout: &'a Layout,
    pub cursor: &'a TextCursor,
    pub options: &'a HexViewOptions,
    /// Horizontal scroll in pixels.
    pub scroll_x: i32,
    pub first_visible_line: usize,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Caret blink phase combined with focus.
    pub caret_visible: bool,
}

/// What a paint pass touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// First line painted.
    pub start_line: usize,
    /// One past the last line painted.
    pub end_line: usize,
    /// Bytes whose digits and glyph were drawn.
    pub bytes: usize,
    pub selection_drawn: bool,
    pub caret_drawn: bool,
}

impl PaintStats {
    /// Number of lines painted.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.end_line - self.start_line
    }
}

impl Scene<'_> {
    fn viewport(&self) -> Rect {
        Rect::new(0, 0, self.viewport_width, self.viewport_height)
    }

    /// Line range `[start, end)` intersecting `dirty`, or the visible page.
    #[must_use]
    pub fn line_range(&self, dirty: Option<Rect>) -> (usize, usize) {
        let layout = self.layout;
        let first = self.first_visible_line;
        let (start, end) = match dirty.filter(|r| !r.is_empty()) {
            Some(r) => (
                layout.row_for_y(r.y, first),
                layout.row_for_y(r.bottom() - 1, first) + 1,
            ),
            None => (
                first,
                first + layout.lines_per_page(self.viewport_height) + 1,
            ),
        };
        let end = end.min(layout.line_count());
        (start.min(end), end)
    }

    /// Clip keeping pane content right of the frozen address gutter.
    fn pane_clip(&self, top: i32, height: u32) -> Rect {
        let x = self.layout.hex_origin_x();
        Rect::new(x, top, self.viewport_width.saturating_sub(x.unsigned_abs()), height)
    }

    /// Viewport x of `column` in `pane`.
    fn pane_x(&self, column: usize, pane: Pane) -> i32 {
        self.layout.column_x(column, pane).saturating_sub(self.scroll_x)
    }
}

/// Paint the lines intersecting `dirty` (the whole viewport when `None`).
pub fn paint_scene(scene: &Scene<'_>, painter: &mut dyn Painter, dirty: Option<Rect>) -> PaintStats {
    let layout = scene.layout;
    let (start_line, end_line) = scene.line_range(dirty);
    let mut stats = PaintStats {
        start_line,
        end_line,
        ..PaintStats::default()
    };

    painter.push_clip(dirty.unwrap_or_else(|| scene.viewport()));

    let metrics = layout.metrics();
    let half_char = i32::try_from(metrics.char_width / 2).unwrap_or(0);
    let height = i32::try_from(scene.viewport_height).unwrap_or(i32::MAX);
    let theme = &scene.options.theme;

    let gutter_rule = layout.address_width() + half_char;
    painter.draw_line(
        Point::new(gutter_rule, 0),
        Point::new(gutter_rule, height),
        theme.rule,
    );
    let text_rule = scene.pane_x(0, Pane::Text) - half_char;
    painter.draw_line(
        Point::new(text_rule, 0),
        Point::new(text_rule, height),
        theme.rule,
    );

    stats.selection_drawn = paint_selection(scene, painter, start_line, end_line);
    stats.bytes = paint_lines(scene, painter, start_line, end_line);

    if scene.caret_visible {
        if let Some(rect) = caret_rect(scene) {
            let row = scene.cursor.begin_line().unwrap_or_default();
            if (start_line..=end_line).contains(&row) {
                painter.fill_rect(rect, theme.caret);
                stats.caret_drawn = true;
            }
        }
    }

    painter.pop_clip();
    tracing::trace!(start_line, end_line, bytes = stats.bytes, "painted hex view");
    stats
}

fn paint_lines(
    scene: &Scene<'_>,
    painter: &mut dyn Painter,
    start_line: usize,
    end_line: usize,
) -> usize {
    let layout = scene.layout;
    let options = scene.options;
    let theme = &options.theme;
    let metrics = layout.metrics();
    let bytes_per_line = layout.bytes_per_line();
    let cw = metrics.char_width;
    let ascent = i32::try_from(metrics.ascent).unwrap_or(0);
    let half_char = i32::try_from(cw / 2).unwrap_or(0);

    // Byte under a collapsed caret, shaded in the pane the caret is not in.
    let mirror = scene.cursor.caret().map(|at| {
        (
            at.line,
            layout.byte_index_on_line(at.line, at.column),
            scene.cursor.pane(),
        )
    });

    let mut label = String::with_capacity(layout.address_digits() + 4);
    let mut cell = String::with_capacity(4);
    let mut painted = 0;

    for line in start_line..end_line {
        let top = layout.line_top(line, scene.first_visible_line);
        let baseline = top.saturating_add(ascent);

        label.clear();
        let _ = write!(
            label,
            "{:0width$X}",
            line * bytes_per_line,
            width = layout.address_digits()
        );
        if let Some(suffix) = options.address_suffix {
            label.push(suffix);
        }
        painter.draw_text(half_char, baseline, &label, theme.address);

        let begin = line * bytes_per_line;
        let end = (begin + bytes_per_line).min(scene.data.len());
        let Some(bytes) = scene.data.get(begin..end) else {
            continue;
        };

        painter.push_clip(scene.pane_clip(top, metrics.line_height));
        for (i, &byte) in bytes.iter().enumerate() {
            let hex_x = scene.pane_x(3 * i, Pane::Hex);
            let ascii_x = scene.pane_x(3 * i, Pane::Text);

            if let Some((caret_line, caret_byte, pane)) = mirror {
                if caret_line == line && caret_byte == i {
                    let shade = match pane {
                        Pane::Text => Rect::new(hex_x, top, px(2, cw).unsigned_abs(), metrics.line_height),
                        Pane::Hex => Rect::new(ascii_x, top, cw, metrics.line_height),
                    };
                    painter.fill_rect(shade, theme.mirror_byte);
                }
            }

            cell.clear();
            cell.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            cell.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            painter.draw_text(hex_x, baseline, &cell, theme.hex);

            let mut utf8 = [0u8; 4];
            let glyph = glyph_for(byte, options.placeholder).encode_utf8(&mut utf8);
            painter.draw_text(ascii_x, baseline, glyph, theme.text);
        }
        painter.pop_clip();
        painted += bytes.len();
    }
    painted
}

/// Fill selection (or current-line band) beneath the text layer.
fn paint_selection(
    scene: &Scene<'_>,
    painter: &mut dyn Painter,
    start_line: usize,
    end_line: usize,
) -> bool {
    let cursor = scene.cursor;
    let (Some(begin), Some(end)) = (cursor.begin(), cursor.end()) else {
        return false;
    };
    if begin.line > end_line || end.line < start_line {
        return false;
    }

    let layout = scene.layout;
    let theme = &scene.options.theme;
    let lh = layout.metrics().line_height;
    let first = scene.first_visible_line;
    let full = layout.chars_per_line();

    painter.push_clip(scene.pane_clip(0, scene.viewport_height));
    for pane in [Pane::Hex, Pane::Text] {
        if cursor.has_multi_lines() {
            painter.fill_rect(
                Rect::new(
                    scene.pane_x(begin.column, pane),
                    layout.line_top(begin.line, first),
                    layout.span_width(begin.column, full, pane),
                    lh,
                ),
                theme.selection,
            );
            let middle = end.line - begin.line - 1;
            if middle > 0 {
                painter.fill_rect(
                    Rect::new(
                        scene.pane_x(0, pane),
                        layout.line_top(begin.line + 1, first),
                        layout.span_width(0, full, pane),
                        px(middle, lh).unsigned_abs(),
                    ),
                    theme.selection,
                );
            }
            painter.fill_rect(
                Rect::new(
                    scene.pane_x(0, pane),
                    layout.line_top(end.line, first),
                    layout.span_width(0, end.column, pane),
                    lh,
                ),
                theme.selection,
            );
        } else if cursor.has_selection() {
            painter.fill_rect(
                Rect::new(
                    scene.pane_x(begin.column, pane),
                    layout.line_top(begin.line, first),
                    layout.span_width(begin.column, end.column, pane),
                    lh,
                ),
                theme.selection,
            );
        } else {
            painter.fill_rect(
                Rect::new(
                    scene.pane_x(0, pane),
                    layout.line_top(begin.line, first),
                    layout.span_width(0, full, pane),
                    lh,
                ),
                theme.current_line,
            );
        }
    }
    painter.pop_clip();
    true
}

/// Exact caret bar geometry, or `None` without a collapsed caret.
#[must_use]
pub fn caret_rect(scene: &Scene<'_>) -> Option<Rect> {
    let at = scene.cursor.caret()?;
    let width = scene.options.caret_width;
    let x = scene
        .pane_x(at.column, scene.cursor.pane())
        .saturating_sub_unsigned(width);
    let y = scene.layout.line_top(at.line, scene.first_visible_line);
    Some(Rect::new(x, y, width, scene.layout.metrics().line_height))
}

/// Repaint region covering every line the cursor touches.
///
/// Padded by half a line above and below.
#[must_use]
pub fn cursor_region(scene: &Scene<'_>) -> Option<Rect> {
    let (begin, end) = (scene.cursor.begin_line()?, scene.cursor.end_line()?);
    let lh = scene.layout.metrics().line_height;
    let rect = Rect::new(
        0,
        scene.layout.line_top(begin, scene.first_visible_line),
        scene.viewport_width,
        px(end - begin + 1, lh).unsigned_abs(),
    );
    Some(rect.pad_vertical(i32::try_from(lh / 2).unwrap_or(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::FontMetrics;
    use crate::paint::DisplayList;

    struct Fixture {
        data: Vec<u8>,
        layout: Layout,
        cursor: TextCursor,
        options: HexViewOptions,
    }

    impl Fixture {
        fn new(len: usize) -> Self {
            let options = HexViewOptions::default();
            let metrics = FontMetrics::new(8, 16, 12).unwrap();
            Self {
                data: (0..len).map(|i| (i % 256) as u8).collect(),
                layout: Layout::new(16, metrics, len, 4, 1),
                cursor: TextCursor::new(16, len),
                options,
            }
        }

        fn scene(&self, first_visible_line: usize) -> Scene<'_> {
            Scene {
                data: &self.data,
                layout: &self.layout,
                cursor: &self.cursor,
                options: &self.options,
                scroll_x: 0,
                first_visible_line,
                viewport_width: 800,
                viewport_height: 160,
                caret_visible: true,
            }
        }
    }

    #[test]
    fn test_paints_only_visible_page() {
        let fx = Fixture::new(16 * 1000);
        let mut list = DisplayList::new();
        let stats = paint_scene(&fx.scene(100), &mut list, None);
        // 10 full lines plus one partial
        assert_eq!((stats.start_line, stats.end_line), (100, 111));
        assert_eq!(stats.bytes, 11 * 16);
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn test_dirty_rect_limits_lines() {
        let fx = Fixture::new(16 * 20);
        let mut list = DisplayList::new();
        let stats = paint_scene(&fx.scene(0), &mut list, Some(Rect::new(0, 32, 800, 20)));
        assert_eq!((stats.start_line, stats.end_line), (2, 4));
        assert_eq!(stats.bytes, 32);
    }

    #[test]
    fn test_short_last_line() {
        let fx = Fixture::new(17);
        let mut list = DisplayList::new();
        let stats = paint_scene(&fx.scene(0), &mut list, None);
        assert_eq!(stats.lines(), 2);
        assert_eq!(stats.bytes, 17);
        let labels: Vec<_> = list.texts_with(Rgba::GRAY).map(|(_, _, t)| t).collect();
        assert_eq!(labels, vec!["0000h", "0010h"]);
    }

    #[test]
    fn test_empty_buffer_draws_no_bytes() {
        let fx = Fixture::new(0);
        let mut list = DisplayList::new();
        let stats = paint_scene(&fx.scene(0), &mut list, None);
        assert_eq!(stats.lines(), 0);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_point_cursor_draws_band_caret_and_mirror() {
        let mut fx = Fixture::new(32);
        fx.cursor.move_to(1, 3, Pane::Hex);
        let mut list = DisplayList::new();
        let stats = paint_scene(&fx.scene(0), &mut list, None);
        assert!(stats.caret_drawn);

        let bands: Vec<_> = list.fills_with(Rgba::LIGHT_GRAY).collect();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0], Rect::new(48, 16, 47 * 8, 16));

        let mirror: Vec<_> = list.fills_with(Rgba::DARK_GRAY).collect();
        assert_eq!(mirror, vec![Rect::new(fx.layout.ascii_origin_x() + 8, 16, 8, 16)]);

        let caret: Vec<_> = list.fills_with(Rgba::BLACK).collect();
        assert_eq!(caret, vec![Rect::new(48 + 24 - 1, 16, 1, 16)]);
    }

    #[test]
    fn test_hidden_caret_phase() {
        let mut fx = Fixture::new(32);
        fx.cursor.move_to(0, 0, Pane::Hex);
        let mut scene = fx.scene(0);
        scene.caret_visible = false;
        let mut list = DisplayList::new();
        assert!(!paint_scene(&scene, &mut list, None).caret_drawn);
    }

    #[test]
    fn test_multi_line_selection_draws_three_rects_per_pane() {
        let mut fx = Fixture::new(16 * 8);
        fx.cursor.move_to(1, 6, Pane::Hex);
        fx.cursor.select_to(4, 9);
        let mut list = DisplayList::new();
        paint_scene(&fx.scene(0), &mut list, None);

        let fills: Vec<_> = list.fills_with(fx.options.theme.selection).collect();
        assert_eq!(fills.len(), 6);
        // Hex pane: partial first, middle block, partial last
        assert_eq!(fills[0], Rect::new(48 + 6 * 8, 16, (47 - 6) * 8, 16));
        assert_eq!(fills[1], Rect::new(48, 32, 47 * 8, 32));
        assert_eq!(fills[2], Rect::new(48, 64, 8 * 8, 16));
        // Text pane: same range, one glyph per byte
        let ascii = fx.layout.ascii_origin_x();
        assert_eq!(fills[3], Rect::new(ascii + 2 * 8, 16, 14 * 8, 16));
        assert_eq!(fills[5], Rect::new(ascii, 64, 3 * 8, 16));
        assert!(list.fills_with(Rgba::BLACK).next().is_none());
    }

    #[test]
    fn test_two_line_selection_has_no_middle_block() {
        let mut fx = Fixture::new(64);
        fx.cursor.move_to(0, 30, Pane::Hex);
        fx.cursor.select_to(1, 3);
        let mut list = DisplayList::new();
        paint_scene(&fx.scene(0), &mut list, None);
        assert_eq!(list.fills_with(fx.options.theme.selection).count(), 4);
    }

    #[test]
    fn test_selection_outside_range_skipped() {
        let mut fx = Fixture::new(16 * 40);
        fx.cursor.move_to(30, 0, Pane::Hex);
        fx.cursor.select_to(31, 6);
        let mut list = DisplayList::new();
        let stats = paint_scene(&fx.scene(0), &mut list, None);
        assert!(!stats.selection_drawn);
    }

    #[test]
    fn test_horizontal_scroll_keeps_gutter_fixed() {
        let fx = Fixture::new(16);
        let mut scene = fx.scene(0);
        scene.scroll_x = 24;
        let mut list = DisplayList::new();
        paint_scene(&scene, &mut list, None);

        let (label_x, _, _) = list.texts_with(Rgba::GRAY).next().unwrap();
        assert_eq!(label_x, 4);
        let (first_hex_x, _, text) = list.texts_with(Rgba::BLACK).next().unwrap();
        assert_eq!(text, "00");
        assert_eq!(first_hex_x, 48 - 24);
    }

    #[test]
    fn test_control_bytes_use_placeholder() {
        let mut fx = Fixture::new(0);
        fx.data = vec![0x0A, 0xFF, 0x41];
        fx.layout = Layout::new(16, fx.layout.metrics(), 3, 4, 1);
        let mut list = DisplayList::new();
        paint_scene(&fx.scene(0), &mut list, None);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts, vec!["0000h", "0A", ".", "FF", "\u{FF}", "41", "A"]);
    }

    #[test]
    fn test_cursor_region_is_padded() {
        let mut fx = Fixture::new(64);
        fx.cursor.move_to(1, 0, Pane::Hex);
        fx.cursor.select_to(2, 6);
        let region = cursor_region(&fx.scene(0)).unwrap();
        assert_eq!(region, Rect::new(0, 8, 800, 48));
    }

    #[test]
    fn test_caret_rect_in_text_pane() {
        let mut fx = Fixture::new(64);
        fx.cursor.move_to(0, 5, Pane::Text);
        let rect = caret_rect(&fx.scene(0)).unwrap();
        assert_eq!(rect, Rect::new(fx.layout.ascii_origin_x() + 16 - 1, 0, 1, 16));
    }
}
