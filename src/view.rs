//! The hex view widget core.
//!
//! [`HexView`] owns the layout, the cursor and the scroll position for one
//! byte buffer. The host feeds it input and paint requests and drains the
//! repaint regions it accumulates.
//!
//! # Examples
//!
//! ```
//! use hexpane::{DisplayList, FontMetrics, HexView, NoBlink, Point, PointerButton, PointerButtons};
//! use std::sync::Arc;
//!
//! let metrics = FontMetrics::new(8, 16, 12).unwrap();
//! let mut view = HexView::new(metrics, Box::new(NoBlink)).unwrap();
//! view.set_buffer(Some(Arc::from(&b"hello, world"[..])));
//! view.on_resize(640, 160);
//!
//! let hex_x = view.layout().hex_origin_x();
//! view.on_pointer_down(Point::new(hex_x, 4), PointerButton::Primary);
//! view.on_pointer_move(Point::new(hex_x + 5 * 3 * 8, 4), PointerButtons::PRIMARY);
//! assert_eq!(view.export_selection(false).as_deref(), Some("hello"));
//!
//! let mut list = DisplayList::new();
//! let stats = view.paint(&mut list, None);
//! assert_eq!(stats.bytes, 12);
//! ```

use crate::cursor::TextCursor;
use crate::error::Result;
use crate::event::{EventEmitter, ViewEvent};
use crate::export::{format_glyphs, format_hex};
use crate::geometry::{FontMetrics, Layout, Point, Rect};
use crate::host::{BlinkTimer, Clipboard, ScrollRange, ScrollRanges};
use crate::input::{FocusEvent, InputEvent, PointerButton, PointerButtons, PointerEventKind};
use crate::options::HexViewOptions;
use crate::paint::Painter;
use crate::render::{self, PaintStats, Scene};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Hex/text view over a shared, read-only byte buffer.
pub struct HexView {
    options: HexViewOptions,
    layout: Layout,
    buffer: Option<Arc<[u8]>>,
    cursor: TextCursor,
    timer: Box<dyn BlinkTimer>,
    focused: bool,
    caret_visible: bool,
    dragging: bool,
    viewport_width: u32,
    viewport_height: u32,
    scroll_x: i32,
    first_line: usize,
    dirty: Vec<Rect>,
    emitter: EventEmitter,
}

impl HexView {
    /// Create a view with default options.
    pub fn new(metrics: FontMetrics, timer: Box<dyn BlinkTimer>) -> Result<Self> {
        Self::with_options(metrics, HexViewOptions::default(), timer)
    }

    /// Create a view with the given options.
    pub fn with_options(
        metrics: FontMetrics,
        options: HexViewOptions,
        timer: Box<dyn BlinkTimer>,
    ) -> Result<Self> {
        metrics.validate()?;
        options.validate()?;
        let layout = Layout::new(
            options.bytes_per_line,
            metrics,
            0,
            options.min_address_digits,
            options.suffix_len(),
        );
        Ok(Self {
            cursor: TextCursor::new(options.bytes_per_line, 0),
            options,
            layout,
            buffer: None,
            timer,
            focused: false,
            caret_visible: false,
            dragging: false,
            viewport_width: 0,
            viewport_height: 0,
            scroll_x: 0,
            first_line: 0,
            dirty: Vec::new(),
            emitter: EventEmitter::new(),
        })
    }

    // ---- configuration ----

    /// Replace the displayed buffer, or remove it with `None`.
    ///
    /// Always clears the cursor and stops the caret timer.
    pub fn set_buffer(&mut self, buffer: Option<Arc<[u8]>>) {
        let len = buffer.as_ref().map(|b| b.len());
        debug!(?len, "buffer replaced");
        self.buffer = buffer;
        self.cursor.reset(len.unwrap_or(0));
        self.timer.stop();
        self.caret_visible = false;
        self.dragging = false;
        self.relayout();
        self.emitter.emit(&ViewEvent::BufferChanged { len });
    }

    /// Adopt new font metrics (font or DPI change).
    pub fn set_font_metrics(&mut self, metrics: FontMetrics) -> Result<()> {
        metrics.validate()?;
        debug!(
            char_width = metrics.char_width,
            line_height = metrics.line_height,
            "font metrics changed"
        );
        self.layout = Layout::new(
            self.options.bytes_per_line,
            metrics,
            self.layout.byte_len(),
            self.options.min_address_digits,
            self.options.suffix_len(),
        );
        self.clamp_scroll();
        self.invalidate_all();
        Ok(())
    }

    /// Viewport was resized to `width` x `height` pixels.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        trace!(width, height, "resize");
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_scroll();
        self.invalidate_all();
    }

    /// Apply scroll positions from the host's scrollbars, clamped.
    pub fn set_scroll_offset(&mut self, x: i32, first_line: usize) {
        let before = (self.scroll_x, self.first_line);
        self.scroll_x = x;
        self.first_line = first_line;
        self.clamp_scroll();
        if before != (self.scroll_x, self.first_line) {
            self.invalidate_all();
        }
    }

    /// Scrollbar ranges for the current buffer, font and viewport.
    #[must_use]
    pub fn scroll_ranges(&self) -> ScrollRanges {
        if self.buffer.is_none() {
            return ScrollRanges::default();
        }
        let content = usize::try_from(self.layout.content_width()).unwrap_or(0);
        let width = self.viewport_width as usize;
        let page = self.lines_per_page();
        ScrollRanges {
            horizontal: ScrollRange {
                max: content.saturating_sub(width),
                page: width,
            },
            vertical: ScrollRange {
                max: self.layout.line_count().saturating_sub(page),
                page,
            },
        }
    }

    // ---- queries ----

    #[must_use]
    pub fn options(&self) -> &HexViewOptions {
        &self.options
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&Arc<[u8]>> {
        self.buffer.as_ref()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.cursor.has_selection()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    /// Whole lines that fit in the viewport.
    #[must_use]
    pub fn lines_per_page(&self) -> usize {
        self.layout.lines_per_page(self.viewport_height)
    }

    #[must_use]
    pub fn first_visible_line(&self) -> usize {
        self.first_line
    }

    /// Horizontal scroll in pixels.
    #[must_use]
    pub fn scroll_x(&self) -> i32 {
        self.scroll_x
    }

    /// Pixel width of gutter plus both panes.
    #[must_use]
    pub fn content_width(&self) -> i32 {
        self.layout.content_width()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the caret is in the shown half of its blink cycle.
    #[must_use]
    pub fn is_caret_visible(&self) -> bool {
        self.focused && self.caret_visible
    }

    /// Viewport geometry of the caret bar, if a collapsed caret exists.
    #[must_use]
    pub fn cursor_rect(&self) -> Option<Rect> {
        self.buffer.as_ref()?;
        render::caret_rect(&self.scene(&[]))
    }

    // ---- painting ----

    /// Paint the lines intersecting `dirty` (the whole viewport for `None`).
    ///
    /// Draws nothing without a buffer.
    pub fn paint(&self, painter: &mut dyn Painter, dirty: Option<Rect>) -> PaintStats {
        let Some(data) = self.buffer.as_deref() else {
            return PaintStats::default();
        };
        render::paint_scene(&self.scene(data), painter, dirty)
    }

    /// Drain the regions invalidated since the last call.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.dirty)
    }

    // ---- input ----

    /// Route an input event to its handler.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(e) => {
                let pos = Point::new(e.x, e.y);
                match e.kind {
                    PointerEventKind::Down => self.on_pointer_down(pos, e.button),
                    PointerEventKind::Move => self.on_pointer_move(pos, e.buttons),
                    PointerEventKind::Up => self.on_pointer_up(pos, e.button),
                }
            }
            InputEvent::Focus(FocusEvent::Gained) => self.on_focus_in(),
            InputEvent::Focus(FocusEvent::Lost) => self.on_focus_out(),
            InputEvent::Resize { width, height } => self.on_resize(*width, *height),
        }
    }

    /// Place the caret under `pos` (viewport pixels).
    ///
    /// Only the primary button acts; the press also focuses the view.
    pub fn on_pointer_down(&mut self, pos: Point, button: PointerButton) {
        if button != PointerButton::Primary || self.byte_len() == 0 {
            return;
        }
        self.invalidate_cursor();

        let content_x = pos.x.saturating_add(self.scroll_x);
        let pane = self.layout.pane_at(content_x);
        let at = self
            .layout
            .address_from_pixel(Point::new(content_x, pos.y), pane, self.first_line);
        self.cursor.move_to(at.line, at.column, pane);
        trace!(line = at.line, column = at.column, ?pane, "caret placed");

        self.focused = true;
        self.dragging = true;
        self.caret_visible = true;
        self.timer.start(self.options.blink_interval);

        self.invalidate_cursor();
        self.emit_selection_changed();
    }

    /// Extend the selection while the primary button alone is held.
    ///
    /// The pane chosen at press time is kept for the whole drag.
    pub fn on_pointer_move(&mut self, pos: Point, buttons: PointerButtons) {
        if !self.dragging || buttons != PointerButtons::PRIMARY || self.byte_len() == 0 {
            return;
        }
        if !self.cursor.is_valid() {
            return;
        }
        let old = self.cursor_region();

        let content_x = pos.x.saturating_add(self.scroll_x);
        let at = self.layout.address_from_pixel(
            Point::new(content_x, pos.y),
            self.cursor.pane(),
            self.first_line,
        );
        self.cursor.select_to(at.line, at.column);
        trace!(
            line = at.line,
            column = at.column,
            selected = ?self.cursor.selected_bytes(),
            "selection dragged"
        );

        let region = match (old, self.cursor_region()) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        };
        if let Some(region) = region {
            self.invalidate(region);
        }
        self.emit_selection_changed();
    }

    /// End a drag gesture.
    pub fn on_pointer_up(&mut self, _pos: Point, button: PointerButton) {
        if button == PointerButton::Primary {
            self.dragging = false;
        }
    }

    /// Keyboard focus gained: resume blinking if a caret exists.
    pub fn on_focus_in(&mut self) {
        self.focused = true;
        if let Some(rect) = self.cursor_rect() {
            self.caret_visible = true;
            self.timer.start(self.options.blink_interval);
            self.invalidate(rect);
        }
    }

    /// Keyboard focus lost: stop blinking and hide the caret.
    pub fn on_focus_out(&mut self) {
        self.focused = false;
        self.dragging = false;
        self.timer.stop();
        if let Some(rect) = self.cursor_rect() {
            self.invalidate(rect);
        }
    }

    /// Timer callback: toggle the caret and repaint only its rectangle.
    pub fn on_blink_tick(&mut self) {
        if let Some(rect) = self.cursor_rect() {
            self.caret_visible = !self.caret_visible;
            trace!(visible = self.caret_visible, "caret blink");
            self.invalidate(rect);
        }
    }

    /// Subscribe to [`ViewEvent`] notifications.
    pub fn on_event<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewEvent) + 'static,
    {
        self.emitter.subscribe(listener);
    }

    // ---- export ----

    /// Selected bytes as text, or `None` without a buffer or selection.
    ///
    /// Hex mode prints `0A FF 41`; text mode prints one glyph per byte.
    #[must_use]
    pub fn export_selection(&self, as_hex: bool) -> Option<String> {
        let data = self.buffer.as_deref()?;
        let range = self.cursor.selected_bytes()?;
        let bytes = data.get(range)?;
        Some(if as_hex {
            format_hex(bytes)
        } else {
            format_glyphs(bytes, self.options.placeholder)
        })
    }

    /// Copy the selection as hex digits. Returns whether anything was copied.
    pub fn copy_as_hex(&self, clipboard: &mut dyn Clipboard) -> bool {
        self.copy_with(clipboard, true)
    }

    /// Copy the selection as glyphs. Returns whether anything was copied.
    pub fn copy_as_text(&self, clipboard: &mut dyn Clipboard) -> bool {
        self.copy_with(clipboard, false)
    }

    /// Copy in the representation of the pane the cursor was placed in.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> bool {
        self.copy_with(clipboard, self.cursor.in_hex_pane())
    }

    fn copy_with(&self, clipboard: &mut dyn Clipboard, as_hex: bool) -> bool {
        let Some(text) = self.export_selection(as_hex) else {
            return false;
        };
        debug!(as_hex, chars = text.len(), "selection copied");
        clipboard.set_text(text);
        true
    }

    // ---- internals ----

    fn byte_len(&self) -> usize {
        self.buffer.as_ref().map_or(0, |b| b.len())
    }

    fn scene<'a>(&'a self, data: &'a [u8]) -> Scene<'a> {
        Scene {
            data,
            layout: &self.layout,
            cursor: &self.cursor,
            options: &self.options,
            scroll_x: self.scroll_x,
            first_visible_line: self.first_line,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            caret_visible: self.is_caret_visible(),
        }
    }

    fn relayout(&mut self) {
        self.layout = Layout::new(
            self.options.bytes_per_line,
            self.layout.metrics(),
            self.byte_len(),
            self.options.min_address_digits,
            self.options.suffix_len(),
        );
        self.clamp_scroll();
        self.invalidate_all();
    }

    fn clamp_scroll(&mut self) {
        let ranges = self.scroll_ranges();
        let max_x = i32::try_from(ranges.horizontal.max).unwrap_or(i32::MAX);
        self.scroll_x = self.scroll_x.clamp(0, max_x);
        self.first_line = self.first_line.min(ranges.vertical.max);
    }

    fn cursor_region(&self) -> Option<Rect> {
        render::cursor_region(&self.scene(&[]))
    }

    fn invalidate_cursor(&mut self) {
        if let Some(region) = self.cursor_region() {
            self.invalidate(region);
        }
    }

    fn invalidate_all(&mut self) {
        self.invalidate(Rect::new(0, 0, self.viewport_width, self.viewport_height));
    }

    fn invalidate(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.dirty.push(rect);
        }
    }

    fn emit_selection_changed(&mut self) {
        let has_selection = self.cursor.has_selection();
        self.emitter
            .emit(&ViewEvent::SelectionChanged { has_selection });
    }
}

impl fmt::Debug for HexView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexView")
            .field("len", &self.buffer.as_ref().map(|b| b.len()))
            .field("cursor", &self.cursor)
            .field("focused", &self.focused)
            .field("scroll_x", &self.scroll_x)
            .field("first_line", &self.first_line)
            .finish_non_exhaustive()
    }
}
