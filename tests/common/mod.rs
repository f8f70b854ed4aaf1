//! Shared fixtures for integration tests.
//!
//! - `RecordingTimer`: a `BlinkTimer` that logs starts and stops
//! - `RecordingClipboard`: a `Clipboard` that keeps every copied string
//! - `Fixture`: a sized `HexView` over a buffer, with its timer log and
//!   emitted events

#![allow(dead_code)] // Shared test helper; not every integration test uses every mock/utility
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use hexpane::{
    BlinkTimer, Clipboard, DisplayList, DrawCommand, FontMetrics, HexView, HexViewOptions, Pane,
    Point, ViewEvent,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

pub const CHAR_WIDTH: u32 = 8;
pub const LINE_HEIGHT: u32 = 16;
pub const ASCENT: u32 = 12;
pub const VIEW_WIDTH: u32 = 640;
pub const VIEW_HEIGHT: u32 = 160;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

pub fn metrics() -> FontMetrics {
    FontMetrics::new(CHAR_WIDTH, LINE_HEIGHT, ASCENT).expect("valid metrics")
}

/// What the view asked of its blink timer.
#[derive(Debug, Default)]
pub struct TimerLog {
    pub running: bool,
    pub starts: usize,
    pub stops: usize,
    pub interval: Option<Duration>,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingTimer(pub Rc<RefCell<TimerLog>>);

impl BlinkTimer for RecordingTimer {
    fn start(&mut self, interval: Duration) {
        let mut log = self.0.borrow_mut();
        log.running = true;
        log.starts += 1;
        log.interval = Some(interval);
    }

    fn stop(&mut self) {
        let mut log = self.0.borrow_mut();
        log.running = false;
        log.stops += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub history: Vec<String>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: String) {
        self.history.push(text);
    }
}

pub struct Fixture {
    pub view: HexView,
    pub timer: Rc<RefCell<TimerLog>>,
    pub events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl Fixture {
    /// View over `data` with default options, sized and with damage drained.
    pub fn new(data: &[u8]) -> Self {
        Self::with_options(data, HexViewOptions::default())
    }

    pub fn with_options(data: &[u8], options: HexViewOptions) -> Self {
        let timer = RecordingTimer::default();
        let log = Rc::clone(&timer.0);
        let mut view =
            HexView::with_options(metrics(), options, Box::new(timer)).expect("valid options");
        view.set_buffer(Some(Arc::from(data)));
        view.on_resize(VIEW_WIDTH, VIEW_HEIGHT);
        view.take_dirty_regions();

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        view.on_event(move |e| sink.borrow_mut().push(*e));

        Self {
            view,
            timer: log,
            events,
        }
    }

    /// Viewport point over hex column `column` of `line`.
    pub fn hex_point(&self, line: usize, column: usize) -> Point {
        let layout = self.view.layout();
        Point::new(
            layout.column_x(column, Pane::Hex) - self.view.scroll_x(),
            layout.line_top(line, self.view.first_visible_line()) + 1,
        )
    }

    /// Viewport point over the left edge of glyph `byte` of `line`.
    pub fn text_point(&self, line: usize, byte: usize) -> Point {
        let layout = self.view.layout();
        Point::new(
            layout.ascii_origin_x() + (byte as u32 * CHAR_WIDTH) as i32 - self.view.scroll_x(),
            layout.line_top(line, self.view.first_visible_line()) + 1,
        )
    }

    /// Press at `from` and drag to `to`, both hex columns.
    pub fn drag_hex(&mut self, from: (usize, usize), to: (usize, usize)) {
        let down = self.hex_point(from.0, from.1);
        let drag = self.hex_point(to.0, to.1);
        self.view
            .on_pointer_down(down, hexpane::PointerButton::Primary);
        self.view
            .on_pointer_move(drag, hexpane::PointerButtons::PRIMARY);
    }

    pub fn paint(&self) -> DisplayList {
        let mut list = DisplayList::new();
        self.view.paint(&mut list, None);
        list
    }
}

/// Lay recorded text runs onto a character grid, one row per baseline.
pub fn text_grid(list: &DisplayList) -> String {
    let mut rows: BTreeMap<i32, Vec<char>> = BTreeMap::new();
    for command in list.commands() {
        if let DrawCommand::Text {
            x, baseline, text, ..
        } = command
        {
            let row = rows.entry(*baseline).or_default();
            let start = (*x).max(0) as usize / CHAR_WIDTH as usize;
            for (i, ch) in text.chars().enumerate() {
                if row.len() <= start + i {
                    row.resize(start + i + 1, ' ');
                }
                row[start + i] = ch;
            }
        }
    }
    rows.values()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
