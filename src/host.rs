//! Services the host toolkit provides to the view.

use std::time::Duration;

/// Recurring timer driving caret blink.
///
/// While running, the host calls [`HexView::on_blink_tick`](crate::HexView::on_blink_tick)
/// once per interval on the UI thread.
pub trait BlinkTimer {
    /// Start, or restart from zero, with the given interval.
    fn start(&mut self, interval: Duration);

    /// Stop. Stopping a stopped timer is a no-op.
    fn stop(&mut self);
}

/// System clipboard.
pub trait Clipboard {
    /// Replace the clipboard content with plain text.
    fn set_text(&mut self, text: String);
}

/// A timer that never fires, for hosts without caret blink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBlink;

impl BlinkTimer for NoBlink {
    fn start(&mut self, _interval: Duration) {}

    fn stop(&mut self) {}
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }
}

/// Range and page step for one scrollbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollRange {
    /// Largest valid value (the minimum is always zero).
    pub max: usize,
    /// Amount shown per page.
    pub page: usize,
}

/// Scrollbar ranges computed by the view for the host's scrollbars.
///
/// Horizontal values are pixels; vertical values are lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollRanges {
    pub horizontal: ScrollRange,
    pub vertical: ScrollRange,
}
