//! Input events delivered by the host.

mod pointer;

pub use pointer::{PointerButton, PointerButtons, PointerEvent, PointerEventKind};

/// An input event routed through [`HexView::handle_event`](crate::HexView::handle_event).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer press, move or release.
    Pointer(PointerEvent),
    /// Keyboard focus change.
    Focus(FocusEvent),
    /// Viewport resized to `width` x `height` pixels.
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    /// Get the pointer event if this is one.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

impl From<FocusEvent> for InputEvent {
    fn from(e: FocusEvent) -> Self {
        Self::Focus(e)
    }
}

/// Focus event (gained or lost).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    Gained,
    Lost,
}
