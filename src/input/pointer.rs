//! Pointer event types.

use bitflags::bitflags;

/// A single pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
    /// No button (for move events).
    None,
}

bitflags! {
    /// Set of buttons held during an event.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct PointerButtons: u8 {
        const PRIMARY   = 0x01;
        const SECONDARY = 0x02;
        const MIDDLE    = 0x04;
    }
}

impl From<PointerButton> for PointerButtons {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::PRIMARY,
            PointerButton::Secondary => Self::SECONDARY,
            PointerButton::Middle => Self::MIDDLE,
            PointerButton::None => Self::empty(),
        }
    }
}

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Button pressed.
    Down,
    /// Pointer moved (with or without buttons held).
    Move,
    /// Button released.
    Up,
}

/// A pointer event in viewport pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    /// Button that changed state (`None` for moves).
    pub button: PointerButton,
    /// Buttons held after the event.
    pub buttons: PointerButtons,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    /// Create a press event.
    #[must_use]
    pub fn down(x: i32, y: i32, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button,
            buttons: button.into(),
            kind: PointerEventKind::Down,
        }
    }

    /// Create a move event with `buttons` held.
    #[must_use]
    pub fn drag(x: i32, y: i32, buttons: PointerButtons) -> Self {
        Self {
            x,
            y,
            button: PointerButton::None,
            buttons,
            kind: PointerEventKind::Move,
        }
    }

    /// Create a release event.
    #[must_use]
    pub fn up(x: i32, y: i32, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button,
            buttons: PointerButtons::empty(),
            kind: PointerEventKind::Up,
        }
    }

    /// Primary button pressed.
    #[must_use]
    pub fn is_primary_press(&self) -> bool {
        self.kind == PointerEventKind::Down && self.button == PointerButton::Primary
    }

    /// Moved while only the primary button is held.
    #[must_use]
    pub fn is_primary_drag(&self) -> bool {
        self.kind == PointerEventKind::Move && self.buttons == PointerButtons::PRIMARY
    }
}
