//! Colors used when painting the view.
//!
//! # Examples
//!
//! ```
//! use hexpane::{Rgba, Theme};
//!
//! let dark = Theme::builder()
//!     .hex(Rgba::WHITE)
//!     .text(Rgba::WHITE)
//!     .caret(Rgba::WHITE)
//!     .selection(Rgba::from_hex("#264F78").unwrap())
//!     .build();
//! assert_eq!(dark.address, Theme::default().address);
//! ```

use crate::color::Rgba;

/// Palette for every element the renderer draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Address labels in the gutter.
    pub address: Rgba,
    /// Hex digit pairs.
    pub hex: Rgba,
    /// Glyphs in the text pane.
    pub text: Rgba,
    /// Vertical rules after the gutter and before the text pane.
    pub rule: Rgba,
    /// Fill beneath a selected byte range.
    pub selection: Rgba,
    /// Band across the caret's line when nothing is selected.
    pub current_line: Rgba,
    /// Fill under the caret byte in the pane the caret is not in.
    pub mirror_byte: Rgba,
    /// The blinking caret bar.
    pub caret: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            address: Rgba::GRAY,
            hex: Rgba::BLACK,
            text: Rgba::BLACK,
            rule: Rgba::GRAY,
            selection: Rgba::from_rgb_u8(173, 214, 255),
            current_line: Rgba::LIGHT_GRAY,
            mirror_byte: Rgba::DARK_GRAY,
            caret: Rgba::BLACK,
        }
    }
}

impl Theme {
    /// Start a builder from the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }
}

/// Fluent builder for [`Theme`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    #[must_use]
    pub fn address(mut self, color: Rgba) -> Self {
        self.theme.address = color;
        self
    }

    #[must_use]
    pub fn hex(mut self, color: Rgba) -> Self {
        self.theme.hex = color;
        self
    }

    #[must_use]
    pub fn text(mut self, color: Rgba) -> Self {
        self.theme.text = color;
        self
    }

    #[must_use]
    pub fn rule(mut self, color: Rgba) -> Self {
        self.theme.rule = color;
        self
    }

    #[must_use]
    pub fn selection(mut self, color: Rgba) -> Self {
        self.theme.selection = color;
        self
    }

    #[must_use]
    pub fn current_line(mut self, color: Rgba) -> Self {
        self.theme.current_line = color;
        self
    }

    #[must_use]
    pub fn mirror_byte(mut self, color: Rgba) -> Self {
        self.theme.mirror_byte = color;
        self
    }

    #[must_use]
    pub fn caret(mut self, color: Rgba) -> Self {
        self.theme.caret = color;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}
