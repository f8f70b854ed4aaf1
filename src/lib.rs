//! `hexpane` - embeddable hex/text byte viewer core
//!
//! Renders a read-only byte buffer as an address gutter, a hex digit pane
//! and a text glyph pane, painting only the lines a repaint touches. Mouse
//! selection is kept whole-byte and mirrored across both panes, and the
//! selection can be exported as hex digits or glyphs.
//!
//! The host toolkit supplies font metrics, a [`Painter`], a [`BlinkTimer`]
//! and a [`Clipboard`], and forwards pointer, focus and resize input to a
//! [`HexView`].

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel/line casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow HexViewOptions etc
#![allow(clippy::missing_errors_doc)] // Errors are documented on Error
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod cursor;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod host;
pub mod input;
pub mod options;
pub mod paint;
pub mod render;
pub mod theme;
pub mod view;

// Re-export core types at crate root
pub use color::Rgba;
pub use cursor::{CursorState, DragDirection, TextCursor};
pub use error::{Error, Result};
pub use event::{EventEmitter, ViewEvent};
pub use geometry::{Address, FontMetrics, Layout, Pane, Point, Rect};
pub use options::HexViewOptions;
pub use theme::{Theme, ThemeBuilder};
pub use view::HexView;

// Re-export host services and input types
pub use host::{BlinkTimer, Clipboard, MemoryClipboard, NoBlink, ScrollRange, ScrollRanges};
pub use input::{FocusEvent, InputEvent, PointerButton, PointerButtons, PointerEvent, PointerEventKind};

// Re-export painting types
pub use paint::{DisplayList, DrawCommand, Painter, ScissorStack};
pub use render::{PaintStats, Scene};
