//! Paint primitives consumed by the renderer.
//!
//! The host toolkit implements [`Painter`] over its own canvas. The crate
//! ships [`DisplayList`], a painter that records clipped draw commands,
//! for retained-mode hosts and for tests.

mod scissor;

pub use scissor::ScissorStack;

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

/// Drawing services the host provides to the renderer.
///
/// Coordinates are viewport pixels. Text is positioned by its baseline.
pub trait Painter {
    /// Draw a run of text with its baseline starting at `(x, baseline)`.
    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, color: Rgba);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw a one-pixel line.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);

    /// Intersect the clip region with `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);

    /// Restore the clip region active before the last `push_clip`.
    fn pop_clip(&mut self);
}

/// A recorded draw operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Text {
        x: i32,
        baseline: i32,
        text: String,
        color: Rgba,
        /// Clip active when the text was drawn.
        clip: Option<Rect>,
    },
    /// Rectangle already intersected with the active clip.
    Fill { rect: Rect, color: Rgba },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        clip: Option<Rect>,
    },
}

/// Painter that records commands instead of rasterizing them.
///
/// Fills are clipped eagerly and dropped when fully clipped; text and
/// lines keep the clip they were drawn under.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    scissor: ScissorStack,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Remove all commands and reset the clip stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.scissor.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip nesting depth; zero after a balanced paint.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.scissor.depth()
    }

    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Text runs drawn in `color`, with their positions.
    pub fn texts_with(&self, color: Rgba) -> impl Iterator<Item = (i32, i32, &str)> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Text {
                x,
                baseline,
                text,
                color: c,
                ..
            } if *c == color => Some((*x, *baseline, text.as_str())),
            _ => None,
        })
    }

    /// Filled rectangles painted in `color`.
    pub fn fills_with(&self, color: Rgba) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Fill { rect, color: c } if *c == color => Some(*rect),
            _ => None,
        })
    }

    /// Lines painted in `color`.
    pub fn lines_with(&self, color: Rgba) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line {
                from, to, color: c, ..
            } if *c == color => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, color: Rgba) {
        if self.scissor.is_empty() || text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            x,
            baseline,
            text: text.to_owned(),
            color,
            clip: self.scissor.current(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if let Some(rect) = self.scissor.clip(rect) {
            self.commands.push(DrawCommand::Fill { rect, color });
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        if self.scissor.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            clip: self.scissor.current(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.scissor.push(rect);
    }

    fn pop_clip(&mut self) {
        self.scissor.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_clipped() {
        let mut list = DisplayList::new();
        list.push_clip(Rect::new(0, 0, 10, 10));
        list.fill_rect(Rect::new(5, 5, 10, 10), Rgba::BLACK);
        list.fill_rect(Rect::new(20, 20, 5, 5), Rgba::BLACK);
        list.pop_clip();

        let fills: Vec<_> = list.fills_with(Rgba::BLACK).collect();
        assert_eq!(fills, vec![Rect::new(5, 5, 5, 5)]);
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn test_text_records_clip() {
        let mut list = DisplayList::new();
        list.draw_text(1, 2, "00", Rgba::BLACK);
        list.push_clip(Rect::new(0, 0, 4, 4));
        list.draw_text(3, 4, "FF", Rgba::WHITE);
        list.pop_clip();

        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["00", "FF"]);
        assert_eq!(
            list.commands()[1],
            DrawCommand::Text {
                x: 3,
                baseline: 4,
                text: "FF".to_string(),
                color: Rgba::WHITE,
                clip: Some(Rect::new(0, 0, 4, 4)),
            }
        );
    }

    #[test]
    fn test_nothing_recorded_under_empty_clip() {
        let mut list = DisplayList::new();
        list.push_clip(Rect::new(0, 0, 10, 10));
        list.push_clip(Rect::new(50, 50, 10, 10));
        list.draw_text(0, 0, "x", Rgba::BLACK);
        list.draw_line(Point::new(0, 0), Point::new(5, 5), Rgba::BLACK);
        list.fill_rect(Rect::new(0, 0, 100, 100), Rgba::BLACK);
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = DisplayList::new();
        list.push_clip(Rect::new(0, 0, 10, 10));
        list.draw_line(Point::new(0, 0), Point::new(0, 9), Rgba::GRAY);
        assert_eq!(list.lines_with(Rgba::GRAY).count(), 1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.clip_depth(), 0);
    }
}
