//! Scissor (clipping) rectangle stack.

use crate::geometry::Rect;

/// Stack of clip rectangles; each push intersects with the current one.
#[derive(Clone, Debug, Default)]
pub struct ScissorStack {
    stack: Vec<Option<Rect>>,
    current: Option<Rect>,
}

impl ScissorStack {
    /// Create a stack that clips nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new clip rectangle, intersecting with current.
    pub fn push(&mut self, rect: Rect) {
        self.stack.push(self.current);
        self.current = Some(match self.current {
            Some(current) => current.intersect(&rect).unwrap_or_default(),
            None => rect,
        });
    }

    /// Restore the clip active before the last push.
    pub fn pop(&mut self) {
        if let Some(rect) = self.stack.pop() {
            self.current = rect;
        }
    }

    /// Clear the stack.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.current = None;
    }

    /// Nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if a point is within the current clip.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.current.is_none_or(|rect| rect.contains(x, y))
    }

    /// Current effective clip; `None` means unclipped.
    #[must_use]
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    /// Clip `rect` against the current region.
    #[must_use]
    pub fn clip(&self, rect: Rect) -> Option<Rect> {
        match self.current {
            Some(current) => current.intersect(&rect),
            None if rect.is_empty() => None,
            None => Some(rect),
        }
    }

    /// Check if everything is clipped away.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_some_and(|rect| rect.is_empty())
    }
}
