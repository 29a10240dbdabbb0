//! Position collaborator for a scrollable entity.

use serde::{Deserialize, Serialize};

use crate::geometry::{Position, ScrollRange};

/// Reads and writes the scroll position of one window or element.
///
/// All calls are synchronous; a write is visible to the next read.
pub trait ScrollTarget {
    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    fn scroll_range(&self) -> ScrollRange;
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &mut T {
    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_position(&mut self, position: Position) {
        (**self).set_position(position)
    }

    fn scroll_range(&self) -> ScrollRange {
        (**self).scroll_range()
    }
}

/// Width and height in px
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// In-memory viewport over a larger content area.
///
/// Writes are clamped to the scroll range the way a browser clamps
/// `scrollTop`/`scrollLeft`.
#[derive(Debug, Clone)]
pub struct VirtualViewport {
    viewport: Size,
    content: Size,
    position: Position,
    writes: usize,
}

impl VirtualViewport {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport,
            content,
            position: Position::default(),
            writes: 0,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = self.scroll_range().clamp(position);
        self
    }

    /// Number of position writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content(&self) -> Size {
        self.content
    }
}

impl ScrollTarget for VirtualViewport {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = self.scroll_range().clamp(position);
        self.writes += 1;
    }

    fn scroll_range(&self) -> ScrollRange {
        ScrollRange {
            horizontal: (self.content.width - self.viewport.width).max(0.0),
            vertical: (self.content.height - self.viewport.height).max(0.0),
        }
    }
}
