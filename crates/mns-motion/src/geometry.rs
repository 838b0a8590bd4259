//! Page-space geometry shared by triggers, the registry and drag handling.

use serde::{Deserialize, Serialize};

/// A point in client (pointer) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle of a laid-out element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Document offset of the viewport's top edge.
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
    /// Height of the scrolled document, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_height: Option<f32>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
            document_height: None,
        }
    }

    pub fn with_document_height(mut self, document_height: f32) -> Self {
        self.document_height = Some(document_height);
        self
    }

    pub fn scrolled_to(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y.max(0.0);
        self
    }

    /// Document y of the line `fraction` of the way down the viewport.
    pub fn line_at(&self, fraction: f32) -> f32 {
        self.scroll_y + self.height * fraction
    }

    /// Document y of the viewport's bottom edge.
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }

    /// Largest scroll offset for a document of the given height.
    pub fn max_scroll(&self, document_height: f32) -> f32 {
        (document_height - self.height).max(0.0)
    }

    /// Whether the viewport cannot scroll any further down.
    pub fn at_document_end(&self) -> bool {
        self.document_height
            .is_some_and(|height| self.scroll_y + 0.5 >= self.max_scroll(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at_tracks_scroll() {
        let viewport = Viewport::new(1280.0, 800.0).scrolled_to(1000.0);
        assert!((viewport.line_at(0.85) - 1680.0).abs() < 1e-3);
        assert_eq!(viewport.line_at(0.0), 1000.0);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        let viewport = Viewport::new(1280.0, 800.0);
        assert_eq!(viewport.max_scroll(500.0), 0.0);
        assert_eq!(viewport.max_scroll(3000.0), 2200.0);
    }

    #[test]
    fn test_document_end_needs_known_height() {
        let viewport = Viewport::new(1280.0, 800.0).scrolled_to(2200.0);
        assert!(!viewport.at_document_end());
        assert!(viewport.with_document_height(3000.0).at_document_end());
        assert!(!viewport.with_document_height(4000.0).at_document_end());
    }

    #[test]
    fn test_rect_edges() {
        let rect = ElementRect::new(0.0, 100.0, 300.0, 50.0);
        assert_eq!(rect.top(), 100.0);
        assert_eq!(rect.bottom(), 150.0);
        assert_eq!(rect.center_y(), 125.0);
    }
}
