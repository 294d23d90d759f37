//! Canvas-local geometry in CSS pixels.

use serde::{Deserialize, Serialize};

/// A point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Replace non-finite coordinates with zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            x: if self.x.is_finite() { self.x } else { 0.0 },
            y: if self.y.is_finite() { self.y } else { 0.0 },
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do
    /// not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.origin.x < other.right()
            && self.right() > other.origin.x
            && self.origin.y < other.bottom()
            && self.bottom() > other.origin.y
    }

    /// Whether this rectangle lies fully inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn within(&self, width: f64, height: f64) -> bool {
        self.origin.x >= 0.0
            && self.origin.y >= 0.0
            && self.right() <= width
            && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64) -> Rect {
        Rect::new(Point::new(x, y), Size::new(116.0, 116.0))
    }

    #[test]
    fn test_overlap_same_spot() {
        assert!(square(50.0, 50.0).overlaps(&square(50.0, 50.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!square(50.0, 50.0).overlaps(&square(50.0, 166.0)));
        assert!(!square(50.0, 50.0).overlaps(&square(166.0, 50.0)));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        assert!(!square(0.0, 0.0).overlaps(&square(60.0, 200.0)));
        assert!(square(0.0, 0.0).overlaps(&square(60.0, 100.0)));
    }

    #[test]
    fn test_sanitized() {
        let p = Point::new(f64::NAN, f64::INFINITY).sanitized();
        assert_eq!(p, Point::ORIGIN);
    }

    #[test]
    fn test_within() {
        assert!(square(284.0, 284.0).within(400.0, 400.0));
        assert!(!square(285.0, 0.0).within(400.0, 400.0));
    }
}
