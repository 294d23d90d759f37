//! Placement engine: where a dropped or moved item lands.
//!
//! Every item has the same size. A position is accepted when the item's
//! rectangle lies inside the canvas and does not strictly overlap any other
//! placed rectangle. New items that land on an occupied spot are relocated by
//! a raster scan:
//!
//! 1. step down by one item height;
//! 2. past the bottom edge, jump to the top of the next column;
//! 3. past the right edge, wrap back to column 0.
//!
//! The scan is bounded by a multiple of the number of grid cells, so a full
//! canvas is reported instead of looping. Moves are never relocated: an
//! overlapping target is rejected and the item stays where it was.

use thiserror::Error;

use crate::config::StudioConfig;
use crate::types::{Point, Rect, Size};

/// Reasons a placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The target spot overlaps another item.
    #[error("target position overlaps another item")]
    Overlap,
    /// The raster scan found no free slot.
    #[error("no free slot left on the canvas")]
    CanvasFull,
}

/// Pure geometry over a fixed-width, growing-height canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementEngine {
    canvas_width: f64,
    min_canvas_height: f64,
    item: Size,
}

impl PlacementEngine {
    #[must_use]
    pub const fn new(canvas_width: f64, min_canvas_height: f64, item: Size) -> Self {
        Self {
            canvas_width,
            min_canvas_height,
            item,
        }
    }

    #[must_use]
    pub const fn from_config(config: &StudioConfig) -> Self {
        Self::new(config.canvas_width, config.min_canvas_height, config.item_size())
    }

    #[must_use]
    pub const fn item_size(&self) -> Size {
        self.item
    }

    #[must_use]
    pub const fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    #[must_use]
    pub const fn min_canvas_height(&self) -> f64 {
        self.min_canvas_height
    }

    /// Rectangle of an item whose top-left corner is at `origin`.
    #[must_use]
    pub const fn rect_at(&self, origin: Point) -> Rect {
        Rect::new(origin, self.item)
    }

    /// Canvas height for the given item origins: the larger of the minimum
    /// height and the lowest item's bottom edge.
    pub fn canvas_height<I>(&self, origins: I) -> f64
    where
        I: IntoIterator<Item = Point>,
    {
        origins
            .into_iter()
            .map(|origin| origin.y + self.item.height)
            .fold(self.min_canvas_height, f64::max)
    }

    /// Clamp each axis independently to `[0, canvas - item]`.
    #[must_use]
    pub fn clamp(&self, point: Point, canvas_height: f64) -> Point {
        let point = point.sanitized();
        let max_x = (self.canvas_width - self.item.width).max(0.0);
        let max_y = (canvas_height - self.item.height).max(0.0);
        Point::new(point.x.clamp(0.0, max_x), point.y.clamp(0.0, max_y))
    }

    /// Whether an item at `origin` would overlap any of `occupied`.
    #[must_use]
    pub fn collides(&self, origin: Point, occupied: &[Rect]) -> bool {
        let candidate = self.rect_at(origin);
        occupied.iter().any(|rect| candidate.overlaps(rect))
    }

    /// Upper bound on raster-scan attempts for a canvas of this height.
    ///
    /// Covers the rest of the starting column, the off-grid columns to its
    /// right, and one full pass over the aligned grid.
    #[must_use]
    pub fn search_limit(&self, canvas_height: f64) -> usize {
        let cols = cells_along(self.canvas_width, self.item.width);
        let rows = cells_along(canvas_height, self.item.height);
        cols.saturating_add(1)
            .saturating_mul(rows.saturating_add(1))
            .saturating_mul(2)
    }

    /// Final position for a new item dropped at `desired`.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::CanvasFull` if the scan finds no free slot.
    pub fn place(
        &self,
        desired: Point,
        occupied: &[Rect],
        canvas_height: f64,
    ) -> Result<Point, PlacementError> {
        let start = self.clamp(desired, canvas_height);
        if !self.collides(start, occupied) {
            return Ok(start);
        }

        let max_x = (self.canvas_width - self.item.width).max(0.0);
        let max_y = (canvas_height - self.item.height).max(0.0);
        let mut candidate = start;
        for _ in 0..self.search_limit(canvas_height) {
            candidate.y += self.item.height;
            if candidate.y > max_y {
                candidate.y = 0.0;
                candidate.x += self.item.width;
                if candidate.x > max_x {
                    candidate.x = 0.0;
                }
            }
            if !self.collides(candidate, occupied) {
                return Ok(candidate);
            }
        }
        Err(PlacementError::CanvasFull)
    }

    /// Final position for an existing item moved to `target`.
    ///
    /// `others` must not contain the moving item itself.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::Overlap` if the clamped target overlaps.
    pub fn reposition(
        &self,
        target: Point,
        others: &[Rect],
        canvas_height: f64,
    ) -> Result<Point, PlacementError> {
        let clamped = self.clamp(target, canvas_height);
        if self.collides(clamped, others) {
            Err(PlacementError::Overlap)
        } else {
            Ok(clamped)
        }
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::from_config(&StudioConfig::default())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Floored, non-negative, canvas-sized
fn cells_along(extent: f64, cell: f64) -> usize {
    if cell <= 0.0 || !extent.is_finite() {
        return 1;
    }
    ((extent / cell).floor().max(1.0)) as usize
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn engine() -> PlacementEngine {
        PlacementEngine::new(400.0, 400.0, Size::new(116.0, 116.0))
    }

    fn rects(engine: &PlacementEngine, points: &[(f64, f64)]) -> Vec<Rect> {
        points
            .iter()
            .map(|&(x, y)| engine.rect_at(Point::new(x, y)))
            .collect()
    }

    #[test]
    fn test_place_on_empty_canvas_keeps_point() {
        let e = engine();
        let p = e.place(Point::new(50.0, 50.0), &[], 400.0).unwrap();
        assert_eq!(p, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_clamp_each_axis() {
        let e = engine();
        assert_eq!(e.clamp(Point::new(-10.0, 390.0), 400.0), Point::new(0.0, 284.0));
        assert_eq!(e.clamp(Point::new(1000.0, -5.0), 400.0), Point::new(284.0, 0.0));
    }

    #[test]
    fn test_second_drop_shifts_down_one_item() {
        let e = engine();
        let occupied = rects(&e, &[(50.0, 50.0)]);
        let p = e.place(Point::new(50.0, 50.0), &occupied, 400.0).unwrap();
        assert_eq!(p, Point::new(50.0, 166.0));
    }

    #[test]
    fn test_scan_wraps_to_next_column() {
        let e = engine();
        let occupied = rects(&e, &[(50.0, 200.0)]);
        // Next row would start at 316, past the 284 limit.
        let p = e.place(Point::new(50.0, 200.0), &occupied, 400.0).unwrap();
        assert_eq!(p, Point::new(166.0, 0.0));
    }

    #[test]
    fn test_scan_wraps_to_column_zero() {
        let e = engine();
        // Block the right-hand column from top to bottom.
        let occupied = rects(&e, &[(284.0, 0.0), (284.0, 116.0), (284.0, 232.0)]);
        let p = e.place(Point::new(284.0, 0.0), &occupied, 400.0).unwrap();
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_full_grid_rejected() {
        let e = engine();
        let mut points = Vec::new();
        for col in 0..3 {
            for row in 0..3 {
                points.push((f64::from(col) * 116.0, f64::from(row) * 116.0));
            }
        }
        let occupied = rects(&e, &points);
        let result = e.place(Point::new(10.0, 10.0), &occupied, 400.0);
        assert_eq!(result, Err(PlacementError::CanvasFull));
    }

    #[test]
    fn test_last_free_cell_found() {
        let e = engine();
        let mut points = Vec::new();
        for col in 0..3 {
            for row in 0..3 {
                if (col, row) != (2, 2) {
                    points.push((f64::from(col) * 116.0, f64::from(row) * 116.0));
                }
            }
        }
        let occupied = rects(&e, &points);
        let p = e.place(Point::new(0.0, 0.0), &occupied, 400.0).unwrap();
        assert!(!e.collides(p, &occupied));
        assert!(e.rect_at(p).within(400.0, 400.0));
    }

    #[test]
    fn test_reposition_rejects_overlap() {
        let e = engine();
        let others = rects(&e, &[(0.0, 0.0)]);
        let result = e.reposition(Point::new(100.0, 100.0), &others, 400.0);
        assert_eq!(result, Err(PlacementError::Overlap));
    }

    #[test]
    fn test_reposition_clamps() {
        let e = engine();
        let p = e.reposition(Point::new(500.0, 500.0), &[], 400.0).unwrap();
        assert_eq!(p, Point::new(284.0, 284.0));
    }

    #[test]
    fn test_canvas_height_grows_never_shrinks() {
        let e = engine();
        assert!((e.canvas_height(Vec::new()) - 400.0).abs() < f64::EPSILON);
        assert!((e.canvas_height([Point::new(0.0, 100.0)]) - 400.0).abs() < f64::EPSILON);
        assert!((e.canvas_height([Point::new(0.0, 500.0)]) - 616.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_search_limit_scales_with_height() {
        let e = engine();
        assert!(e.search_limit(800.0) > e.search_limit(400.0));
        assert_eq!(e.search_limit(400.0), 32);
    }

    #[test]
    fn test_search_limit_saturates_on_dense_grid() {
        let e = PlacementEngine::new(1e30, 1e30, Size::new(1e-9, 1e-9));
        assert_eq!(e.search_limit(1e30), usize::MAX);
        let occupied = [e.rect_at(Point::ORIGIN)];
        let p = e.place(Point::ORIGIN, &occupied, 1e30).unwrap();
        assert!(!e.collides(p, &occupied));
    }

    #[test]
    fn test_non_finite_drop_treated_as_origin() {
        let e = engine();
        let p = e.place(Point::new(f64::NAN, f64::NAN), &[], 400.0).unwrap();
        assert_eq!(p, Point::ORIGIN);
    }
}
