//! Integration tests for StyleCanvas.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p style-canvas-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `placement` - Clamping, overlap avoidance and the canvas-full bound
//! - `studio` - End-to-end user scenarios through `OutfitStudio`
//! - `loading` - Drag payload and catalog/config loading
//!
//! The helpers here build a studio whose notifications are recorded so tests
//! can assert on what the user would have seen.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::rc::Rc;

use style_canvas_core::{
    CatalogId, InstanceId, Notification, OutfitStudio, Point, Rect, StudioConfig, Wardrobe,
};

/// Notifications captured from a studio, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Recorded(Rc<RefCell<Vec<Notification>>>);

impl Recorded {
    /// Titles of everything recorded so far.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.0.borrow().iter().map(|n| n.title.clone()).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.0.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// A studio with the default config and wardrobe, plus its notifications.
#[must_use]
pub fn studio() -> (OutfitStudio, Recorded) {
    studio_with(StudioConfig::default())
}

#[must_use]
pub fn studio_with(config: StudioConfig) -> (OutfitStudio, Recorded) {
    let recorded = Recorded::default();
    let sink = {
        let log = Rc::clone(&recorded.0);
        move |notification: Notification| log.borrow_mut().push(notification)
    };
    (OutfitStudio::new(config, Wardrobe::default(), sink), recorded)
}

/// Raw payload for dragging catalog item `id` out of the wardrobe.
#[must_use]
pub fn catalog_payload(id: u32) -> String {
    serde_json::json!({ "kind": "catalog", "id": id }).to_string()
}

/// Raw payload for dragging a placed item.
#[must_use]
pub fn placed_payload(instance: InstanceId) -> String {
    serde_json::json!({ "kind": "placed", "instance": instance.get() }).to_string()
}

#[must_use]
pub fn id(raw: u32) -> CatalogId {
    CatalogId::new(raw)
}

#[must_use]
pub const fn at(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Assert the canvas invariants: every item inside the canvas, no overlaps.
///
/// # Panics
///
/// Panics if an invariant is violated.
pub fn assert_canvas_invariants(studio: &OutfitStudio) {
    let canvas = studio.canvas();
    let engine = canvas.engine();
    let rects: Vec<Rect> = canvas
        .items()
        .iter()
        .map(|item| engine.rect_at(item.position))
        .collect();
    for (i, rect) in rects.iter().enumerate() {
        assert!(
            rect.within(canvas.width(), canvas.height()),
            "item {i} at {:?} is outside the canvas",
            rect.origin
        );
        for other in rects.iter().skip(i + 1) {
            assert!(
                !rect.overlaps(other),
                "items at {:?} and {:?} overlap",
                rect.origin,
                other.origin
            );
        }
    }
}
