//! The outfit studio: all page state behind one facade.
//!
//! Each operation validates first and then applies in full, so a rejected
//! operation never leaves a partial update behind. User-visible outcomes are
//! pushed to the notification sink after the state change is complete.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::archive::{Outfit, OutfitArchive};
use crate::canvas::{Canvas, CanvasItem};
use crate::cart::{Cart, CartEntry, CartRemoval};
use crate::catalog::Wardrobe;
use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::notify::{Notification, NotificationSink};
use crate::payload::DragPayload;
use crate::placement::PlacementEngine;
use crate::types::{CatalogId, IdSequence, InstanceId, OutfitId, Point};

/// What a drop did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// A new instance was added.
    Placed(InstanceId),
    /// An existing instance moved.
    Moved { instance: InstanceId, to: Point },
    /// The drop was silently ignored (bad payload, unknown id).
    Ignored,
}

/// Wardrobe, canvas, archive and cart for one page view.
pub struct OutfitStudio {
    config: StudioConfig,
    wardrobe: Wardrobe,
    canvas: Canvas,
    archive: OutfitArchive,
    cart: Cart,
    ids: IdSequence,
    sink: Box<dyn NotificationSink>,
}

impl fmt::Debug for OutfitStudio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutfitStudio")
            .field("config", &self.config)
            .field("wardrobe_items", &self.wardrobe.len())
            .field("canvas", &self.canvas)
            .field("archive", &self.archive)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl OutfitStudio {
    /// Create a studio with an empty canvas, archive and cart.
    pub fn new(
        config: StudioConfig,
        wardrobe: Wardrobe,
        sink: impl NotificationSink + 'static,
    ) -> Self {
        let canvas = Canvas::new(PlacementEngine::from_config(&config));
        Self {
            config,
            wardrobe,
            canvas,
            archive: OutfitArchive::new(),
            cart: Cart::new(),
            ids: IdSequence::new(),
            sink: Box::new(sink),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StudioConfig {
        &self.config
    }

    #[must_use]
    pub const fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub const fn archive(&self) -> &OutfitArchive {
        &self.archive
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Badge count for the cart button.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.total_quantity()
    }

    /// Handle a drop of a raw data-transfer payload at canvas-local `at`.
    ///
    /// Malformed payloads and ids that do not resolve are ignored without a
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns the placement error (already notified) if the item could not
    /// be placed or moved.
    #[instrument(skip(self, raw))]
    pub fn handle_drop(&mut self, raw: &str, at: Point) -> Result<DropOutcome> {
        let result = DragPayload::decode(raw)
            .map_err(StudioError::from)
            .and_then(|payload| self.apply_drop(payload, at));
        match result {
            Ok(outcome) => Ok(outcome),
            Err(err) if err.is_silent() => {
                debug!(error = %err, "Ignoring drop");
                Ok(DropOutcome::Ignored)
            }
            Err(err) => Err(err),
        }
    }

    fn apply_drop(&mut self, payload: DragPayload, at: Point) -> Result<DropOutcome> {
        match payload {
            DragPayload::Catalog { id } => self.add_item(id, at).map(DropOutcome::Placed),
            DragPayload::Placed { instance } => self
                .move_item(instance, at)
                .map(|to| DropOutcome::Moved { instance, to }),
        }
    }

    /// Add a new instance of catalog item `id` near `at`.
    ///
    /// # Errors
    ///
    /// - `StudioError::UnknownItem` if `id` is not in the wardrobe (silent)
    /// - `StudioError::Placement(CanvasFull)` if there is no free slot
    #[instrument(skip(self))]
    pub fn add_item(&mut self, id: CatalogId, at: Point) -> Result<InstanceId> {
        let item = self
            .wardrobe
            .get(id)
            .cloned()
            .ok_or(StudioError::UnknownItem(id))?;
        match self.canvas.add(item, at, &mut self.ids) {
            Ok(instance) => {
                info!(%instance, items = self.canvas.len(), "Added item to canvas");
                Ok(instance)
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Move an instance to `to`.
    ///
    /// # Errors
    ///
    /// - `StudioError::InstanceNotFound` if it is not on the canvas (silent)
    /// - `StudioError::Placement(Overlap)` if the target is taken; the item
    ///   stays put
    #[instrument(skip(self))]
    pub fn move_item(&mut self, instance: InstanceId, to: Point) -> Result<Point> {
        match self.canvas.move_to(instance, to) {
            Ok(Some(position)) => {
                debug!(x = position.x, y = position.y, "Moved item");
                Ok(position)
            }
            Ok(None) => Err(StudioError::InstanceNotFound(instance)),
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Remove one instance from the canvas.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::InstanceNotFound` if it is not on the canvas.
    pub fn remove_item(&mut self, instance: InstanceId) -> Result<CanvasItem> {
        let removed = self
            .canvas
            .remove(instance)
            .ok_or(StudioError::InstanceNotFound(instance))?;
        debug!(%instance, "Removed item from canvas");
        Ok(removed)
    }

    /// Empty the canvas. Returns how many items were removed.
    pub fn clear_canvas(&mut self) -> usize {
        let removed = self.canvas.clear();
        info!(removed, "Cleared canvas");
        self.sink.notify(Notification::canvas_cleared());
        removed
    }

    /// Snapshot the canvas into the archive.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::EmptyCanvas` (notified) if the canvas is empty.
    #[instrument(skip(self))]
    pub fn save_outfit(&mut self) -> Result<OutfitId> {
        let id = self.ids.next_outfit();
        let Some(number) = self.archive.save(id, self.canvas.items()).map(Outfit::number) else {
            return Err(self.reject(StudioError::EmptyCanvas));
        };
        info!(outfit_id = %id, number, items = self.canvas.len(), "Saved outfit");
        self.sink.notify(Notification::outfit_saved());
        Ok(id)
    }

    /// Replace the canvas with a copy of a saved outfit. Returns the number
    /// of items now on the canvas.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::OutfitNotFound` if `id` is not archived.
    #[instrument(skip(self))]
    pub fn load_outfit(&mut self, id: OutfitId) -> Result<usize> {
        let outfit = self.archive.get(id).ok_or(StudioError::OutfitNotFound(id))?;
        let skipped = self.canvas.replace_with(outfit.items(), &mut self.ids);
        if skipped > 0 {
            warn!(skipped, "Some saved items no longer fit the canvas");
        }
        info!(items = self.canvas.len(), "Loaded outfit");
        self.sink.notify(Notification::outfit_loaded());
        Ok(self.canvas.len())
    }

    /// Push every canvas item into the cart. Returns the number of units
    /// added.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::NothingToAdd` (notified) if the canvas is empty.
    #[instrument(skip(self))]
    pub fn add_canvas_to_cart(&mut self) -> Result<usize> {
        if self.canvas.is_empty() {
            return Err(self.reject(StudioError::NothingToAdd));
        }
        let added = self
            .cart
            .add_all(self.canvas.items().iter().map(|placed| &placed.item));
        info!(added, total = self.cart.total_quantity(), "Added canvas to cart");
        self.sink.notify(Notification::added_to_cart());
        Ok(added)
    }

    /// Remove one unit of `id` from the cart.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::NotInCart` if there is no line for `id`.
    pub fn remove_from_cart(&mut self, id: CatalogId) -> Result<CartRemoval> {
        let removal = self.cart.remove_one(id).ok_or(StudioError::NotInCart(id))?;
        debug!(catalog_id = %id, ?removal, "Removed from cart");
        Ok(removal)
    }

    /// Drop the whole cart line for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::NotInCart` if there is no line for `id`.
    pub fn remove_cart_line(&mut self, id: CatalogId) -> Result<CartEntry> {
        let entry = self.cart.remove_entry(id).ok_or(StudioError::NotInCart(id))?;
        debug!(catalog_id = %id, quantity = entry.quantity, "Removed cart line");
        Ok(entry)
    }

    /// Empty the cart. Returns the number of units dropped.
    pub fn clear_cart(&mut self) -> u32 {
        let dropped = self.cart.clear();
        debug!(dropped, "Cleared cart");
        dropped
    }

    /// Log and notify a user-visible rejection, handing the error back.
    fn reject(&self, err: StudioError) -> StudioError {
        warn!(error = %err, "Operation rejected");
        if let Some(notification) = err.notification() {
            self.sink.notify(notification);
        }
        err
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::notify::Severity;

    fn studio() -> (OutfitStudio, Rc<RefCell<Vec<Notification>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |n: Notification| seen.borrow_mut().push(n)
        };
        let studio = OutfitStudio::new(StudioConfig::default(), Wardrobe::default(), sink);
        (studio, seen)
    }

    fn titles(seen: &Rc<RefCell<Vec<Notification>>>) -> Vec<String> {
        seen.borrow().iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn test_drop_catalog_payload() {
        let (mut studio, _) = studio();
        let outcome = studio
            .handle_drop(r#"{"kind":"catalog","id":6}"#, Point::new(50.0, 50.0))
            .unwrap();
        assert!(matches!(outcome, DropOutcome::Placed(_)));
        assert_eq!(studio.canvas().len(), 1);
    }

    #[test]
    fn test_drop_garbage_is_ignored_silently() {
        let (mut studio, seen) = studio();
        let outcome = studio.handle_drop("{{{", Point::ORIGIN).unwrap();
        assert_eq!(outcome, DropOutcome::Ignored);
        let outcome = studio.handle_drop(r#"{"id": 777}"#, Point::ORIGIN).unwrap();
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(studio.canvas().is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_drop_placed_payload_moves() {
        let (mut studio, _) = studio();
        let instance = studio.add_item(CatalogId::new(6), Point::ORIGIN).unwrap();
        let raw = DragPayload::Placed { instance }.encode().unwrap();
        let outcome = studio.handle_drop(&raw, Point::new(200.0, 200.0)).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                instance,
                to: Point::new(200.0, 200.0)
            }
        );
    }

    #[test]
    fn test_move_overlap_notifies() {
        let (mut studio, seen) = studio();
        studio.add_item(CatalogId::new(6), Point::ORIGIN).unwrap();
        let other = studio.add_item(CatalogId::new(16), Point::new(250.0, 250.0)).unwrap();
        let err = studio.move_item(other, Point::new(30.0, 30.0)).unwrap_err();
        assert!(matches!(err, StudioError::Placement(_)));
        assert_eq!(titles(&seen), ["Positions Overlap"]);
        assert_eq!(
            studio.canvas().get(other).unwrap().position,
            Point::new(250.0, 250.0)
        );
    }

    #[test]
    fn test_save_empty_notifies_and_keeps_archive() {
        let (mut studio, seen) = studio();
        assert!(matches!(studio.save_outfit(), Err(StudioError::EmptyCanvas)));
        assert!(studio.archive().is_empty());
        assert_eq!(seen.borrow().first().map(|n| n.severity), Some(Severity::Destructive));
    }

    #[test]
    fn test_save_after_empty_attempt_is_outfit_one() {
        let (mut studio, seen) = studio();
        assert!(studio.save_outfit().is_err());
        studio.add_item(CatalogId::new(1), Point::ORIGIN).unwrap();
        let id = studio.save_outfit().unwrap();
        let saved = studio.archive().latest().unwrap();
        assert_eq!(saved.id(), id);
        assert_eq!(saved.number(), 1);
        assert_eq!(titles(&seen), ["Empty Canvas", "Outfit Saved!"]);
    }

    #[test]
    fn test_clear_notifies() {
        let (mut studio, seen) = studio();
        studio.add_item(CatalogId::new(1), Point::ORIGIN).unwrap();
        assert_eq!(studio.clear_canvas(), 1);
        assert_eq!(titles(&seen), ["Canvas Cleared"]);
    }

    #[test]
    fn test_cart_round_trip() {
        let (mut studio, seen) = studio();
        assert!(matches!(studio.add_canvas_to_cart(), Err(StudioError::NothingToAdd)));
        studio.add_item(CatalogId::new(1), Point::ORIGIN).unwrap();
        assert_eq!(studio.add_canvas_to_cart().unwrap(), 1);
        assert_eq!(studio.cart_count(), 1);
        assert_eq!(
            studio.remove_from_cart(CatalogId::new(1)).unwrap(),
            CartRemoval::Removed
        );
        assert!(matches!(
            studio.remove_from_cart(CatalogId::new(1)),
            Err(StudioError::NotInCart(_))
        ));
        assert_eq!(titles(&seen), ["Nothing to Add", "Added to Cart!"]);
    }

    #[test]
    fn test_load_unknown_outfit() {
        let (mut studio, _) = studio();
        assert!(matches!(
            studio.load_outfit(OutfitId::new(9)),
            Err(StudioError::OutfitNotFound(_))
        ));
    }
}
