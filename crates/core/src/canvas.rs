//! Live canvas state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ClothingItem;
use crate::placement::{PlacementEngine, PlacementError};
use crate::types::{CatalogId, IdSequence, InstanceId, Point, Rect};

/// A placed instance of a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    pub instance: InstanceId,
    pub item: ClothingItem,
    pub position: Point,
}

impl CanvasItem {
    #[must_use]
    pub const fn catalog_id(&self) -> CatalogId {
        self.item.id
    }

    /// Layering order derived from the item's category.
    #[must_use]
    pub const fn z_index(&self) -> u8 {
        self.item.category.layer()
    }
}

/// Everything the rendering layer needs to paint one item.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem<'a> {
    pub instance: InstanceId,
    pub rect: Rect,
    pub z_index: u8,
    pub image: &'a str,
    pub name: &'a str,
}

/// The set of items currently on the canvas.
///
/// Every mutation either applies fully or leaves the canvas untouched.
#[derive(Debug, Clone)]
pub struct Canvas {
    engine: PlacementEngine,
    items: Vec<CanvasItem>,
}

impl Canvas {
    #[must_use]
    pub const fn new(engine: PlacementEngine) -> Self {
        Self {
            engine,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, instance: InstanceId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.instance == instance)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current height. Placement clamps to this height, so with a fixed item
    /// size it stays at the configured minimum.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.engine
            .canvas_height(self.items.iter().map(|item| item.position))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.engine.canvas_width()
    }

    /// Place a new instance of `item` as close to `at` as the engine allows.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::CanvasFull` if no free slot is found.
    pub fn add(
        &mut self,
        item: ClothingItem,
        at: Point,
        ids: &mut IdSequence,
    ) -> Result<InstanceId, PlacementError> {
        let occupied = self.rects_except(None);
        let position = self.engine.place(at, &occupied, self.height())?;
        let instance = ids.next_instance();
        debug!(%instance, catalog_id = %item.id, x = position.x, y = position.y, "Placed item");
        self.items.push(CanvasItem {
            instance,
            item,
            position,
        });
        Ok(instance)
    }

    /// Move an existing instance. Returns `Ok(None)` if it is not on the
    /// canvas.
    ///
    /// # Errors
    ///
    /// Returns `PlacementError::Overlap` if the target spot is taken; the item
    /// keeps its previous position.
    pub fn move_to(
        &mut self,
        instance: InstanceId,
        to: Point,
    ) -> Result<Option<Point>, PlacementError> {
        if self.get(instance).is_none() {
            return Ok(None);
        }
        let others = self.rects_except(Some(instance));
        let position = self.engine.reposition(to, &others, self.height())?;
        if let Some(item) = self.items.iter_mut().find(|item| item.instance == instance) {
            item.position = position;
        }
        Ok(Some(position))
    }

    /// Remove an instance, returning it if it was present.
    pub fn remove(&mut self, instance: InstanceId) -> Option<CanvasItem> {
        let index = self.items.iter().position(|item| item.instance == instance)?;
        Some(self.items.remove(index))
    }

    /// Empty the canvas, returning how many items were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Replace the contents with copies of `snapshot`, allocating fresh
    /// instance ids.
    ///
    /// Snapshot positions are re-clamped and re-checked so a snapshot taken
    /// under a different layout can never break the canvas invariants; items
    /// that no longer fit are relocated, and dropped if the canvas is full.
    pub fn replace_with(&mut self, snapshot: &[CanvasItem], ids: &mut IdSequence) -> usize {
        let mut restored = Self::new(self.engine);
        for saved in snapshot {
            let occupied = restored.rects_except(None);
            match restored
                .engine
                .place(saved.position, &occupied, restored.height())
            {
                Ok(position) => restored.items.push(CanvasItem {
                    instance: ids.next_instance(),
                    item: saved.item.clone(),
                    position,
                }),
                Err(err) => {
                    debug!(catalog_id = %saved.item.id, error = %err, "Dropped item while restoring");
                }
            }
        }
        let skipped = snapshot.len() - restored.items.len();
        self.items = restored.items;
        skipped
    }

    /// Items sorted for painting: lower layers first, ties in insertion order.
    #[must_use]
    pub fn render_order(&self) -> Vec<&CanvasItem> {
        let mut ordered: Vec<&CanvasItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.z_index());
        ordered
    }

    /// Resolved geometry for the rendering layer, in paint order.
    #[must_use]
    pub fn render_items(&self) -> Vec<RenderItem<'_>> {
        self.render_order()
            .into_iter()
            .map(|item| RenderItem {
                instance: item.instance,
                rect: self.engine.rect_at(item.position),
                z_index: item.z_index(),
                image: &item.item.image,
                name: &item.item.name,
            })
            .collect()
    }

    fn rects_except(&self, skip: Option<InstanceId>) -> Vec<Rect> {
        self.items
            .iter()
            .filter(|item| Some(item.instance) != skip)
            .map(|item| self.engine.rect_at(item.position))
            .collect()
    }
}
