//! Quantity-aggregated shopping cart.

use serde::{Deserialize, Serialize};

use crate::catalog::ClothingItem;
use crate::types::CatalogId;

/// One cart line. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: ClothingItem,
    pub quantity: u32,
}

impl CartEntry {
    #[must_use]
    pub const fn catalog_id(&self) -> CatalogId {
        self.item.id
    }
}

/// Outcome of removing one unit from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRemoval {
    /// The line is still there with this quantity.
    Decremented(u32),
    /// The last unit went, so did the line.
    Removed,
}

/// Cart lines in first-added order, at most one per catalog id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `item`, returning the line's new quantity.
    pub fn add(&mut self, item: &ClothingItem) -> u32 {
        if let Some(entry) = self.entry_mut(item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return entry.quantity;
        }
        self.entries.push(CartEntry {
            item: item.clone(),
            quantity: 1,
        });
        1
    }

    /// Add one unit of each item, in order.
    pub fn add_all<'a, I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = &'a ClothingItem>,
    {
        let mut added = 0;
        for item in items {
            self.add(item);
            added += 1;
        }
        added
    }

    /// Remove one unit. Returns `None` if `id` is not in the cart.
    pub fn remove_one(&mut self, id: CatalogId) -> Option<CartRemoval> {
        let index = self.entries.iter().position(|entry| entry.item.id == id)?;
        let entry = self.entries.get_mut(index)?;
        if entry.quantity > 1 {
            entry.quantity -= 1;
            Some(CartRemoval::Decremented(entry.quantity))
        } else {
            self.entries.remove(index);
            Some(CartRemoval::Removed)
        }
    }

    /// Drop the whole line for `id`, returning it.
    pub fn remove_entry(&mut self, id: CatalogId) -> Option<CartEntry> {
        let index = self.entries.iter().position(|entry| entry.item.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Empty the cart, returning the number of units dropped.
    pub fn clear(&mut self) -> u32 {
        let dropped = self.total_quantity();
        self.entries.clear();
        dropped
    }

    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn quantity_of(&self, id: CatalogId) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.item.id == id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Badge count: the sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |total, entry| total.saturating_add(entry.quantity))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: CatalogId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.item.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Wardrobe;

    fn item(id: u32) -> ClothingItem {
        Wardrobe::default().get(CatalogId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_same_item_twice_aggregates() {
        let mut cart = Cart::new();
        cart.add(&item(1));
        assert_eq!(cart.add(&item(1)), 2);
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.quantity_of(CatalogId::new(1)), 2);
    }

    #[test]
    fn test_remove_one_decrements_then_deletes() {
        let mut cart = Cart::new();
        cart.add_all([&item(3), &item(3), &item(3)]);
        assert_eq!(cart.remove_one(CatalogId::new(3)), Some(CartRemoval::Decremented(2)));
        assert_eq!(cart.remove_one(CatalogId::new(3)), Some(CartRemoval::Decremented(1)));
        assert_eq!(cart.remove_one(CatalogId::new(3)), Some(CartRemoval::Removed));
        assert!(cart.is_empty());
        assert_eq!(cart.remove_one(CatalogId::new(3)), None);
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new();
        cart.add_all([&item(1), &item(1), &item(2)]);
        assert_eq!(cart.total_quantity(), 3);
        let order: Vec<u32> = cart.entries().iter().map(|e| e.catalog_id().get()).collect();
        assert_eq!(order, [1, 2]);
    }

    #[test]
    fn test_remove_entry_drops_whole_line() {
        let mut cart = Cart::new();
        cart.add_all([&item(5), &item(5), &item(2)]);
        let entry = cart.remove_entry(CatalogId::new(5)).unwrap();
        assert_eq!(entry.quantity, 2);
        assert_eq!(cart.total_quantity(), 1);
        assert!(cart.remove_entry(CatalogId::new(5)).is_none());
    }

    #[test]
    fn test_clear_reports_units() {
        let mut cart = Cart::new();
        cart.add_all([&item(1), &item(1), &item(3)]);
        assert_eq!(cart.clear(), 3);
        assert!(cart.is_empty());
    }
}
