//! Saved outfits, newest first.

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasItem;
use crate::types::OutfitId;

/// An immutable snapshot of the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    id: OutfitId,
    /// 1-based save order; the first outfit saved in a session is number 1.
    number: usize,
    items: Vec<CanvasItem>,
}

impl Outfit {
    #[must_use]
    pub const fn id(&self) -> OutfitId {
        self.id
    }

    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Outfit {}", self.number)
    }
}

/// Append-only history of saved outfits.
#[derive(Debug, Clone, Default)]
pub struct OutfitArchive {
    // Newest first.
    outfits: Vec<Outfit>,
    saved_total: usize,
}

impl OutfitArchive {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outfits: Vec::new(),
            saved_total: 0,
        }
    }

    /// Copy `items` into a new outfit and put it at the front.
    ///
    /// Returns `None` without touching the archive when `items` is empty.
    pub fn save(&mut self, id: OutfitId, items: &[CanvasItem]) -> Option<&Outfit> {
        if items.is_empty() {
            return None;
        }
        self.saved_total += 1;
        self.outfits.insert(
            0,
            Outfit {
                id,
                number: self.saved_total,
                items: items.to_vec(),
            },
        );
        self.outfits.first()
    }

    #[must_use]
    pub fn get(&self, id: OutfitId) -> Option<&Outfit> {
        self.outfits.iter().find(|outfit| outfit.id == id)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Outfit> {
        self.outfits.first()
    }

    /// Outfits, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Outfit> {
        self.outfits.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
