//! The wardrobe: a read-only catalog of clothing items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CatalogId, Category};

/// Errors that can occur when building a [`Wardrobe`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no items.
    #[error("catalog must contain at least one item")]
    Empty,
    /// Two rows share an id.
    #[error("duplicate catalog id {0}")]
    DuplicateId(CatalogId),
    /// The JSON table could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A catalog entry. Never mutated once the wardrobe is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: CatalogId,
    pub name: String,
    /// Path of the item's image, relative to the page.
    pub image: String,
    pub category: Category,
    /// Short search hint attached to the image.
    pub hint: String,
}

impl ClothingItem {
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        image: impl Into<String>,
        category: Category,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            id: CatalogId::new(id),
            name: name.into(),
            image: image.into(),
            category,
            hint: hint.into(),
        }
    }
}

/// Static mapping from catalog id to [`ClothingItem`].
///
/// Enumeration preserves the order the items were supplied in.
#[derive(Debug, Clone)]
pub struct Wardrobe {
    items: Vec<ClothingItem>,
    index: HashMap<CatalogId, usize>,
}

impl Wardrobe {
    /// Build a wardrobe from a host-supplied table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty table and
    /// `CatalogError::DuplicateId` if two rows share an id.
    pub fn new(items: Vec<ClothingItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or the table is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<ClothingItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    #[must_use]
    pub fn get(&self, id: CatalogId) -> Option<&ClothingItem> {
        self.index.get(&id).and_then(|&pos| self.items.get(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClothingItem> {
        self.items.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ClothingItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Wardrobe {
    fn default() -> Self {
        let items = DEFAULT_ITEMS
            .iter()
            .map(|&(id, name, image, category, hint)| {
                ClothingItem::new(id, name, image, category, hint)
            })
            .collect::<Vec<_>>();
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id, position))
            .collect();
        Self { items, index }
    }
}

type CatalogRow = (u32, &'static str, &'static str, Category, &'static str);

const DEFAULT_ITEMS: &[CatalogRow] = &[
    (1, "Belt", "/images/accessories/belt.jpg", Category::Accessory, "belt"),
    (2, "Belt", "/images/accessories/belt2.webp", Category::Accessory, "belt2"),
    (3, "Cap", "/images/accessories/cap.png", Category::Accessory, "cap"),
    (4, "Hat", "/images/accessories/hat.png", Category::Accessory, "hat"),
    (5, "Sunglasses", "/images/accessories/sunglasses.jpg", Category::Accessory, "sunglasses"),
    (6, "Bottom", "/images/bottoms/bottom1.webp", Category::Bottom, "bottom"),
    (7, "Bottom2", "/images/bottoms/bottom2.webp", Category::Bottom, "bottom1"),
    (8, "Bottom3", "/images/bottoms/bottom3.jpg", Category::Bottom, "bottom2"),
    (9, "Bottom4", "/images/bottoms/bottom4.png", Category::Bottom, "bottom3"),
    (10, "Bottom5", "/images/bottoms/bottom5.png", Category::Bottom, "bottom4"),
    (11, "Shoes1", "/images/shoes/shoes1.webp", Category::Shoes, "shoes"),
    (12, "Shoes2", "/images/shoes/shoes2.webp", Category::Shoes, "shoes1"),
    (13, "Shoes3", "/images/shoes/shoes3.jpg", Category::Shoes, "shoes2"),
    (14, "Shoes4", "/images/shoes/shoes4.jpg", Category::Shoes, "shoes3"),
    (15, "Shoes5", "/images/shoes/shoes5.png", Category::Shoes, "shoes4"),
    (16, "Top1", "/images/tops/top1.webp", Category::Top, "top"),
    (17, "Top2", "/images/tops/top2.jpg", Category::Top, "top1"),
    (18, "Top3", "/images/tops/top3.jpg", Category::Top, "top2"),
    (19, "Top4", "/images/tops/top4.png", Category::Top, "top3"),
    (20, "Top5", "/images/tops/top5.png", Category::Top, "top4"),
];
