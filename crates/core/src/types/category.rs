//! Clothing categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of clothing categories in the wardrobe.
///
/// The category only drives layering on the canvas: bottoms are painted
/// first, accessories last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Accessory,
}

impl Category {
    /// All categories, in catalog display order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Shoes, Self::Accessory];

    /// Rendering priority: bottom < shoes < top < accessory.
    #[must_use]
    pub const fn layer(self) -> u8 {
        match self {
            Self::Bottom => 0,
            Self::Shoes => 1,
            Self::Top => 2,
            Self::Accessory => 3,
        }
    }

    /// Lowercase identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Accessory => "accessory",
        }
    }

    /// Human-readable plural label used for grouping.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Tops",
            Self::Bottom => "Bottoms",
            Self::Shoes => "Shoes",
            Self::Accessory => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        assert!(Category::Bottom.layer() < Category::Shoes.layer());
        assert!(Category::Shoes.layer() < Category::Top.layer());
        assert!(Category::Top.layer() < Category::Accessory.layer());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Category::Accessory).unwrap();
        assert_eq!(json, "\"accessory\"");
        let parsed: Category = serde_json::from_str("\"shoes\"").unwrap();
        assert_eq!(parsed, Category::Shoes);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(serde_json::from_str::<Category>("\"hat\"").is_err());
    }
}
