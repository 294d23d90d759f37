//! Integration tests for the wire formats: drag payloads, catalog tables and
//! studio config.

#![allow(clippy::unwrap_used)]

use style_canvas_core::{
    CatalogError, Category, ConfigError, DragPayload, InstanceId, OutfitStudio, PayloadError, Silent,
    StudioConfig, Wardrobe,
};
use style_canvas_integration_tests::{at, catalog_payload, id};

// =============================================================================
// Drag Payload
// =============================================================================

#[test]
fn test_payload_tagged_forms() {
    assert_eq!(
        DragPayload::decode(&catalog_payload(6)).unwrap(),
        DragPayload::Catalog { id: id(6) }
    );
    assert_eq!(
        DragPayload::decode(r#"{"kind":"placed","instance":12}"#).unwrap(),
        DragPayload::Placed { instance: InstanceId::new(12) }
    );
}

#[test]
fn test_payload_encode_is_readable_json() {
    let encoded = DragPayload::Placed { instance: InstanceId::new(3) }.encode().unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["kind"], "placed");
    assert_eq!(value["instance"], 3);
}

#[test]
fn test_payload_rejects_blank_and_garbage() {
    assert!(matches!(DragPayload::decode("  "), Err(PayloadError::Empty)));
    assert!(matches!(DragPayload::decode("{"), Err(PayloadError::Malformed(_))));
    assert!(matches!(
        DragPayload::decode(r#"{"kind":"placed","id":1}"#),
        Err(PayloadError::Malformed(_))
    ));
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_default_wardrobe_has_five_per_category() {
    let wardrobe = Wardrobe::default();
    assert_eq!(wardrobe.len(), 20);
    for category in Category::ALL {
        assert_eq!(wardrobe.by_category(category).count(), 5, "{category}");
    }
}

#[test]
fn test_wardrobe_from_json() {
    let json = serde_json::json!([
        { "id": 1, "name": "Scarf", "image": "/images/scarf.png", "category": "accessory", "hint": "scarf" },
        { "id": 2, "name": "Boots", "image": "/images/boots.png", "category": "shoes", "hint": "boots" },
    ])
    .to_string();
    let wardrobe = Wardrobe::from_json(&json).unwrap();

    let names: Vec<&str> = wardrobe.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Scarf", "Boots"]);
    assert_eq!(wardrobe.get(id(2)).unwrap().category, Category::Shoes);
}

#[test]
fn test_wardrobe_rejects_duplicates_and_empty() {
    let json = serde_json::json!([
        { "id": 7, "name": "A", "image": "a.png", "category": "top", "hint": "a" },
        { "id": 7, "name": "B", "image": "b.png", "category": "top", "hint": "b" },
    ])
    .to_string();
    assert!(matches!(Wardrobe::from_json(&json), Err(CatalogError::DuplicateId(_))));
    assert!(matches!(Wardrobe::from_json("[]"), Err(CatalogError::Empty)));
    assert!(matches!(
        Wardrobe::from_json(r#"[{"id": 1}]"#),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_custom_wardrobe_drives_studio() {
    let json = serde_json::json!([
        { "id": 40, "name": "Coat", "image": "/images/coat.png", "category": "top", "hint": "coat" },
    ])
    .to_string();
    let mut studio = OutfitStudio::new(
        StudioConfig::default(),
        Wardrobe::from_json(&json).unwrap(),
        Silent,
    );

    assert!(studio.add_item(id(40), at(0.0, 0.0)).is_ok());
    assert!(studio.add_item(id(1), at(0.0, 0.0)).is_err());
    assert_eq!(studio.canvas().len(), 1);
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_defaults_and_overrides() {
    let config = StudioConfig::from_json(r#"{"canvas_width": 600, "toast_limit": 1}"#).unwrap();
    assert!((config.canvas_width - 600.0).abs() < f64::EPSILON);
    assert_eq!(config.toast_limit, 1);
    assert_eq!(config.toast_duration_ms, StudioConfig::default().toast_duration_ms);
}

#[test]
fn test_config_rejects_item_larger_than_canvas() {
    let err = StudioConfig::from_json(r#"{"canvas_width": 100}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ItemLargerThanCanvas { .. }));
    assert!(err.to_string().contains("item_width"));
}

#[test]
fn test_config_rejects_bad_numbers() {
    assert!(matches!(
        StudioConfig::from_json(r#"{"item_height": 0}"#),
        Err(ConfigError::InvalidDimension("item_height", _))
    ));
    assert!(matches!(
        StudioConfig::from_json(r#"{"toast_limit": 0}"#),
        Err(ConfigError::ZeroToastLimit)
    ));
}
