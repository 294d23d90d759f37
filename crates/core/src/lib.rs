//! Style Canvas Core - Outfit builder domain library.
//!
//! This crate holds the whole state model of the outfit builder page:
//! - the read-only wardrobe catalog
//! - the drag payload codec
//! - the placement engine and the live canvas
//! - the saved-outfit archive and the shopping cart
//!
//! # Architecture
//!
//! The core crate contains no rendering and no browser bindings. The `web`
//! crate drives an [`OutfitStudio`] from UI events and renders whatever it
//! exposes, which keeps every rule here testable on the host.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, categories, and geometry
//! - [`catalog`] - Clothing items and the wardrobe
//! - [`payload`] - Drag-and-drop payload encoding
//! - [`placement`] - Clamping and overlap avoidance
//! - [`canvas`] - Items currently on the canvas
//! - [`archive`] - Saved outfits
//! - [`cart`] - Quantity-aggregated cart
//! - [`notify`] - User-facing notifications
//! - [`config`] - Studio configuration
//! - [`studio`] - The facade tying it together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod archive;
pub mod canvas;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod payload;
pub mod placement;
pub mod studio;
pub mod types;

pub use archive::{Outfit, OutfitArchive};
pub use canvas::{Canvas, CanvasItem, RenderItem};
pub use cart::{Cart, CartEntry, CartRemoval};
pub use catalog::{CatalogError, ClothingItem, Wardrobe};
pub use config::{ConfigError, StudioConfig};
pub use error::{Result, StudioError};
pub use notify::{Notification, NotificationSink, Severity, Silent};
pub use payload::{DragPayload, PAYLOAD_MIME, PayloadError};
pub use placement::{PlacementEngine, PlacementError};
pub use studio::{DropOutcome, OutfitStudio};
pub use types::*;
