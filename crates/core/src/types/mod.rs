//! Core value types for StyleCanvas.
//!
//! This module provides type-safe wrappers for ids, categories and canvas
//! geometry.

pub mod category;
pub mod geometry;
pub mod id;

pub use category::Category;
pub use geometry::{Point, Rect, Size};
pub use id::*;
