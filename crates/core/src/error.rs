//! Unified error type for studio operations.
//!
//! Every failure is local and recoverable. The studio maps user-visible
//! errors to a [`Notification`]; the rest (bad drag payloads, stale ids) are
//! dropped silently.

use thiserror::Error;

use crate::notify::Notification;
use crate::payload::PayloadError;
use crate::placement::PlacementError;
use crate::types::{CatalogId, InstanceId, OutfitId};

/// Errors returned by [`crate::OutfitStudio`] operations.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Placement or move rejected by the placement engine.
    #[error("placement rejected: {0}")]
    Placement(#[from] PlacementError),

    /// The drag payload could not be decoded.
    #[error("bad drag payload: {0}")]
    Payload(#[from] PayloadError),

    /// Save requested with nothing on the canvas.
    #[error("nothing to save: the canvas is empty")]
    EmptyCanvas,

    /// Add-to-cart requested with nothing on the canvas.
    #[error("nothing to add: the canvas is empty")]
    NothingToAdd,

    /// Catalog id not present in the wardrobe.
    #[error("unknown catalog item {0}")]
    UnknownItem(CatalogId),

    /// Instance id not on the canvas.
    #[error("no canvas item with instance id {0}")]
    InstanceNotFound(InstanceId),

    /// Outfit id not in the archive.
    #[error("no saved outfit with id {0}")]
    OutfitNotFound(OutfitId),

    /// Catalog id not in the cart.
    #[error("catalog item {0} is not in the cart")]
    NotInCart(CatalogId),
}

impl StudioError {
    /// The message to show the user, if this error is user-visible.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Placement(PlacementError::Overlap) => Some(Notification::positions_overlap()),
            Self::Placement(PlacementError::CanvasFull) => Some(Notification::canvas_full()),
            Self::EmptyCanvas => Some(Notification::empty_canvas()),
            Self::NothingToAdd => Some(Notification::nothing_to_add()),
            Self::Payload(_)
            | Self::UnknownItem(_)
            | Self::InstanceNotFound(_)
            | Self::OutfitNotFound(_)
            | Self::NotInCart(_) => None,
        }
    }

    /// Whether the error is dropped without telling the user.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.notification().is_none()
    }
}

/// Result type alias for `StudioError`.
pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;

    #[test]
    fn test_user_visible_errors() {
        let overlap = StudioError::from(PlacementError::Overlap).notification();
        assert_eq!(overlap.map(|n| n.title), Some("Positions Overlap".to_string()));

        let full = StudioError::from(PlacementError::CanvasFull).notification();
        assert_eq!(full.map(|n| n.severity), Some(Severity::Destructive));

        assert!(!StudioError::EmptyCanvas.is_silent());
        assert!(!StudioError::NothingToAdd.is_silent());
    }

    #[test]
    fn test_silent_errors() {
        assert!(StudioError::UnknownItem(CatalogId::new(404)).is_silent());
        assert!(StudioError::from(PayloadError::Empty).is_silent());
        assert!(StudioError::InstanceNotFound(InstanceId::new(1)).is_silent());
    }

    #[test]
    fn test_display() {
        let err = StudioError::UnknownItem(CatalogId::new(42));
        assert_eq!(err.to_string(), "unknown catalog item 42");
    }
}
