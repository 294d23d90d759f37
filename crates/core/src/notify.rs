//! User-facing notifications.
//!
//! The studio emits a [`Notification`] after each user-visible transition and
//! does not wait for it to be shown. How (and whether) it is displayed is up
//! to the sink.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// A short title/description pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    #[must_use]
    pub fn canvas_cleared() -> Self {
        Self::normal("Canvas Cleared", "Start fresh with a new look.")
    }

    #[must_use]
    pub fn outfit_saved() -> Self {
        Self::normal("Outfit Saved!", "Added to your personal wardrobe collection.")
    }

    #[must_use]
    pub fn outfit_loaded() -> Self {
        Self::normal(
            "Outfit Loaded",
            "The saved outfit has been loaded onto the canvas.",
        )
    }

    #[must_use]
    pub fn added_to_cart() -> Self {
        Self::normal("Added to Cart!", "Your outfit items are now in the cart.")
    }

    #[must_use]
    pub fn empty_canvas() -> Self {
        Self::destructive("Empty Canvas", "You need to add items before saving!")
    }

    #[must_use]
    pub fn nothing_to_add() -> Self {
        Self::destructive("Nothing to Add", "Add some items to your canvas first.")
    }

    #[must_use]
    pub fn positions_overlap() -> Self {
        Self::destructive(
            "Positions Overlap",
            "Move the item to a free spot on the canvas.",
        )
    }

    #[must_use]
    pub fn canvas_full() -> Self {
        Self::destructive("Canvas Full", "Remove an item to make room for a new one.")
    }
}

/// Receiver of notifications.
///
/// Implemented for any `Fn(Notification)`, so a closure that forwards to a UI
/// dispatcher is enough.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification);
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl NotificationSink for Silent {
    fn notify(&self, _notification: Notification) {}
}
