//! Drag-and-drop transfer payload.
//!
//! A drag carries a small JSON document under [`PAYLOAD_MIME`]. The `kind`
//! tag tells the drop handler whether to introduce a new item or reposition
//! an existing one:
//!
//! ```json
//! {"kind": "catalog", "id": 6}
//! {"kind": "placed", "instance": 3}
//! ```
//!
//! The untagged `{"id": 6}` form written by earlier builds is still read as a
//! catalog payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CatalogId, InstanceId};

/// MIME type the payload is stored under in the drag data transfer.
pub const PAYLOAD_MIME: &str = "application/json";

/// Errors that can occur when reading or writing a payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("drag payload is empty")]
    Empty,
    #[error("malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragPayload {
    /// A wardrobe item being introduced to the canvas.
    Catalog { id: CatalogId },
    /// An item already on the canvas being repositioned.
    Placed { instance: InstanceId },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyPayload {
    id: CatalogId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePayload {
    Tagged(DragPayload),
    Legacy(LegacyPayload),
}

impl DragPayload {
    /// Decode a payload read from the data transfer.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` for blank input or JSON that matches neither
    /// the tagged nor the legacy form.
    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PayloadError::Empty);
        }
        let wire: WirePayload = serde_json::from_str(raw)?;
        Ok(match wire {
            WirePayload::Tagged(payload) => payload,
            WirePayload::Legacy(LegacyPayload { id }) => Self::Catalog { id },
        })
    }

    /// Encode for the data transfer.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Malformed` if serialization fails.
    pub fn encode(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}
