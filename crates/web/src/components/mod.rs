//! UI components.

pub mod button;
pub mod canvas_board;
pub mod cart_sheet;
pub mod icons;
pub mod saved_outfits;
pub mod tooltip;
pub mod wardrobe;

pub use canvas_board::{CanvasBoard, PlacedTile};
pub use cart_sheet::{CartButton, CartSheet};
pub use saved_outfits::SavedOutfits;
pub use wardrobe::WardrobePanel;

use style_canvas_core::{DragPayload, PAYLOAD_MIME, Point};
use wasm_bindgen::JsValue;
use web_sys::{DragEvent, Element, MouseEvent};
use yew::NodeRef;

/// Attach `payload` to a drag that is starting.
///
/// # Errors
///
/// Returns the browser's exception if the data transfer rejects the data,
/// or the encoding error as a string.
pub fn write_payload(event: &DragEvent, payload: &DragPayload, effect: &str) -> Result<(), JsValue> {
    let Some(transfer) = event.data_transfer() else {
        return Ok(());
    };
    let data = payload.encode().map_err(|err| JsValue::from_str(&err.to_string()))?;
    transfer.set_effect_allowed(effect);
    transfer.set_data(PAYLOAD_MIME, &data)
}

/// The raw payload carried by a drop, if any.
pub fn read_payload(event: &DragEvent) -> Option<String> {
    event.data_transfer()?.get_data(PAYLOAD_MIME).ok()
}

/// Pointer position relative to the top-left corner of `node`.
pub fn local_point(node: &NodeRef, event: &MouseEvent) -> Option<Point> {
    let bounds = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Point::new(
        f64::from(event.client_x()) - bounds.left(),
        f64::from(event.client_y()) - bounds.top(),
    ))
}
