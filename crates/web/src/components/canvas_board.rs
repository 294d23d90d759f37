//! The outfit canvas: drop target, placed items and the toolbar.

use style_canvas_core::{DragPayload, InstanceId, Point, Rect, RenderItem};
use tracing::warn;
use yew::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use super::icons::{RotateCcwIcon, SaveIcon, ShoppingCartIcon, TrashIcon};
use super::{local_point, read_payload, write_payload};
use crate::classes::cn;

/// One placed item, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub instance: InstanceId,
    pub rect: Rect,
    pub z_index: u8,
    pub image: AttrValue,
    pub name: AttrValue,
}

impl From<&RenderItem<'_>> for PlacedTile {
    fn from(item: &RenderItem<'_>) -> Self {
        Self {
            instance: item.instance,
            rect: item.rect,
            z_index: item.z_index,
            image: AttrValue::from(item.image.to_owned()),
            name: AttrValue::from(item.name.to_owned()),
        }
    }
}

fn tile_style(tile: &PlacedTile) -> String {
    let Rect { origin, size } = tile.rect;
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{}",
        origin.x, origin.y, size.width, size.height, tile.z_index
    )
}

#[derive(Properties, PartialEq)]
pub struct CanvasBoardProps {
    pub tiles: Vec<PlacedTile>,
    pub width: f64,
    pub height: f64,
    pub highlight: bool,
    pub on_highlight: Callback<bool>,
    /// Raw payload and canvas-local pointer position.
    pub on_drop: Callback<(String, Point)>,
    /// Instance and grab offset from its top-left corner.
    pub on_item_drag_start: Callback<(InstanceId, Point)>,
    pub on_remove: Callback<InstanceId>,
    pub on_reset: Callback<()>,
    pub on_save: Callback<()>,
    pub on_add_to_cart: Callback<()>,
}

#[function_component(CanvasBoard)]
pub fn canvas_board(props: &CanvasBoardProps) -> Html {
    let surface = use_node_ref();

    let ondragover = {
        let on_highlight = props.on_highlight.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            on_highlight.emit(true);
        })
    };

    let ondragleave = {
        let on_highlight = props.on_highlight.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            on_highlight.emit(false);
        })
    };

    let ondrop = {
        let surface = surface.clone();
        let on_highlight = props.on_highlight.clone();
        let on_drop = props.on_drop.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            on_highlight.emit(false);
            let Some(raw) = read_payload(&event) else {
                return;
            };
            let Some(pointer) = local_point(&surface, &event) else {
                return;
            };
            on_drop.emit((raw, pointer));
        })
    };

    let tiles = props.tiles.iter().map(|tile| {
        let instance = tile.instance;
        let origin = tile.rect.origin;

        let ondragstart = {
            let surface = surface.clone();
            let on_item_drag_start = props.on_item_drag_start.clone();
            Callback::from(move |event: DragEvent| {
                if let Err(err) = write_payload(&event, &DragPayload::Placed { instance }, "move") {
                    warn!(%instance, ?err, "Could not attach drag payload");
                }
                let grab = local_point(&surface, &event)
                    .map_or(Point::ORIGIN, |pointer| {
                        Point::new(pointer.x - origin.x, pointer.y - origin.y)
                    });
                on_item_drag_start.emit((instance, grab));
            })
        };

        let remove = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                on_remove.emit(instance);
            })
        };

        html! {
            <div
                key={instance.get()}
                draggable="true"
                {ondragstart}
                style={tile_style(tile)}
                class="group absolute flex cursor-grab items-center justify-center rounded-lg border bg-card p-2 shadow-sm animate-in fade-in zoom-in-95 active:cursor-grabbing"
            >
                <img
                    src={tile.image.clone()}
                    alt={tile.name.clone()}
                    class="h-full w-full rounded-md object-cover"
                    draggable="false"
                />
                <Button
                    variant={ButtonVariant::Destructive}
                    size={ButtonSize::Icon}
                    class="absolute right-1 top-1 h-6 w-6 rounded-full opacity-0 transition-opacity group-hover:opacity-100"
                    label={format!("Remove {}", tile.name)}
                    onclick={remove}
                >
                    <TrashIcon class="h-3 w-3" />
                </Button>
            </div>
        }
    });

    let card_class = cn([
        "rounded-lg border bg-card text-card-foreground shadow-lg transition-all",
        if props.highlight {
            "border-2 border-dashed border-primary bg-accent/10"
        } else {
            "border-transparent"
        },
    ]);

    let surface_style = format!("width:{}px;height:{}px", props.width, props.height);
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());
    let on_save = props.on_save.reform(|_: MouseEvent| ());
    let on_add_to_cart = props.on_add_to_cart.reform(|_: MouseEvent| ());

    html! {
        <div class={card_class} {ondragover} {ondragleave} {ondrop}>
            <div class="flex flex-col space-y-1.5 p-6">
                <h2 class="text-2xl font-semibold leading-none tracking-tight">{ "Your Outfit Canvas" }</h2>
            </div>
            <div class="p-6 pt-0">
                <div class="flex justify-center rounded-lg bg-muted/50 p-4">
                    <div ref={surface.clone()} class="relative max-w-full" style={surface_style}>
                        if props.tiles.is_empty() {
                            <div class="absolute inset-0 flex items-center justify-center text-muted-foreground">
                                <p class="text-lg">{ "Drop items here" }</p>
                            </div>
                        }
                        { for tiles }
                    </div>
                </div>
                <div class="mt-6 flex flex-wrap justify-center gap-4">
                    <Button variant={ButtonVariant::Outline} onclick={on_reset}>
                        <RotateCcwIcon class="mr-2 h-4 w-4" />{ "Reset" }
                    </Button>
                    <Button variant={ButtonVariant::Outline} onclick={on_save}>
                        <SaveIcon class="mr-2 h-4 w-4" />{ "Save" }
                    </Button>
                    <Button onclick={on_add_to_cart}>
                        <ShoppingCartIcon class="mr-2 h-4 w-4" />{ "Add to Cart" }
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use style_canvas_core::Size;

    use super::*;

    #[test]
    fn test_tile_style() {
        let tile = PlacedTile {
            instance: InstanceId::new(1),
            rect: Rect::new(Point::new(50.0, 166.0), Size::new(116.0, 116.0)),
            z_index: 2,
            image: AttrValue::from("/images/tops/top1.webp"),
            name: AttrValue::from("Top1"),
        };
        assert_eq!(
            tile_style(&tile),
            "left:50px;top:166px;width:116px;height:116px;z-index:2"
        );
    }
}
