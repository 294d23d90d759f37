//! The wardrobe panel: every catalog item as a draggable tile.

use std::rc::Rc;

use style_canvas_core::{CatalogId, Category, ClothingItem, DragPayload};
use tracing::warn;
use yew::prelude::*;

use super::icons::CategoryIcon;
use super::tooltip::Tooltip;
use super::write_payload;

#[derive(Properties, PartialEq)]
pub struct WardrobePanelProps {
    pub items: Rc<[ClothingItem]>,
    pub on_drag_start: Callback<CatalogId>,
}

#[function_component(WardrobePanel)]
pub fn wardrobe_panel(props: &WardrobePanelProps) -> Html {
    let sections = Category::ALL.into_iter().filter_map(|category| {
        let tiles: Vec<Html> = props
            .items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| {
                html! {
                    <WardrobeTile
                        key={item.id.get()}
                        item={item.clone()}
                        on_drag_start={props.on_drag_start.clone()}
                    />
                }
            })
            .collect();
        if tiles.is_empty() {
            return None;
        }
        Some(html! {
            <section key={category.as_str()} class="space-y-3">
                <h3 class="flex items-center gap-2 text-sm font-semibold text-muted-foreground">
                    <CategoryIcon {category} class="h-4 w-4" />
                    { category.label() }
                </h3>
                <div class="grid grid-cols-2 gap-4 sm:grid-cols-3 lg:grid-cols-2">
                    { for tiles }
                </div>
            </section>
        })
    });

    html! {
        <aside class="lg:col-span-1">
            <div class="sticky top-8 rounded-lg border bg-card text-card-foreground shadow-lg">
                <div class="flex flex-col space-y-1.5 p-6">
                    <h2 class="text-2xl font-semibold leading-none tracking-tight">{ "Clothing Items" }</h2>
                    <p class="text-sm text-muted-foreground">{ "Pick your pieces and drag them in." }</p>
                </div>
                <div class="p-6 pt-0">
                    <div class="h-[500px] space-y-6 overflow-y-auto pr-4">
                        { for sections }
                    </div>
                </div>
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
struct WardrobeTileProps {
    item: ClothingItem,
    on_drag_start: Callback<CatalogId>,
}

#[function_component(WardrobeTile)]
fn wardrobe_tile(props: &WardrobeTileProps) -> Html {
    let item = &props.item;
    let ondragstart = {
        let id = item.id;
        let on_drag_start = props.on_drag_start.clone();
        Callback::from(move |event: DragEvent| {
            if let Err(err) = write_payload(&event, &DragPayload::Catalog { id }, "copy") {
                warn!(catalog_id = %id, ?err, "Could not attach drag payload");
            }
            on_drag_start.emit(id);
        })
    };

    html! {
        <Tooltip text={format!("{} ({})", item.name, item.hint)}>
            <div
                draggable="true"
                {ondragstart}
                class="flex cursor-grab flex-col items-center justify-center gap-2 rounded-lg border bg-card p-4 transition-all hover:scale-105 hover:shadow-md active:cursor-grabbing"
            >
                <img
                    src={item.image.clone()}
                    alt={item.name.clone()}
                    width="100"
                    height="100"
                    class="rounded-md object-cover"
                    data-ai-hint={item.hint.clone()}
                    draggable="false"
                />
                <span class="text-center text-sm font-medium">{ item.name.clone() }</span>
            </div>
        </Tooltip>
    }
}
