//! Saved outfits list. Clicking an entry loads it back onto the canvas.

use style_canvas_core::{Outfit, OutfitId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SavedOutfitsProps {
    /// Newest first.
    pub outfits: Vec<Outfit>,
    pub on_load: Callback<OutfitId>,
}

#[function_component(SavedOutfits)]
pub fn saved_outfits(props: &SavedOutfitsProps) -> Html {
    if props.outfits.is_empty() {
        return Html::default();
    }

    let entries = props.outfits.iter().map(|outfit| {
        let id = outfit.id();
        let onclick = props.on_load.reform(move |_: MouseEvent| id);
        let thumbnails = outfit.items().iter().map(|placed| {
            html! {
                <div
                    key={placed.instance.get()}
                    class="flex flex-col items-center gap-2 rounded-md border bg-card p-2 shadow-sm"
                    title={placed.item.name.clone()}
                >
                    <img
                        src={placed.item.image.clone()}
                        alt={placed.item.name.clone()}
                        width="40"
                        height="40"
                        class="rounded-md object-cover"
                        data-ai-hint={placed.item.hint.clone()}
                    />
                </div>
            }
        });

        html! {
            <button
                key={id.get()}
                type="button"
                class="w-full cursor-pointer rounded-lg border bg-muted/50 p-4 text-left transition-colors hover:bg-muted"
                {onclick}
            >
                <p class="mb-2 font-semibold text-foreground">{ outfit.label() }</p>
                <div class="flex flex-wrap gap-4">
                    { for thumbnails }
                </div>
            </button>
        }
    });

    html! {
        <div class="rounded-lg border bg-card text-card-foreground shadow-lg animate-in fade-in">
            <div class="flex flex-col space-y-1.5 p-6">
                <h2 class="text-2xl font-semibold leading-none tracking-tight">{ "Saved Outfits" }</h2>
                <p class="text-sm text-muted-foreground">{ "What you've built so far." }</p>
            </div>
            <div class="space-y-4 p-6 pt-0">
                { for entries }
            </div>
        </div>
    }
}
