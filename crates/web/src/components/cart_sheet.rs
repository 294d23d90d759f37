//! Cart button with its count badge, and the slide-over cart sheet.

use style_canvas_core::{CartEntry, CatalogId};
use yew::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use super::icons::{ShoppingCartIcon, TrashIcon, XIcon};

#[derive(Properties, PartialEq)]
pub struct CartButtonProps {
    pub count: u32,
    pub on_open: Callback<()>,
}

#[function_component(CartButton)]
pub fn cart_button(props: &CartButtonProps) -> Html {
    html! {
        <Button
            variant={ButtonVariant::Outline}
            size={ButtonSize::Icon}
            class="relative"
            label="Open cart"
            onclick={props.on_open.reform(|_: MouseEvent| ())}
        >
            <ShoppingCartIcon />
            if props.count > 0 {
                <span class="absolute -right-2 -top-2 flex h-6 w-6 items-center justify-center rounded-full bg-destructive text-xs font-semibold text-destructive-foreground">
                    { props.count }
                </span>
            }
        </Button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CartSheetProps {
    pub open: bool,
    pub entries: Vec<CartEntry>,
    pub on_close: Callback<()>,
    pub on_remove: Callback<CatalogId>,
    pub on_remove_line: Callback<CatalogId>,
    pub on_clear: Callback<()>,
}

#[function_component(CartSheet)]
pub fn cart_sheet(props: &CartSheetProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = props.on_close.reform(|_: MouseEvent| ());

    let body = if props.entries.is_empty() {
        html! { <p class="text-muted-foreground">{ "Your cart is empty." }</p> }
    } else {
        props
            .entries
            .iter()
            .map(|entry| {
                let id = entry.catalog_id();
                let remove = props.on_remove.reform(move |_: MouseEvent| id);
                let remove_line = props.on_remove_line.reform(move |_: MouseEvent| id);
                html! {
                    <div key={id.get()} class="flex items-center justify-between gap-4 rounded-lg bg-muted/50 p-2">
                        <div class="flex items-center gap-4">
                            <div class="rounded-md bg-card p-2">
                                <img
                                    src={entry.item.image.clone()}
                                    alt={entry.item.name.clone()}
                                    width="40"
                                    height="40"
                                    class="rounded-md object-cover"
                                    data-ai-hint={entry.item.hint.clone()}
                                />
                            </div>
                            <span class="text-sm font-medium">{ entry.item.name.clone() }</span>
                            <span class="text-sm text-muted-foreground">{ format!("× {}", entry.quantity) }</span>
                        </div>
                        <div class="flex items-center">
                            <Button
                                variant={ButtonVariant::Ghost}
                                size={ButtonSize::Icon}
                                class="h-8 w-8"
                                label={format!("Remove one {}", entry.item.name)}
                                onclick={remove}
                            >
                                <TrashIcon class="h-4 w-4 text-destructive" />
                            </Button>
                            if entry.quantity > 1 {
                                <Button
                                    variant={ButtonVariant::Ghost}
                                    size={ButtonSize::Icon}
                                    class="h-8 w-8"
                                    label={format!("Remove all {}", entry.item.name)}
                                    onclick={remove_line}
                                >
                                    <XIcon class="h-4 w-4 text-destructive" />
                                </Button>
                            }
                        </div>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="fixed inset-0 z-50">
            <div class="fixed inset-0 bg-black/80" onclick={close.clone()} />
            <div
                role="dialog"
                aria-modal="true"
                class="fixed inset-y-0 right-0 h-full w-3/4 border-l bg-background p-6 shadow-lg sm:max-w-sm"
            >
                <div class="flex flex-col space-y-2">
                    <h2 class="text-lg font-semibold text-foreground">{ "Your Shopping Cart" }</h2>
                </div>
                <button
                    type="button"
                    class="absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100"
                    aria-label="Close"
                    onclick={close}
                >
                    <XIcon class="h-4 w-4" />
                </button>
                <div class="mt-4 space-y-4">
                    { body }
                </div>
                if !props.entries.is_empty() {
                    <div class="mt-6 space-y-2">
                        <Button class="w-full" disabled=true>{ "Proceed to Checkout" }</Button>
                        <Button
                            variant={ButtonVariant::Outline}
                            class="w-full"
                            onclick={props.on_clear.reform(|_: MouseEvent| ())}
                        >
                            { "Clear Cart" }
                        </Button>
                    </div>
                }
            </div>
        </div>
    }
}
