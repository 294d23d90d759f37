//! Root component.
//!
//! The [`OutfitStudio`] lives in a `use_mut_ref` cell; callbacks mutate it
//! and then force a re-render. Notifications flow out through a sink that
//! dispatches into the toast reducer.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use style_canvas_core::{
    CatalogId, ClothingItem, InstanceId, Notification, OutfitId, OutfitStudio, Point, StudioConfig,
    Wardrobe,
};
use tracing::debug;
use yew::prelude::*;

use crate::components::{CanvasBoard, CartButton, CartSheet, PlacedTile, SavedOutfits, WardrobePanel};
use crate::toast::{ToastAction, ToastQueue, ToastViewport};

type SharedStudio = Rc<RefCell<OutfitStudio>>;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: StudioConfig,
}

/// Build a callback that applies `apply` to the studio and re-renders.
fn studio_callback<IN, F>(studio: &SharedStudio, refresh: &UseForceUpdateHandle, apply: F) -> Callback<IN>
where
    IN: 'static,
    F: Fn(&mut OutfitStudio, IN) + 'static,
{
    let studio = Rc::clone(studio);
    let refresh = refresh.clone();
    Callback::from(move |input: IN| {
        apply(&mut studio.borrow_mut(), input);
        refresh.force_update();
    })
}

/// Rejections are already logged and notified by the studio.
fn settle<T, E: Display>(operation: &str, result: Result<T, E>) {
    if let Err(err) = result {
        debug!(operation, error = %err, "Operation did not apply");
    }
}

/// Where a drop lands: the pointer minus the grab offset.
fn drop_origin(pointer: Point, grab: Point) -> Point {
    Point::new(pointer.x - grab.x, pointer.y - grab.y)
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let toasts = use_reducer({
        let limit = props.config.toast_limit;
        move || ToastQueue::new(limit)
    });

    let studio: SharedStudio = {
        let config = props.config.clone();
        let dispatcher = toasts.dispatcher();
        use_mut_ref(move || {
            let sink = move |notification: Notification| dispatcher.dispatch(ToastAction::Push(notification));
            OutfitStudio::new(config, Wardrobe::default(), sink)
        })
    };

    let refresh = use_force_update();
    let cart_open = use_state_eq(|| false);
    let highlight = use_state_eq(|| false);
    // Offset from a dragged item's top-left corner to the pointer.
    let grab = use_mut_ref(|| None::<Point>);

    let catalog: Rc<[ClothingItem]> = {
        let studio = Rc::clone(&studio);
        (*use_memo((), move |_| {
            studio
                .borrow()
                .wardrobe()
                .iter()
                .cloned()
                .collect::<Rc<[ClothingItem]>>()
        }))
        .clone()
    };

    let on_catalog_drag_start = {
        let grab = Rc::clone(&grab);
        Callback::from(move |_: CatalogId| *grab.borrow_mut() = None)
    };

    let on_item_drag_start = {
        let grab = Rc::clone(&grab);
        Callback::from(move |(_, offset): (InstanceId, Point)| *grab.borrow_mut() = Some(offset))
    };

    let on_highlight = {
        let highlight = highlight.clone();
        Callback::from(move |value: bool| highlight.set(value))
    };

    let on_drop = studio_callback(&studio, &refresh, {
        let grab = Rc::clone(&grab);
        let item = props.config.item_size();
        move |studio, (raw, pointer): (String, Point)| {
            let offset = grab
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Point::new(item.width / 2.0, item.height / 2.0));
            settle("drop", studio.handle_drop(&raw, drop_origin(pointer, offset)));
        }
    });

    let on_remove = studio_callback(&studio, &refresh, |studio, instance: InstanceId| {
        settle("remove", studio.remove_item(instance));
    });
    let on_reset = studio_callback(&studio, &refresh, |studio, ()| {
        studio.clear_canvas();
    });
    let on_save = studio_callback(&studio, &refresh, |studio, ()| {
        settle("save", studio.save_outfit());
    });
    let on_add_to_cart = studio_callback(&studio, &refresh, |studio, ()| {
        settle("add to cart", studio.add_canvas_to_cart());
    });
    let on_load = studio_callback(&studio, &refresh, |studio, id: OutfitId| {
        settle("load", studio.load_outfit(id));
    });
    let on_cart_remove = studio_callback(&studio, &refresh, |studio, id: CatalogId| {
        settle("remove from cart", studio.remove_from_cart(id));
    });

    let on_cart_remove_line = studio_callback(&studio, &refresh, |studio, id: CatalogId| {
        settle("remove cart line", studio.remove_cart_line(id));
    });
    let on_cart_clear = studio_callback(&studio, &refresh, |studio, ()| {
        studio.clear_cart();
    });

    let on_cart_open = {
        let cart_open = cart_open.clone();
        Callback::from(move |()| cart_open.set(true))
    };
    let on_cart_close = {
        let cart_open = cart_open.clone();
        Callback::from(move |()| cart_open.set(false))
    };

    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let view = studio.borrow();
    let canvas = view.canvas();
    let tiles: Vec<PlacedTile> = canvas.render_items().iter().map(PlacedTile::from).collect();
    let outfits = view.archive().iter().cloned().collect::<Vec<_>>();
    let entries = view.cart().entries().to_vec();
    let cart_count = view.cart_count();
    let (width, height) = (canvas.width(), canvas.height());
    drop(view);

    html! {
        <div class="min-h-screen w-full bg-background p-4 sm:p-6 lg:p-8">
            <header class="mx-auto mb-8 flex max-w-7xl items-center justify-between">
                <div class="text-left">
                    <h1 class="font-headline text-4xl font-bold tracking-tight lg:text-5xl">{ "StyleCanvas" }</h1>
                    <p class="mt-2 text-muted-foreground">{ "Drag, drop, and design your perfect look." }</p>
                </div>
                <CartButton count={cart_count} on_open={on_cart_open} />
            </header>

            <main class="mx-auto grid max-w-7xl grid-cols-1 gap-8 lg:grid-cols-3">
                <WardrobePanel items={catalog} on_drag_start={on_catalog_drag_start} />
                <section class="space-y-8 lg:col-span-2">
                    <CanvasBoard
                        {tiles}
                        {width}
                        {height}
                        highlight={*highlight}
                        {on_highlight}
                        {on_drop}
                        {on_item_drag_start}
                        {on_remove}
                        {on_reset}
                        {on_save}
                        {on_add_to_cart}
                    />
                    <SavedOutfits {outfits} {on_load} />
                </section>
            </main>

            <CartSheet
                open={*cart_open}
                {entries}
                on_close={on_cart_close}
                on_remove={on_cart_remove}
                on_remove_line={on_cart_remove_line}
                on_clear={on_cart_clear}
            />
            <ToastViewport
                toasts={toasts.toasts().to_vec()}
                duration_ms={props.config.toast_duration_ms}
                {on_dismiss}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_origin_subtracts_grab() {
        assert_eq!(
            drop_origin(Point::new(120.0, 90.0), Point::new(20.0, 40.0)),
            Point::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_drop_origin_may_go_negative() {
        // The placement engine clamps; the view does not.
        assert_eq!(
            drop_origin(Point::new(10.0, 10.0), Point::new(58.0, 58.0)),
            Point::new(-48.0, -48.0)
        );
    }
}
