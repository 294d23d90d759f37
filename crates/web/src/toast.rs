//! Toast queue and viewport.
//!
//! The studio's notification sink pushes into a [`ToastQueue`] reducer. Each
//! toast removes itself after the configured duration; only the newest
//! `limit` toasts are kept.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use style_canvas_core::{Notification, Severity};
use yew::prelude::*;

use crate::classes::cn;
use crate::components::icons::XIcon;

/// A notification with a queue-local id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

/// Visible toasts, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    limit: usize,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(notification) => {
                let id = self.next_id;
                self.next_id += 1;
                self.toasts.insert(0, Toast { id, notification });
                self.toasts.truncate(self.limit);
            }
            ToastAction::Dismiss(id) => self.toasts.retain(|toast| toast.id != id),
        }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

const VIEWPORT_CLASS: &str = "fixed top-0 z-[100] flex max-h-screen w-full flex-col-reverse p-4 \
     sm:bottom-0 sm:right-0 sm:top-auto sm:flex-col md:max-w-[420px]";

const TOAST_CLASS: &str = "group pointer-events-auto relative flex w-full items-center \
     justify-between space-x-4 overflow-hidden rounded-md border p-6 pr-8 shadow-lg transition-all";

const fn variant_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "border bg-background text-foreground",
        Severity::Destructive => "border-destructive bg-destructive text-destructive-foreground",
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastViewport)]
pub fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <ol class={VIEWPORT_CLASS} aria-live="polite">
            { for props.toasts.iter().map(|toast| html! {
                <ToastCard
                    key={toast.id}
                    toast={toast.clone()}
                    duration_ms={props.duration_ms}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    duration_ms: u32,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((id, props.duration_ms), move |&(id, duration_ms)| {
            let timeout = Timeout::new(duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let Notification {
        title,
        description,
        severity,
    } = &props.toast.notification;

    html! {
        <li class={cn([TOAST_CLASS, variant_class(*severity)])} role="status">
            <div class="grid gap-1">
                <div class="text-sm font-semibold">{ title.clone() }</div>
                <div class="text-sm opacity-90">{ description.clone() }</div>
            </div>
            <button
                type="button"
                class="absolute right-2 top-2 rounded-md p-1 text-foreground/50 opacity-0 transition-opacity hover:text-foreground focus:opacity-100 focus:outline-none focus:ring-2 group-hover:opacity-100"
                aria-label="Close"
                onclick={close}
            >
                <XIcon class="h-4 w-4" />
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(queue: &ToastQueue) -> Vec<&str> {
        queue
            .toasts()
            .iter()
            .map(|toast| toast.notification.title.as_str())
            .collect()
    }

    #[test]
    fn test_push_newest_first() {
        let mut queue = ToastQueue::new(3);
        queue.apply(ToastAction::Push(Notification::canvas_cleared()));
        queue.apply(ToastAction::Push(Notification::outfit_saved()));
        assert_eq!(titles(&queue), ["Outfit Saved!", "Canvas Cleared"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.apply(ToastAction::Push(Notification::canvas_cleared()));
        queue.apply(ToastAction::Push(Notification::outfit_saved()));
        queue.apply(ToastAction::Push(Notification::added_to_cart()));
        assert_eq!(titles(&queue), ["Added to Cart!", "Outfit Saved!"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::new(3);
        queue.apply(ToastAction::Push(Notification::canvas_cleared()));
        queue.apply(ToastAction::Push(Notification::empty_canvas()));
        let first = queue.toasts().last().map(|toast| toast.id);
        queue.apply(ToastAction::Dismiss(first.unwrap_or_default()));
        assert_eq!(titles(&queue), ["Empty Canvas"]);
        queue.apply(ToastAction::Dismiss(999));
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_reduce_leaves_previous_state() {
        let before = Rc::new(ToastQueue::new(3));
        let after = Rc::clone(&before).reduce(ToastAction::Push(Notification::canvas_full()));
        assert!(before.toasts().is_empty());
        assert_eq!(after.toasts().len(), 1);
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let mut queue = ToastQueue::new(0);
        queue.apply(ToastAction::Push(Notification::canvas_cleared()));
        assert_eq!(queue.toasts().len(), 1);
    }
}
