//! Hover tooltip.

use yew::prelude::*;

use crate::classes::cn;

const CONTENT_CLASS: &str = "pointer-events-none absolute left-1/2 top-full z-50 mt-1 \
     -translate-x-1/2 overflow-hidden whitespace-nowrap rounded-md border bg-popover px-3 \
     py-1.5 text-sm text-popover-foreground shadow-md invisible opacity-0 transition-opacity \
     group-hover/tooltip:visible group-hover/tooltip:opacity-100";

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub content_class: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Wraps `children` and shows `text` below them while hovered.
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <div class={cn(["group/tooltip relative", props.class.as_str()])}>
            { props.children.clone() }
            <div role="tooltip" class={cn([CONTENT_CLASS, props.content_class.as_str()])}>
                { props.text.clone() }
            </div>
        </div>
    }
}
