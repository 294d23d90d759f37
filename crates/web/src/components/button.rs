//! Button with the shared variant and size styles.

use yew::prelude::*;

use crate::classes::cn;

const BASE_CLASS: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
     rounded-md text-sm font-medium transition-colors focus-visible:outline-none \
     focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Destructive => "bg-destructive text-destructive-foreground hover:bg-destructive/90",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Icon => "h-10 w-10",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = cn([
        BASE_CLASS,
        props.variant.class(),
        props.size.class(),
        props.class.as_str(),
    ]);
    html! {
        <button
            type="button"
            {class}
            disabled={props.disabled}
            aria-label={props.label.clone()}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}
