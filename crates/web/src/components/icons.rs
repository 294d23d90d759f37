//! Inline SVG icons (24x24 outline set).

use style_canvas_core::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: AttrValue,
}

fn outline(class: &AttrValue, paths: &'static [&'static str]) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={class.clone()}
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[function_component(TrousersIcon)]
pub fn trousers_icon(props: &IconProps) -> Html {
    outline(&props.class, &["M6 2l2 20h3l-1-10h2l-1 10h3l2-20H6z"])
}

#[function_component(ShirtIcon)]
pub fn shirt_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &["M20.38 3.46 16 2a4 4 0 0 1-8 0L3.62 3.46a2 2 0 0 0-1.34 2.23l.58 3.47a1 1 0 0 0 .99.84H6v10c0 1.1.9 2 2 2h8a2 2 0 0 0 2-2V10h2.15a1 1 0 0 0 .99-.84l.58-3.47a2 2 0 0 0-1.34-2.23z"],
    )
}

#[function_component(FootprintsIcon)]
pub fn footprints_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &[
            "M4 16v-2.38C4 11.5 2.97 10.5 3 8c.03-2.72 1.49-6 4.5-6C9.37 2 10 3.8 10 5.5c0 3.11-2 5.66-2 8.68V16a2 2 0 1 1-4 0Z",
            "M20 20v-2.38c0-2.12 1.03-3.12 1-5.62-.03-2.72-1.49-6-4.5-6C14.63 6 14 7.8 14 9.5c0 3.11 2 5.66 2 8.68V20a2 2 0 1 0 4 0Z",
            "M16 17h4",
            "M4 13h4",
        ],
    )
}

#[function_component(GemIcon)]
pub fn gem_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &["M6 3h12l4 6-10 13L2 9Z", "M11 3 8 9l4 13 4-13-3-6", "M2 9h20"],
    )
}

#[function_component(RotateCcwIcon)]
pub fn rotate_ccw_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &["M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8", "M3 3v5h5"],
    )
}

#[function_component(SaveIcon)]
pub fn save_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &[
            "M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7",
            "M7 3v4a1 1 0 0 0 1 1h7",
        ],
    )
}

#[function_component(ShoppingCartIcon)]
pub fn shopping_cart_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &[
            "M8 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
            "M19 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
            "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
        ],
    )
}

#[function_component(TrashIcon)]
pub fn trash_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        &[
            "M3 6h18",
            "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
            "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
            "M10 11v6",
            "M14 11v6",
        ],
    )
}

#[function_component(XIcon)]
pub fn x_icon(props: &IconProps) -> Html {
    outline(&props.class, &["M18 6 6 18", "m6 6 12 12"])
}

#[derive(Properties, PartialEq)]
pub struct CategoryIconProps {
    pub category: Category,
    #[prop_or_default]
    pub class: AttrValue,
}

/// The icon shown next to a wardrobe section heading.
#[function_component(CategoryIcon)]
pub fn category_icon(props: &CategoryIconProps) -> Html {
    let class = props.class.clone();
    match props.category {
        Category::Top => html! { <ShirtIcon {class} /> },
        Category::Bottom => html! { <TrousersIcon {class} /> },
        Category::Shoes => html! { <FootprintsIcon {class} /> },
        Category::Accessory => html! { <GemIcon {class} /> },
    }
}
