//! Class-name merging for utility-first CSS.
//!
//! [`cn`] joins class fragments and resolves conflicting utilities so that a
//! later class in the same group replaces an earlier one, which lets
//! components take a base class list and accept overrides.

use std::collections::HashSet;

/// Sub-groups that a shorthand utility also overrides.
const SHORTHANDS: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("inset", &["top", "right", "bottom", "left"]),
    ("rounded", &["rounded-t", "rounded-b", "rounded-l", "rounded-r"]),
];

/// Utility prefixes, longest first so `min-h-` wins over `h-`.
const PREFIXES: &[(&str, &str)] = &[
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("rounded-t-", "rounded-t"),
    ("rounded-b-", "rounded-b"),
    ("rounded-l-", "rounded-l"),
    ("rounded-r-", "rounded-r"),
    ("rounded-", "rounded"),
    ("opacity-", "opacity"),
    ("justify-", "justify"),
    ("cursor-", "cursor"),
    ("shadow-", "shadow"),
    ("items-", "items"),
    ("inset-", "inset"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("gap-", "gap"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("bg-", "bg"),
    ("z-", "z"),
    ("w-", "w"),
    ("h-", "h"),
    ("p-", "p"),
    ("m-", "m"),
];

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "hidden",
    "contents",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none"];

/// Merge class fragments into one `class` attribute value.
///
/// Fragments may hold several space-separated classes; empty fragments are
/// skipped. When two classes fall in the same utility group (after variant
/// prefixes such as `hover:`), only the last one is kept. Repeated classes
/// collapse to one.
pub fn cn<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let classes: Vec<&str> = fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut seen_groups: HashSet<String> = HashSet::new();
    let mut seen_classes: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for &class in classes.iter().rev() {
        if !seen_classes.insert(class) {
            continue;
        }
        let (variants, utility) = split_variants(class);
        let Some(group) = group_of(utility) else {
            kept.push(class);
            continue;
        };
        let key = format!("{variants}{group}");
        if seen_groups.contains(&key) {
            continue;
        }
        for sub in overridden_by(group) {
            seen_groups.insert(format!("{variants}{sub}"));
        }
        seen_groups.insert(key);
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

/// Split `hover:sm:p-4` into `("hover:sm:", "p-4")`.
fn split_variants(class: &str) -> (&str, &str) {
    class
        .rfind(':')
        .map_or(("", class), |at| class.split_at(at + 1))
}

fn overridden_by(group: &str) -> &'static [&'static str] {
    SHORTHANDS
        .iter()
        .find(|(shorthand, _)| *shorthand == group)
        .map(|(_, subs)| *subs)
        .unwrap_or_default()
}

fn group_of(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    match utility {
        "border" => return Some("border-w"),
        "shadow" => return Some("shadow"),
        "rounded" => return Some("rounded"),
        _ => {}
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(if value.chars().all(|c| c.is_ascii_digit()) {
            "border-w"
        } else if BORDER_STYLES.contains(&value) {
            "border-style"
        } else {
            "border-color"
        });
    }

    PREFIXES
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_and_skips_empty() {
        assert_eq!(cn(["shadow-lg", "", "  transition-all "]), "shadow-lg transition-all");
    }

    #[test]
    fn test_last_in_group_wins() {
        assert_eq!(cn(["p-4 bg-card", "p-2"]), "bg-card p-2");
        assert_eq!(cn(["text-sm text-muted-foreground", "text-lg"]), "text-muted-foreground text-lg");
    }

    #[test]
    fn test_different_groups_coexist() {
        assert_eq!(
            cn(["text-sm font-medium", "text-center"]),
            "text-sm font-medium text-center"
        );
        assert_eq!(cn(["border-2 border-dashed border-primary"]), "border-2 border-dashed border-primary");
    }

    #[test]
    fn test_shorthand_overrides_axis() {
        assert_eq!(cn(["px-3 py-1", "p-4"]), "p-4");
        assert_eq!(cn(["p-4", "px-2"]), "p-4 px-2");
    }

    #[test]
    fn test_variants_are_separate_groups() {
        assert_eq!(
            cn(["opacity-0 group-hover:opacity-100", "opacity-50"]),
            "group-hover:opacity-100 opacity-50"
        );
    }

    #[test]
    fn test_display_and_position() {
        assert_eq!(cn(["flex relative", "hidden"]), "relative hidden");
        assert_eq!(cn(["absolute", "fixed"]), "fixed");
    }

    #[test]
    fn test_border_transparent_replaces_color() {
        assert_eq!(
            cn(["border-primary border-2", "border-transparent"]),
            "border-2 border-transparent"
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(cn(["rounded-lg", "custom", "custom"]), "rounded-lg custom");
    }
}
