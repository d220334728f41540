//! Class Classifier
//!
//! Strips presentation/utility class tokens from an element's class list,
//! keeping only tokens assumed to carry semantic meaning. This is an
//! allow-by-default / deny-by-pattern filter: unrecognized tokens are kept,
//! and a short meaningful token ("nav" on a news site, say) may be lost.
//! That trade-off is an accepted heuristic limitation, not a bug - this is
//! not a CSS engine.
//!
//! The deny table is an ordered list of independent rules, one per concern,
//! so each rule can be unit-tested and extended on its own.

/// One deny rule: a name for diagnostics and a predicate over the
/// lowercased token.
struct DenyRule {
    name: &'static str,
    matches: fn(&str) -> bool,
}

/// Token equals one of `words`, or starts with one of them followed by `-`
fn word_or_dash(token: &str, words: &[&str]) -> bool {
    words.iter().any(|w| {
        token == *w
            || (token.len() > w.len() && token.starts_with(w) && token.as_bytes()[w.len()] == b'-')
    })
}

fn has_prefix(token: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| token.starts_with(p))
}

/// UI-framework component names (Bootstrap and friends)
fn framework_component(t: &str) -> bool {
    word_or_dash(
        t,
        &[
            "btn", "nav", "navbar", "card", "modal", "alert", "badge", "breadcrumb", "carousel",
            "dropdown", "form", "input", "table",
        ],
    )
}

/// Grid/spacing/display utility prefixes
fn layout_utility(t: &str) -> bool {
    has_prefix(
        t,
        &[
            "container", "row", "col", "grid", "flex", "d-", "justify", "align", "text-", "bg-",
            "border-", "p-", "m-", "pt-", "pb-", "pl-", "pr-", "mt-", "mb-", "ml-", "mr-",
        ],
    )
}

/// Tailwind-style utility prefixes
fn tailwind_utility(t: &str) -> bool {
    has_prefix(
        t,
        &[
            "tw-", "w-", "h-", "min-w-", "min-h-", "max-w-", "max-h-", "px-", "py-", "mx-", "my-",
            "ring-", "shadow-", "outline-", "items-", "content-", "self-", "place-", "space-",
            "gap-", "divide-", "rounded-", "opacity-", "z-", "order-", "inset-", "transition-",
            "transform-", "scale-", "rotate-", "translate-", "skew-", "origin-", "filter-",
            "blur-", "brightness-", "contrast-", "grayscale-", "sepia-", "cursor-", "select-",
            "resize-", "appearance-", "leading-", "tracking-", "sr-only-", "not-sr-only-",
            "focus-within-", "group-hover-", "group-focus-",
        ],
    )
}

/// Responsive and state pseudo-prefixes (`md:`, `hover:`, ...)
fn pseudo_prefix(t: &str) -> bool {
    has_prefix(
        t,
        &[
            "sm:", "md:", "lg:", "xl:", "2xl:", "hover:", "focus:", "active:", "disabled:",
            "first:", "last:", "odd:", "even:", "checked:",
        ],
    )
}

/// Semantic-color keywords used bare
fn semantic_color(t: &str) -> bool {
    matches!(
        t,
        "primary" | "secondary" | "success" | "danger" | "warning" | "info" | "light" | "dark"
            | "muted"
    )
}

/// Palette color names, bare or dash-suffixed (`red`, `slate-200`)
fn palette_color(t: &str) -> bool {
    word_or_dash(
        t,
        &[
            "red", "blue", "green", "yellow", "orange", "purple", "pink", "gray", "grey", "black",
            "white", "indigo", "cyan", "teal", "lime", "emerald", "sky", "violet", "fuchsia",
            "rose", "amber", "slate", "zinc", "neutral", "stone",
        ],
    )
}

/// Size keywords
fn size_keyword(t: &str) -> bool {
    word_or_dash(
        t,
        &[
            "xs", "sm", "md", "lg", "xl", "xxl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl",
            "9xl",
        ],
    ) || matches!(t, "small" | "medium" | "large" | "big" | "tiny" | "mini")
}

/// Layout and positioning words
fn layout_position(t: &str) -> bool {
    word_or_dash(
        t,
        &[
            "float", "position", "absolute", "relative", "fixed", "sticky", "static", "top",
            "bottom", "left", "right", "center", "block", "inline", "hidden", "visible",
            "overflow", "scroll", "auto", "mobile", "tablet", "desktop", "responsive",
        ],
    )
}

/// Bare interaction-state words
fn interaction_state(t: &str) -> bool {
    matches!(
        t,
        "active" | "inactive" | "disabled" | "enabled" | "selected" | "hover" | "focus" | "visited"
    )
}

/// CSS property-ish words (`font-bold`, `shadow`, `radius-sm`)
fn css_property(t: &str) -> bool {
    word_or_dash(
        t,
        &[
            "font", "weight", "style", "decoration", "transform", "transition", "animation",
            "opacity", "shadow", "radius", "width", "height",
        ],
    ) || has_prefix(
        t,
        &[
            "list", "appearance", "caret", "accent", "scroll", "snap", "touch", "will-change",
            "content",
        ],
    )
}

/// Tokens ending in a digit are almost always scale steps (`mt4`, `col6`)
fn trailing_digit(t: &str) -> bool {
    t.ends_with(|c: char| c.is_ascii_digit())
}

/// 1-2 letter tokens carry no recoverable meaning
fn short_token(t: &str) -> bool {
    t.len() <= 2 && t.chars().all(|c| c.is_ascii_alphabetic())
}

const DENY_RULES: &[DenyRule] = &[
    DenyRule { name: "framework-component", matches: framework_component },
    DenyRule { name: "layout-utility", matches: layout_utility },
    DenyRule { name: "tailwind-utility", matches: tailwind_utility },
    DenyRule { name: "pseudo-prefix", matches: pseudo_prefix },
    DenyRule { name: "semantic-color", matches: semantic_color },
    DenyRule { name: "palette-color", matches: palette_color },
    DenyRule { name: "size-keyword", matches: size_keyword },
    DenyRule { name: "layout-position", matches: layout_position },
    DenyRule { name: "interaction-state", matches: interaction_state },
    DenyRule { name: "css-property", matches: css_property },
    DenyRule { name: "trailing-digit", matches: trailing_digit },
    DenyRule { name: "short-token", matches: short_token },
];

/// Name of the first deny rule matching a token, if any
///
/// Matching is done on the lowercased token.
pub fn denied_by(token: &str) -> Option<&'static str> {
    let lower = token.to_ascii_lowercase();
    DENY_RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map(|rule| rule.name)
}

/// Filter a raw whitespace-separated class string down to its semantic
/// tokens, preserving source order and original spelling
pub fn filter_classes(class_attr: &str) -> Vec<String> {
    class_attr
        .split_whitespace()
        .filter(|token| !token.is_empty() && denied_by(token).is_none())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_components_dropped() {
        assert_eq!(denied_by("btn"), Some("framework-component"));
        assert_eq!(denied_by("btn-primary"), Some("framework-component"));
        assert_eq!(denied_by("card"), Some("framework-component"));
        assert_eq!(denied_by("navbar-brand"), Some("framework-component"));
        // Not dash-separated: kept by this rule
        assert_ne!(denied_by("button"), Some("framework-component"));
    }

    #[test]
    fn test_utility_prefixes_dropped() {
        for token in ["container-fluid", "col-md-6", "text-center", "mt-3", "d-flex"] {
            assert!(denied_by(token).is_some(), "{token} should be denied");
        }
        for token in ["tw-widget", "max-w-xl", "rounded-full", "hover:underline", "md:block"] {
            assert!(denied_by(token).is_some(), "{token} should be denied");
        }
    }

    #[test]
    fn test_colors_and_sizes_dropped() {
        assert_eq!(denied_by("primary"), Some("semantic-color"));
        assert_eq!(denied_by("slate-200"), Some("palette-color"));
        assert_eq!(denied_by("large"), Some("size-keyword"));
        assert_eq!(denied_by("2xl"), Some("size-keyword"));
    }

    #[test]
    fn test_numeric_and_short_tokens_dropped() {
        assert_eq!(denied_by("item2"), Some("trailing-digit"));
        assert_eq!(denied_by("x"), Some("short-token"));
        assert_eq!(denied_by("fa"), Some("short-token"));
        // Three letters survive the short-token rule
        assert!(denied_by("foo").is_none());
    }

    #[test]
    fn test_semantic_tokens_kept() {
        let kept = filter_classes("article-body btn product-title mt-2 author");
        assert_eq!(kept, vec!["article-body", "product-title", "author"]);
    }

    #[test]
    fn test_case_preserved_but_matched_lowercase() {
        // Matching is case-insensitive, survivors keep their spelling
        assert!(filter_classes("BTN Mt-2").is_empty());
        assert_eq!(filter_classes("ArticleBody"), vec!["ArticleBody"]);
    }

    #[test]
    fn test_idempotent() {
        let input = "headline btn-lg sidebar red-500 comments";
        let once = filter_classes(input);
        let twice = filter_classes(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_classes("").is_empty());
        assert!(filter_classes("   ").is_empty());
    }
}
