#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure that the CSS selectors rendered by the shared `ui` components remain
  present in the unified site theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression.

How it works:
- We compile-time embed the theme using `include_str!` pointing to the shared
  `ui/` location (the same file `ui::THEME_CSS` ships).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-section",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Hero & decoration
    ".hero {",
    ".hero__content",
    "--parallax-shift",
    "--hero-fade-start",
    ".gradient-text",
    "--gradient-angle",
    ".orbs__orb",
    "--orb-drift",
    ".reveal",
    "--reveal-delay",
    // Content blocks
    ".card-grid",
    ".card__title",
    ".steps__item",
    ".pricing__plan--highlighted",
    ".faq__item",
    ".download-panel",
    // Forms
    ".field__input",
    ".choice--selected",
    ".form-status--success",
    ".form-status--error",
    ".wizard__progress-bar",
    ".contact-form__row",
    // Footer
    ".footer__inner",
    ".footer__link",
    // Responsive / motion blocks
    "@media (max-width: 720px)",
    "@media (prefers-reduced-motion: reduce)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__links--open",
    ".navbar__link--active",
    ".navbar__link--cta",
    ".navbar__locale-link--current",
    ".navbar__toggle",
];

fn missing(css: &str, selectors: &[&'static str]) -> Vec<&'static str> {
    selectors.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn navbar_sheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "navbar.css lost: {}", missing.join(", "));
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn braces_are_balanced() {
    for (name, css) in [("main.css", THEME_CSS), ("navbar.css", NAVBAR_CSS)] {
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close, "{name} has unbalanced braces");
    }
}
