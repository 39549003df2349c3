use dioxus::prelude::*;

use crate::i18n::{self, Locale};
use crate::paths::{switch_locale_path, SitePage};

// Navbar stylesheet (also inlined for native release builds, where assets are not served)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Localized site header.
///
/// Platform crates pass the resolved `locale` and the current route string;
/// every link is built with `SitePage::href` so the `/{lang}` prefix is kept,
/// and the switcher points at the same page in each other locale.
#[component]
pub fn SiteNavbar(locale: Locale, current_path: String) -> Element {
    let dict = i18n::dictionary(locale);
    let mut menu_open = use_signal(|| false);

    let links = SitePage::NAV.into_iter().map(move |page| {
        let href = page.href(locale);
        let label = dict.text(page.label_key());
        let class = if page == SitePage::Contact {
            "navbar__link navbar__link--cta"
        } else {
            "navbar__link"
        };
        rsx! {
            Link {
                key: "{href}",
                class: "{class}",
                active_class: "navbar__link--active",
                to: href.clone(),
                onclick: move |_| menu_open.set(false),
                "{label}"
            }
        }
    });

    let switcher = Locale::ALL.into_iter().map(move |target| {
        let href = switch_locale_path(&current_path, target);
        let current = target == locale;
        let class = if current {
            "navbar__locale-link navbar__locale-link--current"
        } else {
            "navbar__locale-link"
        };
        let code = target.code().to_uppercase();
        let name = target.native_name();
        rsx! {
            Link {
                key: "{code}",
                class: "{class}",
                to: href,
                title: "{name}",
                "{code}"
            }
        }
    });

    let open = menu_open();
    let links_class = if open { "navbar__links navbar__links--open" } else { "navbar__links" };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                Link {
                    class: "navbar__brand",
                    to: SitePage::Home.href(locale),
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "Northlight" }
                    span { class: "navbar__brand-subtitle", {dict.text("nav.tagline")} }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_expanded: "{open}",
                    aria_controls: "navbar-links",
                    onclick: move |_| menu_open.set(!open),
                    span { class: "visually-hidden", {dict.text("nav.menu")} }
                    span { class: "navbar__toggle-bar", aria_hidden: "true" }
                }

                nav {
                    id: "navbar-links",
                    class: links_class,
                    aria_label: dict.text("nav.primary_label"),
                    {links}
                }

                div { class: "navbar__locale",
                    span { class: "visually-hidden", {dict.text("nav.language_label")} }
                    {switcher}
                }
            }
        }
    }
}
