//! Localized pages. Every page takes the resolved `Locale` from the
//! platform router and reads its copy from that locale's dictionary.

use dioxus::prelude::*;

use crate::i18n::{self, Locale};

mod about;
mod contact;
mod home;
mod how_it_works;
mod legal;
mod not_found;
mod services;
mod templates;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use how_it_works::HowItWorks;
pub use legal::{LegalNotice, Privacy, Terms};
pub use not_found::PageNotFound;
pub use services::Services;
pub use templates::Templates;

/// `<title>` and description for a page, from `{prefix}.meta.title` and
/// `{prefix}.meta.description`.
#[component]
pub fn PageHead(locale: Locale, prefix: String) -> Element {
    let dict = i18n::dictionary(locale);
    let title = dict.text(&format!("{prefix}.meta.title"));
    let description = dict.text(&format!("{prefix}.meta.description"));
    let site = dict.text("site.name");
    let code = locale.code();

    rsx! {
        document::Title { "{title} · {site}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { property: "og:locale", content: "{code}" }
    }
}

/// Page prefixes that carry a `meta` block.
pub const PAGE_PREFIXES: [&str; 9] = [
    "home",
    "about",
    "services",
    "how_it_works",
    "templates",
    "contact",
    "legal.privacy",
    "legal.terms",
    "legal.notice",
];
