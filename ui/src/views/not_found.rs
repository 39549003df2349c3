use dioxus::prelude::*;

use crate::i18n::{self, Locale};
use crate::paths::SitePage;

#[component]
pub fn PageNotFound(locale: Locale, path: String) -> Element {
    let dict = i18n::dictionary(locale);
    let title = dict.text("not_found.title");
    tracing::debug!("no route for {path}");

    rsx! {
        document::Title { "{title}" }
        section { class: "page page-not-found",
            p { class: "page-not-found__code", "404" }
            h1 { "{title}" }
            p { {dict.text("not_found.body")} }
            Link { class: "button button--primary", to: SitePage::Home.href(locale),
                {dict.text("not_found.home")}
            }
        }
    }
}
