use dioxus::prelude::*;

use crate::i18n::{self, LegalSection, Locale};

use super::PageHead;

/// Shared body of the three legal pages: `{prefix}.title`,
/// `{prefix}.updated` and `{prefix}.sections`.
#[component]
fn LegalPage(locale: Locale, prefix: String) -> Element {
    let dict = i18n::dictionary(locale);
    let sections: Vec<LegalSection> = dict.entries(&format!("{prefix}.sections"));
    let title = dict.text(&format!("{prefix}.title"));
    let updated = dict.text(&format!("{prefix}.updated"));

    rsx! {
        PageHead { locale, prefix: prefix.clone() }
        article { class: "page page-legal prose",
            h1 { "{title}" }
            p { class: "page__note", "{updated}" }
            for (i, part) in sections.into_iter().enumerate() {
                section { key: "{i}",
                    h2 { "{part.heading}" }
                    for (j, paragraph) in part.paragraphs.iter().enumerate() {
                        p { key: "{j}", "{paragraph}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Privacy(locale: Locale) -> Element {
    rsx! { LegalPage { locale, prefix: "legal.privacy" } }
}

#[component]
pub fn Terms(locale: Locale) -> Element {
    rsx! { LegalPage { locale, prefix: "legal.terms" } }
}

#[component]
pub fn LegalNotice(locale: Locale) -> Element {
    rsx! { LegalPage { locale, prefix: "legal.notice" } }
}
