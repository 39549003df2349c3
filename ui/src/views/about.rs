use dioxus::prelude::*;

use crate::components::{GradientPalette, GradientText, Reveal};
use crate::i18n::{self, Locale, ValueCard};

use super::PageHead;

#[component]
pub fn About(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let story: Vec<String> = dict.entries("about.story.paragraphs");
    let values: Vec<ValueCard> = dict.entries("about.values.items");

    rsx! {
        PageHead { locale, prefix: "about" }
        section { class: "page page-about",
            header { class: "page__header",
                p { class: "page__eyebrow", {dict.text("about.eyebrow")} }
                h1 {
                    {dict.text("about.title")}
                    " "
                    GradientText { text: dict.text("about.highlight"), palette: GradientPalette::WARM }
                }
            }

            div { class: "prose",
                h2 { {dict.text("about.story.title")} }
                for (i, paragraph) in story.into_iter().enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }

            h2 { class: "section-title", {dict.text("about.values.title")} }
            div { class: "card-grid",
                for (i, value) in values.into_iter().enumerate() {
                    Reveal { key: "{i}", index: i,
                        article { class: "card",
                            h3 { class: "card__title", "{value.title}" }
                            p { "{value.description}" }
                        }
                    }
                }
            }
        }
    }
}
