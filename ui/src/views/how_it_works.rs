use dioxus::prelude::*;

use crate::components::Reveal;
use crate::i18n::{self, FaqEntry, Locale, ProcessStep};

use super::PageHead;

#[component]
pub fn HowItWorks(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let steps: Vec<ProcessStep> = dict.entries("how_it_works.steps");
    let faq: Vec<FaqEntry> = dict.entries("how_it_works.faq.items");

    rsx! {
        PageHead { locale, prefix: "how_it_works" }
        section { class: "page page-how",
            header { class: "page__header",
                h1 { {dict.text("how_it_works.title")} }
                p { class: "section-lead", {dict.text("how_it_works.lead")} }
            }

            ol { class: "steps steps--timeline",
                for (n, step) in (1..).zip(steps) {
                    Reveal { key: "{n}", index: n - 1,
                        li { class: "steps__item",
                            span { class: "steps__number", "{n}" }
                            h2 { "{step.title}" }
                            p { "{step.description}" }
                            if !step.duration.is_empty() {
                                p { class: "steps__duration", "{step.duration}" }
                            }
                        }
                    }
                }
            }

            h2 { class: "section-title", {dict.text("how_it_works.faq.title")} }
            div { class: "faq",
                for (i, entry) in faq.into_iter().enumerate() {
                    details { key: "{i}", class: "faq__item",
                        summary { class: "faq__question", "{entry.question}" }
                        p { class: "faq__answer", "{entry.answer}" }
                    }
                }
            }
        }
    }
}
