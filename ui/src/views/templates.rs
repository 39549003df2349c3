use dioxus::prelude::*;

use crate::components::Reveal;
use crate::i18n::{self, Locale, TemplateCard};

use super::PageHead;

const PROJECT_BRIEF: Asset = asset!("/assets/downloads/project-brief-template.md");

#[component]
pub fn Templates(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let templates: Vec<TemplateCard> = dict.entries("templates.items");

    rsx! {
        PageHead { locale, prefix: "templates" }
        section { class: "page page-templates",
            header { class: "page__header",
                h1 { {dict.text("templates.title")} }
                p { class: "section-lead", {dict.text("templates.lead")} }
            }

            div { class: "download-panel",
                div {
                    h2 { {dict.text("templates.brief.title")} }
                    p { {dict.text("templates.brief.description")} }
                }
                a {
                    class: "button button--primary",
                    href: PROJECT_BRIEF,
                    download: "project-brief-template.md",
                    {dict.text("templates.brief.download")}
                }
            }

            div { class: "card-grid",
                for (i, template) in templates.into_iter().enumerate() {
                    Reveal { key: "{i}", index: i,
                        article { class: "card card--template",
                            span { class: "card__badge", "{template.format}" }
                            h3 { class: "card__title", "{template.title}" }
                            p { "{template.description}" }
                        }
                    }
                }
            }
            p { class: "page__note", {dict.text("templates.note")} }
        }
    }
}
