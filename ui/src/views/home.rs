use dioxus::prelude::*;

use crate::components::{ContactSection, GradientText, ParallaxHero, Reveal};
use crate::i18n::{self, Locale, ProcessStep, ServiceCard};
use crate::paths::SitePage;

use super::PageHead;

#[component]
pub fn Home(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let services: Vec<ServiceCard> = dict.entries("home.services.items");
    let steps: Vec<ProcessStep> = dict.entries("home.process.items");

    rsx! {
        PageHead { locale, prefix: "home" }

        ParallaxHero {
            eyebrow: dict.text("home.hero.eyebrow"),
            title: dict.text("home.hero.title"),
            highlight: dict.text("home.hero.highlight"),
            subtitle: dict.text("home.hero.subtitle"),
            primary_label: dict.text("home.hero.primary"),
            primary_href: SitePage::Contact.href(locale),
            secondary_label: dict.text("home.hero.secondary"),
            secondary_href: SitePage::Services.href(locale),
        }

        section { class: "page-section",
            h2 { class: "section-title", {dict.text("home.services.title")} }
            p { class: "section-lead", {dict.text("home.services.lead")} }
            div { class: "card-grid",
                for (i, card) in services.into_iter().enumerate() {
                    Reveal { key: "{i}", index: i,
                        article { class: "card",
                            span { class: "card__icon", aria_hidden: "true", "{card.icon}" }
                            h3 { class: "card__title", "{card.title}" }
                            p { "{card.description}" }
                        }
                    }
                }
            }
            Link { class: "button button--ghost", to: SitePage::Services.href(locale),
                {dict.text("home.services.more")}
            }
        }

        section { class: "page-section page-section--alt",
            h2 { class: "section-title",
                {dict.text("home.process.title")}
                " "
                GradientText { text: dict.text("home.process.highlight") }
            }
            ol { class: "steps",
                for (n, step) in (1..).zip(steps) {
                    Reveal { key: "{n}", index: n - 1,
                        li { class: "steps__item",
                            span { class: "steps__number", "{n}" }
                            h3 { "{step.title}" }
                            p { "{step.description}" }
                        }
                    }
                }
            }
            Link { class: "button button--ghost", to: SitePage::HowItWorks.href(locale),
                {dict.text("home.process.more")}
            }
        }

        ContactSection { locale }
    }
}
