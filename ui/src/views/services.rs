use dioxus::prelude::*;

use crate::components::Reveal;
use crate::i18n::{self, Locale, PricingPlan, ServiceCard};
use crate::paths::SitePage;

use super::PageHead;

#[component]
pub fn Services(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let services: Vec<ServiceCard> = dict.entries("services.items");
    let plans: Vec<PricingPlan> = dict.entries("services.pricing.plans");
    let contact = SitePage::Contact.href(locale);
    let cta = dict.text("services.pricing.cta");

    rsx! {
        PageHead { locale, prefix: "services" }
        section { class: "page page-services",
            header { class: "page__header",
                h1 { {dict.text("services.title")} }
                p { class: "section-lead", {dict.text("services.lead")} }
            }

            div { class: "card-grid",
                for (i, card) in services.into_iter().enumerate() {
                    Reveal { key: "{i}", index: i,
                        article { class: "card",
                            span { class: "card__icon", aria_hidden: "true", "{card.icon}" }
                            h2 { class: "card__title", "{card.title}" }
                            p { "{card.description}" }
                        }
                    }
                }
            }

            h2 { class: "section-title", {dict.text("services.pricing.title")} }
            p { class: "section-lead", {dict.text("services.pricing.lead")} }
            div { class: "pricing",
                for (i, plan) in plans.into_iter().enumerate() {
                    article {
                        key: "{i}",
                        class: if plan.highlighted { "pricing__plan pricing__plan--highlighted" } else { "pricing__plan" },
                        h3 { class: "pricing__name", "{plan.name}" }
                        p { class: "pricing__price",
                            span { class: "pricing__amount", "{plan.price}" }
                            span { class: "pricing__period", "{plan.period}" }
                        }
                        p { "{plan.description}" }
                        ul { class: "pricing__features",
                            for (j, feature) in plan.features.iter().enumerate() {
                                li { key: "{j}", "{feature}" }
                            }
                        }
                        Link { class: "button button--primary", to: contact.clone(), "{cta}" }
                    }
                }
            }
        }
    }
}
