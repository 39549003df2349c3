use dioxus::prelude::*;

use crate::components::ContactWizard;
use crate::config::SiteConfig;
use crate::i18n::{self, Locale};

use super::PageHead;

#[component]
pub fn Contact(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let email = SiteConfig::from_env().contact_email;

    rsx! {
        PageHead { locale, prefix: "contact" }
        section { class: "page page-contact",
            header { class: "page__header",
                h1 { {dict.text("contact.title")} }
                p { class: "section-lead", {dict.text("contact.lead")} }
            }
            div { class: "page-contact__layout",
                ContactWizard { locale }
                aside { class: "page-contact__aside",
                    h2 { {dict.text("contact.aside.title")} }
                    p { {dict.text("contact.aside.body")} }
                    a { class: "footer__mail", href: "mailto:{email}", "{email}" }
                }
            }
        }
    }
}
