use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::i18n::{self, Dictionary, Locale};
use crate::paths::SitePage;

fn page_links(pages: &[SitePage], dict: Dictionary) -> Vec<(String, String)> {
    pages
        .iter()
        .map(|page| (page.href(dict.locale()), dict.text(page.label_key())))
        .collect()
}

#[component]
pub fn SiteFooter(locale: Locale) -> Element {
    let dict = i18n::dictionary(locale);
    let config = SiteConfig::from_env();
    let email = config.contact_email;
    let sitemap = page_links(&SitePage::NAV, dict);
    let legal = page_links(&SitePage::LEGAL, dict);

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "Northlight" }
                    p { class: "footer__pitch", {dict.text("footer.pitch")} }
                    a { class: "footer__mail", href: "mailto:{email}", "{email}" }
                }

                nav { class: "footer__column", aria_label: dict.text("footer.sitemap_label"),
                    h2 { class: "footer__heading", {dict.text("footer.sitemap")} }
                    for (href, label) in sitemap {
                        Link { key: "{href}", class: "footer__link", to: href.clone(), "{label}" }
                    }
                }

                nav { class: "footer__column", aria_label: dict.text("footer.legal_label"),
                    h2 { class: "footer__heading", {dict.text("footer.legal")} }
                    for (href, label) in legal {
                        Link { key: "{href}", class: "footer__link", to: href.clone(), "{label}" }
                    }
                }
            }
            p { class: "footer__copyright", {dict.text("footer.copyright")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_links_keep_the_locale_prefix() {
        let links = page_links(&SitePage::LEGAL, i18n::dictionary(Locale::Fr));
        assert_eq!(links[0], ("/fr/privacy".to_string(), "Politique de confidentialité".to_string()));
        assert_eq!(links[2].0, "/fr/legal-notice");
    }
}
