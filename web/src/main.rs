use dioxus::prelude::*;

use ui::components::{SiteFooter, SiteNavbar};
use ui::i18n::Locale;
use ui::paths::SitePage;
use ui::views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(SiteLayout)]
        #[nest("/:lang")]
            #[route("/")]
            Home { lang: String },
            #[route("/about")]
            About { lang: String },
            #[route("/services")]
            Services { lang: String },
            #[route("/how-it-works")]
            HowItWorks { lang: String },
            #[route("/templates")]
            Templates { lang: String },
            #[route("/contact")]
            Contact { lang: String },
            #[route("/privacy")]
            Privacy { lang: String },
            #[route("/terms")]
            Terms { lang: String },
            #[route("/legal-notice")]
            LegalNotice { lang: String },
        #[end_nest]
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Locale for this route; unsupported `lang` segments resolve to `en`.
    fn locale(&self) -> Locale {
        match self {
            Route::Root {} => Locale::detect(),
            Route::Home { lang }
            | Route::About { lang }
            | Route::Services { lang }
            | Route::HowItWorks { lang }
            | Route::Templates { lang }
            | Route::Contact { lang }
            | Route::Privacy { lang }
            | Route::Terms { lang }
            | Route::LegalNotice { lang } => Locale::resolve(lang),
            Route::PageNotFound { segments } => segments
                .first()
                .map_or(Locale::DEFAULT, |segment| Locale::resolve(segment)),
        }
    }

    fn page(&self) -> Option<SitePage> {
        match self {
            Route::Home { .. } => Some(SitePage::Home),
            Route::About { .. } => Some(SitePage::About),
            Route::Services { .. } => Some(SitePage::Services),
            Route::HowItWorks { .. } => Some(SitePage::HowItWorks),
            Route::Templates { .. } => Some(SitePage::Templates),
            Route::Contact { .. } => Some(SitePage::Contact),
            Route::Privacy { .. } => Some(SitePage::Privacy),
            Route::Terms { .. } => Some(SitePage::Terms),
            Route::LegalNotice { .. } => Some(SitePage::LegalNotice),
            Route::Root {} | Route::PageNotFound { .. } => None,
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Site chrome around every localized page.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale();
    // Canonical path so the switcher works even under an unsupported prefix.
    let current_path = route
        .page()
        .map_or_else(|| route.to_string(), |page| page.href(locale));

    rsx! {
        SiteNavbar { locale, current_path }
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter { locale }
    }
}

/// `/` has no content of its own: send the visitor to their language.
#[component]
fn Root() -> Element {
    let navigator = navigator();
    use_effect(move || {
        let locale = Locale::detect();
        tracing::info!(locale = locale.code(), "redirecting / to detected locale");
        navigator.replace(Route::Home {
            lang: locale.code().to_string(),
        });
    });
    rsx! {}
}

#[component]
fn Home(lang: String) -> Element {
    rsx! { views::Home { locale: Locale::resolve(&lang) } }
}

#[component]
fn About(lang: String) -> Element {
    rsx! { views::About { locale: Locale::resolve(&lang) } }
}

#[component]
fn Services(lang: String) -> Element {
    rsx! { views::Services { locale: Locale::resolve(&lang) } }
}

#[component]
fn HowItWorks(lang: String) -> Element {
    rsx! { views::HowItWorks { locale: Locale::resolve(&lang) } }
}

#[component]
fn Templates(lang: String) -> Element {
    rsx! { views::Templates { locale: Locale::resolve(&lang) } }
}

#[component]
fn Contact(lang: String) -> Element {
    rsx! { views::Contact { locale: Locale::resolve(&lang) } }
}

#[component]
fn Privacy(lang: String) -> Element {
    rsx! { views::Privacy { locale: Locale::resolve(&lang) } }
}

#[component]
fn Terms(lang: String) -> Element {
    rsx! { views::Terms { locale: Locale::resolve(&lang) } }
}

#[component]
fn LegalNotice(lang: String) -> Element {
    rsx! { views::LegalNotice { locale: Locale::resolve(&lang) } }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = segments
        .first()
        .map_or(Locale::DEFAULT, |segment| Locale::resolve(segment));
    let path = format!("/{}", segments.join("/"));
    rsx! { views::PageNotFound { locale, path } }
}
