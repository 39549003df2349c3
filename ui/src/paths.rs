//! Localized URL building.
//!
//! Every in-app link goes through `localized_path` so the `/{lang}` prefix
//! survives navigation. The language switcher uses `switch_locale_path` to
//! keep the visitor on the same page in the other language.

use crate::i18n::Locale;

/// Prefix an application-relative path with the locale segment.
///
/// `/` maps to `/{lang}` (no trailing empty segment); anything else to
/// `/{lang}{path}`.
pub fn localized_path(path: &str, locale: Locale) -> String {
    let path = path.trim();
    let code = locale.code();
    if path.is_empty() || path == "/" {
        return format!("/{code}");
    }
    if path.starts_with('/') || path.starts_with('?') || path.starts_with('#') {
        format!("/{code}{path}")
    } else {
        format!("/{code}/{path}")
    }
}

/// Split a leading supported locale segment off `path`.
///
/// `/fr/about` -> `(Some(Fr), "/about")`, `/fr` -> `(Some(Fr), "")`,
/// `/about` -> `(None, "/about")`.
pub fn strip_locale(path: &str) -> (Option<Locale>, &str) {
    let Some(rest) = path.strip_prefix('/') else {
        return (None, path);
    };
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (segment, remainder) = rest.split_at(end);
    match Locale::from_code(segment) {
        Some(locale) if !segment.is_empty() => (Some(locale), remainder),
        _ => (None, path),
    }
}

/// Same page, other language.
pub fn switch_locale_path(current_path: &str, target: Locale) -> String {
    let (_, rest) = strip_locale(current_path);
    localized_path(rest, target)
}

/// Site pages reachable from the navbar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitePage {
    Home,
    About,
    Services,
    HowItWorks,
    Templates,
    Contact,
    Privacy,
    Terms,
    LegalNotice,
}

impl SitePage {
    pub const NAV: [SitePage; 6] = [
        SitePage::Home,
        SitePage::About,
        SitePage::Services,
        SitePage::HowItWorks,
        SitePage::Templates,
        SitePage::Contact,
    ];

    pub const LEGAL: [SitePage; 3] = [SitePage::Privacy, SitePage::Terms, SitePage::LegalNotice];

    /// Locale-independent path.
    pub fn path(self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::About => "/about",
            SitePage::Services => "/services",
            SitePage::HowItWorks => "/how-it-works",
            SitePage::Templates => "/templates",
            SitePage::Contact => "/contact",
            SitePage::Privacy => "/privacy",
            SitePage::Terms => "/terms",
            SitePage::LegalNotice => "/legal-notice",
        }
    }

    /// Dictionary key of the link label.
    pub fn label_key(self) -> &'static str {
        match self {
            SitePage::Home => "nav.home",
            SitePage::About => "nav.about",
            SitePage::Services => "nav.services",
            SitePage::HowItWorks => "nav.how_it_works",
            SitePage::Templates => "nav.templates",
            SitePage::Contact => "nav.contact",
            SitePage::Privacy => "footer.privacy",
            SitePage::Terms => "footer.terms",
            SitePage::LegalNotice => "footer.legal_notice",
        }
    }

    pub fn href(self, locale: Locale) -> String {
        localized_path(self.path(), locale)
    }
}
