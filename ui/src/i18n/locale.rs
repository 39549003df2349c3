use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported site locales. The set is closed; every URL starts with one of these codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Two-letter code used in URLs and table file names.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Language name in its own language, for the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    /// Exact match on a route segment (ASCII case-insensitive, no trimming).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| code.eq_ignore_ascii_case(locale.code()))
    }

    /// Route segment to locale; anything unsupported becomes `DEFAULT`.
    pub fn resolve(candidate: &str) -> Self {
        Self::from_code(candidate).unwrap_or(Self::DEFAULT)
    }

    /// Primary language subtag of a negotiated identifier (`fr-CA` -> `Fr`).
    pub fn from_language_id(id: &LanguageIdentifier) -> Option<Self> {
        Self::from_code(id.language.as_str())
    }

    /// First requested language we support, else `DEFAULT`.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Self {
        requested
            .iter()
            .find_map(Self::from_language_id)
            .unwrap_or(Self::DEFAULT)
    }

    /// Best locale for the current user agent.
    ///
    /// Only used to pick a target for the bare `/` redirect; routed pages always
    /// take their locale from the URL.
    pub fn detect() -> Self {
        let requested = requested_languages();
        let locale = Self::negotiate(&requested);
        tracing::debug!(
            requested = ?requested.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
            "detected locale {}",
            locale.code()
        );
        locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn from_code_is_exact() {
        assert_eq!(Locale::from_code("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(" fr"), None);
        assert_eq!(Locale::from_code("fr\n"), None);
    }

    #[test]
    fn resolve_degrades_to_default() {
        assert_eq!(Locale::resolve("es"), Locale::En);
        assert_eq!(Locale::resolve(""), Locale::En);
        assert_eq!(Locale::resolve("fr"), Locale::Fr);
    }

    #[test]
    fn negotiate_picks_first_supported_language() {
        assert_eq!(Locale::negotiate(&ids(&["de-DE", "fr-CA", "en-US"])), Locale::Fr);
        assert_eq!(Locale::negotiate(&ids(&["en-GB", "fr"])), Locale::En);
        assert_eq!(Locale::negotiate(&ids(&["ja", "de"])), Locale::En);
        assert_eq!(Locale::negotiate(&[]), Locale::En);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
        assert_eq!(Locale::Fr.to_string(), "fr");
    }
}
