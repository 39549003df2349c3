//! Site configuration.
//!
//! The site ships as wasm, so there is no process environment at runtime.
//! Overrides are read from the build environment via `option_env!` and
//! layered over the defaults:
//!
//! | variable                         | field                |
//! |----------------------------------|----------------------|
//! | `NORTHLIGHT_CONTACT_ENDPOINT`    | `contact_endpoint`   |
//! | `NORTHLIGHT_SITE_ORIGIN`         | `site_origin`        |
//! | `NORTHLIGHT_CONTACT_EMAIL`       | `contact_email`      |
//! | `NORTHLIGHT_REQUEST_TIMEOUT_MS`  | `request_timeout_ms` |

pub const CONTACT_ENDPOINT_VAR: &str = "NORTHLIGHT_CONTACT_ENDPOINT";
pub const SITE_ORIGIN_VAR: &str = "NORTHLIGHT_SITE_ORIGIN";
pub const CONTACT_EMAIL_VAR: &str = "NORTHLIGHT_CONTACT_EMAIL";
pub const REQUEST_TIMEOUT_VAR: &str = "NORTHLIGHT_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Lead intake endpoint. Relative paths are joined with the page origin.
    pub contact_endpoint: String,
    /// Origin used to absolutize a relative endpoint when no browser origin exists.
    pub site_origin: String,
    /// Public address shown next to the contact form.
    pub contact_email: String,
    /// Client-side request timeout. Native only; browsers apply their own.
    pub request_timeout_ms: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: "/api/contact".to_string(),
            site_origin: "http://localhost:8080".to_string(),
            contact_email: "hello@northlight.studio".to_string(),
            request_timeout_ms: None,
        }
    }
}

impl SiteConfig {
    /// Defaults overlaid with the build-time environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| match name {
            CONTACT_ENDPOINT_VAR => option_env!("NORTHLIGHT_CONTACT_ENDPOINT"),
            SITE_ORIGIN_VAR => option_env!("NORTHLIGHT_SITE_ORIGIN"),
            CONTACT_EMAIL_VAR => option_env!("NORTHLIGHT_CONTACT_EMAIL"),
            REQUEST_TIMEOUT_VAR => option_env!("NORTHLIGHT_REQUEST_TIMEOUT_MS"),
            _ => None,
        })
    }

    /// Defaults overlaid with whatever `var` returns. Blank values are ignored.
    pub fn from_vars<'a>(var: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();
        let non_blank = |name: &str| var(name).map(str::trim).filter(|v| !v.is_empty());

        if let Some(endpoint) = non_blank(CONTACT_ENDPOINT_VAR) {
            config.contact_endpoint = endpoint.to_string();
        }
        if let Some(origin) = non_blank(SITE_ORIGIN_VAR) {
            config.site_origin = origin.to_string();
        }
        if let Some(email) = non_blank(CONTACT_EMAIL_VAR) {
            config.contact_email = email.to_string();
        }
        if let Some(raw) = non_blank(REQUEST_TIMEOUT_VAR) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.request_timeout_ms = Some(ms),
                _ => tracing::warn!("ignoring {REQUEST_TIMEOUT_VAR}={raw:?}; expected milliseconds"),
            }
        }
        config
    }

    /// Absolute endpoint URL for the HTTP client.
    pub fn contact_endpoint_url(&self) -> String {
        let origin = page_origin().unwrap_or_else(|| self.site_origin.clone());
        join_origin(&origin, &self.contact_endpoint)
    }
}

/// Absolute URLs pass through; relative ones are joined onto `origin`.
pub fn join_origin(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{origin}/{endpoint}")
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_api() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_endpoint, "/api/contact");
        assert_eq!(config.contact_endpoint_url(), "http://localhost:8080/api/contact");
    }

    #[test]
    fn overrides_apply_and_blank_values_are_ignored() {
        let config = SiteConfig::from_vars(|name| match name {
            CONTACT_ENDPOINT_VAR => Some("https://leads.example.com/intake"),
            CONTACT_EMAIL_VAR => Some("   "),
            REQUEST_TIMEOUT_VAR => Some("2500"),
            _ => None,
        });
        assert_eq!(config.contact_endpoint_url(), "https://leads.example.com/intake");
        assert_eq!(config.contact_email, SiteConfig::default().contact_email);
        assert_eq!(config.request_timeout_ms, Some(2500));
    }

    #[test]
    fn invalid_timeout_is_dropped() {
        let config = SiteConfig::from_vars(|name| (name == REQUEST_TIMEOUT_VAR).then_some("soon"));
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn join_origin_normalizes_slashes() {
        assert_eq!(join_origin("https://a.test/", "/api/contact"), "https://a.test/api/contact");
        assert_eq!(join_origin("https://a.test", "api/contact"), "https://a.test/api/contact");
    }
}
