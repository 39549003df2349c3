//! Shared UI crate for the Northlight site. Locale resolution, the lead form
//! state machine and every page/component live here; platform crates only
//! own the router.

use dioxus::prelude::*;

pub mod config;
pub mod contact;
pub mod i18n;
pub mod paths;
pub mod views;

pub mod components {
    // Localized site chrome (components/site_navbar.rs, components/site_footer.rs)
    pub mod site_footer;
    pub mod site_navbar;
    pub use site_footer::SiteFooter;
    pub use site_navbar::SiteNavbar;

    // Decorative building blocks
    pub mod gradient_text;
    pub mod hero;
    pub mod orbs;
    pub mod reveal;
    pub use gradient_text::{GradientPalette, GradientText};
    pub use hero::{ParallaxConfig, ParallaxHero};
    pub use orbs::Orbs;
    pub use reveal::Reveal;

    // Lead capture
    pub mod contact_section;
    pub mod contact_wizard;
    mod submission_banner;
    pub use contact_section::ContactSection;
    pub use contact_wizard::ContactWizard;
    pub use submission_banner::SubmissionBanner;
}

/// Unified site theme (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
