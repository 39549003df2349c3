//! Parallax hero.
//!
//! The motion is CSS only (`animation-timeline: scroll()` on the layers);
//! this component just renders the markup and the custom properties that
//! tune it.

use dioxus::prelude::*;

use super::gradient_text::{GradientPalette, GradientText};
use super::orbs::Orbs;

/// Tuning for the hero's scroll-linked transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxConfig {
    /// How far the background layer lags the scroll, 0 (pinned) to 1 (scrolls normally).
    pub depth: f32,
    /// Scroll progress (percent of the hero height) where the copy starts fading.
    pub fade_start: u8,
    /// Scroll progress where the copy is fully transparent.
    pub fade_end: u8,
    /// Accent color of the glow behind the title.
    pub glow: &'static str,
    /// Number of decorative orbs behind the copy.
    pub orbs: usize,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            depth: 0.35,
            fade_start: 20,
            fade_end: 85,
            glow: "#7c5cff",
            orbs: 5,
        }
    }
}

impl ParallaxConfig {
    /// Inline custom properties consumed by `.hero` in the theme.
    pub fn style(&self) -> String {
        let depth = self.depth.clamp(0.0, 1.0);
        let fade_end = self.fade_end.clamp(1, 100);
        let fade_start = self.fade_start.min(fade_end - 1);
        let shift = ((1.0 - depth) * 40.0).round();
        format!(
            "--parallax-depth:{depth:.2};--parallax-shift:{shift}vh;--hero-fade-start:{fade_start}%;--hero-fade-end:{fade_end}%;--hero-glow:{}",
            self.glow
        )
    }
}

#[component]
pub fn ParallaxHero(
    eyebrow: String,
    title: String,
    highlight: String,
    subtitle: String,
    primary_label: String,
    primary_href: String,
    secondary_label: String,
    secondary_href: String,
    #[props(default)] config: ParallaxConfig,
) -> Element {
    let style = config.style();

    rsx! {
        section { class: "hero", style: "{style}",
            div { class: "hero__backdrop", aria_hidden: "true",
                div { class: "hero__grid" }
                Orbs { count: config.orbs }
            }
            div { class: "hero__content",
                p { class: "hero__eyebrow", "{eyebrow}" }
                h1 { class: "hero__title",
                    "{title} "
                    GradientText { text: highlight, palette: GradientPalette::default() }
                }
                p { class: "hero__subtitle", "{subtitle}" }
                div { class: "hero__actions",
                    Link { class: "button button--primary", to: primary_href, "{primary_label}" }
                    Link { class: "button button--ghost", to: secondary_href, "{secondary_label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_exposes_every_property() {
        let style = ParallaxConfig::default().style();
        assert_eq!(
            style,
            "--parallax-depth:0.35;--parallax-shift:26vh;--hero-fade-start:20%;--hero-fade-end:85%;--hero-glow:#7c5cff"
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = ParallaxConfig {
            depth: 3.0,
            fade_start: 90,
            fade_end: 0,
            ..ParallaxConfig::default()
        };
        let style = config.style();
        assert!(style.contains("--parallax-depth:1.00;"));
        assert!(style.contains("--parallax-shift:0vh;"));
        assert!(style.contains("--hero-fade-start:0%;"));
        assert!(style.contains("--hero-fade-end:1%;"));
    }
}
