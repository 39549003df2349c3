use dioxus::prelude::*;

/// Two-stop text gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPalette {
    pub from: &'static str,
    pub to: &'static str,
    pub angle_deg: u16,
}

impl Default for GradientPalette {
    fn default() -> Self {
        Self {
            from: "#7c5cff",
            to: "#25c9d0",
            angle_deg: 120,
        }
    }
}

impl GradientPalette {
    pub const WARM: GradientPalette = GradientPalette {
        from: "#ff7a59",
        to: "#ffc15e",
        angle_deg: 90,
    };

    pub fn style(&self) -> String {
        format!(
            "--gradient-from:{};--gradient-to:{};--gradient-angle:{}deg",
            self.from,
            self.to,
            self.angle_deg % 360
        )
    }
}

#[component]
pub fn GradientText(text: String, #[props(default)] palette: GradientPalette) -> Element {
    let style = palette.style();
    rsx! {
        span { class: "gradient-text", style: "{style}", "{text}" }
    }
}
