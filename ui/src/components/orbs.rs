use dioxus::prelude::*;

/// Placement of one decorative orb, in percent of the container.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbSpec {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: u32,
    pub hue: u16,
    pub drift_ms: u32,
}

impl OrbSpec {
    pub fn style(&self) -> String {
        format!(
            "left:{:.1}%;top:{:.1}%;width:{}px;height:{}px;--orb-hue:{};--orb-drift:{}ms",
            self.x_pct, self.y_pct, self.size_px, self.size_px, self.hue, self.drift_ms
        )
    }
}

const GOLDEN_ANGLE_DEG: f32 = 137.507_76;

/// Deterministic spread (golden-angle spiral) so SSR and hydration agree.
pub fn orb_layout(count: usize) -> Vec<OrbSpec> {
    (0..count)
        .map(|i| {
            let t = i as f32;
            let angle = (t * GOLDEN_ANGLE_DEG).to_radians();
            let radius = 18.0 + 30.0 * ((t + 0.5) / count as f32).sqrt();
            OrbSpec {
                x_pct: (50.0 + radius * angle.cos()).clamp(0.0, 100.0),
                y_pct: (50.0 + radius * angle.sin()).clamp(0.0, 100.0),
                size_px: 140 + ((i * 53) % 180) as u32,
                hue: ((250.0 + t * 37.0) % 360.0) as u16,
                drift_ms: 9_000 + (i as u32 % 4) * 1_750,
            }
        })
        .collect()
}

#[component]
pub fn Orbs(#[props(default = 4)] count: usize) -> Element {
    let orbs = orb_layout(count);
    rsx! {
        div { class: "orbs", aria_hidden: "true",
            for (i, orb) in orbs.iter().enumerate() {
                span { key: "{i}", class: "orbs__orb", style: orb.style() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic_and_in_bounds() {
        let a = orb_layout(7);
        assert_eq!(a, orb_layout(7));
        assert_eq!(a.len(), 7);
        for orb in &a {
            assert!((0.0..=100.0).contains(&orb.x_pct));
            assert!((0.0..=100.0).contains(&orb.y_pct));
            assert!(orb.hue < 360);
        }
        assert!(orb_layout(0).is_empty());
    }
}
