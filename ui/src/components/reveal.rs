use dioxus::prelude::*;

/// Cap so long lists do not leave the last items invisible for seconds.
pub const MAX_STAGGER_MS: u32 = 600;

/// Delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(MAX_STAGGER_MS)
}

/// Fades and lifts its children in when they scroll into view.
///
/// Uses the theme's `.reveal` view-timeline animation; `index` staggers
/// siblings.
#[component]
pub fn Reveal(
    #[props(default)] index: usize,
    #[props(default = 90)] step_ms: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let delay = stagger_delay_ms(index, step_ms);
    rsx! {
        div { class: "reveal {class}", style: "--reveal-delay:{delay}ms", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_linearly_then_cap() {
        assert_eq!(stagger_delay_ms(0, 90), 0);
        assert_eq!(stagger_delay_ms(3, 90), 270);
        assert_eq!(stagger_delay_ms(50, 90), MAX_STAGGER_MS);
        assert_eq!(stagger_delay_ms(usize::MAX, 90), MAX_STAGGER_MS);
    }
}
