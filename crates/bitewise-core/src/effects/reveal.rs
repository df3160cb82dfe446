#![forbid(unsafe_code)]

//! Intersection-triggered reveals and their stagger schedules.
//!
//! # Invariants
//!
//! 1. `stagger_offsets(0, ..)` is empty.
//! 2. The first offset is always zero; offset `i` is `i * step`.

use std::time::Duration;

use super::css_number;

/// Sections revealed as they scroll into view.
pub const SECTION_SELECTOR: &str = ".step-section, .features-showcase, .cta-section";
/// Items inside a revealed section that slide in one after another.
pub const SECTION_ITEM_SELECTOR: &str = ".feature-item, .capability-item, .feature-card";
pub const PERSONALIZATION_SELECTOR: &str = ".personalization-section";
pub const PERSONALIZATION_FEATURE_SELECTOR: &str = ".personalization-features .feature-item";
pub const PERSONALIZATION_BENEFIT_SELECTOR: &str = ".benefit-item";
pub const HERO_LINE_SELECTOR: &str = ".hero-title .title-line";

/// Class added to revealed elements.
pub const ANIMATE_IN_CLASS: &str = "animate-in";
/// Class added to `body` once the window has loaded.
pub const LOADED_CLASS: &str = "loaded";

pub const SECTION_ITEM_STEP: Duration = Duration::from_millis(100);
pub const FEATURE_STEP: Duration = Duration::from_millis(150);
pub const BENEFIT_START: Duration = Duration::from_millis(800);
pub const BENEFIT_STEP: Duration = Duration::from_millis(200);
/// Delay between hiding an item and transitioning it back in.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);
/// Delay after `load` before the hero lines animate.
pub const HERO_DELAY: Duration = Duration::from_millis(100);

const TRANSITION_ALL: &str = "all 0.6s ease";

/// Linear delay offsets for `count` items.
#[must_use]
pub fn stagger_offsets(count: usize, step: Duration) -> Vec<Duration> {
    (0..count)
        .map(|i| step.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)))
        .collect()
}

/// `animation` for the section item at `index`.
#[must_use]
pub fn section_item_animation(index: usize) -> String {
    format!(
        "slideInUp 0.6s ease-out {}s both",
        css_number(index as f64 * 0.1)
    )
}

/// Whether the hero intro should play at mount instead of waiting for
/// `load`. `ready_state` is `document.readyState`, a plain string.
#[must_use]
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// `animation-delay` for the hero title line at `index`.
#[must_use]
pub fn hero_line_delay(index: usize) -> String {
    format!("{}s", css_number(index as f64 * 0.2))
}

/// Two-phase slide-in applied to personalization items.
///
/// `hidden` is applied when the item's turn comes; `shown` after
/// [`SETTLE_DELAY`] (features) or immediately in the benefit pass's own
/// stagger (benefits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIn {
    pub hidden: [(&'static str, &'static str); 3],
    pub shown: [(&'static str, &'static str); 2],
}

impl SlideIn {
    pub const FEATURE: Self = Self {
        hidden: [
            ("opacity", "0"),
            ("transform", "translateY(30px)"),
            ("transition", TRANSITION_ALL),
        ],
        shown: [("opacity", "1"), ("transform", "translateY(0)")],
    };

    pub const BENEFIT: Self = Self {
        hidden: [
            ("opacity", "0"),
            ("transform", "translateX(-30px)"),
            ("transition", TRANSITION_ALL),
        ],
        shown: [("opacity", "1"), ("transform", "translateX(0)")],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_waits_for_load_until_complete() {
        assert!(load_already_fired("complete"));
        assert!(!load_already_fired("interactive"));
        assert!(!load_already_fired("loading"));
    }

    #[test]
    fn offsets_are_linear_from_zero() {
        assert!(stagger_offsets(0, FEATURE_STEP).is_empty());
        assert_eq!(
            stagger_offsets(3, FEATURE_STEP),
            [
                Duration::ZERO,
                Duration::from_millis(150),
                Duration::from_millis(300)
            ]
        );
    }

    #[test]
    fn section_item_animation_delay() {
        assert_eq!(section_item_animation(0), "slideInUp 0.6s ease-out 0s both");
        assert_eq!(section_item_animation(2), "slideInUp 0.6s ease-out 0.2s both");
    }

    #[test]
    fn hero_delays() {
        assert_eq!(hero_line_delay(0), "0s");
        assert_eq!(hero_line_delay(1), "0.2s");
        assert_eq!(hero_line_delay(2), "0.4s");
    }
}
