#![forbid(unsafe_code)]

//! Click ripple: a circle expanding from the click point inside its host.
//!
//! One geometry, parameterized by colour. The page uses two presets:
//! [`RippleStyle::CTA`] on call-to-action buttons and
//! [`RippleStyle::INTERACTIVE`] on the personalization demo's options.

use super::{Rect, css_number};

/// Selector for call-to-action buttons.
pub const CTA_SELECTOR: &str = ".cta-button, .btn";
/// Selector for the demo's interactive options.
pub const INTERACTIVE_SELECTOR: &str = ".goal-option, .diet-tag, .nav-btn";

/// Inline styles applied to the ripple's host so the circle is clipped.
pub const HOST_STYLES: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RippleStyle {
    pub color: &'static str,
}

impl RippleStyle {
    pub const CTA: Self = Self {
        color: "rgba(255, 255, 255, 0.3)",
    };
    pub const INTERACTIVE: Self = Self {
        color: "rgba(34, 197, 94, 0.3)",
    };
}

/// Size and offset of a ripple relative to its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Centre a circle of the host's larger dimension on the click point.
    #[must_use]
    pub fn compute(host: Rect, client_x: f64, client_y: f64) -> Self {
        let size = host.width.max(host.height);
        Self {
            size,
            left: client_x - host.left - size / 2.0,
            top: client_y - host.top - size / 2.0,
        }
    }

    /// Inline `cssText` for the ripple span.
    #[must_use]
    pub fn css_text(&self, style: RippleStyle) -> String {
        let size = css_number(self.size);
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {}px; top: {}px; \
             background: {}; border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            css_number(self.left),
            css_number(self.top),
            style.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_centres_on_click() {
        let host = Rect::new(100.0, 50.0, 200.0, 40.0);
        let g = RippleGeometry::compute(host, 150.0, 70.0);
        assert_eq!(g.size, 200.0);
        assert_eq!(g.left, -50.0);
        assert_eq!(g.top, -80.0);
    }

    #[test]
    fn tall_host_uses_height() {
        let g = RippleGeometry::compute(Rect::new(0.0, 0.0, 30.0, 90.0), 15.0, 45.0);
        assert_eq!(g.size, 90.0);
        assert_eq!((g.left, g.top), (-30.0, 0.0));
    }

    #[test]
    fn presets_differ_only_in_colour() {
        let g = RippleGeometry::compute(Rect::new(0.0, 0.0, 10.0, 10.0), 5.0, 5.0);
        let cta = g.css_text(RippleStyle::CTA);
        let interactive = g.css_text(RippleStyle::INTERACTIVE);
        assert!(cta.contains("background: rgba(255, 255, 255, 0.3);"));
        assert!(interactive.contains("background: rgba(34, 197, 94, 0.3);"));
        assert!(cta.contains("width: 10px; height: 10px; left: 0px; top: 0px;"));
        assert_eq!(
            cta.replace(RippleStyle::CTA.color, ""),
            interactive.replace(RippleStyle::INTERACTIVE.color, "")
        );
    }
}
