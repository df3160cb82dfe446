#![forbid(unsafe_code)]

//! Scroll-driven transforms for the marketing page.

use super::{Rect, css_number};

pub const FLOATING_ICON_SELECTOR: &str = ".floating-icons i";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const BACKGROUND_SELECTOR: &str = ".hero-background, .step-section";
pub const PHONE_SELECTOR: &str = ".phone-mockup, .phone-frame";

const NAVBAR_MAX_OPACITY: f64 = 0.95;

/// Speed factor for the element at `index`: `0.5 + 0.1 * index`.
#[must_use]
pub fn layer_speed(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

/// Transform for the floating icon at `index`.
#[must_use]
pub fn icon_transform(scrolled: f64, index: usize) -> String {
    let y = -(scrolled * layer_speed(index));
    format!(
        "translateY({}px) rotate({}deg)",
        css_number(y),
        css_number(scrolled * 0.1)
    )
}

/// Navbar background darkening with scroll, capped at 0.95 alpha.
#[must_use]
pub fn navbar_background(scrolled: f64) -> String {
    let opacity = (scrolled / 100.0).min(NAVBAR_MAX_OPACITY);
    format!("rgba(0, 0, 0, {})", css_number(opacity))
}

/// Transform for the background layer at `index`.
#[must_use]
pub fn background_transform(scrolled: f64, index: usize) -> String {
    format!(
        "translateY({}px)",
        css_number(scrolled * layer_speed(index) * 0.5)
    )
}

/// Scale for a phone mockup, or `None` when it is outside the viewport.
#[must_use]
pub fn phone_scale(rect: Rect, viewport_height: f64) -> Option<f64> {
    let in_view = rect.top < viewport_height && rect.bottom() > 0.0;
    if !in_view || viewport_height <= 0.0 {
        return None;
    }
    let progress = 1.0 - rect.top.abs() / viewport_height;
    Some(0.8 + progress * 0.2)
}

#[must_use]
pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", css_number(scale))
}
