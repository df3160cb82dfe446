#![forbid(unsafe_code)]

//! Decorative effects: ripples, parallax, particles, hover styles, reveals.
//!
//! Every function here is pure: it turns measurements (scroll offset, element
//! rects, click positions, a seed) into CSS values. The web host measures,
//! calls in, and writes the results to inline styles.

pub mod hover;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod ripple;

pub use hover::HoverEffect;
pub use particles::{Particle, ParticleRng};
pub use ripple::{RippleGeometry, RippleStyle};

/// Keyframes and helper classes the page injects once at start.
pub const PAGE_KEYFRAMES: &str = "
    @keyframes particleFloat {
        0%, 100% {
            opacity: 0;
            transform: translateY(0) scale(0);
        }
        50% {
            opacity: 1;
            transform: translateY(-20px) scale(1);
        }
    }

    @keyframes slideInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .animate-in {
        animation: fadeInUp 0.8s ease-out both;
    }

    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
";

/// Axis-aligned box in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Format a number for a CSS value.
///
/// Negative zero prints as `0`; everything else uses the shortest
/// round-trip representation.
#[must_use]
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_number_normalizes_negative_zero() {
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(0.0), "0");
        assert_eq!(css_number(-12.5), "-12.5");
        assert_eq!(css_number(3.0), "3");
    }

    #[test]
    fn rect_bottom() {
        assert_eq!(Rect::new(0.0, 10.0, 5.0, 20.0).bottom(), 30.0);
    }
}
