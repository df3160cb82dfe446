#![forbid(unsafe_code)]

//! Pointer enter/leave inline-style presets.

/// Inline style pairs applied on pointer enter and leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEffect {
    pub selector: &'static str,
    pub enter: &'static [(&'static str, &'static str)],
    pub leave: &'static [(&'static str, &'static str)],
}

impl HoverEffect {
    /// Dashboard cards lift slightly.
    pub const DASHBOARD_CARD: Self = Self {
        selector: ".stat-card, .feature-card, .dashboard-card, .score-card",
        enter: &[
            ("transform", "translateY(-5px)"),
            ("transition", "transform 0.3s ease"),
        ],
        leave: &[("transform", "translateY(0)")],
    };

    /// Marketing feature cards lift further and glow.
    pub const FEATURE_CARD: Self = Self {
        selector: ".feature-card",
        enter: &[
            ("transform", "translateY(-15px) scale(1.02)"),
            ("box-shadow", "0 25px 50px rgba(34, 197, 94, 0.3)"),
        ],
        leave: &[
            ("transform", "translateY(-10px)"),
            ("box-shadow", "0 20px 40px rgba(34, 197, 94, 0.2)"),
        ],
    };

    /// Personalization benefits pause their float and shift.
    pub const BENEFIT_ITEM: Self = Self {
        selector: ".benefit-item",
        enter: &[
            ("animation-play-state", "paused"),
            ("transform", "translateX(10px) translateY(-5px)"),
        ],
        leave: &[("animation-play-state", "running"), ("transform", "")],
    };

    /// Personalization form fields grow and highlight their border.
    pub const FIELD_GROUP: Self = Self {
        selector: ".field-group",
        enter: &[
            ("transform", "scale(1.02)"),
            ("border-color", "rgba(34, 197, 94, 0.3)"),
        ],
        leave: &[
            ("transform", "scale(1)"),
            ("border-color", "rgba(34, 197, 94, 0.1)"),
        ],
    };

    /// Styles for the given pointer state.
    #[must_use]
    pub const fn styles(&self, hovered: bool) -> &'static [(&'static str, &'static str)] {
        if hovered { self.enter } else { self.leave }
    }
}
