#![forbid(unsafe_code)]

//! In-page anchor scrolling and scroll-event coalescing.

/// Selector matching in-page anchors.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector to scroll to for an anchor's `href`.
///
/// Only fragment hrefs with a non-empty name qualify; a bare `#` has no
/// target.
#[must_use]
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.len() > 1 && h.starts_with('#'))
}

/// Collapses a burst of scroll events into one animation frame.
///
/// The first `request` after a frame ran returns `true` (schedule a frame);
/// further requests return `false` until [`ScrollCoalescer::frame_ran`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollCoalescer {
    pending: bool,
}

impl ScrollCoalescer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a scroll event. Returns `true` if a frame should be scheduled.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// The scheduled frame has run.
    pub fn frame_ran(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_hrefs_only() {
        assert_eq!(anchor_target(Some("#features")), Some("#features"));
        assert_eq!(anchor_target(Some("#")), None);
        assert_eq!(anchor_target(Some("/about#team")), None);
        assert_eq!(anchor_target(None), None);
    }

    #[test]
    fn burst_schedules_one_frame() {
        let mut c = ScrollCoalescer::new();
        assert!(c.request());
        assert!(!c.request());
        assert!(!c.request());
        assert!(c.is_pending());
        c.frame_ran();
        assert!(c.request());
    }
}
