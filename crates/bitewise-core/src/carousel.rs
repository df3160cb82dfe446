#![forbid(unsafe_code)]

//! Quote carousel: a single cyclic cursor over a fixed list.
//!
//! # Invariants
//!
//! 1. At most one index is active; an empty carousel has none.
//! 2. `tick` advances by exactly one modulo `len`, so `len` ticks return to
//!    the starting index.
//! 3. Each transition names the index losing the marker and the one gaining
//!    it; for `len == 1` they are the same element.

/// Marker class on the visible quote card.
pub const ACTIVE_CLASS: &str = "active";

/// Class changes produced by one carousel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTransition {
    pub deactivate: usize,
    pub activate: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Carousel over `len` items starting at index 0.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Carousel starting at `start`, reduced modulo `len`.
    #[must_use]
    pub const fn with_start(len: usize, start: usize) -> Self {
        let current = if len == 0 { 0 } else { start % len };
        Self { len, current }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index currently carrying the active marker.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.current)
        }
    }

    /// Advance to the next quote. No-op on an empty carousel.
    pub fn tick(&mut self) -> Option<QuoteTransition> {
        if self.len == 0 {
            return None;
        }
        let deactivate = self.current;
        self.current = (self.current + 1) % self.len;
        crate::trace!(from = deactivate, to = self.current, "quote carousel tick");
        Some(QuoteTransition {
            deactivate,
            activate: self.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_never_transitions() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.active(), None);
        assert_eq!(c.tick(), None);
        assert_eq!(c.active(), None);
    }

    #[test]
    fn single_item_reactivates_itself() {
        let mut c = Carousel::new(1);
        assert_eq!(
            c.tick(),
            Some(QuoteTransition {
                deactivate: 0,
                activate: 0
            })
        );
    }

    #[test]
    fn tick_wraps_at_end() {
        let mut c = Carousel::with_start(3, 2);
        let t = c.tick().unwrap();
        assert_eq!((t.deactivate, t.activate), (2, 0));
        assert_eq!(c.active(), Some(0));
    }

    #[test]
    fn start_is_reduced_modulo_len() {
        assert_eq!(Carousel::with_start(3, 7).active(), Some(1));
        assert_eq!(Carousel::with_start(0, 7).active(), None);
    }
}
