#![forbid(unsafe_code)]

//! Personalization demo: step cursor, rendered step view, option selection.
//!
//! The cursor moves two ways:
//! - the auto-advance timer wraps from the last step back to the first;
//! - the next/prev buttons clamp at the ends and do nothing there.
//!
//! Every move produces a [`StepView`] describing the whole rendered state, so
//! the host re-applies classes and styles from one value instead of patching
//! individual elements.

/// Class on the visible section and its step dot.
pub const ACTIVE_CLASS: &str = "active";
/// Class on the chosen goal option.
pub const SELECTED_CLASS: &str = "selected";

const DISABLED_OPACITY: &str = "0.5";
const ENABLED_OPACITY: &str = "1";

/// Cursor over `total` form sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    total: usize,
    current: usize,
}

impl StepCursor {
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self { total, current: 0 }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.total == 0 || self.current == self.total - 1
    }

    /// Timer-driven advance, wrapping to the first step.
    ///
    /// Returns the new index, or `None` when there are no steps.
    pub fn tick(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        self.current = (self.current + 1) % self.total;
        Some(self.current)
    }

    /// Button-driven advance. `None` at the last step.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_last() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Button-driven retreat. `None` at the first step.
    pub fn prev(&mut self) -> Option<usize> {
        if self.total == 0 || self.is_first() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Rendered state for the current index. `None` when there are no steps.
    #[must_use]
    pub fn view(&self) -> Option<StepView> {
        if self.total == 0 {
            return None;
        }
        Some(StepView {
            active: self.current,
            total: self.total,
            prev: NavButton {
                disabled: self.is_first(),
            },
            next: NavButton {
                disabled: self.is_last(),
            },
        })
    }
}

/// Enabled state of a next/prev button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub disabled: bool,
}

impl NavButton {
    #[must_use]
    pub const fn opacity(self) -> &'static str {
        if self.disabled {
            DISABLED_OPACITY
        } else {
            ENABLED_OPACITY
        }
    }
}

/// Everything the demo renders for one step index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepView {
    pub active: usize,
    pub total: usize,
    pub prev: NavButton,
    pub next: NavButton,
}

impl StepView {
    /// Whether the section or dot at `index` is the active one.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// Progress as `(active + 1) / total * 100`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.active + 1) as f64 / self.total as f64 * 100.0
    }

    /// CSS width of the progress fill.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent())
    }
}

/// How a click on one option in a group affects its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly the clicked option ends up selected (goal options).
    Exclusive,
    /// The clicked option flips; siblings are untouched (diet tags).
    Toggle,
}

impl SelectionMode {
    /// Marker class this mode writes.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Exclusive => SELECTED_CLASS,
            Self::Toggle => ACTIVE_CLASS,
        }
    }

    /// New per-option states after clicking `clicked`, given the current ones.
    ///
    /// An out-of-range click leaves the states unchanged.
    #[must_use]
    pub fn apply(self, current: &[bool], clicked: usize) -> Vec<bool> {
        if clicked >= current.len() {
            return current.to_vec();
        }
        match self {
            Self::Exclusive => (0..current.len()).map(|i| i == clicked).collect(),
            Self::Toggle => current
                .iter()
                .enumerate()
                .map(|(i, &on)| if i == clicked { !on } else { on })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_steps_renders_nothing() {
        let mut c = StepCursor::new(0);
        assert_eq!(c.tick(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert_eq!(c.view(), None);
    }

    #[test]
    fn timer_wraps_buttons_clamp() {
        let mut c = StepCursor::new(3);
        assert_eq!(c.prev(), None);
        assert_eq!(c.next(), Some(1));
        assert_eq!(c.next(), Some(2));
        assert_eq!(c.next(), None);
        assert_eq!(c.current(), 2);
        assert_eq!(c.tick(), Some(0));
        assert_eq!(c.prev(), None);
    }

    #[test]
    fn view_at_boundaries() {
        let mut c = StepCursor::new(4);
        let first = c.view().unwrap();
        assert!(first.prev.disabled);
        assert_eq!(first.prev.opacity(), "0.5");
        assert!(!first.next.disabled);
        assert_eq!(first.next.opacity(), "1");
        assert_eq!(first.progress_width(), "25%");

        c.next();
        c.next();
        c.next();
        let last = c.view().unwrap();
        assert!(!last.prev.disabled);
        assert!(last.next.disabled);
        assert_eq!(last.progress_width(), "100%");
        assert!(last.is_active(3));
        assert!(!last.is_active(0));
    }

    #[test]
    fn single_step_disables_both_buttons() {
        let view = StepCursor::new(1).view().unwrap();
        assert!(view.prev.disabled);
        assert!(view.next.disabled);
        assert_eq!(view.progress_percent(), 100.0);
    }

    #[test]
    fn exclusive_selection_clears_siblings() {
        let states = SelectionMode::Exclusive.apply(&[true, false, true], 1);
        assert_eq!(states, vec![false, true, false]);
    }

    #[test]
    fn toggle_selection_is_independent() {
        let once = SelectionMode::Toggle.apply(&[true, false, false], 2);
        assert_eq!(once, vec![true, false, true]);
        let twice = SelectionMode::Toggle.apply(&once, 2);
        assert_eq!(twice, vec![true, false, false]);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        assert_eq!(SelectionMode::Exclusive.apply(&[false, true], 5), vec![false, true]);
    }
}
