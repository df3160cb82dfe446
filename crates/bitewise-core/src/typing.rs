#![forbid(unsafe_code)]

//! Typing simulation for the personalization demo's input fields.
//!
//! A field's original text is captured, the field is cleared, and one more
//! character is revealed per tick. The tick after the last character reports
//! completion so the host can cancel its interval.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSimulation {
    chars: Vec<char>,
    typed: usize,
}

impl TypingSimulation {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    /// Text visible so far.
    #[must_use]
    pub fn visible(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Reveal one more character and return the new visible text.
    ///
    /// Returns `None` once everything has been typed.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        self.typed += 1;
        Some(self.visible())
    }
}

/// When the field at `index` starts typing.
#[must_use]
pub fn start_delay(index: usize, stagger: Duration) -> Duration {
    stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_tick() {
        let mut sim = TypingSimulation::new("Vegan");
        assert_eq!(sim.visible(), "");
        let frames: Vec<String> = std::iter::from_fn(|| sim.tick()).collect();
        assert_eq!(frames, ["V", "Ve", "Veg", "Vega", "Vegan"]);
        assert!(sim.is_complete());
        assert_eq!(sim.tick(), None);
    }

    #[test]
    fn multibyte_text_types_by_char() {
        let mut sim = TypingSimulation::new("¡hé");
        assert_eq!(sim.tick().as_deref(), Some("¡"));
        assert_eq!(sim.tick().as_deref(), Some("¡h"));
        assert_eq!(sim.tick().as_deref(), Some("¡hé"));
    }

    #[test]
    fn empty_text_completes_immediately() {
        let mut sim = TypingSimulation::new("");
        assert!(sim.is_complete());
        assert_eq!(sim.tick(), None);
    }

    #[test]
    fn start_delay_is_linear() {
        let stagger = Duration::from_millis(1000);
        assert_eq!(start_delay(0, stagger), Duration::ZERO);
        assert_eq!(start_delay(3, stagger), Duration::from_secs(3));
    }
}
