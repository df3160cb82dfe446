#![forbid(unsafe_code)]

//! Floating particles for the scan section.
//!
//! Particles are generated from a seeded PRNG so a given seed always yields
//! the same layout; the web host seeds from `Math.random`.

use super::css_number;

/// Container the particles are appended to.
pub const CONTAINER_SELECTOR: &str = ".scan-particles";
pub const DEFAULT_COUNT: usize = 20;
/// Largest count the page config accepts.
pub const MAX_COUNT: usize = 1000;

const PARTICLE_COLOR: &str = "#22c55e";
const MIN_DURATION_S: f64 = 2.0;
const DURATION_SPREAD_S: f64 = 3.0;
const MAX_DELAY_S: f64 = 2.0;

/// Simple LCG PRNG (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct ParticleRng {
    state: u64,
}

impl ParticleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// One particle's animation timing and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// `particleFloat` duration, in `[2, 5)` seconds.
    pub duration_s: f64,
    /// Animation delay, in `[0, 2)` seconds.
    pub delay_s: f64,
    /// Horizontal position, percent of the container.
    pub left_pct: f64,
    /// Vertical position, percent of the container.
    pub top_pct: f64,
}

impl Particle {
    fn sample(rng: &mut ParticleRng) -> Self {
        Self {
            duration_s: MIN_DURATION_S + rng.next_f64() * DURATION_SPREAD_S,
            delay_s: rng.next_f64() * MAX_DELAY_S,
            left_pct: rng.next_f64() * 100.0,
            top_pct: rng.next_f64() * 100.0,
        }
    }

    /// Inline `cssText` for the particle `div`.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: 4px; height: 4px; background: {PARTICLE_COLOR}; \
             border-radius: 50%; opacity: 0; \
             animation: particleFloat {}s ease-in-out infinite; animation-delay: {}s; \
             left: {}%; top: {}%;",
            css_number(self.duration_s),
            css_number(self.delay_s),
            css_number(self.left_pct),
            css_number(self.top_pct),
        )
    }
}

/// Generate `count` particles from `seed`, at most [`MAX_COUNT`].
#[must_use]
pub fn generate(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = ParticleRng::new(seed);
    (0..count.min(MAX_COUNT))
        .map(|_| Particle::sample(&mut rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_capped() {
        assert_eq!(generate(usize::MAX, 7).len(), MAX_COUNT);
        assert_eq!(generate(DEFAULT_COUNT, 7).len(), DEFAULT_COUNT);
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(20, 42), generate(20, 42));
        assert_ne!(generate(20, 42), generate(20, 43));
    }

    #[test]
    fn values_stay_in_range() {
        for p in generate(500, 7) {
            assert!((2.0..5.0).contains(&p.duration_s), "{p:?}");
            assert!((0.0..2.0).contains(&p.delay_s), "{p:?}");
            assert!((0.0..100.0).contains(&p.left_pct), "{p:?}");
            assert!((0.0..100.0).contains(&p.top_pct), "{p:?}");
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(0, 1).is_empty());
    }

    #[test]
    fn css_text_carries_animation() {
        let p = Particle {
            duration_s: 3.5,
            delay_s: 0.25,
            left_pct: 10.0,
            top_pct: 90.0,
        };
        let css = p.css_text();
        assert!(css.contains("animation: particleFloat 3.5s ease-in-out infinite;"));
        assert!(css.contains("animation-delay: 0.25s;"));
        assert!(css.contains("left: 10%; top: 90%;"));
    }
}
