// Random sources for round delays and targets.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of discrete uniform draws over an inclusive integer range.
pub trait DrawSource {
    /// Returns a value in `low..=high`. Callers guarantee `low <= high`.
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32;
}

/// Production draws backed by any `rand` generator.
pub struct RandomDraws<R> {
    rng: R,
}

impl<R: Rng> RandomDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDraws<StdRng> {
    /// Seeded from the platform entropy source (`crypto.getRandomValues` in the browser).
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RandomDraws<R> {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draws_stay_in_closed_range() {
        let mut draws = RandomDraws::seeded(7);
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..5_000 {
            let v = draws.draw_inclusive(1, 4);
            assert!((1..=4).contains(&v));
            saw_low |= v == 1;
            saw_high |= v == 4;
        }
        assert!(saw_low && saw_high, "both bounds should be reachable");
    }

    #[test]
    fn degenerate_range_returns_the_single_value() {
        let mut draws = RandomDraws::seeded(1);
        assert_eq!(draws.draw_inclusive(9, 9), 9);
    }
}
