use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the bounded uniform noise mixed into the simulation.
pub trait JitterSource {
    /// Draw a value in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Jitter backed by a `rand` generator.
pub struct RngJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Always returns the midpoint of the range, which is zero for the
/// symmetric ranges the simulation uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_jitter_stays_in_bounds() {
        let mut jitter = RngJitter::seeded(7);
        for _ in 0..10_000 {
            let v = jitter.uniform(-0.1, 0.1);
            assert!((-0.1..=0.1).contains(&v));
        }
    }

    #[test]
    fn seeded_jitter_is_reproducible() {
        let mut a = RngJitter::seeded(42);
        let mut b = RngJitter::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.uniform(-1.0, 1.0), b.uniform(-1.0, 1.0));
        }
    }

    #[test]
    fn zero_jitter_is_centered() {
        let mut jitter = ZeroJitter;
        assert_eq!(jitter.uniform(-1.0, 1.0), 0.0);
        assert_eq!(jitter.uniform(-0.1, 0.1), 0.0);
    }

    #[test]
    fn degenerate_range_returns_low() {
        let mut jitter = RngJitter::seeded(1);
        assert_eq!(jitter.uniform(0.5, 0.5), 0.5);
    }
}
