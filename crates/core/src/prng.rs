//! Seedable Xorshift64 generator used to draw the initial population.
//!
//! Runs are reproducible: the same seed, grid side and density always yield
//! the same generation 0 on every platform.

use serde::{Deserialize, Serialize};

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is a fixed point of the algorithm, so it is replaced by a
/// non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator from `seed` (0 maps to the fallback seed).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Bernoulli draw: true when the next sample is `<= probability`.
    ///
    /// This is the cell-seeding test, so a probability of 1.0 always hits.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() <= probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every recorded seed produces a different board.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        for _ in 0..3 {
            assert_ne!(rng.next_u64(), 0);
        }
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut a = Xorshift64::new(7);
        let mut b = Xorshift64::new(7);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "diverged at index {i}");
        }
    }

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "next_f64() = {v} at iteration {i}");
        }
    }

    #[test]
    fn chance_one_always_hits() {
        let mut rng = Xorshift64::new(99);
        assert!((0..10_000).all(|_| rng.chance(1.0)));
    }

    #[test]
    fn chance_negative_never_hits() {
        let mut rng = Xorshift64::new(99);
        assert!((0..10_000).all(|_| !rng.chance(-0.5)));
    }

    #[test]
    fn chance_tenth_hits_about_ten_percent() {
        let mut rng = Xorshift64::new(2024);
        let hits = (0..100_000).filter(|_| rng.chance(0.1)).count();
        assert!(
            (9_000..11_000).contains(&hits),
            "expected ~10_000 hits, got {hits}"
        );
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64(), "diverged at {i}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v), "next_f64() = {v} for seed {seed}");
                }
            }

            #[test]
            fn next_u64_never_zero(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    prop_assert_ne!(rng.next_u64(), 0);
                }
            }
        }
    }
}
