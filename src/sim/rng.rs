//! Serve direction randomness
//!
//! The simulation only ever needs a coin flip per velocity axis, so the source
//! is reduced to a stream of signs. Seeded PCG in play, fixed sequences in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A stream of `+1.0` / `-1.0` values
pub trait SignSource {
    fn next_sign(&mut self) -> f32;
}

/// Seeded, reproducible signs
#[derive(Debug, Clone)]
pub struct PcgSigns {
    rng: Pcg32,
}

impl PcgSigns {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SignSource for PcgSigns {
    fn next_sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}

/// Replays a fixed pattern, cycling when exhausted (`true` = positive)
#[derive(Debug, Clone)]
pub struct FixedSigns {
    pattern: Vec<bool>,
    next: usize,
}

impl FixedSigns {
    pub fn new(pattern: &[bool]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            next: 0,
        }
    }
}

impl SignSource for FixedSigns {
    fn next_sign(&mut self) -> f32 {
        let Some(&positive) = self.pattern.get(self.next) else {
            return 1.0;
        };
        self.next = (self.next + 1) % self.pattern.len();
        if positive { 1.0 } else { -1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_signs_cycle() {
        let mut signs = FixedSigns::new(&[true, false, false]);
        let drawn: Vec<f32> = (0..5).map(|_| signs.next_sign()).collect();
        assert_eq!(drawn, vec![1.0, -1.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_empty_pattern_is_positive() {
        let mut signs = FixedSigns::new(&[]);
        assert_eq!(signs.next_sign(), 1.0);
        assert_eq!(signs.next_sign(), 1.0);
    }

    #[test]
    fn test_pcg_signs_deterministic_and_mixed() {
        let mut a = PcgSigns::new(42);
        let mut b = PcgSigns::new(42);
        let seq_a: Vec<f32> = (0..64).map(|_| a.next_sign()).collect();
        let seq_b: Vec<f32> = (0..64).map(|_| b.next_sign()).collect();

        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|s| s.abs() == 1.0));
        assert!(seq_a.contains(&1.0) && seq_a.contains(&-1.0));
    }
}
