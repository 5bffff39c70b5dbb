//! Random index selection for the wheel.
//!
//! Entropy comes from the platform's secure generator (OS or the browser's
//! `crypto.getRandomValues`). When that is unavailable the source switches to
//! a seeded `SmallRng` for the rest of its life.

use log::warn;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

const U32_RANGE: f64 = 4_294_967_296.0;

/// Seed used by `SecureRandom::default` for its fallback generator.
pub const DEFAULT_FALLBACK_SEED: u64 = 0x5EED_0F_D1CE;

pub trait RandomSource {
    /// Uniform 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}

/// Secure source with a non-cryptographic fallback.
#[derive(Debug)]
pub struct SecureRandom {
    fallback: SmallRng,
    degraded: bool,
}

impl SecureRandom {
    pub fn new(fallback_seed: u64) -> Self {
        Self {
            fallback: SmallRng::seed_from_u64(fallback_seed),
            degraded: false,
        }
    }

    /// True once the secure generator has failed and the fallback is in use.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_SEED)
    }
}

impl RandomSource for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        if !self.degraded {
            let mut buf = [0u8; 4];
            match getrandom::getrandom(&mut buf) {
                Ok(()) => return u32::from_le_bytes(buf),
                Err(err) => {
                    warn!("Secure random source unavailable ({}), using fallback generator", err);
                    self.degraded = true;
                }
            }
        }
        self.fallback.next_u32()
    }
}

/// Deterministic source for replays and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

/// Uniform index in `[0, n)`, or `None` for an empty wheel.
pub fn pick_index<R: RandomSource + ?Sized>(source: &mut R, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let index = (source.next_unit() * n as f64).floor() as usize;
    Some(index.min(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(u32);

    impl RandomSource for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_unit_range() {
        assert_eq!(Constant(0).next_unit(), 0.0);
        let top = Constant(u32::MAX).next_unit();
        assert!(top < 1.0 && top > 0.999_999);
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(pick_index(&mut Constant(0), 0), None);
        assert_eq!(pick_index(&mut Constant(0), 7), Some(0));
        assert_eq!(pick_index(&mut Constant(u32::MAX), 7), Some(6));
        assert_eq!(pick_index(&mut Constant(u32::MAX / 2), 2), Some(0));
        assert_eq!(pick_index(&mut Constant(u32::MAX / 2 + 1), 2), Some(1));
    }

    #[test]
    fn test_seeded_deterministic() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_eq!(pick_index(&mut a, 1000), pick_index(&mut b, 1000));
        }
    }

    #[test]
    fn test_pick_index_roughly_uniform() {
        let mut rng = SeededRandom::new(7);
        let n = 6;
        let samples = 60_000;
        let mut counts = vec![0u32; n];
        for _ in 0..samples {
            counts[pick_index(&mut rng, n).unwrap()] += 1;
        }
        let expected = (samples / n) as f64;
        for count in counts {
            assert!((count as f64 - expected).abs() < expected * 0.05, "count {} vs {}", count, expected);
        }
    }

    #[test]
    fn test_secure_source_produces_values() {
        let mut rng = SecureRandom::default();
        let picks: Vec<usize> = (0..64).filter_map(|_| pick_index(&mut rng, 1_000_000)).collect();
        assert_eq!(picks.len(), 64);
        assert!(picks.iter().any(|&p| p != picks[0]));
    }
}
