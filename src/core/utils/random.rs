//! Uniform random integer sources consumed by the dimension selectors.

use rand::{Rng, RngCore};

/// A uniform random integer generator.
///
/// Any [`RngCore`] is a `RandomSource`, so callers can pass `StdRng`,
/// `thread_rng()` or the lightweight [`Random`] below, and the selectors can
/// hand the same source to `rand::seq` routines. Selectors take it as
/// `&mut dyn RandomSource`.
pub trait RandomSource: RngCore {
    /// Draw an integer uniformly from `[0, upper_bound)`.
    ///
    /// `upper_bound` must be non-zero.
    #[inline]
    fn draw(&mut self, upper_bound: usize) -> usize {
        self.gen_range(0..upper_bound)
    }
}

impl<R: RngCore> RandomSource for R {}

/// A small linear congruential generator.
///
/// Cheap to construct, so a parallel tree builder can hand one to every
/// worker. Statistical quality is adequate for picking split candidates
/// and nothing more.
#[derive(Debug, Clone)]
pub struct Random {
    x: u64,
}

impl Random {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Constructor, seeded from the thread-local entropy source
    pub fn new() -> Self {
        Random {
            x: rand::thread_rng().gen(),
        }
    }

    /// Constructor, with specific seed
    pub fn with_seed(seed: u64) -> Self {
        let mut random = Random { x: seed };
        // Mix the seed once so small seeds do not start in a low state.
        random.step();
        random
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.x = self
            .x
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // Low bits of an LCG are weak; fold the high half down.
        self.x ^ (self.x >> 33)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step() >> 32;
        let lo = self.step() >> 32;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_with_seed() {
        let mut rng1 = Random::with_seed(123456789);
        let mut rng2 = Random::with_seed(123456789);

        // Same seed should produce same results
        assert_eq!(rng1.draw(100), rng2.draw(100));
        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_draw_bounds() {
        let mut rng = Random::with_seed(42);
        for _ in 0..1000 {
            let val = rng.draw(17);
            assert!(val < 17);
        }
    }

    #[test]
    fn test_draw_single_value() {
        let mut rng = Random::with_seed(7);
        for _ in 0..10 {
            assert_eq!(rng.draw(1), 0);
        }
    }

    #[test]
    fn test_draw_covers_range() {
        let mut rng = Random::with_seed(99);
        let seen: HashSet<usize> = (0..2000).map(|_| rng.draw(10)).collect();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = Random::with_seed(5);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_std_rng_is_a_source() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(1);
        let source: &mut dyn RandomSource = &mut rng;
        assert!(source.draw(5) < 5);
    }
}
