//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal PCG32 generator from <https://www.pcg-random.org/>, implemented to satisfy [RngCore] and [SeedableRng].
//!
//! PCG32 is used as the source of (pseudo)random numbers throughout the library, both by the [oracle](crate::oracle) and by randomised [heuristics](crate::heuristic), so that a refinement is reproducible from a seed.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    const MULTIPLIER: u64 = 6364136223846793005;

    /// Some odd increment.
    const INCREMENT: u64 = 1442695040888963407;
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self {
            state: 0,
            inc: Self::INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeds_are_reproducible() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::seed_from_u64(73);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut a = MinimalPCG32::seed_from_u64(2);
        let mut b = MinimalPCG32::seed_from_u64(3);
        let a = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a, b);
    }

    #[test]
    fn both_halves_of_u64_vary() {
        let mut rng = MinimalPCG32::seed_from_u64(0);
        let trues = (0..1000).filter(|_| rng.gen_bool(0.5)).count();
        assert!(100 < trues && trues < 900);
    }
}
