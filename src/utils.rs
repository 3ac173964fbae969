//! Utility functions for random number generation and helpers.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast RNG suitable for no_std environments.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// Every stochastic operation in this crate draws from a generator the
/// caller controls; this is the canonical way to make one.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Creates a fast RNG with entropy from the thread-local RNG.
#[cfg(feature = "std")]
#[inline]
pub fn rng_from_entropy() -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}

/// # Overview
///
/// Shuffles a slice in-place using the Fisher-Yates algorithm.
#[inline]
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}
