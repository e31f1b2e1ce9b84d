//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical duel
//! - **Context streams**: Independent sequences per purpose, so the human's
//!   deck, the automated deck and the decision procedure never consume each
//!   other's randomness
//!
//! ## Usage
//!
//! ```
//! use duel_ccg::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut shuffles = rng.for_context("deck/human");
//! let mut choices = rng.for_context("decision");
//!
//! let _slot = choices.gen_index(7);
//! let _other = shuffles.gen_index(60);
//! ```

use im::Vector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG with context streams.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Uniform index in `0..len`.
    ///
    /// `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Unbiased in-place Fisher–Yates shuffle.
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly chosen slot in `0..=i`. Every permutation is equally likely.
    pub fn fisher_yates<T: Clone>(&mut self, items: &mut Vector<T>) {
        for i in (1..items.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut human = rng.for_context("deck/human");
        let mut automated = rng.for_context("deck/automated");
        let mut human_again = GameRng::new(42).for_context("deck/human");

        let a: Vec<_> = (0..10).map(|_| human.gen_index(1000)).collect();
        let b: Vec<_> = (0..10).map(|_| automated.gen_index(1000)).collect();
        let c: Vec<_> = (0..10).map(|_| human_again.gen_index(1000)).collect();

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_fisher_yates_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vector<u32> = (1..=10).collect();
        let original = data.clone();

        rng.fisher_yates(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        let mut sorted: Vec<_> = data.iter().copied().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_fisher_yates_trivial_inputs() {
        let mut rng = GameRng::new(7);

        let mut empty: Vector<u8> = Vector::new();
        rng.fisher_yates(&mut empty);
        assert!(empty.is_empty());

        let mut single: Vector<u8> = Vector::unit(9);
        rng.fisher_yates(&mut single);
        assert_eq!(single, Vector::unit(9));
    }
}
