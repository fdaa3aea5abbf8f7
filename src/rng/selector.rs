//! Uniform selection primitives over a random source.
//!
//! Every draw goes through [`Selector::uniform_index`], which uses
//! rejection sampling so that bounds that do not divide 2^64 stay
//! unbiased. A plain `next_u64() % bound` would skew small indices,
//! which is unacceptable for secret generation.

use rand_core::RngCore;
use thiserror::Error;

/// Errors that can occur during selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("cannot sample {requested} distinct items from a pool of {available}")]
    InsufficientPoolSize {
        /// Number of distinct items requested.
        requested: usize,
        /// Number of items actually available.
        available: usize,
    },
}

/// Uniform selection primitives backed by a random source.
///
/// Blanket-implemented for every [`RngCore`]; production code uses
/// [`SecureRng`](super::SecureRng), tests use a seeded `ChaCha20Rng`.
pub trait Selector {
    /// Draws a uniform index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero. Callers validate pool sizes before
    /// drawing, so a zero bound is a programming error, not input.
    fn uniform_index(&mut self, bound: usize) -> usize;

    /// Uniformly selects one element from a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty (see [`Selector::uniform_index`]).
    fn choose_one(&mut self, items: &[char]) -> char {
        items[self.uniform_index(items.len())]
    }

    /// Flips an unbiased coin.
    fn coin_flip(&mut self) -> bool {
        self.uniform_index(2) == 1
    }

    /// Draws `k` distinct elements uniformly from `items`.
    ///
    /// Equivalent to a partial Fisher–Yates over a scratch copy: each
    /// k-subset and each ordering of it is equally likely.
    fn sample_without_replacement(
        &mut self,
        items: &[char],
        k: usize,
    ) -> Result<Vec<char>, SelectorError> {
        if k > items.len() {
            return Err(SelectorError::InsufficientPoolSize {
                requested: k,
                available: items.len(),
            });
        }

        let mut scratch = items.to_vec();
        for i in 0..k {
            let j = i + self.uniform_index(scratch.len() - i);
            scratch.swap(i, j);
        }
        scratch.truncate(k);
        Ok(scratch)
    }

    /// Shuffles a sequence in place with an unbiased Fisher–Yates pass.
    ///
    /// For each `i` from the last index down to 1, swaps `items[i]`
    /// with `items[j]` for `j` uniform in `[0, i]`.
    fn shuffle(&mut self, items: &mut [char]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RngCore> Selector for R {
    fn uniform_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "uniform_index bound must be positive");
        let bound = bound as u64;

        if bound.is_power_of_two() {
            return (self.next_u64() & (bound - 1)) as usize;
        }

        // 2^64 mod bound; nonzero here since bound is not a power of two.
        let rem = u64::MAX % bound + 1;
        // Largest multiple of bound representable in the draw range.
        let limit = rem.wrapping_neg();
        loop {
            let x = self.next_u64();
            if x < limit {
                return (x % bound) as usize;
            }
        }
    }
}
