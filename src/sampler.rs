//! Reproducible pick streams
//!
//! `Chooser::pick` draws from the thread-local generator, which is what most
//! callers want. When a run has to be replayed, drive the picks from a
//! seeded ChaCha8 generator instead: the same seed yields the same sequence
//! on every platform.

use crate::chooser::Chooser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for replayable picks.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Endless iterator of independent picks from a chooser.
///
/// Never returns `None`; bound it with `take`.
#[derive(Debug)]
pub struct Sampler<'a, T, R> {
    chooser: &'a Chooser<T>,
    rng: R,
}

impl<'a, T, R: Rng> Sampler<'a, T, R> {
    /// Hand back the generator, e.g. to continue the stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<'a, T, R: Rng> Iterator for Sampler<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        Some(self.chooser.pick_with(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> Chooser<T> {
    /// Stream picks driven by `rng`.
    pub fn sampler<R: Rng>(&self, rng: R) -> Sampler<'_, T, R> {
        Sampler { chooser: self, rng }
    }

    /// Stream picks from a generator seeded with `seed`.
    pub fn seeded(&self, seed: u64) -> Sampler<'_, T, ChaCha8Rng> {
        self.sampler(seeded_rng(seed))
    }
}
