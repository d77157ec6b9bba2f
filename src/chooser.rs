//! Uniform random choice over a fixed set of values
//!
//! A `Chooser` takes a snapshot of its input at construction time and then
//! answers `pick()` calls by drawing an index uniformly from the snapshot.
//! Picks are independent (sampling with replacement) and the snapshot is
//! never mutated, so a single chooser can be shared freely across threads.

use crate::error::{ChooserError, ChooserResult};
use log::{debug, trace};
use rand::Rng;
use std::convert::TryFrom;

/// An immutable, non-empty set of values to pick from.
///
/// The values are stored in the order they were supplied, so a given index
/// always refers to the same element. Duplicates are allowed and simply
/// weight the distribution towards the repeated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chooser<T> {
    choices: Box<[T]>,
}

impl<T> Chooser<T> {
    /// Create a chooser from any finite sequence of values.
    ///
    /// The values are moved into storage owned by the chooser. Fails with
    /// [`ChooserError::InvalidArgument`] when the sequence is empty.
    pub fn new<I>(choices: I) -> ChooserResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let choices: Box<[T]> = choices.into_iter().collect();
        if choices.is_empty() {
            return Err(ChooserError::empty_choices());
        }

        debug!("Created chooser over {} choices", choices.len());
        Ok(Chooser { choices })
    }

    /// Number of values in the snapshot. Always at least one.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always false; a chooser cannot be built empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The snapshot, in construction order.
    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    /// Consume the chooser and return its snapshot.
    pub fn into_inner(self) -> Vec<T> {
        self.choices.into_vec()
    }

    /// Draw an index uniformly from `[0, len)` using the given generator.
    pub fn pick_index_with<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let index = rng.gen_range(0..self.choices.len());
        trace!("Picked index {} of {}", index, self.choices.len());
        index
    }

    /// Pick a value using the given generator.
    ///
    /// Useful when the caller needs a reproducible sequence, e.g. with
    /// [`seeded_rng`](crate::seeded_rng).
    pub fn pick_with<R>(&self, rng: &mut R) -> &T
    where
        R: Rng + ?Sized,
    {
        &self.choices[self.pick_index_with(rng)]
    }

    /// Borrow a randomly picked value, drawn from the current thread's generator.
    pub fn pick_ref(&self) -> &T {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Exact probability that a single pick returns `value`.
    ///
    /// Returns 0.0 for values not in the snapshot.
    pub fn probability(&self, value: &T) -> f64
    where
        T: PartialEq,
    {
        let hits = self.choices.iter().filter(|choice| *choice == value).count();
        hits as f64 / self.choices.len() as f64
    }
}

impl<T: Clone> Chooser<T> {
    /// Create a chooser from a borrowed slice, copying every element.
    pub fn from_slice(choices: &[T]) -> ChooserResult<Self> {
        Chooser::new(choices.iter().cloned())
    }

    /// Pick a value and return a clone of it.
    ///
    /// The thread-local generator is seeded independently per thread, so
    /// concurrent callers need no locking and never share a stream.
    pub fn pick(&self) -> T {
        self.pick_ref().clone()
    }

    /// Pick `n` values with replacement.
    pub fn sample(&self, n: usize) -> Vec<T> {
        let mut rng = rand::thread_rng();
        (0..n).map(|_| self.pick_with(&mut rng).clone()).collect()
    }
}

impl<T> TryFrom<Vec<T>> for Chooser<T> {
    type Error = ChooserError;

    fn try_from(choices: Vec<T>) -> ChooserResult<Self> {
        Chooser::new(choices)
    }
}

impl<T: Clone> TryFrom<&[T]> for Chooser<T> {
    type Error = ChooserError;

    fn try_from(choices: &[T]) -> ChooserResult<Self> {
        Chooser::from_slice(choices)
    }
}
