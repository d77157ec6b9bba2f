//! # Chooser
//!
//! Uniform random choice over a fixed set of values.
//!
//! A [`Chooser`] owns a typed snapshot of the values it was built from, so a
//! pick is a plain index into homogeneous storage with no casting at read
//! time. Construction from an empty sequence is the only failure.
//!
//! ```
//! use chooser::Chooser;
//!
//! let chooser = Chooser::new(vec!["A", "B", "C", "D"]).unwrap();
//! let picked = chooser.pick();
//! assert!(chooser.choices().contains(&picked));
//!
//! // Replayable picks
//! let run: Vec<&str> = chooser.seeded(42).take(5).copied().collect();
//! let again: Vec<&str> = chooser.seeded(42).take(5).copied().collect();
//! assert_eq!(run, again);
//! ```

pub mod chooser;
pub mod error;
pub mod sampler;

pub use chooser::Chooser;
pub use error::{ChooserError, ChooserResult};
pub use sampler::{seeded_rng, Sampler};
