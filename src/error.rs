//! Error types for chooser construction.

use thiserror::Error;

/// Errors raised while building a [`Chooser`](crate::Chooser).
///
/// Picking never fails, so construction is the only place these appear.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChooserError {
    /// The supplied choices violate a construction requirement
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChooserError {
    pub(crate) fn empty_choices() -> Self {
        ChooserError::InvalidArgument("Cannot choose from empty sequence".to_string())
    }
}

/// Result type for chooser operations
pub type ChooserResult<T> = Result<T, ChooserError>;
