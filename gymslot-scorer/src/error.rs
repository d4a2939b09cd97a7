//! Error types raised while constructing the recommendation engine.
#![forbid(unsafe_code)]

use gymslot_core::TablesError;
use thiserror::Error;

/// Errors raised when building or reconfiguring a
/// [`RecommendationEngine`](crate::RecommendationEngine).
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// The supplied tables broke an invariant.
    #[error("gym tables are invalid: {0}")]
    InvalidTables(#[from] TablesError),
    /// Provided weights were unusable.
    #[error(
        "weights must be finite and non-negative, with a positive base score and a peak \
         threshold between 0.0 and 1.0"
    )]
    InvalidWeights,
}
