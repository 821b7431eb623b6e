//! Error type shared by every GA component.

use thiserror::Error;

/// Errors raised by the GA engine.
///
/// All variants describe programmer-facing contract violations: a bad
/// configuration, or a population that was consumed beyond what the
/// breeding loop can draw from. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("tournament requires at least one participant")]
    EmptyPopulation,

    #[error("population exhausted: requested {requested} individuals, {available} available")]
    PopulationExhaustion { requested: usize, available: usize },

    #[error("row {row} in column {column} is outside 1..={size}")]
    InvalidIndividual {
        column: usize,
        row: usize,
        size: usize,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GaError>;
