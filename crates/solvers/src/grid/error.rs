use std::error::Error as StdError;

/// Errors that can occur during a grid search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("batch evaluation returned {actual} values for {expected} samples")]
    BatchLength { expected: usize, actual: usize },
}
