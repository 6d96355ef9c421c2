use thiserror::Error;

use widthscan_core::ParameterError;

use crate::grid::{self, SearchSpecError};

/// Errors that can occur during a sweep.
///
/// Every variant names the width whose solve failed; the sweep stops there.
#[derive(Debug, Error)]
pub enum Error {
    #[error("width {width}: invalid parameters")]
    Parameters {
        width: u32,
        source: ParameterError,
    },

    #[error("width {width}: invalid search interval")]
    Interval {
        width: u32,
        source: SearchSpecError,
    },

    #[error("width {width}: grid search failed")]
    Solve { width: u32, source: grid::Error },

    #[error("width {width}: answer {answer} is not below its bound {bound}")]
    NotTightening { width: u32, answer: f64, bound: f64 },

    #[error(
        "width {width}: minimum {answer} is on the last sample below {bound}, \
         the true minimizer may lie beyond the bound"
    )]
    BoundReached { width: u32, answer: f64, bound: f64 },
}

impl Error {
    /// Returns the width whose solve failed.
    #[must_use]
    pub fn width(&self) -> u32 {
        match self {
            Self::Parameters { width, .. }
            | Self::Interval { width, .. }
            | Self::Solve { width, .. }
            | Self::NotTightening { width, .. }
            | Self::BoundReached { width, .. } => *width,
        }
    }
}
