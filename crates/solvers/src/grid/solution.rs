use widthscan_core::Real;

use super::{SearchSpec, round_to};

/// Indicates whether the scan visited every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every sample was evaluated.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A sample with its objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T> {
    /// Position of the sample in the scan.
    pub index: usize,

    /// The sample value.
    pub x: T,

    /// The objective value at `x`.
    pub objective: T,
}

impl<T> Point<T> {
    #[must_use]
    pub fn new(index: usize, x: T, objective: T) -> Self {
        Self {
            index,
            x,
            objective,
        }
    }
}

/// The result of a grid search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// The minimizing sample rounded to `precision` decimal places.
    pub x: T,

    /// The unrounded minimizing sample.
    pub best: Point<T>,

    /// Number of samples in the scanned interval.
    pub samples: usize,

    /// Decimal places used to round `x`.
    pub precision: i32,
}

impl<T: Real> Solution<T> {
    pub(super) fn new(status: Status, best: Point<T>, spec: &SearchSpec<T>) -> Self {
        let precision = spec.precision();
        Self {
            status,
            x: round_to(best.x.clone(), precision),
            best,
            samples: spec.len(),
            precision,
        }
    }

    /// Returns true if the minimum sits on the last sample below `right`.
    ///
    /// The true minimizer may then lie at or beyond the interval's bound.
    #[must_use]
    pub fn is_at_upper_edge(&self) -> bool {
        self.best.index + 1 == self.samples
    }
}
