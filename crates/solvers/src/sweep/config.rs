use widthscan_core::Real;

use crate::grid::{Solution, Strategy};

use super::Error;

/// How a sweep treats the assumption that answers decrease with width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tightening {
    /// Fail if an answer does not tighten its bound.
    #[default]
    Checked,

    /// Trust the assumption and never check it.
    Assumed,
}

impl Tightening {
    /// Returns a short lowercase name for reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Assumed => "assumed",
        }
    }

    /// Validates one solved width against the bound it was searched under.
    ///
    /// `narrowed` is true when the bound came from a previous answer rather
    /// than from the caller.
    pub(super) fn check<T: Real>(
        self,
        width: u32,
        narrowed: bool,
        solution: &Solution<T>,
        bound: &T,
    ) -> Result<(), Error> {
        if self == Self::Assumed {
            return Ok(());
        }

        if solution.x >= *bound {
            return Err(Error::NotTightening {
                width,
                answer: solution.x.as_f64(),
                bound: bound.as_f64(),
            });
        }

        if narrowed && solution.is_at_upper_edge() {
            return Err(Error::BoundReached {
                width,
                answer: solution.x.as_f64(),
                bound: bound.as_f64(),
            });
        }

        Ok(())
    }
}

/// Configuration for a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Grid search strategy used for every width.
    pub strategy: Strategy,

    /// Whether answers are checked to tighten their bounds.
    pub tightening: Tightening,
}

impl Config {
    #[must_use]
    pub fn new(strategy: Strategy, tightening: Tightening) -> Self {
        Self {
            strategy,
            tightening,
        }
    }
}
