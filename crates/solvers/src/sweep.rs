//! Multi-width sweep driver.
//!
//! # Algorithm
//!
//! A sweep solves the [`WidthGap`] objective for every width of a
//! [`WidthSequence`], in order. The base width `bits` fixes `s = 2^bits` for
//! the whole run; each width `w` sets `b = 2^w`. The first width is searched
//! over the caller's [`SearchSpec`]. Every later width keeps `left` and `step`
//! but uses the previous answer as its right bound, since the minimizer is
//! expected to move down as `b` grows. This makes later scans cheaper.
//!
//! # Tightening Checks
//!
//! The downward-moving minimizer is an assumption, not a guarantee. With
//! [`Tightening::Checked`] (the default) the sweep fails with
//! [`Error::NotTightening`] if an answer is not strictly below the bound it was
//! searched under, and with [`Error::BoundReached`] if a narrowed search finds
//! its minimum on the last sample below the bound. [`Tightening::Assumed`]
//! skips both checks.
//!
//! Either way, an answer at or below `left` makes the next interval empty and
//! the sweep fails with [`Error::Interval`] for the next width.
//!
//! # Observer Events
//!
//! The sweep emits one [`Event`] per solved width, after its checks pass.
//! Observers can return [`Action::StopEarly`] to end the sweep after that
//! width.
//!
//! [`WidthGap`]: widthscan_core::WidthGap

mod config;
mod error;
mod event;
mod report;
mod widths;

#[cfg(test)]
mod tests;

pub use config::{Config, Tightening};
pub use error::Error;
pub use event::{Action, Event};
pub use report::{Report, Status, WidthAnswer};
pub use widths::{WidthError, WidthSequence};

use std::time::Instant;

use widthscan_core::{Observer, Parameters, Real, WidthGap};

use crate::grid::{self, SearchSpec};

/// Solves every width of `widths` in order, tightening the right bound.
///
/// `bits` sets `s = 2^bits`; `spec` is the interval of the first width.
/// The observer receives an [`Event`] after each width.
/// See the [module docs](self) for the tightening rules.
///
/// # Errors
///
/// Returns an error for the first width whose parameters overflow, whose
/// interval is empty, whose grid search fails, or whose answer fails a
/// tightening check.
pub fn run<T, Obs>(
    bits: u32,
    spec: &SearchSpec<T>,
    widths: &WidthSequence,
    config: &Config,
    mut observer: Obs,
) -> Result<Report<T>, Error>
where
    T: Real,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let start = Instant::now();
    let mut answers = Vec::with_capacity(widths.len());
    let mut right = spec.right();

    for (position, width) in widths.iter().enumerate() {
        let current = spec
            .with_right(right.clone())
            .map_err(|source| Error::Interval { width, source })?;

        let params = Parameters::from_widths(bits, width)
            .map_err(|source| Error::Parameters { width, source })?;

        let solution = grid::solve_unobserved(&WidthGap::new(params), &current, config.strategy)
            .map_err(|source| Error::Solve { width, source })?;

        config
            .tightening
            .check(width, position > 0, &solution, &right)?;

        answers.push(WidthAnswer {
            width,
            answer: solution.x.clone(),
            bound: right.clone(),
        });

        let event = Event {
            width,
            bound: right.clone(),
            solution: &solution,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Report::new(
                Status::StoppedByObserver,
                answers,
                start.elapsed(),
            ));
        }

        right = solution.x;
    }

    Ok(Report::new(Status::Completed, answers, start.elapsed()))
}

/// Runs a sweep without observer support.
///
/// This is a convenience wrapper around [`run`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`run`].
pub fn run_unobserved<T: Real>(
    bits: u32,
    spec: &SearchSpec<T>,
    widths: &WidthSequence,
    config: &Config,
) -> Result<Report<T>, Error> {
    run(bits, spec, widths, config, ())
}
