//! Exhaustive grid search for single-variable minimization.
//!
//! # Algorithm
//!
//! The solver evaluates an [`Objective`] at every sample
//! `x_i = left + i * step` of a [`SearchSpec`] (all samples strictly below
//! `right`) and returns the sample with the smallest objective, rounded to
//! `-round(log10(step))` decimal places.
//!
//! Two [`Strategy`] values are available and always return identical
//! solutions:
//!
//! - [`Strategy::Sequential`]: evaluates one sample at a time and keeps a
//!   running minimum
//! - [`Strategy::Batch`]: materializes every sample, evaluates them with
//!   [`Objective::values`], then reduces; usually slower because of the
//!   allocation
//!
//! # Comparison Rules
//!
//! - The first sample seeds the minimum unconditionally.
//! - A later sample replaces it only if strictly smaller, so ties keep the
//!   earliest sample.
//! - NaN never replaces a minimum. A NaN seed is replaced by the first
//!   non-NaN value.
//!
//! # Rounding
//!
//! Rounding uses [`Real::round`](widthscan_core::Real::round), which rounds
//! half away from zero: with `step = 0.01`, an exact `0.125` becomes `0.13`.
//! Values such as `1.005` that are not exactly representable round by their
//! binary value (`1.00499…`), giving `1.0`.
//!
//! # Observer Events
//!
//! The solver emits an [`Event`] every time the running minimum changes,
//! including once for the seed. Observers can return [`Action::StopEarly`] to
//! end the scan and keep the best sample found so far.
//!
//! [`Objective`]: widthscan_core::Objective
//! [`Objective::values`]: widthscan_core::Objective::values

mod error;
mod event;
mod rounding;
mod scan;
mod solution;
mod spec;
mod strategy;


pub use error::Error;
pub use event::{Action, Event};
pub use rounding::{precision_for_step, round_to};
pub use solution::{Point, Solution, Status};
pub use spec::{SearchSpec, SearchSpecError};
pub use strategy::Strategy;

use widthscan_core::{Objective, Observer, Real};

/// Finds the sample of `spec` that minimizes `objective`.
///
/// The observer receives an [`Event`] each time the running minimum changes.
/// See the [module docs](self) for comparison and rounding rules.
///
/// # Errors
///
/// Returns an error if the objective fails at any sample, or if a batch
/// evaluation returns the wrong number of values.
pub fn solve<T, O, Obs>(
    objective: &O,
    spec: &SearchSpec<T>,
    strategy: Strategy,
    mut observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Real,
    O: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    let scan = match strategy {
        Strategy::Sequential => scan::sequential(objective, spec, &mut observer)?,
        Strategy::Batch => scan::batch(objective, spec, &mut observer)?,
    };

    Ok(scan.into_solution(spec))
}

/// Finds the minimizing sample without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the objective fails at any sample.
pub fn solve_unobserved<T, O>(
    objective: &O,
    spec: &SearchSpec<T>,
    strategy: Strategy,
) -> Result<Solution<T>, Error>
where
    T: Real,
    O: Objective<T>,
{
    solve(objective, spec, strategy, ())
}
