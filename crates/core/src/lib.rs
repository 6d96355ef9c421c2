//! Core traits and types for widthscan.
//!
//! This crate defines the shared abstractions the solvers and the command-line
//! runner build on:
//!
//! - [`Real`]: the floating-point scalar a search is carried out in, implemented
//!   for `f32`, `f64` and (with the `extended` feature) [`Extended`]
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Objective`]: a pure function of one sample point, evaluated singly or
//!   elementwise over a batch
//! - [`Parameters`] and [`WidthGap`]: the `(s, b)` pair derived from bit widths
//!   and the gap objective `|x * (1 + 1/x)^(s - x - 1) - b|` built on it
//! - [`naive_k`]: the closed-form estimate the search results are compared to

mod naive;
mod objective;
mod observer;
mod parameters;
mod real;

pub use naive::naive_k;
pub use objective::{Objective, ObjectiveError, WidthGap};
pub use observer::Observer;
pub use parameters::{ParameterError, Parameters, power_of_two};
pub use real::Real;
#[cfg(feature = "extended")]
pub use real::{EXTENDED_PRECISION, Extended};
