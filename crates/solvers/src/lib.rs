//! Grid-search solvers for widthscan.
//!
//! - [`grid`]: exhaustive scan of one interval at a fixed step, returning the
//!   minimizing sample rounded to the step's decimal precision
//! - [`sweep`]: chains grid solves across increasing bit widths, feeding each
//!   answer forward as the next upper bound

pub mod grid;
pub mod sweep;
