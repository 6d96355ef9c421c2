use crate::grid::Solution;

/// Actions an observer can take during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current width and return the answers so far.
    StopEarly,
}

/// Emitted after each width is solved and checked.
#[derive(Debug, Clone)]
pub struct Event<'a, T> {
    /// The solved width.
    pub width: u32,

    /// The right bound the width was searched under.
    pub bound: T,

    /// The grid search solution for this width.
    pub solution: &'a Solution<T>,
}

impl<T: Clone> Event<'_, T> {
    /// Returns the rounded answer for this width.
    #[must_use]
    pub fn answer(&self) -> T {
        self.solution.x.clone()
    }
}
