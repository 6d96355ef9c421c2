use super::Point;

/// Actions an observer can take during a grid search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning and return the best sample found so far.
    StopEarly,
}

/// Emitted when the running minimum changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T> {
    /// The sample that is now the best.
    pub point: Point<T>,

    /// The best sample it replaced, or `None` for the seed.
    pub previous: Option<Point<T>>,

    /// Total number of samples in the scan.
    pub samples: usize,
}
