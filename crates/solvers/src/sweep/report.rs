use std::time::Duration;

/// Indicates whether the sweep solved every width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every width was solved.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The answer for one width.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthAnswer<T> {
    pub width: u32,

    /// The rounded minimizer.
    pub answer: T,

    /// The right bound it was searched under.
    pub bound: T,
}

/// The result of a sweep.
#[derive(Debug, Clone)]
pub struct Report<T> {
    /// Final sweep status.
    pub status: Status,

    /// Answers in processing order.
    pub answers: Vec<WidthAnswer<T>>,

    /// Wall-clock time spent solving.
    pub elapsed: Duration,
}

impl<T: Clone> Report<T> {
    pub(super) fn new(status: Status, answers: Vec<WidthAnswer<T>>, elapsed: Duration) -> Self {
        Self {
            status,
            answers,
            elapsed,
        }
    }

    /// Returns the answer of the last solved width, if any.
    #[must_use]
    pub fn last(&self) -> Option<&WidthAnswer<T>> {
        self.answers.last()
    }

    /// Returns `(width, answer)` pairs in processing order.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, T)> + '_ {
        self.answers
            .iter()
            .map(|entry| (entry.width, entry.answer.clone()))
    }
}
