use thiserror::Error;

use widthscan_core::Real;

use super::precision_for_step;

/// Errors that can occur when creating a [`SearchSpec`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SearchSpecError {
    #[error("bounds must be finite: left = {left}, right = {right}")]
    NonFiniteBound { left: f64, right: f64 },

    #[error("left bound must be positive, got {left}")]
    NonPositiveLeft { left: f64 },

    #[error("step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("interval is empty: right ({right}) must be greater than left ({left})")]
    EmptyInterval { left: f64, right: f64 },

    #[error("sample count of [{left}, {right}) at step {step} does not fit in usize")]
    TooManySamples { left: f64, right: f64, step: f64 },
}

/// A validated scan interval `[left, right)` sampled at a fixed step.
///
/// Samples are `left + i * step` for every `i` whose sample lies strictly
/// below `right`. There is always at least one sample (`left` itself).
/// The sample count is not capped; keeping it tractable is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec<T> {
    left: T,
    right: T,
    step: T,
    len: usize,
}

impl<T: Real> SearchSpec<T> {
    /// Creates a validated search spec.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is non-finite, `left <= 0`, the step is not
    /// finite and positive, `right <= left`, or the sample count overflows.
    pub fn new(left: T, right: T, step: T) -> Result<Self, SearchSpecError> {
        if !left.is_finite() || !right.is_finite() {
            return Err(SearchSpecError::NonFiniteBound {
                left: left.as_f64(),
                right: right.as_f64(),
            });
        }
        if left <= T::zero() {
            return Err(SearchSpecError::NonPositiveLeft {
                left: left.as_f64(),
            });
        }
        if !step.is_finite() || step <= T::zero() {
            return Err(SearchSpecError::InvalidStep {
                step: step.as_f64(),
            });
        }
        if right <= left {
            return Err(SearchSpecError::EmptyInterval {
                left: left.as_f64(),
                right: right.as_f64(),
            });
        }

        let len = sample_count(&left, &right, &step).ok_or(SearchSpecError::TooManySamples {
            left: left.as_f64(),
            right: right.as_f64(),
            step: step.as_f64(),
        })?;

        Ok(Self {
            left,
            right,
            step,
            len,
        })
    }

    /// Returns a copy with a new right bound, keeping `left` and `step`.
    ///
    /// # Errors
    ///
    /// Returns an error if the new interval is invalid (see [`SearchSpec::new`]).
    pub fn with_right(&self, right: T) -> Result<Self, SearchSpecError> {
        Self::new(self.left.clone(), right, self.step.clone())
    }

    #[must_use]
    pub fn left(&self) -> T {
        self.left.clone()
    }

    #[must_use]
    pub fn right(&self) -> T {
        self.right.clone()
    }

    #[must_use]
    pub fn step(&self) -> T {
        self.step.clone()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a valid spec has at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sample at `index`, computed as `left + index * step`.
    #[must_use]
    pub fn sample(&self, index: usize) -> T {
        self.left.clone() + T::of_usize(index) * self.step.clone()
    }

    /// Iterates over all samples in increasing order.
    pub fn samples(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(|index| self.sample(index))
    }

    /// Returns the number of decimal places implied by the step.
    #[must_use]
    pub fn precision(&self) -> i32 {
        precision_for_step(self.step.clone())
    }
}

/// Counts the samples `left + i * step` that lie strictly below `right`.
///
/// Starts from `ceil((right - left) / step)` and corrects for rounding in
/// the multiply-add, which can put the estimated last sample on or past
/// `right` (or leave one more sample below it).
fn sample_count<T: Real>(left: &T, right: &T, step: &T) -> Option<usize> {
    let sample = |index: usize| left.clone() + T::of_usize(index) * step.clone();

    let mut len = ((right.clone() - left.clone()) / step.clone())
        .ceil()
        .to_usize()?
        .max(1);
    while len > 1 && sample(len - 1) >= *right {
        len -= 1;
    }
    if sample(len) < *right {
        len = len.checked_add(1)?;
    }
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn counts_samples_below_right() {
        let spec = SearchSpec::new(1.0, 32.0, 0.01).unwrap();
        assert_eq!(spec.len(), 3100);
        assert!(spec.sample(spec.len() - 1) < 32.0);
    }

    #[test]
    fn drops_sample_that_rounds_onto_right() {
        // (1.3 - 1.0) / 0.1 = 3.0000000000000004, and 1.0 + 3 * 0.1 lands on 1.3.
        let spec = SearchSpec::new(1.0, 1.3, 0.1).unwrap();

        assert_eq!(spec.len(), 3);
        let samples: Vec<f64> = spec.samples().collect();
        assert_relative_eq!(samples[0], 1.0);
        assert_relative_eq!(samples[2], 1.2, epsilon = 1e-12);
    }

    #[test]
    fn narrow_interval_has_single_sample() {
        let spec = SearchSpec::new(2.5, 2.505, 0.01).unwrap();
        assert_eq!(spec.len(), 1);
        assert!(!spec.is_empty());
        assert_relative_eq!(spec.sample(0), 2.5);
    }

    #[test]
    fn first_sample_is_left_exactly() {
        let spec = SearchSpec::new(1.06_f32, 1.28, 0.1).unwrap();
        assert_eq!(spec.sample(0).to_bits(), 1.06_f32.to_bits());
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn rejects_invalid_intervals() {
        assert!(matches!(
            SearchSpec::new(2.0, 2.0, 0.1),
            Err(SearchSpecError::EmptyInterval { .. })
        ));
        assert!(matches!(
            SearchSpec::new(3.0, 2.0, 0.1),
            Err(SearchSpecError::EmptyInterval { .. })
        ));
        assert!(matches!(
            SearchSpec::new(1.0, 2.0, 0.0),
            Err(SearchSpecError::InvalidStep { .. })
        ));
        assert!(matches!(
            SearchSpec::new(1.0, 2.0, -0.1),
            Err(SearchSpecError::InvalidStep { .. })
        ));
        assert!(matches!(
            SearchSpec::new(1.0, 2.0, f64::NAN),
            Err(SearchSpecError::InvalidStep { .. })
        ));
        assert!(matches!(
            SearchSpec::new(f64::NAN, 2.0, 0.1),
            Err(SearchSpecError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            SearchSpec::new(1.0, f64::INFINITY, 0.1),
            Err(SearchSpecError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_left() {
        assert_eq!(
            SearchSpec::new(0.0, 2.0, 0.1),
            Err(SearchSpecError::NonPositiveLeft { left: 0.0 })
        );
        assert!(SearchSpec::new(-1.0, 2.0, 0.1).is_err());
    }

    #[test]
    fn rejects_unrepresentable_sample_count() {
        assert!(matches!(
            SearchSpec::new(1.0, 1e300, 1e-300),
            Err(SearchSpecError::TooManySamples { .. })
        ));
    }

    #[test]
    fn with_right_keeps_left_and_step() {
        let spec = SearchSpec::new(1.0, 32.0, 0.01).unwrap();
        let narrowed = spec.with_right(28.77).unwrap();

        assert_relative_eq!(narrowed.left(), 1.0);
        assert_relative_eq!(narrowed.right(), 28.77);
        assert_relative_eq!(narrowed.step(), 0.01);
        assert_eq!(narrowed.precision(), 2);
        assert_eq!(narrowed.len(), 2777);

        assert!(matches!(
            spec.with_right(1.0),
            Err(SearchSpecError::EmptyInterval { .. })
        ));
    }
}
