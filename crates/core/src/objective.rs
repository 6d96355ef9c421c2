use thiserror::Error;

use crate::{Parameters, Real};

/// A pure scalar function of one sample point.
///
/// Implementations must not carry state between calls: solvers may evaluate
/// samples singly, in batches, and in any order, and expect the same values
/// either way.
pub trait Objective<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `x` is outside the objective's domain.
    fn value(&self, x: T) -> Result<T, Self::Error>;

    /// Evaluates the objective elementwise over `xs`.
    ///
    /// The returned vector has the same length and order as `xs`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Objective::value`].
    fn values(&self, xs: &[T]) -> Result<Vec<T>, Self::Error>
    where
        T: Clone,
    {
        xs.iter().map(|x| self.value(x.clone())).collect()
    }
}

/// Errors returned by [`WidthGap`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ObjectiveError {
    #[error("sample x = {x} is outside the domain x > 0")]
    NonPositiveSample { x: f64 },
}

/// The width-gap objective `|x * (1 + 1/x)^(s - x - 1) - b|`.
///
/// Defined for `x > 0`. For large `s` or small `x` the power term overflows
/// to infinity in the working type; the result is then `inf` rather than an
/// error, and solvers treat it as an ordinary (very poor) value.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthGap<T> {
    params: Parameters<T>,
}

impl<T: Real> WidthGap<T> {
    #[must_use]
    pub fn new(params: Parameters<T>) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &Parameters<T> {
        &self.params
    }
}

impl<T: Real> Objective<T> for WidthGap<T> {
    type Error = ObjectiveError;

    fn value(&self, x: T) -> Result<T, Self::Error> {
        // Also rejects NaN.
        if !(x > T::zero()) {
            return Err(ObjectiveError::NonPositiveSample { x: x.as_f64() });
        }

        let exponent = self.params.s() - x.clone() - T::one();
        let power = (T::one() + x.clone().recip()).powf(exponent);
        Ok((x * power - self.params.b()).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn gap(s: f64, b: f64) -> WidthGap<f64> {
        WidthGap::new(Parameters::new(s, b).expect("valid parameters"))
    }

    #[test]
    fn matches_closed_form() {
        // 1 * 2^(4 - 1 - 1) = 4, |4 - 1| = 3
        assert_relative_eq!(gap(4.0, 1.0).value(1.0).unwrap(), 3.0);

        // 2 * 1.5^(5 - 2 - 1) = 4.5, |4.5 - 0.5| = 4
        assert_relative_eq!(gap(5.0, 0.5).value(2.0).unwrap(), 4.0);

        // Below the target the gap is still non-negative.
        // 4 * 1.25^(6 - 4 - 1) = 5, |5 - 8| = 3
        assert_relative_eq!(gap(6.0, 8.0).value(4.0).unwrap(), 3.0);
    }

    #[test]
    fn batch_matches_single_evaluation() {
        let objective = WidthGap::new(Parameters::<f64>::from_widths(8, 16).unwrap());
        let xs = [1.0, 1.5, 7.25, 28.77, 31.99];

        let batch = objective.values(&xs).unwrap();

        assert_eq!(batch.len(), xs.len());
        for (x, value) in xs.iter().zip(&batch) {
            assert_eq!(objective.value(*x).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn rejects_samples_outside_domain() {
        let objective = gap(4.0, 1.0);

        assert_eq!(
            objective.value(0.0),
            Err(ObjectiveError::NonPositiveSample { x: 0.0 })
        );
        assert!(objective.value(-1.0).is_err());
        assert!(objective.value(f64::NAN).is_err());
        assert!(objective.values(&[1.0, 0.0, 2.0]).is_err());
    }

    #[test]
    fn overflow_yields_infinite_gap() {
        let objective = WidthGap::new(Parameters::<f32>::from_widths(8, 16).unwrap());

        // 2^254 does not fit in f32.
        let value = objective.value(1.0).unwrap();
        assert!(value.is_infinite());
    }
}
