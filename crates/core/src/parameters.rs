use thiserror::Error;

use crate::Real;

/// Errors that can occur when deriving [`Parameters`] from bit widths.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// `2^width` is not representable in the working scalar type.
    #[error("2^{width} overflows {type_name}")]
    Overflow {
        width: u32,
        type_name: &'static str,
    },

    /// A parameter supplied directly is not finite and strictly positive.
    #[error("parameter `{name}` must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// The fixed `(s, b)` pair of one objective evaluation.
///
/// For a sweep, `s = 2^bits` is set once by the base width and
/// `b = 2^width` grows with each solved width.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters<T> {
    s: T,
    b: T,
}

impl<T: Real> Parameters<T> {
    /// Creates parameters from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotPositive`] if `s` or `b` is non-finite
    /// or not strictly positive.
    pub fn new(s: T, b: T) -> Result<Self, ParameterError> {
        check_positive("s", &s)?;
        check_positive("b", &b)?;
        Ok(Self { s, b })
    }

    /// Derives `s = 2^bits` and `b = 2^width`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Overflow`] if either power of two does not fit
    /// in `T` (for example `2^128` in `f32` or `2^1024` in `f64`).
    /// The extended scalar holds every width a sweep uses.
    pub fn from_widths(bits: u32, width: u32) -> Result<Self, ParameterError> {
        Ok(Self {
            s: power_of_two(bits)?,
            b: power_of_two(width)?,
        })
    }

    /// Returns `s`.
    #[must_use]
    pub fn s(&self) -> T {
        self.s.clone()
    }

    /// Returns `b`.
    #[must_use]
    pub fn b(&self) -> T {
        self.b.clone()
    }
}

/// Returns `2^width` in `T`, exactly, or an error if it overflows.
///
/// # Errors
///
/// Returns [`ParameterError::Overflow`] if the result is not finite in `T`.
pub fn power_of_two<T: Real>(width: u32) -> Result<T, ParameterError> {
    let overflow = ParameterError::Overflow {
        width,
        type_name: T::NAME,
    };
    let exponent = i32::try_from(width).map_err(|_| overflow)?;

    let value = T::of_f64(2.0).powi(exponent);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(overflow)
    }
}

fn check_positive<T: Real>(name: &'static str, value: &T) -> Result<(), ParameterError> {
    if value.is_finite() && *value > T::zero() {
        Ok(())
    } else {
        Err(ParameterError::NotPositive {
            name,
            value: value.as_f64(),
        })
    }
}
