#[cfg(feature = "extended")]
mod extended;

use std::{
    fmt::{Debug, Display},
    ops::{Div, Sub},
};

use num_traits::{AsPrimitive, One, ToPrimitive, Zero};

#[cfg(feature = "extended")]
pub use extended::{EXTENDED_PRECISION, Extended};

/// A floating-point scalar that searches can be carried out in.
///
/// The solvers are written once against this trait, so the working precision
/// is chosen by the caller through a type parameter rather than a global
/// switch. Values are `Clone` rather than `Copy`, which lets heap-backed
/// multiple-precision numbers take part alongside `f32` and `f64`.
pub trait Real:
    Clone
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
{
    /// Short type name reported in run metadata and errors.
    const NAME: &'static str;

    /// Converts an `f64` into this type, rounding to the nearest value.
    fn of_f64(value: f64) -> Self;

    /// Converts a sample index into this type.
    fn of_usize(value: usize) -> Self;

    /// Returns the nearest `f64`, saturating to infinity.
    ///
    /// Used for error payloads and reports, never inside a computation.
    fn as_f64(&self) -> f64;

    /// Truncates to a `usize`, or `None` if negative, non-finite or too large.
    fn to_usize(&self) -> Option<usize>;

    fn is_nan(&self) -> bool;

    fn is_finite(&self) -> bool;

    #[must_use]
    fn abs(self) -> Self;

    #[must_use]
    fn recip(self) -> Self;

    #[must_use]
    fn powf(self, exponent: Self) -> Self;

    #[must_use]
    fn powi(self, exponent: i32) -> Self;

    #[must_use]
    fn exp2(self) -> Self;

    #[must_use]
    fn log10(self) -> Self;

    /// Rounds to the nearest integer, half away from zero.
    #[must_use]
    fn round(self) -> Self;

    #[must_use]
    fn ceil(self) -> Self;
}

macro_rules! impl_hardware_real {
    ($ty:ty, $name:literal) => {
        impl Real for $ty {
            const NAME: &'static str = $name;

            fn of_f64(value: f64) -> Self {
                value.as_()
            }

            fn of_usize(value: usize) -> Self {
                value.as_()
            }

            fn as_f64(&self) -> f64 {
                (*self).as_()
            }

            fn to_usize(&self) -> Option<usize> {
                ToPrimitive::to_usize(self)
            }

            fn is_nan(&self) -> bool {
                <$ty>::is_nan(*self)
            }

            fn is_finite(&self) -> bool {
                <$ty>::is_finite(*self)
            }

            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            fn recip(self) -> Self {
                <$ty>::recip(self)
            }

            fn powf(self, exponent: Self) -> Self {
                <$ty>::powf(self, exponent)
            }

            fn powi(self, exponent: i32) -> Self {
                <$ty>::powi(self, exponent)
            }

            fn exp2(self) -> Self {
                <$ty>::exp2(self)
            }

            fn log10(self) -> Self {
                <$ty>::log10(self)
            }

            fn round(self) -> Self {
                <$ty>::round(self)
            }

            fn ceil(self) -> Self {
                <$ty>::ceil(self)
            }
        }
    };
}

impl_hardware_real!(f32, "f32");
impl_hardware_real!(f64, "f64");
