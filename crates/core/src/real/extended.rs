use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

use num_traits::{One, ToPrimitive, Zero};
use rug::{Assign, Float, ops::Pow};

use super::Real;

/// Mantissa bits of [`Extended`], the width of the x87 extended format.
pub const EXTENDED_PRECISION: u32 = 64;

/// Significant digits written by `Display` when no precision is given.
///
/// One less than the mantissa can always resolve, so values that came from
/// rounding to a decimal print as that decimal.
const DISPLAY_DIGITS: usize = 18;

/// An extended-precision scalar backed by an MPFR [`Float`].
///
/// Every value carries [`EXTENDED_PRECISION`] mantissa bits, and arithmetic
/// keeps that precision. The exponent range is far wider than `f64`'s, so
/// powers of two such as `2^16384` stay finite.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Extended(Float);

impl Extended {
    /// Creates a value rounded to [`EXTENDED_PRECISION`] bits.
    #[must_use]
    pub fn new<V>(value: V) -> Self
    where
        Float: Assign<V>,
    {
        Self(Float::with_val(EXTENDED_PRECISION, value))
    }

    /// Returns the underlying MPFR value.
    #[must_use]
    pub fn as_float(&self) -> &Float {
        &self.0
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Extended {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self($trait::$method(self.0, rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Zero for Extended {
    fn zero() -> Self {
        Self::new(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Extended {
    fn one() -> Self {
        Self::new(1)
    }
}

impl Real for Extended {
    const NAME: &'static str = "extended";

    fn of_f64(value: f64) -> Self {
        Self::new(value)
    }

    fn of_usize(value: usize) -> Self {
        Self::new(value)
    }

    fn as_f64(&self) -> f64 {
        self.0.to_f64()
    }

    fn to_usize(&self) -> Option<usize> {
        ToPrimitive::to_usize(&self.0.to_f64())
    }

    fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    fn abs(self) -> Self {
        Self(self.0.abs())
    }

    fn recip(self) -> Self {
        Self(self.0.recip())
    }

    fn powf(self, exponent: Self) -> Self {
        Self(self.0.pow(&exponent.0))
    }

    fn powi(self, exponent: i32) -> Self {
        Self(self.0.pow(exponent))
    }

    fn exp2(self) -> Self {
        Self(self.0.exp2())
    }

    fn log10(self) -> Self {
        Self(self.0.log10())
    }

    fn round(self) -> Self {
        Self(self.0.round())
    }

    fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
}

/// Writes plain decimal notation, like `f64`.
///
/// Without a precision the value is written to [`DISPLAY_DIGITS`] significant
/// digits with trailing zeros removed; with one it is rounded to that many
/// decimal places.
impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return fmt::Display::fmt(&self.0.to_f64(), f);
        }

        let text = match f.precision() {
            Some(places) => fixed(&self.0, places),
            None => shortest(&self.0),
        };
        f.write_str(&text)
    }
}

fn shortest(value: &Float) -> String {
    if value.is_zero() {
        return "0".to_owned();
    }

    // The value is 0.<digits> * 10^exp.
    let (negative, digits, exp) = value.to_sign_string_exp(10, Some(DISPLAY_DIGITS));
    let digits = digits.trim_end_matches('0');
    let exp = exp.unwrap_or(0);

    let body = match usize::try_from(exp) {
        Ok(0) => format!("0.{digits}"),
        Ok(point) if point >= digits.len() => {
            format!("{digits}{}", "0".repeat(point - digits.len()))
        }
        Ok(point) => {
            let (whole, fraction) = digits.split_at(point);
            format!("{whole}.{fraction}")
        }
        Err(_) => format!("0.{}{digits}", "0".repeat(exp.unsigned_abs() as usize)),
    };

    if negative { format!("-{body}") } else { body }
}

fn fixed(value: &Float, places: usize) -> String {
    let Ok(power) = u32::try_from(places) else {
        return shortest(value);
    };

    let scale = Float::with_val(EXTENDED_PRECISION, 10).pow(power);
    let scaled = (value.clone() * &scale).round();
    let (negative, digits) = integer_digits(&scaled);

    let digits = format!("{digits:0>width$}", width = places + 1);
    let (whole, fraction) = digits.split_at(digits.len() - places);
    let sign = if negative { "-" } else { "" };

    if places == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

/// Returns the sign and decimal digits of an integer-valued float.
fn integer_digits(value: &Float) -> (bool, String) {
    if value.is_zero() {
        return (false, "0".to_owned());
    }

    let (negative, digits, exp) = value.to_sign_string_exp(10, None);
    let len = exp.and_then(|exp| usize::try_from(exp).ok()).unwrap_or(0);

    let mut digits: String = digits.chars().take(len).collect();
    while digits.len() < len {
        digits.push('0');
    }
    (negative, digits)
}
