use widthscan_core::Real;

/// Returns the decimal precision implied by a step: `-round(log10(step))`.
///
/// `1e-6` gives 6, `1` gives 0 and `100` gives -2.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn precision_for_step<T: Real>(step: T) -> i32 {
    (T::zero() - step.log10().round()).as_f64() as i32
}

/// Rounds `x` to `precision` decimal places, half away from zero.
///
/// A negative precision rounds to tens, hundreds, and so on. If `10^precision`
/// is not finite in `T`, `x` is already finer than that and is returned as is.
#[must_use]
pub fn round_to<T: Real>(x: T, precision: i32) -> T {
    let ten = T::of_f64(10.0);
    if precision >= 0 {
        let factor = ten.powi(precision);
        if !factor.is_finite() {
            return x;
        }
        (x * factor.clone()).round() / factor
    } else {
        let factor = ten.powi(precision.saturating_neg());
        if !factor.is_finite() {
            return x;
        }
        (x / factor.clone()).round() * factor
    }
}
