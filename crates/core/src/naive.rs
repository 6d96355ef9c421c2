use crate::{ParameterError, Real, power_of_two};

/// Returns the naive estimate `k = (2^value)^(1 / (2^bits - 1))`.
///
/// Computed as `2^(value / (2^bits - 1))`, which stays finite for values whose
/// power of two would overflow `T` on its own.
///
/// # Errors
///
/// Returns [`ParameterError::Overflow`] if `2^bits` does not fit in `T`, and
/// [`ParameterError::NotPositive`] for `bits = 0`, where the root is undefined.
pub fn naive_k<T: Real>(value: u32, bits: u32) -> Result<T, ParameterError> {
    let degree = power_of_two::<T>(bits)? - T::one();
    if degree <= T::zero() {
        return Err(ParameterError::NotPositive {
            name: "2^bits - 1",
            value: degree.as_f64(),
        });
    }

    let exponent = T::of_f64(f64::from(value)) / degree;
    Ok(exponent.exp2())
}
