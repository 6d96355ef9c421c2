use thiserror::Error;

/// Errors that can occur when generating a [`WidthSequence`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WidthError {
    #[error("base width must be positive")]
    ZeroBits,

    #[error("base width {bits} is too large to generate a progression")]
    Overflow { bits: u32 },
}

/// The ordered widths a sweep solves.
///
/// Generated as `2*bits, 3*bits, ...` up to and including `finish` (only
/// multiples of `bits` that do not exceed it), followed by any additional
/// widths exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthSequence {
    widths: Vec<u32>,
}

impl WidthSequence {
    /// Generates the progression for `bits` up to `finish`, then appends
    /// `additional`.
    ///
    /// If `finish < 2 * bits` the progression is empty and only `additional`
    /// is solved.
    ///
    /// # Errors
    ///
    /// Returns an error if `bits` is zero or `2 * bits` overflows.
    pub fn new(bits: u32, finish: u32, additional: &[u32]) -> Result<Self, WidthError> {
        if bits == 0 {
            return Err(WidthError::ZeroBits);
        }
        let first = bits.checked_mul(2).ok_or(WidthError::Overflow { bits })?;
        let stride = usize::try_from(bits).map_err(|_| WidthError::Overflow { bits })?;

        let widths = (first..=finish)
            .step_by(stride)
            .chain(additional.iter().copied())
            .collect();

        Ok(Self { widths })
    }

    /// Uses `widths` verbatim, in the given order.
    #[must_use]
    pub fn from_widths(widths: impl IntoIterator<Item = u32>) -> Self {
        Self {
            widths: widths.into_iter().collect(),
        }
    }

    /// Iterates over the widths in processing order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.widths.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.widths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
