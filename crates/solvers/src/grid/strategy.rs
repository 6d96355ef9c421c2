/// Selects how a grid search evaluates its samples.
///
/// Both strategies return identical solutions for the same inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Evaluate samples one at a time while tracking a running minimum.
    #[default]
    Sequential,

    /// Materialize all samples, evaluate them together, then reduce.
    Batch,
}

impl Strategy {
    /// Returns a short lowercase name for reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Batch => "batch",
        }
    }
}
