//! Error types for the numerics module.

use thiserror::Error;

/// Reasons a matrix could not be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericsError {
    /// No row at or below the diagonal has a nonzero entry in `column`.
    #[error("matrix is singular: no nonzero pivot in column {column}")]
    SingularMatrix { column: usize },

    /// Elimination finished but the reduced matrix is not exactly the
    /// identity, which happens once infinities or NaNs enter the grid.
    #[error("matrix inversion is numerically unstable")]
    UnstableInversion,
}
