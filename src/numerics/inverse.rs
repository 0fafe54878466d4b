// src/numerics/inverse.rs
// Gauss-Jordan inversion of Matrix4x4.

use std::time::Instant;

use tracing::{debug, trace};

use super::error::NumericsError;
use super::types::matrix::Matrix4x4;

/// Row below `column` with the largest nonzero magnitude in that column.
fn select_pivot(work: &Matrix4x4, column: usize) -> Option<usize> {
    let mut best_row = None;
    let mut best = 0.0f32;

    for y in (column + 1)..Matrix4x4::HEIGHT {
        let candidate = work.data[y][column].abs();
        if work.data[y][column] != 0.0 && best < candidate {
            best = candidate;
            best_row = Some(y);
        }
    }

    best_row
}

impl Matrix4x4 {
    /// Inverse by Gauss-Jordan elimination on `[self | I]`.
    ///
    /// A pivot search only happens when the diagonal entry is exactly zero;
    /// the row with the largest magnitude below it is swapped in, in both
    /// halves. After elimination the left half must equal the identity
    /// exactly, otherwise the result is rejected.
    pub fn try_inverse(&self) -> Result<Self, NumericsError> {
        let start = Instant::now();

        let mut work = *self;
        let mut inverse = Self::identity();

        for i in 0..Self::HEIGHT {
            if work.data[i][i] == 0.0 {
                let Some(pivot_row) = select_pivot(&work, i) else {
                    debug!(column = i, "no usable pivot, matrix is singular");
                    return Err(NumericsError::SingularMatrix { column: i });
                };
                work.swap_rows(i, pivot_row);
                inverse.swap_rows(i, pivot_row);
            }

            let pivot = work.data[i][i];
            work.divide_row(i, pivot);
            inverse.divide_row(i, pivot);

            for y in 0..Self::HEIGHT {
                if y == i {
                    continue;
                }
                let factor = -work.data[y][i];
                work.add_row_multiple(y, i, factor);
                inverse.add_row_multiple(y, i, factor);
            }
        }

        if work != Self::identity() {
            debug!("elimination did not reduce to the identity");
            return Err(NumericsError::UnstableInversion);
        }

        trace!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "matrix inverted"
        );
        Ok(inverse)
    }

    /// Invert in place. On error `self` is left untouched.
    pub fn invert(&mut self) -> Result<(), NumericsError> {
        *self = self.try_inverse()?;
        Ok(())
    }

    /// Inverse, or an unchanged copy of `self` when none exists.
    ///
    /// Use [`Matrix4x4::try_inverse`] to find out whether inversion worked.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(*self)
    }
}
