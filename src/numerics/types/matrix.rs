// src/numerics/types/matrix.rs
// 4x4 single precision matrix: storage, arithmetic and row operations.
// Transform constructors live in numerics::transform, inversion in
// numerics::inverse.

use approx::{AbsDiffEq, RelativeEq};
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// Row-major 4x4 matrix. `data[r][c]` is row `r`, column `c`.
///
/// Points are row vectors multiplied on the left (`p * M`), so translation
/// lives in the fourth row and `A * B` applies `A` first.
///
/// `Default` is the all-zero matrix, not the identity.
///
/// Equality is exact elementwise `f32` comparison. Use the `approx` traits
/// (`abs_diff_eq`, `relative_eq`) when comparing results that went through
/// rounding.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix4x4 {
    pub data: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const HEIGHT: usize = 4;
    pub const WIDTH: usize = 4;

    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 4 rows
    pub const fn from_rows(r0: [f32; 4], r1: [f32; 4], r2: [f32; 4], r3: [f32; 4]) -> Self {
        Self {
            data: [r0, r1, r2, r3],
        }
    }

    /// Construct a new matrix from 4 columns
    pub fn from_columns(c0: [f32; 4], c1: [f32; 4], c2: [f32; 4], c3: [f32; 4]) -> Self {
        Self::from_rows(c0, c1, c2, c3).transposed()
    }

    /// Zero matrix
    pub const fn zero() -> Self {
        Self {
            data: [[0.0; 4]; 4],
        }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [f32; 4] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [f32; 4] {
        core::array::from_fn(|r| self.data[r][idx])
    }

    /// Copy of the whole grid.
    pub fn get(&self) -> [[f32; 4]; 4] {
        self.data
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.data.swap(r1, r2);
    }

    /// Divide a row by a scalar
    pub fn divide_row(&mut self, row: usize, divisor: f32) {
        for value in self.data[row].iter_mut() {
            *value /= divisor;
        }
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: f32) {
        for j in 0..Self::WIDTH {
            self.data[target][j] = self.data[target][j] + scalar * self.data[source][j];
        }
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f32, f32) -> f32) -> Self {
        let mut result = Self::zero();
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                result.data[y][x] = op(self.data[y][x], other.data[y][x]);
            }
        }
        result
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    fn from(data: [[f32; 4]; 4]) -> Self {
        Self::new(data)
    }
}

impl From<Matrix4x4> for [[f32; 4]; 4] {
    fn from(matrix: Matrix4x4) -> Self {
        matrix.data
    }
}

impl Serialize for Matrix4x4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix4x4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[f32; 4]; 4]>::deserialize(deserializer)?;
        Ok(Matrix4x4 { data })
    }
}

/// Row access. Indices past 3 panic like any array index.
impl Index<usize> for Matrix4x4 {
    type Output = [f32; 4];

    fn index(&self, row: usize) -> &[f32; 4] {
        &self.data[row]
    }
}

impl IndexMut<usize> for Matrix4x4 {
    fn index_mut(&mut self, row: usize) -> &mut [f32; 4] {
        &mut self.data[row]
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::zero();
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                for i in 0..Self::WIDTH {
                    result.data[y][x] += self.data[y][i] * rhs.data[i][x];
                }
            }
        }
        result
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Matrix4x4) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Matrix4x4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        let mut result = self;
        for row in result.data.iter_mut() {
            for value in row.iter_mut() {
                *value *= scalar;
            }
        }
        result
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(&other, |a, b| a + b)
    }
}

impl AddAssign for Matrix4x4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_with(&other, |a, b| a - b)
    }
}

impl SubAssign for Matrix4x4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Four lines of four values, two decimals each.
impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:6.2}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix4x4 {
        Matrix4x4::from_rows(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        )
    }

    #[test]
    fn test_default_is_zero_not_identity() {
        let m = Matrix4x4::default();
        assert_eq!(m, Matrix4x4::zero());
        assert_ne!(m, Matrix4x4::identity());
    }

    #[test]
    fn test_constructors_and_accessors() {
        let m = sample();
        assert_eq!(m.row(1), [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(m.column(2), [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(m[3][0], 13.0);
        assert_eq!(m.get()[0][3], 4.0);

        let c = Matrix4x4::from_columns(
            [1.0, 5.0, 9.0, 13.0],
            [2.0, 6.0, 10.0, 14.0],
            [3.0, 7.0, 11.0, 15.0],
            [4.0, 8.0, 12.0, 16.0],
        );
        assert_eq!(c, m);
    }

    #[test]
    fn test_index_mut_writes_through() {
        let mut m = Matrix4x4::zero();
        m[2][1] = 7.5;
        m[0] = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(m.data[2][1], 7.5);
        assert_eq!(m.row(0), [1.0; 4]);
    }

    #[test]
    #[should_panic]
    fn test_row_index_out_of_range_panics() {
        let m = Matrix4x4::zero();
        let row = 4;
        let _row = m[row];
    }

    #[test]
    fn test_add_sub() {
        let a = sample();
        let b = Matrix4x4::new([[1.0; 4]; 4]);

        let sum = a + b;
        assert_eq!(sum.row(0), [2.0, 3.0, 4.0, 5.0]);

        let diff = a - b;
        assert_eq!(diff.row(3), [12.0, 13.0, 14.0, 15.0]);

        let mut acc = a;
        acc += b;
        acc -= b;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_matrix_product() {
        let a = sample();
        let b = Matrix4x4::from_rows(
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        );

        let c = a * b;
        assert_eq!(c.row(0), [6.0, 3.0, 2.0, 4.0]);
        assert_eq!(c.row(3), [42.0, 15.0, 14.0, 16.0]);
        assert_ne!(a * b, b * a);

        let mut d = a;
        d *= b;
        assert_eq!(d, c);
    }

    #[test]
    fn test_scalar_product() {
        let m = sample() * 0.5;
        assert_eq!(m.row(0), [0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix4x4::identity();

        m.swap_rows(0, 1);
        assert_eq!(m.row(0), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.row(1), [1.0, 0.0, 0.0, 0.0]);

        m.divide_row(0, 2.0);
        assert_eq!(m.row(0), [0.0, 0.5, 0.0, 0.0]);

        m.add_row_multiple(0, 1, 3.0);
        assert_eq!(m.row(0), [3.0, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_display_grid() {
        let text = Matrix4x4::identity().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  1.00   0.00   0.00   0.00");
        assert_eq!(lines[3], "  0.00   0.00   0.00   1.00");
    }

    #[test]
    fn test_approx_comparison() {
        let a = sample();
        let mut b = a;
        b[1][1] += 1e-6;
        assert_ne!(a, b);
        assert!(a.abs_diff_eq(&b, 1e-4));
        assert!(!a.abs_diff_eq(&(a * 2.0), 1e-4));
    }

    #[test]
    fn test_bincode_roundtrip() {
        let m = sample();
        let config = bincode::config::standard();
        let encoded = bincode::serde::encode_to_vec(m, config).unwrap();
        let (decoded, _): (Matrix4x4, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(m, decoded);
    }
}
