// src/numerics/types/vector.rs
// Vector3 single precision implementation, consumed by the matrix builders
// and by the CPU reference pipeline.

use approx::{AbsDiffEq, RelativeEq};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::matrix::Matrix4x4;

/// Vector3 is a simple 3D vector / point type.
///
/// The same type is used for positions, offsets, scale factors and Euler
/// angles; which one is meant depends on the call site.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Serialize for Vector3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl Vector3 {
    /// Construct a new Vector3
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Vector of all ones
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self x other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Apply `matrix` to this point.
    ///
    /// The point is treated as the row vector `(x, y, z, 1)` multiplied on the
    /// left of the matrix. When the resulting `w` is neither 1 nor 0 the
    /// first three components are divided by it, which is what turns a
    /// perspective projection into normalized device coordinates.
    pub fn transform(&self, matrix: &Matrix4x4) -> Self {
        let m = &matrix.data;
        let x = self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0] + m[3][0];
        let y = self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1] + m[3][1];
        let z = self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2] + m[3][2];
        let w = self.x * m[0][3] + self.y * m[1][3] + self.z * m[2][3] + m[3][3];

        if w == 1.0 || w == 0.0 {
            Self::new(x, y, z)
        } else {
            Self::new(x / w, y / w, z / w)
        }
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Matrix4x4> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Matrix4x4) -> Vector3 {
        self.transform(&rhs)
    }
}

impl Mul<&Matrix4x4> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: &Matrix4x4) -> Vector3 {
        self.transform(rhs)
    }
}

// Conversions between Vector3 and tuples / arrays

impl From<(f32, f32, f32)> for Vector3 {
    fn from(tuple: (f32, f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Vector3> for (f32, f32, f32) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(array: [f32; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
