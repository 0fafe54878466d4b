// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with the matrix and
// vector types, plus the transform, inversion and builder layers on top.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod vector;
}

pub mod builders;
pub mod error;
pub mod inverse;
pub mod transform;

pub use error::NumericsError;
pub use types::matrix::Matrix4x4;
pub use types::vector::Vector3;
