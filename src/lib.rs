//! prism: a 4x4 matrix type and the minimal software transform pipeline
//! built on it.

pub mod numerics;
pub mod overlay;
pub mod renderer;

pub use numerics::builders;
pub use numerics::{Matrix4x4, NumericsError, Vector3};
