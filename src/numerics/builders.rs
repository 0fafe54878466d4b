// src/numerics/builders.rs
// Free-function builders so transform chains read as plain expressions:
// `make_matrix_affine(..) * make_matrix_inverse(camera) * make_matrix_perspective_fov(..)`.

use super::types::matrix::Matrix4x4;
use super::types::vector::Vector3;

pub fn make_matrix_identity() -> Matrix4x4 {
    Matrix4x4::identity()
}

pub fn make_matrix_translate(offset: Vector3) -> Matrix4x4 {
    Matrix4x4::translation(offset)
}

pub fn make_matrix_scalar(factors: Vector3) -> Matrix4x4 {
    Matrix4x4::scaling(factors)
}

pub fn make_matrix_rotate_x(rad: f32) -> Matrix4x4 {
    Matrix4x4::rotation_x(rad)
}

pub fn make_matrix_rotate_y(rad: f32) -> Matrix4x4 {
    Matrix4x4::rotation_y(rad)
}

pub fn make_matrix_rotate_z(rad: f32) -> Matrix4x4 {
    Matrix4x4::rotation_z(rad)
}

pub fn make_matrix_affine(scale: Vector3, rotate: Vector3, translate: Vector3) -> Matrix4x4 {
    Matrix4x4::affine(scale, rotate, translate)
}

/// Inverse of `matrix`, or `matrix` itself when it cannot be inverted.
pub fn make_matrix_inverse(matrix: Matrix4x4) -> Matrix4x4 {
    matrix.inverse()
}

pub fn make_matrix_transpose(matrix: Matrix4x4) -> Matrix4x4 {
    matrix.transposed()
}

pub fn make_matrix_perspective_fov(
    fov_y: f32,
    aspect_ratio: f32,
    near_clip: f32,
    far_clip: f32,
) -> Matrix4x4 {
    Matrix4x4::perspective_fov(fov_y, aspect_ratio, near_clip, far_clip)
}

/// Same argument order as [`Matrix4x4::orthographic`]: left, top, right, bottom.
pub fn make_matrix_orthographic(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    near_clip: f32,
    far_clip: f32,
) -> Matrix4x4 {
    Matrix4x4::orthographic(left, top, right, bottom, near_clip, far_clip)
}

pub fn make_matrix_viewport(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Matrix4x4 {
    Matrix4x4::viewport(left, top, width, height, min_depth, max_depth)
}
