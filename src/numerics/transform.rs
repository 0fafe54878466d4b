// src/numerics/transform.rs
// Transform construction for Matrix4x4.
//
// Every transform is a constructor that starts from the zero matrix. The
// `set_*` methods overwrite an existing matrix with the same pattern, so
// nothing from the previous contents survives them.

use super::types::matrix::Matrix4x4;
use super::types::vector::Vector3;

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4::from_rows(
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    );

    /// Identity matrix
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `offset`, stored in the fourth row.
    pub fn translation(offset: Vector3) -> Self {
        let mut m = Self::identity();
        m.data[3][0] = offset.x;
        m.data[3][1] = offset.y;
        m.data[3][2] = offset.z;
        m
    }

    /// Axis-aligned scale; the diagonal is `(x, y, z, 1)`.
    pub fn scaling(factors: Vector3) -> Self {
        let mut m = Self::zero();
        m.data[0][0] = factors.x;
        m.data[1][1] = factors.y;
        m.data[2][2] = factors.z;
        m.data[3][3] = 1.0;
        m
    }

    /// Rotation about the X axis by `rad` radians.
    pub fn rotation_x(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let mut m = Self::zero();
        m.data[0][0] = 1.0;
        m.data[3][3] = 1.0;

        m.data[1][1] = cos;
        m.data[1][2] = sin;
        m.data[2][1] = -sin;
        m.data[2][2] = cos;
        m
    }

    /// Rotation about the Y axis by `rad` radians.
    pub fn rotation_y(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let mut m = Self::zero();
        m.data[1][1] = 1.0;
        m.data[3][3] = 1.0;

        m.data[0][0] = cos;
        m.data[0][2] = -sin;
        m.data[2][0] = sin;
        m.data[2][2] = cos;
        m
    }

    /// Rotation about the Z axis by `rad` radians.
    pub fn rotation_z(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        let mut m = Self::zero();
        m.data[2][2] = 1.0;
        m.data[3][3] = 1.0;

        m.data[0][0] = cos;
        m.data[0][1] = sin;
        m.data[1][0] = -sin;
        m.data[1][1] = cos;
        m
    }

    /// Scale, then rotate (X, then Y, then Z), then translate.
    ///
    /// The rotation order is fixed. Row `i` of the rotation block is scaled
    /// by the `i`th scale component and the fourth row holds `translate`.
    pub fn affine(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        let rotation =
            Self::rotation_x(rotate.x) * Self::rotation_y(rotate.y) * Self::rotation_z(rotate.z);
        let r = &rotation.data;

        Self::from_rows(
            [scale.x * r[0][0], scale.x * r[0][1], scale.x * r[0][2], 0.0],
            [scale.y * r[1][0], scale.y * r[1][1], scale.y * r[1][2], 0.0],
            [scale.z * r[2][0], scale.z * r[2][1], scale.z * r[2][2], 0.0],
            [translate.x, translate.y, translate.z, 1.0],
        )
    }

    /// Left-handed perspective projection.
    ///
    /// `[2][3]` is 1 so the transformed point's `w` carries view depth for
    /// the perspective divide.
    pub fn perspective_fov(fov_y: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Self {
        let cot = 1.0 / (fov_y / 2.0).tan();
        let mut m = Self::zero();
        m.data[0][0] = (1.0 / aspect_ratio) * cot;
        m.data[1][1] = cot;
        m.data[2][2] = far_clip / (far_clip - near_clip);
        m.data[2][3] = 1.0;
        m.data[3][2] = (-near_clip * far_clip) / (far_clip - near_clip);
        m
    }

    /// Orthographic projection of the box `left..right`, `bottom..top`,
    /// `near_clip..far_clip` onto x, y in `-1..1` and z in `0..1`.
    pub fn orthographic(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        let mut m = Self::zero();
        m.data[0][0] = 2.0 / (right - left);
        m.data[1][1] = 2.0 / (top - bottom);
        m.data[2][2] = 1.0 / (far_clip - near_clip);
        m.data[3][3] = 1.0;

        m.data[3][0] = (left + right) / (left - right);
        m.data[3][1] = (top + bottom) / (bottom - top);
        m.data[3][2] = near_clip / (near_clip - far_clip);
        m
    }

    /// Maps normalized device coordinates to pixels.
    ///
    /// The vertical scale is `height / -2` because screen y grows downwards.
    pub fn viewport(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        let mut m = Self::zero();
        m.data[0][0] = width / 2.0;
        m.data[1][1] = height / -2.0;
        m.data[2][2] = max_depth - min_depth;
        m.data[3][3] = 1.0;

        m.data[3][0] = left + width / 2.0;
        m.data[3][1] = top + height / 2.0;
        m.data[3][2] = min_depth;
        m
    }

    /// Transposed copy. Only swaps values, so applying it twice is exact.
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    pub fn set_translate(&mut self, offset: Vector3) {
        *self = Self::translation(offset);
    }

    pub fn set_scalar(&mut self, factors: Vector3) {
        *self = Self::scaling(factors);
    }

    pub fn set_rotate_x(&mut self, rad: f32) {
        *self = Self::rotation_x(rad);
    }

    pub fn set_rotate_y(&mut self, rad: f32) {
        *self = Self::rotation_y(rad);
    }

    pub fn set_rotate_z(&mut self, rad: f32) {
        *self = Self::rotation_z(rad);
    }

    pub fn set_affine(&mut self, scale: Vector3, rotate: Vector3, translate: Vector3) {
        *self = Self::affine(scale, rotate, translate);
    }

    pub fn set_perspective_fov(
        &mut self,
        fov_y: f32,
        aspect_ratio: f32,
        near_clip: f32,
        far_clip: f32,
    ) {
        *self = Self::perspective_fov(fov_y, aspect_ratio, near_clip, far_clip);
    }

    pub fn set_orthographic(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        near_clip: f32,
        far_clip: f32,
    ) {
        *self = Self::orthographic(left, top, right, bottom, near_clip, far_clip);
    }

    pub fn set_viewport(
        &mut self,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) {
        *self = Self::viewport(left, top, width, height, min_depth, max_depth);
    }

    /// Transpose in place; the diagonal is untouched.
    pub fn transpose(&mut self) {
        for r in 0..Self::HEIGHT {
            for c in (r + 1)..Self::WIDTH {
                let upper = self.data[r][c];
                self.data[r][c] = self.data[c][r];
                self.data[c][r] = upper;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn garbage() -> Matrix4x4 {
        Matrix4x4::new([[9.0; 4]; 4])
    }

    #[test]
    fn test_identity_pattern() {
        let mut m = garbage();
        m.set_identity();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(m[r][c], if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_translate_moves_origin() {
        let v = Vector3::new(3.0, -2.0, 7.5);
        let mut m = garbage();
        m.set_translate(v);
        assert_eq!(m, Matrix4x4::translation(v));
        assert_eq!(m.row(3), [3.0, -2.0, 7.5, 1.0]);
        assert_eq!(Vector3::zero() * m, v);
    }

    #[test]
    fn test_scalar_overwrites_previous_contents() {
        let v = Vector3::new(2.0, 3.0, 4.0);
        let mut m = garbage();
        m.set_scalar(v);
        assert_eq!(
            m,
            Matrix4x4::from_rows(
                [2.0, 0.0, 0.0, 0.0],
                [0.0, 3.0, 0.0, 0.0],
                [0.0, 0.0, 4.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            )
        );
        assert_eq!(Vector3::one() * m, v);
    }

    #[test]
    fn test_rotations_keep_axis_fixed() {
        let angle = 0.7;
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_abs_diff_eq!(x * Matrix4x4::rotation_x(angle), x);
        assert_abs_diff_eq!(y * Matrix4x4::rotation_y(angle), y);
        assert_abs_diff_eq!(z * Matrix4x4::rotation_z(angle), z);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let mut m = garbage();
        m.set_rotate_z(FRAC_PI_2);
        let p = Vector3::new(1.0, 0.0, 0.0) * m;
        assert_abs_diff_eq!(p, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_x_and_y_quarter_turn() {
        let mut m = Matrix4x4::zero();
        m.set_rotate_x(FRAC_PI_2);
        let p = Vector3::new(0.0, 1.0, 0.0) * m;
        assert_abs_diff_eq!(p, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);

        m.set_rotate_y(FRAC_PI_2);
        let q = Vector3::new(0.0, 0.0, 1.0) * m;
        assert_abs_diff_eq!(q, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_affine_scale_then_translate() {
        let m = Matrix4x4::affine(
            Vector3::new(2.0, 1.0, 1.0),
            Vector3::zero(),
            Vector3::new(5.0, 0.0, 0.0),
        );
        let p = Vector3::new(1.0, 0.0, 0.0) * m;
        assert_eq!(p, Vector3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn test_affine_matches_composed_product() {
        let scale = Vector3::new(1.5, 0.5, 2.0);
        let rotate = Vector3::new(0.3, -1.1, 2.4);
        let translate = Vector3::new(-4.0, 8.0, 0.25);

        let mut m = garbage();
        m.set_affine(scale, rotate, translate);

        let composed = Matrix4x4::scaling(scale)
            * Matrix4x4::rotation_x(rotate.x)
            * Matrix4x4::rotation_y(rotate.y)
            * Matrix4x4::rotation_z(rotate.z)
            * Matrix4x4::translation(translate);
        assert_abs_diff_eq!(m, composed, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_fov_layout() {
        let (near, far) = (0.1, 100.0);
        let mut m = garbage();
        m.set_perspective_fov(0.45, 16.0 / 9.0, near, far);

        assert_eq!(m[2][3], 1.0);
        assert_eq!(m[3][3], 0.0);
        assert_abs_diff_eq!(m[2][2], far / (far - near), epsilon = 1e-6);
        assert_abs_diff_eq!(m[3][2], -near * far / (far - near), epsilon = 1e-6);
        assert_abs_diff_eq!(m[1][1], 1.0 / (0.225f32).tan(), epsilon = 1e-5);
        assert_abs_diff_eq!(m[0][0], m[1][1] * 9.0 / 16.0, epsilon = 1e-5);
        assert_eq!(m[0][1], 0.0);
    }

    #[test]
    fn test_perspective_maps_clip_planes() {
        let m = Matrix4x4::perspective_fov(PI / 2.0, 1.0, 1.0, 10.0);
        let near = Vector3::new(0.0, 0.0, 1.0) * m;
        let far = Vector3::new(0.0, 0.0, 10.0) * m;
        assert_abs_diff_eq!(near.z, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_orthographic_maps_box_corners() {
        let mut m = garbage();
        m.set_orthographic(-160.0, 160.0, 200.0, 300.0, 0.0, 1000.0);
        assert_eq!(m[3][3], 1.0);
        assert_eq!(m[2][3], 0.0);

        let top_left_near = Vector3::new(-160.0, 160.0, 0.0) * m;
        assert_abs_diff_eq!(top_left_near, Vector3::new(-1.0, 1.0, 0.0), epsilon = 1e-5);

        let bottom_right_far = Vector3::new(200.0, 300.0, 1000.0) * m;
        assert_abs_diff_eq!(bottom_right_far, Vector3::new(1.0, -1.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_viewport_maps_ndc_to_pixels() {
        let mut m = garbage();
        m.set_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        assert_eq!(m[1][1], -360.0);

        assert_eq!(Vector3::zero() * m, Vector3::new(640.0, 360.0, 0.0));
        assert_eq!(Vector3::new(-1.0, 1.0, 1.0) * m, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3::new(1.0, -1.0, 0.0) * m, Vector3::new(1280.0, 720.0, 0.0));
    }

    #[test]
    fn test_transpose_swaps_off_diagonal() {
        let mut m = Matrix4x4::from_rows(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        );
        let original = m;
        m.transpose();
        assert_eq!(m.row(0), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m.row(3), [4.0, 8.0, 12.0, 16.0]);
        assert_eq!(m.transposed(), original);
    }

    #[test]
    fn test_transpose_twice_is_exact() {
        let m = Matrix4x4::affine(
            Vector3::new(0.3, 1.7, 2.9),
            Vector3::new(0.1, 0.2, 0.3),
            Vector3::new(-1.0, 0.5, 3.3),
        );
        assert_eq!(m.transposed().transposed(), m);
    }
}
