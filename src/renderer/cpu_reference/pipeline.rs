//! Per-frame transform chain: local -> world -> view -> projection -> pixels.

use tracing::warn;

use crate::numerics::builders::{
    make_matrix_affine, make_matrix_perspective_fov, make_matrix_viewport,
};
use crate::numerics::{Matrix4x4, Vector3};
use crate::renderer::config::RenderConfig;
use crate::renderer::cpu_reference::scene::Scene;

/// Every matrix built for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub world: Matrix4x4,
    pub camera: Matrix4x4,
    pub view: Matrix4x4,
    pub projection: Matrix4x4,
    pub world_view_projection: Matrix4x4,
    pub viewport: Matrix4x4,
}

impl FrameTransforms {
    pub fn compute(scene: &Scene, config: &RenderConfig) -> Self {
        let world = make_matrix_affine(Vector3::one(), scene.rotate, scene.translate);
        let camera = make_matrix_affine(Vector3::one(), Vector3::zero(), scene.camera_position);

        // A camera that cannot be inverted is used as-is.
        let view = match camera.try_inverse() {
            Ok(view) => view,
            Err(err) => {
                warn!(error = %err, "camera matrix is not invertible, using it unchanged");
                camera
            }
        };

        let projection = make_matrix_perspective_fov(
            config.fov_y,
            config.aspect_ratio(),
            config.near_clip,
            config.far_clip,
        );
        let viewport = make_matrix_viewport(
            0.0,
            0.0,
            config.width as f32,
            config.height as f32,
            0.0,
            1.0,
        );

        Self {
            world,
            camera,
            view,
            projection,
            world_view_projection: world * view * projection,
            viewport,
        }
    }

    /// Local-space point to screen pixels.
    pub fn project(&self, local: Vector3) -> Vector3 {
        (local * self.world_view_projection) * self.viewport
    }

    pub fn project_triangle(&self, local: &[Vector3; 3]) -> [Vector3; 3] {
        local.map(|vertex| self.project(vertex))
    }
}

/// Backface test on screen-space vertices.
///
/// The face normal is `(v1 - v0) x (v2 - v1)`; the triangle is drawn when
/// its dot product with the camera position is not positive.
pub fn is_front_facing(camera_position: &Vector3, screen: &[Vector3; 3]) -> bool {
    let normal = (screen[1] - screen[0]).cross(&(screen[2] - screen[1]));
    camera_position.dot(&normal) <= 0.0
}
