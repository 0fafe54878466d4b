//! Per-frame scene state for the CPU reference renderer: one triangle in
//! front of a fixed camera.

use crate::numerics::Vector3;
use crate::renderer::config::RenderConfig;
use crate::renderer::input::Keys;

/// Triangle vertices in local space.
pub const LOCAL_VERTICES: [Vector3; 3] = [
    Vector3::new(0.0, 15.0, 0.0),
    Vector3::new(-20.0, -20.0, 0.0),
    Vector3::new(20.0, -20.0, 0.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub local_vertices: [Vector3; 3],
    /// Euler angles of the triangle in radians.
    pub rotate: Vector3,
    pub translate: Vector3,
    pub camera_position: Vector3,
    triangle_speed: f32,
    rotate_step: f32,
}

impl Scene {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            local_vertices: LOCAL_VERTICES,
            rotate: Vector3::zero(),
            translate: config.triangle_translate,
            camera_position: config.camera_position,
            triangle_speed: config.triangle_speed,
            rotate_step: config.rotate_step,
        }
    }

    /// Apply one frame of keyboard movement and spin the triangle about Y.
    ///
    /// Backward movement is refused once it would put the triangle at or
    /// behind the camera plane.
    pub fn update(&mut self, keys: &Keys) {
        let speed = self.triangle_speed;
        let mut movement = Vector3::zero();

        if keys.forward {
            movement.z += speed;
        }
        if keys.backward && self.translate.z - speed > self.camera_position.z {
            movement.z -= speed;
        }
        if keys.left {
            movement.x -= speed;
        }
        if keys.right {
            movement.x += speed;
        }

        self.translate += movement;
        self.rotate.y += self.rotate_step;
    }
}
