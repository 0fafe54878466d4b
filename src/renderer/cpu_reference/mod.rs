//! CPU reference renderer
//!
//! Runs the whole transform pipeline on the CPU every frame and fills the
//! resulting triangle into an in-memory RGBA canvas that can be saved as PNG.

pub mod pipeline;
pub mod raster;
pub mod reference;
pub mod scene;

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::{debug, info, trace};

use crate::numerics::{Matrix4x4, Vector3};
use crate::overlay::{matrix_screen_printf, vector_screen_printf, TextBuffer, ROW_HEIGHT};
use crate::renderer::config::RenderConfig;
use crate::renderer::input::Keys;
use crate::renderer::{RenderError, Renderer};

use pipeline::{is_front_facing, FrameTransforms};
use scene::Scene;

/// Operands of the cross product shown in the overlay.
const CROSS_OPERANDS: (Vector3, Vector3) = (
    Vector3::new(1.2, -3.9, 2.5),
    Vector3::new(2.8, 0.4, -1.3),
);

/// What happened in the last rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub index: u64,
    pub transforms: FrameTransforms,
    pub screen_vertices: [Vector3; 3],
    /// False when the backface test culled the triangle.
    pub drawn: bool,
    pub pixels_filled: u64,
}

#[derive(Debug)]
pub struct CpuReferenceRenderer {
    config: RenderConfig,
    scene: Scene,
    canvas: RgbaImage,
    overlay: TextBuffer,
    cross: Vector3,
    running: bool,
    frame_count: u64,
    last_frame: Option<FrameReport>,
}

impl CpuReferenceRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let scene = Scene::new(&config);
        let canvas = RgbaImage::from_pixel(config.width, config.height, Rgba(config.clear_color));
        let (lhs, rhs) = CROSS_OPERANDS;

        Ok(Self {
            config,
            scene,
            canvas,
            overlay: TextBuffer::new(),
            cross: lhs.cross(&rhs),
            running: false,
            frame_count: 0,
            last_frame: None,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Text printed during the last frame.
    pub fn overlay(&self) -> &TextBuffer {
        &self.overlay
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn last_frame(&self) -> Option<&FrameReport> {
        self.last_frame.as_ref()
    }

    /// Write the current canvas to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        image::save_buffer(
            path,
            self.canvas.as_raw(),
            self.canvas.width(),
            self.canvas.height(),
            image::ColorType::Rgba8,
        )?;
        debug!(path = %path.display(), "frame written");
        Ok(())
    }

    fn draw_overlay(&mut self, world_view_projection: &Matrix4x4) {
        self.overlay.clear();
        vector_screen_printf(&mut self.overlay, 0, 0, &self.cross, "Cross");
        if self.config.show_matrices {
            matrix_screen_printf(
                &mut self.overlay,
                0,
                2 * ROW_HEIGHT,
                world_view_projection,
                "worldViewProjection",
            );
        }
    }
}

impl Renderer for CpuReferenceRenderer {
    fn start(&mut self) -> Result<(), RenderError> {
        if self.running {
            return Err(RenderError::AlreadyRunning);
        }
        self.running = true;
        info!(
            width = self.config.width,
            height = self.config.height,
            "CpuReferenceRenderer started"
        );
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        info!(frames = self.frame_count, "CpuReferenceRenderer stopped");
    }

    fn update(&mut self, keys: &Keys) {
        self.scene.update(keys);
    }

    fn render_frame(&mut self) -> Result<(), RenderError> {
        if !self.running {
            return Err(RenderError::NotRunning);
        }

        raster::clear(&mut self.canvas, Rgba(self.config.clear_color));

        let transforms = FrameTransforms::compute(&self.scene, &self.config);
        let screen_vertices = transforms.project_triangle(&self.scene.local_vertices);
        self.draw_overlay(&transforms.world_view_projection);

        let drawn = is_front_facing(&self.scene.camera_position, &screen_vertices);
        let pixels_filled = if drawn {
            let corners = screen_vertices.map(|v| (v.x as i32, v.y as i32));
            raster::fill_triangle(&mut self.canvas, corners, Rgba(self.config.fill_color))
        } else {
            trace!(frame = self.frame_count, "triangle culled");
            0
        };

        debug!(frame = self.frame_count, drawn, pixels_filled, "frame rendered");

        self.last_frame = Some(FrameReport {
            index: self.frame_count,
            transforms,
            screen_vertices,
            drawn,
            pixels_filled,
        });
        self.frame_count += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "cpu_reference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::COLUMN_WIDTH;

    fn small_config() -> RenderConfig {
        RenderConfig::with_size(320, 180)
    }

    #[test]
    fn test_cpu_reference_lifecycle() {
        let mut r = CpuReferenceRenderer::new(small_config()).unwrap();
        assert!(matches!(r.render_frame(), Err(RenderError::NotRunning)));

        r.start().unwrap();
        assert!(matches!(r.start(), Err(RenderError::AlreadyRunning)));
        r.render_frame().unwrap();
        assert_eq!(r.frame_count(), 1);
        r.stop();
        assert!(!r.is_running());
        assert_eq!(r.name(), "cpu_reference");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RenderConfig::with_size(0, 10);
        assert!(matches!(
            CpuReferenceRenderer::new(config),
            Err(RenderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_facing_frame_fills_pixels() {
        let mut r = CpuReferenceRenderer::new(small_config()).unwrap();
        r.start().unwrap();
        r.scene_mut().rotate.y = std::f32::consts::PI;
        r.render_frame().unwrap();

        let report = r.last_frame().unwrap().clone();
        assert!(report.drawn);
        assert!(report.pixels_filled > 0);
        assert_eq!(
            raster::count_pixels(r.canvas(), Rgba(r.config().fill_color)),
            report.pixels_filled
        );
    }

    #[test]
    fn test_culled_frame_leaves_canvas_clear() {
        let mut r = CpuReferenceRenderer::new(small_config()).unwrap();
        r.start().unwrap();
        r.render_frame().unwrap();

        let report = r.last_frame().unwrap();
        assert!(!report.drawn);
        assert_eq!(report.pixels_filled, 0);
        assert_eq!(raster::count_pixels(r.canvas(), Rgba(r.config().fill_color)), 0);
    }

    #[test]
    fn test_overlay_contents() {
        let config = RenderConfig {
            show_matrices: true,
            ..small_config()
        };
        let mut r = CpuReferenceRenderer::new(config).unwrap();
        r.start().unwrap();
        r.render_frame().unwrap();

        assert_eq!(r.overlay().line_at(0), vec!["4.07", "8.56", "11.40", "Cross"]);
        assert_eq!(r.overlay().items()[3].x, 3 * COLUMN_WIDTH);
        assert_eq!(r.overlay().line_at(2 * ROW_HEIGHT), vec!["worldViewProjection"]);
        assert_eq!(r.overlay().items().len(), 4 + 17);

        r.render_frame().unwrap();
        assert_eq!(r.overlay().items().len(), 4 + 17);
    }
}
