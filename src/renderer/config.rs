//! Render configuration.
//!
//! A [`RenderConfig`] can be built from defaults, from JSON, or from a
//! comma separated `key=value` parameter string such as
//! `"viewport_size=640x480,fov_y=0.6"`.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::numerics::Vector3;
use crate::renderer::RenderError;

/// Configuration of the CPU reference renderer and its scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    /// Distance the triangle moves per frame while a movement key is held.
    pub triangle_speed: f32,
    /// Rotation about Y added every frame, in radians.
    pub rotate_step: f32,
    pub camera_position: Vector3,
    /// Starting position of the triangle.
    pub triangle_translate: Vector3,
    /// RGBA fill color of drawn triangles.
    pub fill_color: [u8; 4],
    /// RGBA color the canvas is cleared to at the start of a frame.
    pub clear_color: [u8; 4],
    /// Print the world-view-projection matrix into the overlay every frame.
    pub show_matrices: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov_y: 0.45,
            near_clip: 0.1,
            far_clip: 100.0,
            triangle_speed: 1.0,
            rotate_step: PI / 60.0,
            camera_position: Vector3::new(0.0, 0.0, -100.0),
            triangle_translate: Vector3::new(0.0, 0.0, 30.0),
            fill_color: [255, 0, 0, 255],
            clear_color: [0, 0, 0, 255],
            show_matrices: false,
        }
    }
}

impl RenderConfig {
    /// Creates a default configuration with the given canvas size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check the values the projection and viewport divide by.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov_y > 0.0 && self.fov_y < PI) {
            return Err(RenderError::InvalidConfig(format!(
                "fov_y must be in (0, pi), got {}",
                self.fov_y
            )));
        }
        if !(self.near_clip > 0.0 && self.near_clip < self.far_clip) {
            return Err(RenderError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near_clip, self.far_clip
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RenderError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create configuration from parameter string.
    pub fn from_parameters(parameters: &str) -> Result<Self, RenderError> {
        let mut config = Self::default();

        for (key, value) in parse_parameters(parameters) {
            match key {
                "width" => config.width = parse_value(key, value)?,
                "height" => config.height = parse_value(key, value)?,
                "viewport_size" => {
                    let (width, height) = value.split_once('x').ok_or_else(|| {
                        RenderError::InvalidConfig(format!(
                            "viewport_size must look like WIDTHxHEIGHT, got {}",
                            value
                        ))
                    })?;
                    config.width = parse_value("viewport width", width)?;
                    config.height = parse_value("viewport height", height)?;
                }
                "fov_y" => config.fov_y = parse_value(key, value)?,
                "near_clip" => config.near_clip = parse_value(key, value)?,
                "far_clip" => config.far_clip = parse_value(key, value)?,
                "triangle_speed" => config.triangle_speed = parse_value(key, value)?,
                "rotate_step" => config.rotate_step = parse_value(key, value)?,
                "show_matrices" => config.show_matrices = parse_value(key, value)?,
                _ => {
                    return Err(RenderError::InvalidConfig(format!(
                        "unknown parameter: {}",
                        key
                    )))
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Split `"a=1, b=2"` into trimmed key/value pairs. Entries without `=` are
/// treated as a key with an empty value.
pub fn parse_parameters(parameters: &str) -> Vec<(&str, &str)> {
    parameters
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (entry, ""),
        })
        .collect()
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, RenderError> {
    value
        .parse::<T>()
        .map_err(|_| RenderError::InvalidConfig(format!("invalid {}: {}", key, value)))
}
