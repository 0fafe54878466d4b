//! Prelude for prism::renderer
//!
//! Re-exports the renderer trait, the CPU reference renderer and the types
//! needed to configure and drive it.

pub use super::config::RenderConfig;
pub use super::cpu_reference::reference::render_frames_to_png;
pub use super::cpu_reference::{CpuReferenceRenderer, FrameReport};
pub use super::input::{KeyboardState, Keys};
pub use super::{run, run_with, RenderError, Renderer};
