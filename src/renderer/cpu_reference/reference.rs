use std::path::Path;

use crate::renderer::config::RenderConfig;
use crate::renderer::input::Keys;
use crate::renderer::{run, RenderError, Renderer};

use super::{CpuReferenceRenderer, FrameReport};

/// Render `frames` with a fresh CPU reference renderer and save the last
/// frame to `path` as PNG.
///
/// Returns the report of the last rendered frame, or `None` when `frames`
/// was empty (nothing is written then).
pub fn render_frames_to_png<I>(
    config: RenderConfig,
    frames: I,
    path: &Path,
) -> Result<Option<FrameReport>, RenderError>
where
    I: IntoIterator<Item = Keys>,
{
    let mut renderer = CpuReferenceRenderer::new(config)?;
    renderer.start()?;
    let rendered = run(&mut renderer, frames);
    renderer.stop();

    if rendered? == 0 {
        return Ok(None);
    }
    renderer.save_png(path)?;
    Ok(renderer.last_frame().cloned())
}
