//! Renderer module of prism
//!
//! Hosts the CPU reference renderer that drives the transform pipeline every
//! frame, its configuration and the frame loop.

pub mod config;
pub mod cpu_reference;
pub mod input;
pub mod prelude;

use thiserror::Error;
use tracing::info;

use crate::renderer::input::{KeyboardState, Keys};

/// Errors surfaced by renderers and their configuration.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("renderer is not running")]
    NotRunning,

    #[error("renderer is already running")]
    AlreadyRunning,

    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse render configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("failed to write frame: {0}")]
    Image(#[from] image::ImageError),
}

/// Trait that all renderers implement.
///
/// The `Send + Sync` bounds allow them to be passed between threads.
pub trait Renderer: Send + Sync {
    fn start(&mut self) -> Result<(), RenderError>;
    fn stop(&mut self);
    /// Advance the simulation by one frame of input.
    fn update(&mut self, keys: &Keys);
    fn render_frame(&mut self) -> Result<(), RenderError>;
    fn name(&self) -> &'static str;
}

/// Drive `renderer` with one frame per item of `frames`.
///
/// Stops early on the frame where escape goes from released to pressed
/// (that frame is still rendered). Returns the number of rendered frames.
pub fn run<R, I>(renderer: &mut R, frames: I) -> Result<u64, RenderError>
where
    R: Renderer + ?Sized,
    I: IntoIterator<Item = Keys>,
{
    run_with(renderer, frames, |_, _| Ok(()))
}

/// Like [`run`], calling `on_frame` with the frame index after each frame.
pub fn run_with<R, I, F>(renderer: &mut R, frames: I, mut on_frame: F) -> Result<u64, RenderError>
where
    R: Renderer + ?Sized,
    I: IntoIterator<Item = Keys>,
    F: FnMut(&R, u64) -> Result<(), RenderError>,
{
    let mut keyboard = KeyboardState::default();
    let mut rendered = 0;

    for keys in frames {
        keyboard.advance(keys);

        renderer.update(keyboard.current());
        renderer.render_frame()?;
        on_frame(&*renderer, rendered)?;
        rendered += 1;

        if keyboard.escape_triggered() {
            info!(frames = rendered, renderer = renderer.name(), "escape pressed, leaving frame loop");
            break;
        }
    }

    Ok(rendered)
}
