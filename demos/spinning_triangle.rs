//! Spinning triangle demo
//!
//! Drives the CPU reference renderer through a scripted sequence of key
//! presses and writes every 30th frame as a PNG.
//!
//! ```text
//! cargo run --example spinning_triangle -- "viewport_size=640x360" frames
//! ```

use std::path::PathBuf;

use prism::renderer::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let parameters = args.next().unwrap_or_default();
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "frames".to_string()));
    std::fs::create_dir_all(&output_dir)?;

    let config = RenderConfig::from_parameters(&parameters)?;
    println!("Rendering with config:\n{}", config.to_json_string()?);

    // Push the triangle away, slide it right, let it spin, then quit.
    let script = std::iter::repeat(Keys::forward())
        .take(30)
        .chain(std::iter::repeat(Keys::right()).take(30))
        .chain(std::iter::repeat(Keys::NONE).take(59))
        .chain(std::iter::once(Keys::escape()));

    let mut renderer = CpuReferenceRenderer::new(config)?;
    renderer.start()?;

    let mut drawn_frames = 0;
    let rendered = run_with(&mut renderer, script, |renderer, index| {
        if renderer.last_frame().is_some_and(|frame| frame.drawn) {
            drawn_frames += 1;
        }
        if index % 30 == 0 {
            let path = output_dir.join(format!("frame_{:04}.png", index));
            renderer.save_png(&path)?;
            println!("wrote {}", path.display());
        }
        Ok(())
    })?;
    renderer.stop();

    println!("{} frames rendered, {} with the triangle visible", rendered, drawn_frames);
    for item in renderer.overlay().items() {
        println!("({:4}, {:4}) {}", item.x, item.y, item.text);
    }

    Ok(())
}
