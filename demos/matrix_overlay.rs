//! Matrix overlay demo
//!
//! Builds the matrices of one frame with the free-function builders and
//! prints them through a text sink that writes to stdout.

use prism::builders::*;
use prism::overlay::{matrix_screen_printf, vector_screen_printf, TextSink, ROW_HEIGHT};
use prism::{Matrix4x4, Vector3};

/// Prints every item on its own line, prefixed with its position.
struct StdoutSink;

impl TextSink for StdoutSink {
    fn print(&mut self, x: i32, y: i32, text: &str) {
        println!("[{:4},{:4}] {}", x, y, text);
    }
}

fn main() {
    let mut sink = StdoutSink;

    let world = make_matrix_affine(
        Vector3::one(),
        Vector3::new(0.0, 0.5, 0.0),
        Vector3::new(0.0, 0.0, 30.0),
    );
    let camera = make_matrix_affine(Vector3::one(), Vector3::zero(), Vector3::new(0.0, 0.0, -100.0));
    let view = make_matrix_inverse(camera);
    let projection = make_matrix_perspective_fov(0.45, 1280.0 / 720.0, 0.1, 100.0);
    let viewport = make_matrix_viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
    let world_view_projection = world * view * projection;

    let block = 5 * ROW_HEIGHT;
    matrix_screen_printf(&mut sink, 0, 0, &world, "world");
    matrix_screen_printf(&mut sink, 0, block, &view, "view");
    matrix_screen_printf(&mut sink, 0, 2 * block, &world_view_projection, "worldViewProjection");

    let screen = (Vector3::new(0.0, 15.0, 0.0) * world_view_projection) * viewport;
    vector_screen_printf(&mut sink, 0, 3 * block, &screen, "top vertex on screen");

    // Inversion failure is visible through try_inverse only.
    let singular = Matrix4x4::zero();
    match singular.try_inverse() {
        Ok(_) => println!("unexpected inverse of the zero matrix"),
        Err(err) => println!("zero matrix: {}", err),
    }
    assert_eq!(make_matrix_inverse(singular), singular);

    println!("\nview (Display):\n{}", view);
}
