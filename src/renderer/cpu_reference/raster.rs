//! Triangle fill into an RGBA canvas.

use image::{Rgba, RgbaImage};

/// Fill the whole canvas with `color`.
pub fn clear(canvas: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in canvas.pixels_mut() {
        *pixel = color;
    }
}

// Corners span the full i32 range, so products need 2 * 33 bits.
fn edge(a: (i128, i128), b: (i128, i128), p: (i128, i128)) -> i128 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Fill the triangle with integer pixel corners `vertices`, clipped to the
/// canvas. Either winding is accepted; degenerate triangles draw nothing.
///
/// Returns the number of pixels written.
pub fn fill_triangle(canvas: &mut RgbaImage, vertices: [(i32, i32); 3], color: Rgba<u8>) -> u64 {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let [a, b, c] = vertices.map(|(x, y)| (i128::from(x), i128::from(y)));
    let area = edge(a, b, c);
    if area == 0 {
        return 0;
    }

    let min_x = a.0.min(b.0).min(c.0).max(0);
    let max_x = a.0.max(b.0).max(c.0).min(i128::from(width) - 1);
    let min_y = a.1.min(b.1).min(c.1).max(0);
    let max_y = a.1.max(b.1).max(c.1).min(i128::from(height) - 1);

    let mut filled = 0;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x, y);
            let w0 = edge(b, c, p);
            let w1 = edge(c, a, p);
            let w2 = edge(a, b, p);

            let inside = if area > 0 {
                w0 >= 0 && w1 >= 0 && w2 >= 0
            } else {
                w0 <= 0 && w1 <= 0 && w2 <= 0
            };

            if inside {
                canvas.put_pixel(x as u32, y as u32, color);
                filled += 1;
            }
        }
    }

    filled
}

/// Count pixels equal to `color`.
pub fn count_pixels(canvas: &RgbaImage, color: Rgba<u8>) -> u64 {
    canvas.pixels().filter(|pixel| **pixel == color).count() as u64
}
