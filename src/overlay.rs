//! Debug text overlay.
//!
//! Formats matrices and vectors as positioned text items. Where the text ends
//! up is decided by a [`TextSink`]; [`TextBuffer`] just collects it.

use crate::numerics::{Matrix4x4, Vector3};

/// Vertical distance between printed matrix rows, in pixels.
pub const ROW_HEIGHT: i32 = 20;
/// Horizontal distance between printed columns, in pixels.
pub const COLUMN_WIDTH: i32 = 60;

/// Anything that can place a line of text at screen coordinates.
pub trait TextSink {
    fn print(&mut self, x: i32, y: i32, text: &str);
}

/// A piece of text queued at a screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Collects printed text for one frame.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    items: Vec<TextItem>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text of the items whose `y` equals `y`, left to right.
    pub fn line_at(&self, y: i32) -> Vec<&str> {
        let mut line: Vec<&TextItem> = self.items.iter().filter(|item| item.y == y).collect();
        line.sort_by_key(|item| item.x);
        line.into_iter().map(|item| item.text.as_str()).collect()
    }
}

impl TextSink for TextBuffer {
    fn print(&mut self, x: i32, y: i32, text: &str) {
        self.items.push(TextItem {
            x,
            y,
            text: text.to_string(),
        });
    }
}

/// Print `label` followed by the 4x4 grid of `matrix` below it.
///
/// The label sits 10 pixels right of `x`; each value is printed as `%6.2f`
/// in its own cell, one row every [`ROW_HEIGHT`] and one column every
/// [`COLUMN_WIDTH`].
pub fn matrix_screen_printf<S>(sink: &mut S, x: i32, y: i32, matrix: &Matrix4x4, label: &str)
where
    S: TextSink + ?Sized,
{
    sink.print(x + 10, y, label);
    for (row, values) in matrix.data.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            sink.print(
                x + column as i32 * COLUMN_WIDTH,
                y + (row as i32 + 1) * ROW_HEIGHT,
                &format!("{:6.2}", value),
            );
        }
    }
}

/// Print the three components of `vector` followed by `label` on one line.
pub fn vector_screen_printf<S>(sink: &mut S, x: i32, y: i32, vector: &Vector3, label: &str)
where
    S: TextSink + ?Sized,
{
    for (column, value) in [vector.x, vector.y, vector.z].iter().enumerate() {
        sink.print(x + column as i32 * COLUMN_WIDTH, y, &format!("{:.2}", value));
    }
    sink.print(x + 3 * COLUMN_WIDTH, y, label);
}
