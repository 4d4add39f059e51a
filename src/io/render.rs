//! Plain-text views of layouts and images

use std::collections::HashSet;
use std::fmt::Write;

use crate::spatial::grid::Placement;
use crate::spatial::pixels::PixelGrid;

/// Character for a set cell
pub const SET_CHAR: char = '#';
/// Character for an unset cell
pub const UNSET_CHAR: char = '.';
/// Character for a set cell covered by a pattern occurrence
pub const MARK_CHAR: char = 'O';

/// Render an image, drawing `marked` cells with [`MARK_CHAR`]
pub fn render_marked(image: &PixelGrid, marked: &HashSet<(usize, usize)>) -> String {
    let side = image.side();
    let mut out = String::with_capacity(side * (side + 1));
    for row in 0..side {
        for col in 0..side {
            let ch = if marked.contains(&(row, col)) {
                MARK_CHAR
            } else if image.get(row, col) {
                SET_CHAR
            } else {
                UNSET_CHAR
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Render a layout as a table of `id/orientation` cells
pub fn render_layout(layout: &[Vec<Placement>]) -> String {
    let width = layout
        .iter()
        .flatten()
        .map(|placement| placement.id.len() + 2)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in layout {
        let cells: Vec<String> = row
            .iter()
            .map(|placement| {
                let cell = format!("{}/{}", placement.id, placement.orientation);
                format!("{cell:<width$}")
            })
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", cells.join(" ").trim_end());
    }
    out
}
