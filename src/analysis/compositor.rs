//! Stitching a solved layout into one composite image
//!
//! Each placed tile loses its one-cell border ring (the edges used for
//! matching) and the trimmed blocks are laid out edge to edge.

use crate::io::configuration::MIN_TILE_SIZE;
use crate::io::error::{Result, TileError};
use crate::spatial::grid::TileGrid;
use crate::spatial::pixels::PixelGrid;

/// Build the composite image of a fully placed square layout
///
/// The result has side `rows * (tile_size - 2)`.
///
/// # Errors
///
/// Returns a precondition error if the layout is not square, any cell is
/// unplaced, tiles differ in size, or tiles are too small to trim
pub fn compose(grid: &TileGrid<'_>) -> Result<PixelGrid> {
    let (rows, cols) = grid.dimensions();
    if rows != cols {
        return Err(precondition(format!("layout is {rows}x{cols}, expected a square")));
    }

    let mut blocks = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let tile = grid
                .get(row, col)
                .ok_or_else(|| precondition(format!("cell ({row}, {col}) is not placed")))?;
            blocks.push(tile.pixels());
        }
    }

    let tile_size = blocks.first().map_or(0, |pixels| pixels.side());
    if rows > 0 && tile_size < MIN_TILE_SIZE {
        return Err(precondition(format!(
            "tile side {tile_size} leaves nothing after trimming"
        )));
    }
    if let Some(odd) = blocks.iter().find(|pixels| pixels.side() != tile_size) {
        return Err(precondition(format!(
            "tile side {} differs from {tile_size}",
            odd.side()
        )));
    }

    let block = tile_size.saturating_sub(2);
    let side = rows * block;

    // +1 skips each tile's border ring
    Ok(PixelGrid::from_fn(side, |(y, x)| {
        let (block_row, block_col) = (y / block, x / block);
        blocks
            .get(block_row * cols + block_col)
            .is_some_and(|pixels| pixels.get(y % block + 1, x % block + 1))
    }))
}

fn precondition(reason: String) -> TileError {
    TileError::Precondition {
        operation: "compose image",
        reason,
    }
}
