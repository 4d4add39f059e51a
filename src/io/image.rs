//! PNG export of composite images with pattern occurrences highlighted

use image::{ImageBuffer, Rgba};
use std::collections::HashSet;
use std::path::Path;

use crate::io::configuration::{EXPORT_CELL_SCALE, PATTERN_COLOR, SET_COLOR, UNSET_COLOR};
use crate::io::error::{Result, TileError};
use crate::spatial::pixels::PixelGrid;

/// Colour of one image cell
fn cell_color(
    image: &PixelGrid,
    covered: &HashSet<(usize, usize)>,
    row: usize,
    col: usize,
) -> Rgba<u8> {
    if covered.contains(&(row, col)) {
        Rgba(PATTERN_COLOR)
    } else if image.get(row, col) {
        Rgba(SET_COLOR)
    } else {
        Rgba(UNSET_COLOR)
    }
}

/// Export an image as PNG, each cell drawn as a square block
///
/// Cells in `covered` use the pattern colour.
///
/// # Errors
///
/// Returns an error if:
/// - The image has no cells
/// - The image is too large for the PNG dimension range
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(
    image: &PixelGrid,
    covered: &HashSet<(usize, usize)>,
    output_path: &Path,
) -> Result<()> {
    let side = image.side();
    if side == 0 {
        return Err(TileError::Precondition {
            operation: "export image",
            reason: "image has no cells".to_string(),
        });
    }

    let pixels = u32::try_from(side)
        .ok()
        .and_then(|cells| cells.checked_mul(EXPORT_CELL_SCALE))
        .ok_or_else(|| TileError::Precondition {
            operation: "export image",
            reason: format!("image side {side} is too large to export"),
        })?;

    let img = ImageBuffer::from_fn(pixels, pixels, |x, y| {
        let row = (y / EXPORT_CELL_SCALE) as usize;
        let col = (x / EXPORT_CELL_SCALE) as usize;
        cell_color(image, covered, row, col)
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
