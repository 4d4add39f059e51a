//! Physical tiles and validation of a complete tile set

use std::collections::HashSet;

use crate::io::configuration::MIN_TILE_SIZE;
use crate::io::error::{Result, TileError, computation_error, validation_error};
use crate::spatial::pixels::PixelGrid;

/// A tile as originally supplied: a stable identifier plus its canonical pixels
///
/// Two physical tiles are the same tile iff their identifiers are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicalTile {
    id: String,
    pixels: PixelGrid,
}

impl PhysicalTile {
    /// Pair an identifier with its canonical pixels
    pub fn new(id: impl Into<String>, pixels: PixelGrid) -> Self {
        Self {
            id: id.into(),
            pixels,
        }
    }

    /// Build a tile from `#`/`.` text rows
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the tile if the rows do not form a
    /// square `#`/`.` grid
    pub fn from_rows<S: AsRef<str>>(id: impl Into<String>, rows: &[S]) -> Result<Self> {
        let id = id.into();
        let pixels = PixelGrid::from_rows(rows).map_err(|error| match error {
            TileError::Validation { tile: None, reason } => TileError::Validation {
                tile: Some(id.clone()),
                reason,
            },
            other => other,
        })?;
        Ok(Self { id, pixels })
    }

    /// Stable identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Canonical pixels as given
    pub const fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Identifier interpreted as an integer
    ///
    /// # Errors
    ///
    /// Returns a computation error if the identifier is not a non-negative integer
    pub fn numeric_id(&self) -> Result<u64> {
        parse_numeric_id(&self.id)
    }
}

/// Parse an opaque tile identifier as an integer
///
/// # Errors
///
/// Returns a computation error if the identifier is not a non-negative integer
pub fn parse_numeric_id(id: &str) -> Result<u64> {
    id.trim().parse::<u64>().map_err(|parse_error| {
        computation_error("corner product", &format!("tile id {id:?}: {parse_error}"))
    })
}

/// Multiply identifiers read as integers
///
/// # Errors
///
/// Returns a computation error if an identifier is not numeric or the product
/// overflows
pub fn identifier_product<'s>(ids: impl IntoIterator<Item = &'s str>) -> Result<u64> {
    ids.into_iter().try_fold(1_u64, |product, id| {
        product
            .checked_mul(parse_numeric_id(id)?)
            .ok_or_else(|| computation_error("corner product", &"product overflows u64"))
    })
}

/// A validated collection of tiles that can form a square layout
///
/// Guarantees: at least one tile, every tile the same side length (at least
/// [`MIN_TILE_SIZE`]), unique identifiers, and a perfect-square tile count.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<PhysicalTile>,
    tile_size: usize,
    layout_side: usize,
}

impl TileSet {
    /// Validate a list of tiles
    ///
    /// # Errors
    ///
    /// Returns a validation error if the list is empty, tiles differ in size or
    /// are smaller than [`MIN_TILE_SIZE`], an identifier repeats, or the count
    /// is not a perfect square
    pub fn new(tiles: Vec<PhysicalTile>) -> Result<Self> {
        let Some(first) = tiles.first() else {
            return Err(validation_error(None, &"no tiles supplied"));
        };
        let tile_size = first.pixels().side();

        let mut seen = HashSet::new();
        for tile in &tiles {
            let side = tile.pixels().side();
            if side != tile_size {
                return Err(validation_error(
                    Some(tile.id()),
                    &format!("side {side} differs from the first tile's side {tile_size}"),
                ));
            }
            if side < MIN_TILE_SIZE {
                return Err(validation_error(
                    Some(tile.id()),
                    &format!("side {side} is below the minimum of {MIN_TILE_SIZE}"),
                ));
            }
            if !seen.insert(tile.id()) {
                return Err(validation_error(Some(tile.id()), &"duplicate identifier"));
            }
        }

        let layout_side = exact_square_root(tiles.len()).ok_or_else(|| {
            validation_error(
                None,
                &format!("{} tiles cannot form a square layout", tiles.len()),
            )
        })?;

        Ok(Self {
            tiles,
            tile_size,
            layout_side,
        })
    }

    /// Tiles in input order
    pub fn tiles(&self) -> &[PhysicalTile] {
        &self.tiles
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated set; provided for API completeness
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length shared by every tile
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Tiles per side of the square layout
    pub const fn layout_side(&self) -> usize {
        self.layout_side
    }
}

fn exact_square_root(n: usize) -> Option<usize> {
    let root = n.isqrt();
    (root * root == n).then_some(root)
}
