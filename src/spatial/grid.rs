//! Layout grid of placed oriented tiles
//!
//! The grid holds borrowed references into an orientation catalog. Placement
//! and removal are the only mutations; the search owns the grid exclusively
//! while it runs.

use ndarray::Array2;

use crate::io::error::{Result, TileError};
use crate::spatial::orientation::OrientedTile;
use crate::spatial::tiles::identifier_product;

/// Identifier and orientation of one placed cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Identifier of the physical tile
    pub id: String,
    /// Index of the orientation variant (0..8)
    pub orientation: usize,
}

/// An `rows x cols` matrix of optional placed tiles
#[derive(Clone, Debug)]
pub struct TileGrid<'a> {
    cells: Array2<Option<&'a OrientedTile>>,
}

impl<'a> TileGrid<'a> {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Tile at a cell, `None` when empty or out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&'a OrientedTile> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Put a tile in a cell, returning whatever was there before
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the cell lies outside the grid
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        tile: &'a OrientedTile,
    ) -> Result<Option<&'a OrientedTile>> {
        let dimensions = self.dimensions();
        let cell = self.cells.get_mut((row, col)).ok_or_else(|| TileError::Precondition {
            operation: "place tile",
            reason: format!("cell ({row}, {col}) is outside the {dimensions:?} grid"),
        })?;
        Ok(cell.replace(tile))
    }

    /// Empty a cell, returning the tile that was there
    pub fn remove(&mut self, row: usize, col: usize) -> Option<&'a OrientedTile> {
        self.cells.get_mut((row, col)).and_then(Option::take)
    }

    /// Whether every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate occupied cells as (row, col, tile)
    pub fn placed(&self) -> impl Iterator<Item = (usize, usize, &'a OrientedTile)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| cell.map(|tile| (row, col, tile)))
    }

    /// The four corner tiles: top-left, top-right, bottom-left, bottom-right
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the grid is empty or a corner is unplaced
    pub fn corners(&self) -> Result<[&'a OrientedTile; 4]> {
        let last_row = self.rows().checked_sub(1);
        let last_col = self.cols().checked_sub(1);
        let (Some(last_row), Some(last_col)) = (last_row, last_col) else {
            return Err(TileError::Precondition {
                operation: "read corners",
                reason: "grid has no cells".to_string(),
            });
        };

        let corner = |row, col| {
            self.get(row, col).ok_or_else(|| TileError::Precondition {
                operation: "read corners",
                reason: format!("corner ({row}, {col}) is not placed"),
            })
        };

        Ok([
            corner(0, 0)?,
            corner(0, last_col)?,
            corner(last_row, 0)?,
            corner(last_row, last_col)?,
        ])
    }

    /// Product of the four corner identifiers read as integers
    ///
    /// # Errors
    ///
    /// Returns a precondition error if a corner is unplaced, or a computation
    /// error if an identifier is not numeric or the product overflows
    pub fn corner_product(&self) -> Result<u64> {
        identifier_product(self.corners()?.iter().map(|tile| tile.id()))
    }

    /// Row-major snapshot of identifiers and orientations
    ///
    /// # Errors
    ///
    /// Returns a precondition error if any cell is unplaced
    pub fn layout(&self) -> Result<Vec<Vec<Placement>>> {
        self.cells
            .rows()
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        cell.map(|tile| Placement {
                            id: tile.id().to_string(),
                            orientation: tile.orientation().index(),
                        })
                        .ok_or_else(|| TileError::Precondition {
                            operation: "read layout",
                            reason: format!("cell ({row}, {col}) is not placed"),
                        })
                    })
                    .collect()
            })
            .collect()
    }
}
