//! Backtracking placement search
//!
//! Cells are filled in row-major order. At each cell every variant of every
//! unused physical tile is tried in catalog order; a variant is accepted when
//! its up edge equals the down edge of the tile above and its left edge equals
//! the right edge of the tile to the left. The first complete layout wins.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::matcher::{fits_below, fits_right_of};
use crate::io::error::{Result, TileError};
use crate::spatial::grid::TileGrid;
use crate::spatial::orientation::{OrientationCatalog, OrientedTile};

/// Caller-supplied hook notified as the search progresses
///
/// All methods default to no-ops. The search never renders anything itself;
/// progress displays and debugging views are built on top of this trait.
pub trait SearchObserver {
    /// A candidate variant is about to be checked; `steps` counts checks so far
    fn on_step(&mut self, _steps: u64) {}

    /// A variant was placed at a cell
    fn on_place(&mut self, _row: usize, _col: usize, _tile: &OrientedTile) {}

    /// A previously placed variant was removed while backtracking
    fn on_backtrack(&mut self, _row: usize, _col: usize, _tile: &OrientedTile) {}
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// A completed layout and the work it took to find it
#[derive(Clone, Debug)]
pub struct SearchOutcome<'a> {
    /// Fully populated layout
    pub grid: TileGrid<'a>,
    /// Candidate variants examined
    pub steps: u64,
}

/// Depth-first search state over one orientation catalog
pub struct PlacementSearch<'a, 'o> {
    catalog: &'a OrientationCatalog,
    grid: TileGrid<'a>,
    used: TileBitset,
    steps: u64,
    max_steps: Option<u64>,
    observer: &'o mut dyn SearchObserver,
}

impl<'a, 'o> PlacementSearch<'a, 'o> {
    /// Prepare a search over a square layout sized from the catalog
    pub fn new(catalog: &'a OrientationCatalog, observer: &'o mut dyn SearchObserver) -> Self {
        let side = catalog.layout_side();
        Self {
            catalog,
            grid: TileGrid::new(side, side),
            used: TileBitset::new(catalog.tile_count()),
            steps: 0,
            max_steps: None,
            observer,
        }
    }

    /// Limit the number of candidate checks; `None` removes the limit
    #[must_use]
    pub fn with_budget(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Run to the first complete layout
    ///
    /// # Errors
    ///
    /// Returns `NoSolution` when every candidate is exhausted,
    /// `BudgetExceeded` when the step limit is hit, or a precondition error
    /// if the catalog describes an empty layout
    pub fn run(mut self) -> Result<SearchOutcome<'a>> {
        if self.grid.cols() == 0 {
            return Err(TileError::Precondition {
                operation: "search placements",
                reason: "layout has no cells".to_string(),
            });
        }

        if self.fill(0)? {
            Ok(SearchOutcome {
                grid: self.grid,
                steps: self.steps,
            })
        } else {
            Err(TileError::NoSolution {
                grid_dimensions: self.grid.dimensions(),
                steps: self.steps,
            })
        }
    }

    fn fill(&mut self, cell: usize) -> Result<bool> {
        let cols = self.grid.cols();
        let (row, col) = (cell / cols, cell % cols);
        if row == self.grid.rows() {
            return Ok(true);
        }

        let catalog = self.catalog;
        for candidate in catalog.variants() {
            if self.used.contains(candidate.slot()) {
                continue;
            }
            self.count_step()?;
            if !self.fits(row, col, candidate) {
                continue;
            }

            self.used.insert(candidate.slot());
            self.grid.place(row, col, candidate)?;
            self.observer.on_place(row, col, candidate);

            if self.fill(cell + 1)? {
                return Ok(true);
            }

            self.grid.remove(row, col);
            self.used.remove(candidate.slot());
            self.observer.on_backtrack(row, col, candidate);
        }

        Ok(false)
    }

    fn fits(&self, row: usize, col: usize, candidate: &OrientedTile) -> bool {
        let above = row
            .checked_sub(1)
            .map(|above_row| self.grid.get(above_row, col));
        let left = col.checked_sub(1).map(|left_col| self.grid.get(row, left_col));

        let fits_above = match above {
            None => true,
            Some(tile) => tile.is_some_and(|above| fits_below(above, candidate)),
        };
        let fits_left = match left {
            None => true,
            Some(tile) => tile.is_some_and(|left| fits_right_of(left, candidate)),
        };

        fits_above && fits_left
    }

    fn count_step(&mut self) -> Result<()> {
        self.steps += 1;
        if let Some(limit) = self.max_steps.filter(|&limit| self.steps > limit) {
            return Err(TileError::BudgetExceeded { limit });
        }
        self.observer.on_step(self.steps);
        Ok(())
    }
}

/// Search a catalog for its first consistent layout
///
/// # Errors
///
/// See [`PlacementSearch::run`]
pub fn search_layout<'a>(
    catalog: &'a OrientationCatalog,
    max_steps: Option<u64>,
    observer: &mut dyn SearchObserver,
) -> Result<SearchOutcome<'a>> {
    PlacementSearch::new(catalog, observer)
        .with_budget(max_steps)
        .run()
}
