//! End-to-end pipeline: orientation, placement search, composition and scan

use crate::algorithm::search::{SearchObserver, search_layout};
use crate::analysis::compositor::compose;
use crate::analysis::pattern::Pattern;
use crate::analysis::scanner::{ScanOutcome, scan};
use crate::io::configuration::SolverConfig;
use crate::io::error::Result;
use crate::spatial::grid::Placement;
use crate::spatial::orientation::OrientationCatalog;
use crate::spatial::pixels::PixelGrid;
use crate::spatial::tiles::{PhysicalTile, TileSet, identifier_product};

/// A validated, oriented tile set ready to be searched
#[derive(Clone, Debug)]
pub struct Solver {
    catalog: OrientationCatalog,
    config: SolverConfig,
}

impl Solver {
    /// Validate the tiles and derive all orientation variants
    ///
    /// # Errors
    ///
    /// Returns a validation error if the tiles do not form a valid square set
    pub fn new(tiles: Vec<PhysicalTile>, config: SolverConfig) -> Result<Self> {
        let tile_set = TileSet::new(tiles)?;
        Ok(Self {
            catalog: OrientationCatalog::build(&tile_set),
            config,
        })
    }

    /// All oriented variants
    pub const fn catalog(&self) -> &OrientationCatalog {
        &self.catalog
    }

    /// Configuration this solver runs with
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Search for a layout and stitch its composite image
    ///
    /// Returns `Ok(None)` when the configuration disables the search.
    ///
    /// # Errors
    ///
    /// Returns `NoSolution` or `BudgetExceeded` from the search, or a
    /// precondition error if composition fails
    pub fn solve(&self, observer: &mut dyn SearchObserver) -> Result<Option<SolvedPuzzle>> {
        if !self.config.run_search {
            return Ok(None);
        }

        let outcome = search_layout(&self.catalog, self.config.max_steps, observer)?;
        let corner_ids = outcome.grid.corners()?.map(|tile| tile.id().to_string());

        Ok(Some(SolvedPuzzle {
            layout: outcome.grid.layout()?,
            composite: compose(&outcome.grid)?,
            corner_ids,
            steps: outcome.steps,
        }))
    }
}

/// Owned summary of a solved layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolvedPuzzle {
    /// Identifier and orientation of every cell, row-major
    pub layout: Vec<Vec<Placement>>,
    /// Corner identifiers: top-left, top-right, bottom-left, bottom-right
    pub corner_ids: [String; 4],
    /// Candidate variants the search examined
    pub steps: u64,
    /// Border-trimmed composite image
    pub composite: PixelGrid,
}

impl SolvedPuzzle {
    /// Product of the corner identifiers as integers
    ///
    /// # Errors
    ///
    /// Returns a computation error if an identifier is not numeric or the
    /// product overflows
    pub fn corner_product(&self) -> Result<u64> {
        identifier_product(self.corner_ids.iter().map(String::as_str))
    }

    /// Scan the composite image for a pattern
    ///
    /// # Errors
    ///
    /// Returns `NoPatternFound` when no orientation contains the pattern
    pub fn scan(&self, pattern: &Pattern) -> Result<ScanOutcome> {
        scan(&self.composite, pattern)
    }
}

/// Everything a full run produces
#[derive(Clone, Debug)]
pub struct PuzzleReport {
    /// Number of physical tiles
    pub tile_count: usize,
    /// Tiles per side of the layout
    pub layout_side: usize,
    /// The solved layout, absent when the search was disabled
    pub solved: Option<SolvedPuzzle>,
    /// Pattern scan of the composite, absent when the search was disabled
    pub scan: Option<ScanOutcome>,
}

impl PuzzleReport {
    /// Corner product of the solved layout, if there is one
    ///
    /// # Errors
    ///
    /// See [`SolvedPuzzle::corner_product`]
    pub fn corner_product(&self) -> Result<Option<u64>> {
        self.solved
            .as_ref()
            .map(SolvedPuzzle::corner_product)
            .transpose()
    }
}

/// Run the whole pipeline on a tile list
///
/// # Errors
///
/// Returns validation errors for malformed tiles, `NoSolution` or
/// `BudgetExceeded` from the search, and `NoPatternFound` from the scan
pub fn solve_puzzle(
    tiles: Vec<PhysicalTile>,
    pattern: &Pattern,
    config: SolverConfig,
    observer: &mut dyn SearchObserver,
) -> Result<PuzzleReport> {
    let solver = Solver::new(tiles, config)?;
    let solved = solver.solve(observer)?;
    let scan = solved
        .as_ref()
        .map(|puzzle| puzzle.scan(pattern))
        .transpose()?;

    Ok(PuzzleReport {
        tile_count: solver.catalog().tile_count(),
        layout_side: solver.catalog().layout_side(),
        solved,
        scan,
    })
}
