//! Solver constants and runtime configuration defaults

/// Smallest tile side that still leaves pixels after border trimming
pub const MIN_TILE_SIZE: usize = 3;

/// Size of the symmetry group of a square (4 rotations x 2 reflections)
pub const ORIENTATION_COUNT: usize = 8;

/// Number of pure rotations before the mirrored half of the sequence starts
pub const ROTATION_COUNT: usize = 4;

/// The sea monster pattern searched for in the composite image
///
/// `#` cells must be set; spaces are unconstrained.
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Search feedback settings
/// Candidate placements between progress spinner refreshes
pub const PROGRESS_TICK_INTERVAL: u64 = 256;

// Synthetic puzzle defaults
/// Fixed seed for reproducible synthetic puzzles
pub const DEFAULT_SEED: u64 = 42;
/// Smallest identifier handed out to synthetic tiles
pub const SYNTHETIC_ID_MIN: u64 = 1000;
/// Largest identifier (exclusive) handed out to synthetic tiles
pub const SYNTHETIC_ID_MAX: u64 = 10_000;

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// File extension of tile corpus inputs when a directory is scanned
pub const INPUT_EXTENSION: &str = "txt";
/// Pixel colour of set cells in exported images
pub const SET_COLOR: [u8; 4] = [20, 60, 120, 255];
/// Pixel colour of unset cells in exported images
pub const UNSET_COLOR: [u8; 4] = [210, 230, 245, 255];
/// Pixel colour of cells covered by a pattern occurrence
pub const PATTERN_COLOR: [u8; 4] = [230, 90, 40, 255];
/// Edge length, in output pixels, of one image cell
pub const EXPORT_CELL_SCALE: u32 = 4;

/// Runtime switches for a solver run
///
/// Passed explicitly into the entry point instead of process-wide toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Run the placement search; when false only validation and orientation run
    pub run_search: bool,
    /// Maximum candidate placements the search may examine
    pub max_steps: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            run_search: true,
            max_steps: None,
        }
    }
}
