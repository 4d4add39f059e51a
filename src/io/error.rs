//! Error types for tile validation, placement search and pattern scanning

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum TileError {
    /// A tile or pattern does not meet the structural requirements
    ///
    /// Raised for non-square tiles, inconsistent row lengths, mixed tile
    /// sizes, duplicate identifiers and tile counts that cannot form a
    /// square layout.
    Validation {
        /// Identifier of the offending tile, when one is known
        tile: Option<String>,
        /// Description of what is wrong
        reason: String,
    },

    /// Tile corpus text could not be parsed
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Placement search exhausted every candidate without a full layout
    NoSolution {
        /// Layout dimensions (rows, cols) that were attempted
        grid_dimensions: (usize, usize),
        /// Candidate placements examined before giving up
        steps: u64,
    },

    /// No orientation of the composite image contains the pattern
    NoPatternFound {
        /// Number of orientations that were scanned
        orientations_scanned: usize,
    },

    /// An operation was called on data that is not ready for it
    Precondition {
        /// Operation that was attempted
        operation: &'static str,
        /// What was missing
        reason: String,
    },

    /// Placement search examined more candidates than the configured budget
    BudgetExceeded {
        /// The configured step limit
        limit: u64,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation {
                tile: Some(tile),
                reason,
            } => write!(f, "Invalid tile {tile}: {reason}"),
            Self::Validation { tile: None, reason } => {
                write!(f, "Invalid tile set: {reason}")
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::NoSolution {
                grid_dimensions,
                steps,
            } => {
                write!(
                    f,
                    "No consistent {}x{} layout exists (search gave up after {steps} steps)",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::NoPatternFound {
                orientations_scanned,
            } => {
                write!(
                    f,
                    "Pattern not found in any of {orientations_scanned} image orientations"
                )
            }
            Self::Precondition { operation, reason } => {
                write!(f, "Cannot {operation}: {reason}")
            }
            Self::BudgetExceeded { limit } => {
                write!(f, "Placement search exceeded its budget of {limit} steps")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a validation error, optionally naming the tile at fault
pub fn validation_error(tile: Option<&str>, reason: &impl ToString) -> TileError {
    TileError::Validation {
        tile: tile.map(str::to_string),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TileError {
    TileError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
