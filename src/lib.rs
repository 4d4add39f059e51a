//! Reassembly of scrambled square image tiles and pattern search in the result
//!
//! Each tile may have been rotated or mirrored. The solver finds an
//! arrangement in which every pair of neighbouring tiles agrees on its shared
//! border, stitches the tile interiors into one image and scans that image, in
//! all eight orientations, for a pattern such as the sea monster.

#![deny(unsafe_code)]

/// Placement search, edge matching and corner detection
pub mod algorithm;
/// Composite image assembly and pattern scanning
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, tiles, orientations and layout grids
pub mod spatial;

pub use io::error::{Result, TileError};
