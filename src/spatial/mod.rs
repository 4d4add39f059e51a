//! Spatial data structures for tiles and layouts
//!
//! This module contains:
//! - Pixel grids and the eight square symmetries
//! - Edge signatures and oriented tile variants
//! - Physical tiles and validated tile sets
//! - The layout grid the search fills
//! - A seeded generator of scrambled puzzles

/// Layout grid of placed oriented tiles
pub mod grid;
/// Edge signatures and the catalog of oriented variants
pub mod orientation;
/// Square pixel grids and orientation transforms
pub mod pixels;
/// Seeded scrambled puzzle generator
pub mod synthetic;
/// Physical tiles and tile set validation
pub mod tiles;

pub use grid::TileGrid;
pub use pixels::{Orientation, PixelGrid};
