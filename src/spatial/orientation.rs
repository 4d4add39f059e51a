//! Oriented tile variants and their edge signatures
//!
//! Every physical tile is expanded once into its eight symmetry variants. Each
//! variant records the four boundary sequences that the placement search uses
//! as adjacency keys.

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::pixels::{Orientation, PixelGrid};
use crate::spatial::tiles::{PhysicalTile, TileSet};

/// One side of a square tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Row 0, read left to right
    Up,
    /// Last row, read left to right
    Down,
    /// Column 0, read top to bottom
    Left,
    /// Last column, read top to bottom
    Right,
}

impl Side {
    /// All sides in signature order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The side of a neighbour that touches this side
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Ordered boundary cells along one side of an oriented tile
///
/// Compared by exact elementwise equality in the fixed read direction of
/// [`Side`]; no numeric encoding is involved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeSignature(BitVec);

impl EdgeSignature {
    /// Read one side of a grid
    pub fn read(grid: &PixelGrid, side: Side) -> Self {
        let n = grid.side();
        let last = n.saturating_sub(1);
        let bits = (0..n).map(|i| match side {
            Side::Up => grid.get(0, i),
            Side::Down => grid.get(last, i),
            Side::Left => grid.get(i, 0),
            Side::Right => grid.get(i, last),
        });
        Self(bits.collect())
    }

    /// Cells in read order
    pub fn bits(&self) -> &BitSlice {
        &self.0
    }

    /// Number of cells along the edge
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the edge has no cells
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The same cells read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.0.clone();
        bits.reverse();
        Self(bits)
    }
}

impl fmt::Display for EdgeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter().by_vals() {
            f.write_str(if bit { "#" } else { "." })?;
        }
        Ok(())
    }
}

/// The four edge signatures of an oriented grid
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edges {
    /// Top row
    pub up: EdgeSignature,
    /// Bottom row
    pub down: EdgeSignature,
    /// Left column
    pub left: EdgeSignature,
    /// Right column
    pub right: EdgeSignature,
}

impl Edges {
    /// Extract all four signatures of a grid
    pub fn of(grid: &PixelGrid) -> Self {
        Self {
            up: EdgeSignature::read(grid, Side::Up),
            down: EdgeSignature::read(grid, Side::Down),
            left: EdgeSignature::read(grid, Side::Left),
            right: EdgeSignature::read(grid, Side::Right),
        }
    }

    /// Signature on a given side
    pub const fn side(&self, side: Side) -> &EdgeSignature {
        match side {
            Side::Up => &self.up,
            Side::Down => &self.down,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// A physical tile in one of its eight orientations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientedTile {
    slot: usize,
    id: String,
    orientation: Orientation,
    pixels: PixelGrid,
    edges: Edges,
}

impl OrientedTile {
    /// Position of the physical tile in its tile set
    ///
    /// Stable across all eight variants; used as the key of the "used" set.
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Identifier of the physical tile
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Which of the eight transforms produced this variant
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pixels in this orientation
    pub const fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Edge signatures in this orientation
    pub const fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Signature on one side
    pub const fn edge(&self, side: Side) -> &EdgeSignature {
        self.edges.side(side)
    }
}

/// Produce the eight oriented variants of a physical tile
///
/// `slot` is the tile's position in its tile set.
pub fn orient_tile(slot: usize, tile: &PhysicalTile) -> Vec<OrientedTile> {
    tile.pixels()
        .variants()
        .map(|(orientation, pixels)| OrientedTile {
            slot,
            id: tile.id().to_string(),
            orientation,
            edges: Edges::of(&pixels),
            pixels,
        })
        .collect()
}

/// Every oriented variant of every tile in a validated tile set
///
/// Variants are stored tile by tile in input order, orientation 0..8 within a
/// tile; the placement search tries candidates in exactly this order.
#[derive(Clone, Debug)]
pub struct OrientationCatalog {
    variants: Vec<OrientedTile>,
    tile_count: usize,
    tile_size: usize,
    layout_side: usize,
}

impl OrientationCatalog {
    /// Expand every tile of the set
    pub fn build(tiles: &TileSet) -> Self {
        let variants = tiles
            .tiles()
            .iter()
            .enumerate()
            .flat_map(|(slot, tile)| orient_tile(slot, tile))
            .collect();

        Self {
            variants,
            tile_count: tiles.len(),
            tile_size: tiles.tile_size(),
            layout_side: tiles.layout_side(),
        }
    }

    /// All variants in search order
    pub fn variants(&self) -> &[OrientedTile] {
        &self.variants
    }

    /// The variants of one physical tile
    pub fn variants_of(&self, slot: usize) -> impl Iterator<Item = &OrientedTile> {
        self.variants.iter().filter(move |variant| variant.slot == slot)
    }

    /// Number of physical tiles
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Side length of every tile
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Tiles per side of the square layout
    pub const fn layout_side(&self) -> usize {
        self.layout_side
    }
}
