//! Search-free corner detection by counting edge-sharing neighbours
//!
//! When every shared edge in a puzzle is unique, corner tiles are exactly the
//! tiles that can touch two other tiles, border tiles touch three and inner
//! tiles four. This gives the corner product without running the placement
//! search, and is a cheap cross-check of a solved layout.

use crate::algorithm::matcher::shares_edge;
use crate::io::error::{Result, TileError};
use crate::spatial::orientation::{OrientationCatalog, Side};
use crate::spatial::tiles::identifier_product;

/// Number of corners in a square layout
const CORNER_COUNT: usize = 4;

/// Neighbours a corner tile can touch
const CORNER_NEIGHBOURS: usize = 2;

/// How many other tiles a tile can share an edge with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourCount {
    /// Position of the tile in its tile set
    pub slot: usize,
    /// Identifier of the tile
    pub id: String,
    /// Distinct other tiles sharing at least one edge
    pub neighbours: usize,
}

/// Count edge-sharing neighbours of every tile
///
/// Two tiles are neighbours when some edge of one equals some edge of the
/// other, read in either direction.
pub fn neighbour_counts(catalog: &OrientationCatalog) -> Vec<NeighbourCount> {
    let canonical: Vec<_> = (0..catalog.tile_count())
        .filter_map(|slot| catalog.variants_of(slot).next())
        .collect();

    canonical
        .iter()
        .map(|tile| {
            let neighbours = canonical
                .iter()
                .filter(|other| other.slot() != tile.slot())
                .filter(|other| {
                    Side::ALL.iter().any(|&side| {
                        Side::ALL
                            .iter()
                            .any(|&other_side| shares_edge(tile.edge(side), other.edge(other_side)))
                    })
                })
                .count();
            NeighbourCount {
                slot: tile.slot(),
                id: tile.id().to_string(),
                neighbours,
            }
        })
        .collect()
}

/// Identifiers of tiles that have exactly two neighbours
pub fn corner_ids(catalog: &OrientationCatalog) -> Vec<String> {
    neighbour_counts(catalog)
        .into_iter()
        .filter(|count| count.neighbours == CORNER_NEIGHBOURS)
        .map(|count| count.id)
        .collect()
}

/// Corner product computed from neighbour counts alone
///
/// # Errors
///
/// Returns a precondition error if the puzzle does not have exactly four
/// two-neighbour tiles (edges are ambiguous or the layout is too small), or a
/// computation error if an identifier is not numeric or the product overflows
pub fn corner_product_by_edges(catalog: &OrientationCatalog) -> Result<u64> {
    let corners = corner_ids(catalog);
    if corners.len() != CORNER_COUNT {
        return Err(TileError::Precondition {
            operation: "detect corners",
            reason: format!(
                "found {} tiles with exactly {CORNER_NEIGHBOURS} neighbours, expected {CORNER_COUNT}",
                corners.len()
            ),
        });
    }

    identifier_product(corners.iter().map(String::as_str))
}
