//! Pattern scanning across the eight orientations of a composite image
//!
//! Orientations are visited in the same order the orientation model uses for
//! tiles. The scan stops at the first orientation with any occurrence; a
//! pattern that is present in one orientation of a puzzle image does not also
//! appear in another.

use std::collections::HashSet;

use crate::analysis::pattern::Pattern;
use crate::io::configuration::ORIENTATION_COUNT;
use crate::io::error::{Result, TileError};
use crate::spatial::pixels::{Orientation, PixelGrid};

/// Result of a successful scan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Orientation of the image in which the pattern was found
    pub orientation: Orientation,
    /// The image in that orientation
    pub image: PixelGrid,
    /// Top-left alignments of every occurrence, row-major
    pub positions: Vec<(usize, usize)>,
    /// Set cells minus occurrences times pattern marks
    ///
    /// Overlapping occurrences are each counted in full, so this can drop
    /// below zero for dense images.
    pub roughness: i64,
    /// Set cells not covered by any occurrence
    pub uncovered: usize,
}

impl ScanOutcome {
    /// Number of occurrences found
    pub fn occurrences(&self) -> usize {
        self.positions.len()
    }

    /// Image cells (in the found orientation) covered by some occurrence
    pub fn covered_cells(&self, pattern: &Pattern) -> HashSet<(usize, usize)> {
        covered_cells(&self.positions, pattern)
    }
}

/// Whether every marked pattern cell is set at a top-left alignment
pub fn matches_at(image: &PixelGrid, pattern: &Pattern, top: usize, left: usize) -> bool {
    pattern
        .marks()
        .iter()
        .all(|&(r, c)| image.get(top + r, left + c))
}

/// Every alignment of the pattern's bounding box that matches, row-major
///
/// Overlapping occurrences are reported independently.
pub fn find_occurrences(image: &PixelGrid, pattern: &Pattern) -> Vec<(usize, usize)> {
    let side = image.side();
    if pattern.height() > side || pattern.width() > side {
        return Vec::new();
    }

    let mut positions = Vec::new();
    for top in 0..=side - pattern.height() {
        for left in 0..=side - pattern.width() {
            if matches_at(image, pattern, top, left) {
                positions.push((top, left));
            }
        }
    }
    positions
}

/// Scan all orientations of an image for a pattern
///
/// # Errors
///
/// Returns `NoPatternFound` when no orientation contains an occurrence
pub fn scan(image: &PixelGrid, pattern: &Pattern) -> Result<ScanOutcome> {
    let total_set = image.count_set();

    for (orientation, oriented) in image.variants() {
        let positions = find_occurrences(&oriented, pattern);
        if positions.is_empty() {
            continue;
        }

        let covered = covered_cells(&positions, pattern);
        let roughness = to_signed(total_set) - to_signed(positions.len() * pattern.mark_count());

        return Ok(ScanOutcome {
            orientation,
            uncovered: total_set.saturating_sub(covered.len()),
            roughness,
            positions,
            image: oriented,
        });
    }

    Err(TileError::NoPatternFound {
        orientations_scanned: ORIENTATION_COUNT,
    })
}

fn covered_cells(positions: &[(usize, usize)], pattern: &Pattern) -> HashSet<(usize, usize)> {
    positions
        .iter()
        .flat_map(|&(top, left)| {
            pattern
                .marks()
                .iter()
                .map(move |&(r, c)| (top + r, left + c))
        })
        .collect()
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
