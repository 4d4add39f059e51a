//! Seeded generator for scrambled puzzles with a known answer
//!
//! A random `k x k` mosaic is cut into tiles whose shared edges carry unique,
//! non-palindromic codes, so the only consistent tilings are the eight global
//! symmetries of the original. Tiles are then individually re-oriented and
//! shuffled. Corner cells of every tile are left unset.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::HashSet;

use crate::io::configuration::{MIN_TILE_SIZE, SYNTHETIC_ID_MAX, SYNTHETIC_ID_MIN};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::pixels::{Orientation, PixelGrid};
use crate::spatial::tiles::{PhysicalTile, identifier_product};

/// A generated tile set plus the arrangement it was cut from
#[derive(Clone, Debug)]
pub struct SyntheticPuzzle {
    /// Tiles in shuffled order, each in a random orientation
    pub tiles: Vec<PhysicalTile>,
    /// Identifiers in their original row-major positions
    pub layout_ids: Vec<String>,
    /// Tiles per side
    pub tiles_per_side: usize,
    /// Pixels per tile side
    pub tile_size: usize,
}

impl SyntheticPuzzle {
    /// Identifier originally at a layout position
    pub fn id_at(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.tiles_per_side || col >= self.tiles_per_side {
            return None;
        }
        self.layout_ids
            .get(row * self.tiles_per_side + col)
            .map(String::as_str)
    }

    /// Product of the four corner identifiers of the original arrangement
    ///
    /// # Errors
    ///
    /// Returns a computation error if the product overflows
    pub fn corner_product(&self) -> Result<u64> {
        let last = self.tiles_per_side.saturating_sub(1);
        identifier_product(
            [(0, 0), (0, last), (last, 0), (last, last)]
                .iter()
                .map(|&(row, col)| self.id_at(row, col).unwrap_or_default()),
        )
    }
}

/// Generate a scrambled puzzle of `tiles_per_side x tiles_per_side` tiles
///
/// # Errors
///
/// Returns an invalid parameter error if the layout is empty, the tile size
/// is too small, there are not enough distinct edge codes for the requested
/// layout, or more tiles are requested than identifiers available
pub fn scrambled_puzzle(
    tiles_per_side: usize,
    tile_size: usize,
    seed: u64,
) -> Result<SyntheticPuzzle> {
    if tiles_per_side == 0 {
        return Err(invalid_parameter(
            "tiles_per_side",
            &tiles_per_side,
            &"must be at least 1",
        ));
    }
    if tile_size < MIN_TILE_SIZE + 1 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("must be at least {} to carry edge codes", MIN_TILE_SIZE + 1),
        ));
    }

    let tile_count = tiles_per_side * tiles_per_side;
    let id_space = usize::try_from(SYNTHETIC_ID_MAX - SYNTHETIC_ID_MIN).unwrap_or(usize::MAX);
    if tile_count > id_space {
        return Err(invalid_parameter(
            "tiles_per_side",
            &tiles_per_side,
            &format!("at most {id_space} tiles can be given identifiers"),
        ));
    }

    let code_len = tile_size - 2;
    let edge_count = 2 * tiles_per_side * (tiles_per_side + 1);
    if let Some(capacity) = code_capacity(code_len).filter(|&capacity| edge_count > capacity) {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("{capacity} distinct edge codes cannot cover {edge_count} edges"),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut used_codes = HashSet::new();
    let k = tiles_per_side;

    // horizontal[r][c]: edge above tile (r, c); vertical[r][c]: edge left of tile (r, c)
    let horizontal: Vec<Vec<Vec<bool>>> = (0..=k)
        .map(|_| (0..k).map(|_| fresh_code(&mut rng, code_len, &mut used_codes)).collect())
        .collect();
    let vertical: Vec<Vec<Vec<bool>>> = (0..k)
        .map(|_| (0..=k).map(|_| fresh_code(&mut rng, code_len, &mut used_codes)).collect())
        .collect();

    let mut ids = HashSet::new();
    let mut layout_ids = Vec::with_capacity(tile_count);
    let mut tiles = Vec::with_capacity(tile_count);
    let n = tile_size;

    for r in 0..k {
        for c in 0..k {
            let id = loop {
                let candidate = rng.random_range(SYNTHETIC_ID_MIN..SYNTHETIC_ID_MAX);
                if ids.insert(candidate) {
                    break candidate.to_string();
                }
            };

            let interior: Vec<bool> = (0..n * n).map(|_| rng.random::<bool>()).collect();
            let code_bit = |codes: &[Vec<Vec<bool>>], row: usize, col: usize, index: usize| {
                codes
                    .get(row)
                    .and_then(|line| line.get(col))
                    .and_then(|code| code.get(index - 1))
                    .copied()
                    .unwrap_or(false)
            };

            let pixels = PixelGrid::from_fn(n, |(y, x)| {
                let on_vertical_border = y == 0 || y == n - 1;
                let on_horizontal_border = x == 0 || x == n - 1;
                match (on_vertical_border, on_horizontal_border) {
                    (true, true) => false,
                    (true, false) => {
                        code_bit(horizontal.as_slice(), r + usize::from(y != 0), c, x)
                    }
                    (false, true) => {
                        code_bit(vertical.as_slice(), r, c + usize::from(x != 0), y)
                    }
                    (false, false) => interior.get(y * n + x).copied().unwrap_or(false),
                }
            });

            let scramble = Orientation::ALL
                .get(rng.random_range(0..Orientation::ALL.len()))
                .copied()
                .unwrap_or(Orientation::IDENTITY);

            layout_ids.push(id.clone());
            tiles.push(PhysicalTile::new(id, scramble.apply(&pixels)));
        }
    }

    tiles.shuffle(&mut rng);

    Ok(SyntheticPuzzle {
        tiles,
        layout_ids,
        tiles_per_side,
        tile_size,
    })
}

/// Number of codes of a given length that are distinct up to reversal and
/// not palindromes; `None` when too large to matter
fn code_capacity(code_len: usize) -> Option<usize> {
    if code_len >= 20 {
        return None;
    }
    let total = 1_usize << code_len;
    let palindromes = 1_usize << code_len.div_ceil(2);
    Some((total - palindromes) / 2)
}

fn fresh_code(rng: &mut StdRng, code_len: usize, used: &mut HashSet<Vec<bool>>) -> Vec<bool> {
    loop {
        let code: Vec<bool> = (0..code_len).map(|_| rng.random::<bool>()).collect();
        let reversed: Vec<bool> = code.iter().rev().copied().collect();
        if code == reversed || used.contains(&code) || used.contains(&reversed) {
            continue;
        }
        used.insert(reversed);
        used.insert(code.clone());
        return code;
    }
}
