//! Square boolean pixel grids and the eight symmetries of the square
//!
//! Both single tiles and the stitched composite image are `PixelGrid`s, so the
//! rotation and reflection sequence defined here is shared by the orientation
//! model and the pattern scanner.

use std::fmt;

use ndarray::{Array2, s};

use crate::io::configuration::{ORIENTATION_COUNT, ROTATION_COUNT};
use crate::io::error::{Result, validation_error};

/// One of the eight rotation/reflection transforms of a square
///
/// Index 0-3 are quarter turns of the canonical grid, 4-7 are quarter turns of
/// the mirrored grid. Rotation is counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation(u8);

impl Orientation {
    /// The canonical, untransformed orientation
    pub const IDENTITY: Self = Self(0);

    /// All orientations in generation order
    pub const ALL: [Self; ORIENTATION_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Look up an orientation by index, `None` when out of range
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ORIENTATION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Position in the generation order (0..8)
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Quarter turns applied after the optional mirror
    pub const fn rotations(self) -> usize {
        self.index() % ROTATION_COUNT
    }

    /// Whether the canonical grid is mirrored before rotating
    pub const fn is_mirrored(self) -> bool {
        self.index() >= ROTATION_COUNT
    }

    /// Transform a grid into this orientation
    pub fn apply(self, grid: &PixelGrid) -> PixelGrid {
        let mut result = if self.is_mirrored() {
            grid.mirrored()
        } else {
            grid.clone()
        };
        for _ in 0..self.rotations() {
            result = result.rotated();
        }
        result
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_mirrored() { 'm' } else { 'r' };
        write!(f, "{kind}{}", self.rotations())
    }
}

/// Immutable square grid of set/unset cells
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    cells: Array2<bool>,
}

impl PixelGrid {
    /// Build a grid from text rows of `#` (set) and `.` (unset)
    ///
    /// # Errors
    ///
    /// Returns a validation error if the rows are empty, not all the same
    /// length, not square, or contain characters other than `#` and `.`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(validation_error(None, &"grid has no rows"));
        }

        let mut cells = Array2::from_elem((side, side), false);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != side {
                return Err(validation_error(
                    None,
                    &format!("row {r} has {width} cells, expected {side} for a square grid"),
                ));
            }
            for (c, ch) in row.chars().enumerate() {
                let value = match ch {
                    '#' => true,
                    '.' => false,
                    other => {
                        return Err(validation_error(
                            None,
                            &format!("unexpected character {other:?} at row {r}, column {c}"),
                        ));
                    }
                };
                if let Some(cell) = cells.get_mut((r, c)) {
                    *cell = value;
                }
            }
        }

        Ok(Self { cells })
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns a validation error if the array is not square
    pub fn from_array(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == cols {
            Ok(Self { cells })
        } else {
            Err(validation_error(
                None,
                &format!("grid is {rows}x{cols}, expected a square"),
            ))
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(side: usize, f: impl FnMut((usize, usize)) -> bool) -> Self {
        Self {
            cells: Array2::from_shape_fn((side, side), f),
        }
    }

    /// A grid of the given side with every cell unset
    pub fn blank(side: usize) -> Self {
        Self {
            cells: Array2::from_elem((side, side), false),
        }
    }

    /// Side length of the grid
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Cell value; out-of-range coordinates read as unset
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Number of set cells
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Quarter turn counter-clockwise
    #[must_use]
    pub fn rotated(&self) -> Self {
        // Transposing then reversing the row order turns the grid left
        Self {
            cells: self.cells.t().slice(s![..;-1, ..]).to_owned(),
        }
    }

    /// Mirror image (each row reversed)
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            cells: self.cells.slice(s![.., ..;-1]).to_owned(),
        }
    }

    /// Copy of the grid with the outermost ring of cells removed
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let side = self.side();
        if side <= 2 {
            return Self::blank(0);
        }
        Self {
            cells: self.cells.slice(s![1..side - 1, 1..side - 1]).to_owned(),
        }
    }

    /// Iterate the eight orientations of this grid in generation order
    ///
    /// Each quarter turn is derived from the previous one, so stopping early
    /// avoids building the remaining variants.
    pub const fn variants(&self) -> Variants<'_> {
        Variants {
            base: self,
            previous: None,
            index: 0,
        }
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|&set| if set { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Lazy iterator over the eight orientations of a grid
pub struct Variants<'a> {
    base: &'a PixelGrid,
    previous: Option<PixelGrid>,
    index: usize,
}

impl Iterator for Variants<'_> {
    type Item = (Orientation, PixelGrid);

    fn next(&mut self) -> Option<Self::Item> {
        let orientation = Orientation::from_index(self.index)?;
        let grid = match self.previous.as_ref() {
            Some(previous) if orientation.rotations() != 0 => previous.rotated(),
            _ if orientation.is_mirrored() => self.base.mirrored(),
            _ => self.base.clone(),
        };
        self.previous = Some(grid.clone());
        self.index += 1;
        Some((orientation, grid))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ORIENTATION_COUNT.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Variants<'_> {}
