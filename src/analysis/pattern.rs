//! Fixed pixel patterns to search for in a composite image

use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{Result, validation_error};

/// A rectangular pattern of required cells
///
/// Only `#` cells constrain a match; `.` and space cells are free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    height: usize,
    width: usize,
    marks: Vec<(usize, usize)>,
}

impl Pattern {
    /// Parse equal-length rows over `#`, `.` and space
    ///
    /// # Errors
    ///
    /// Returns a validation error if there are no rows, rows differ in length,
    /// a row contains another character, or no cell is marked
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(validation_error(None, &"pattern has no rows"));
        };
        let width = first.as_ref().chars().count();

        let mut marks = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_width = row.chars().count();
            if row_width != width {
                return Err(validation_error(
                    None,
                    &format!("pattern row {r} has {row_width} cells, expected {width}"),
                ));
            }
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    '#' => marks.push((r, c)),
                    '.' | ' ' => {}
                    other => {
                        return Err(validation_error(
                            None,
                            &format!("unexpected pattern character {other:?} at row {r}, column {c}"),
                        ));
                    }
                }
            }
        }

        if marks.is_empty() {
            return Err(validation_error(None, &"pattern marks no cells"));
        }

        Ok(Self {
            height: rows.len(),
            width,
            marks,
        })
    }

    /// The built-in sea monster
    pub fn sea_monster() -> Self {
        let width = SEA_MONSTER
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        let marks = SEA_MONSTER
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(c, _)| (r, c))
            })
            .collect();

        Self {
            height: SEA_MONSTER.len(),
            width,
            marks,
        }
    }

    /// Rows spanned by the pattern's bounding box
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the pattern's bounding box
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Offsets of the required cells, row-major
    pub fn marks(&self) -> &[(usize, usize)] {
        &self.marks
    }

    /// Number of required cells
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Required cells per pattern row
    pub fn marks_per_row(&self) -> Vec<usize> {
        let mut counts = vec![0; self.height];
        for &(r, _) in &self.marks {
            if let Some(count) = counts.get_mut(r) {
                *count += 1;
            }
        }
        counts
    }
}
