//! Reading tile corpora and pattern files from text
//!
//! A corpus is a sequence of blocks, each a `Tile <id>:` header followed by
//! square rows of `#` and `.`, separated by blank lines.

use std::fs;
use std::path::Path;

use crate::analysis::pattern::Pattern;
use crate::io::error::{Result, TileError};
use crate::spatial::tiles::PhysicalTile;

const HEADER_PREFIX: &str = "Tile ";

struct PendingTile {
    id: String,
    header_line: usize,
    rows: Vec<String>,
}

impl PendingTile {
    fn finish(self) -> Result<PhysicalTile> {
        if self.rows.is_empty() {
            return Err(TileError::Parse {
                line: self.header_line,
                reason: format!("tile {} has no pixel rows", self.id),
            });
        }
        PhysicalTile::from_rows(self.id, &self.rows)
    }
}

/// Parse a tile corpus
///
/// # Errors
///
/// Returns a parse error for malformed headers, characters other than `#` and
/// `.`, or pixel rows outside a tile block, and a validation error for tiles
/// that are not square
pub fn parse_tiles(text: &str) -> Result<Vec<PhysicalTile>> {
    let mut tiles = Vec::new();
    let mut pending: Option<PendingTile> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end();

        if line.is_empty() {
            if let Some(tile) = pending.take() {
                tiles.push(tile.finish()?);
            }
            continue;
        }

        if line.contains(':') {
            if let Some(tile) = pending.take() {
                tiles.push(tile.finish()?);
            }
            pending = Some(PendingTile {
                id: parse_header(line, line_number)?,
                header_line: line_number,
                rows: Vec::new(),
            });
            continue;
        }

        if let Some(bad) = line.chars().find(|ch| !matches!(ch, '#' | '.')) {
            return Err(TileError::Parse {
                line: line_number,
                reason: format!("unexpected character {bad:?} in pixel row"),
            });
        }

        match pending.as_mut() {
            Some(tile) => tile.rows.push(line.to_string()),
            None => {
                return Err(TileError::Parse {
                    line: line_number,
                    reason: "pixel row appears before any tile header".to_string(),
                });
            }
        }
    }

    if let Some(tile) = pending {
        tiles.push(tile.finish()?);
    }

    Ok(tiles)
}

fn parse_header(line: &str, line_number: usize) -> Result<String> {
    let malformed = |reason: &str| TileError::Parse {
        line: line_number,
        reason: format!("{reason} in header {line:?}"),
    };

    let body = line
        .trim()
        .strip_prefix(HEADER_PREFIX)
        .ok_or_else(|| malformed("expected 'Tile <id>:'"))?;
    let id = body
        .strip_suffix(':')
        .ok_or_else(|| malformed("expected a trailing ':'"))?
        .trim();

    if id.is_empty() || id.contains(char::is_whitespace) {
        return Err(malformed("expected a single identifier"));
    }
    Ok(id.to_string())
}

/// Read and parse a tile corpus file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, otherwise the
/// errors of [`parse_tiles`]
pub fn read_tiles(path: &Path) -> Result<Vec<PhysicalTile>> {
    parse_tiles(&read_text(path)?)
}

/// Parse a pattern, padding short rows with spaces
///
/// Editors often strip trailing spaces, so rows are right-padded to the
/// longest row. Leading and trailing blank lines are ignored.
///
/// # Errors
///
/// Returns the validation errors of [`Pattern::parse`]
pub fn parse_pattern(text: &str) -> Result<Pattern> {
    let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());

    let body: &[&str] = match (first, last) {
        (Some(first), Some(last)) => lines.get(first..=last).unwrap_or_default(),
        _ => &[],
    };

    let width = body
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let rows: Vec<String> = body.iter().map(|line| format!("{line:<width$}")).collect();

    Pattern::parse(&rows)
}

/// Read and parse a pattern file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, otherwise the
/// errors of [`parse_pattern`]
pub fn read_pattern(path: &Path) -> Result<Pattern> {
    parse_pattern(&read_text(path)?)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })
}
