//! Plaintext pattern format: one line per row, `.` for a dead cell and any
//! other character for an alive one.

use crate::{Cell, Error, Grid, Result};
use std::fmt;

/// Characters used by the plaintext format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub dead: char,
    pub alive: char,
    /// Lines starting with it are dropped by the loader.
    pub comment: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            dead: '.',
            alive: 'O',
            comment: '!',
        }
    }
}

/// Parses rows of glyphs with the default [`Glyphs`].
pub fn parse(text: &str) -> Result<Grid> {
    parse_with(text, &Glyphs::default())
}

/// Parses rows of glyphs: `glyphs.dead` is a dead cell, anything else is alive.
///
/// Comments are not recognized and rows are not padded here, see [`crate::loader`].
pub fn parse_with(text: &str, glyphs: &Glyphs) -> Result<Grid> {
    let rows = text
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| Cell::from(c != glyphs.dead))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    // a blank line is a row without columns
    if rows.iter().any(Vec::is_empty) {
        return Err(Error::EmptyPattern);
    }
    Grid::from_rows(rows)
}

/// Formats the grid with the default [`Glyphs`].
pub fn format(grid: &Grid) -> String {
    format_with(grid, &Glyphs::default())
}

/// Rows joined with `\n`, without a trailing newline.
pub fn format_with(grid: &Grid, glyphs: &Glyphs) -> String {
    let (h, w) = grid.dims();
    let mut result = String::with_capacity(h * (w + 1));
    for (i, row) in grid.rows().enumerate() {
        if i != 0 {
            result.push('\n');
        }
        result.extend(row.iter().map(|cell| match cell {
            Cell::Dead => glyphs.dead,
            Cell::Alive => glyphs.alive,
        }));
    }
    result
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
