//! Reading patterns from `.cells` files: comment and blank lines are skipped
//! before the rows reach [`plaintext::parse_with`].

use crate::{plaintext, plaintext::Glyphs, Grid, Result};
use std::path::Path;

/// What to do with rows shorter than the widest one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// Rows must already have equal lengths.
    #[default]
    Strict,
    /// Shorter rows are extended with dead cells on the right.
    Dead,
}

pub fn load(text: &str, glyphs: &Glyphs, padding: Padding) -> Result<Grid> {
    let lines = text
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with(glyphs.comment))
        .collect::<Vec<_>>();

    let data = match padding {
        Padding::Strict => lines.join("\n"),
        Padding::Dead => {
            let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            lines
                .iter()
                .map(|line| {
                    let mut row = line.to_string();
                    row.extend(std::iter::repeat(glyphs.dead).take(width - line.chars().count()));
                    row
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    };
    plaintext::parse_with(&data, glyphs)
}

pub fn load_file(path: impl AsRef<Path>, glyphs: &Glyphs, padding: Padding) -> Result<Grid> {
    let text = std::fs::read_to_string(path)?;
    load(&text, glyphs, padding)
}
