//! Well-known patterns in plaintext form, padded so that they stay away from
//! the bounds for at least one period.

use crate::{plaintext, Grid, Result};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static str,
}

impl Pattern {
    pub fn grid(&self) -> Result<Grid> {
        plaintext::parse(self.cells)
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: "....\n.OO.\n.OO.\n....",
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: ".....\n.....\n.OOO.\n.....\n.....",
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: "......\n......\n..OOO.\n.OOO..\n......\n......",
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: "......\n.OO...\n.OO...\n...OO.\n...OO.\n......",
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: ".O...\n..O..\nOOO..\n.....\n.....",
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: ".....\n..OO.\n.OO..\n..O..\n.....",
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

pub fn by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_parse() {
        for pattern in PATTERNS {
            let grid = pattern.grid().unwrap();
            assert!(grid.population() > 0, "{} is empty", pattern.name);
            assert_eq!(plaintext::format(&grid), pattern.cells);
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("Toad").map(|p| p.name), Some("toad"));
        assert!(by_name("pulsar").is_none());
    }
}
