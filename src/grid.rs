use crate::{Error, Result};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Rectangular field of cells, stored row-major.
///
/// A grid is never empty and never changes after construction: every
/// transformation (a step, a growth ring) builds a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Builds a grid from rows of cells.
    ///
    /// Fails with [`Error::MalformedInput`] if the rows have different lengths
    /// and with [`Error::EmptyPattern`] if there are no rows or no columns.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(height * width);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(Error::MalformedInput {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        if height == 0 || width == 0 {
            return Err(Error::EmptyPattern);
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Creates a grid filled with dead cells.
    pub fn blank(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyPattern);
        }
        Ok(Self::from_cells(
            height,
            width,
            vec![Cell::Dead; height * width],
        ))
    }

    /// Creates a grid with random cells, each alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(height: usize, width: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        if height == 0 || width == 0 {
            return Err(Error::EmptyPattern);
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let cells = (0..height * width)
            .map(|_| Cell::from(rng.gen_bool(fill_rate)))
            .collect();
        Ok(Self::from_cells(height, width, cells))
    }

    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(height >= 1 && width >= 1);
        debug_assert_eq!(cells.len(), height * width);
        Self {
            cells,
            height,
            width,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)` of the grid.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Cell at `(row, col)`; anything outside the grid is dead.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            Cell::Dead
        }
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Whether any cell of the outermost ring is alive.
    pub fn has_live_border(&self) -> bool {
        let (h, w) = (self.height, self.width);
        let top = &self.cells[..w];
        let bottom = &self.cells[(h - 1) * w..];
        top.iter().chain(bottom).any(|c| c.is_alive())
            || (0..h).any(|row| self.cell(row, 0).is_alive() || self.cell(row, w - 1).is_alive())
    }

    /// Returns a copy surrounded by one ring of dead cells.
    pub fn grown(&self) -> Self {
        let (height, width) = (self.height + 2, self.width + 2);
        let mut cells = vec![Cell::Dead; height * width];
        for (row, line) in self.rows().enumerate() {
            let start = (row + 1) * width + 1;
            cells[start..start + self.width].copy_from_slice(line);
        }
        Self::from_cells(height, width, cells)
    }
}
