use crate::{count_live_neighbors, Cell, Error, Grid, Result, Topology};
use tracing::debug;


/// B3/S23: birth with exactly 3 neighbors, survival with 2 or 3.
#[inline]
fn next_state(cell: Cell, neibs: u8) -> Cell {
    match (cell, neibs) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Computes the next generation on a grid of the same dimensions.
///
/// Every cell is read from `current` and written into a fresh grid, so the
/// order of evaluation does not matter. Cells beyond the bounds are dead.
pub fn step(current: &Grid) -> Grid {
    let (height, width) = current.dims();
    let mut cells = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            let neibs = count_live_neighbors(current, row, col);
            cells.push(next_state(current.cell(row, col), neibs));
        }
    }
    Grid::from_cells(height, width, cells)
}

/// Like [`step`], but if any border cell is alive the grid first gets one
/// ring of dead cells on every side.
pub fn step_with_growth(current: &Grid) -> Grid {
    if current.has_live_border() {
        step(&current.grown())
    } else {
        step(current)
    }
}

/// Computes the next generation according to `topology`.
///
/// Under [`Topology::AutoGrow`] fails with [`Error::GridTooLarge`] if the
/// growth ring would make a side longer than `max_side`.
pub fn advance(current: &Grid, topology: Topology, max_side: usize) -> Result<Grid> {
    match topology {
        Topology::FixedBounds => Ok(step(current)),
        Topology::AutoGrow => {
            if !current.has_live_border() {
                return Ok(step(current));
            }
            let (height, width) = (current.height() + 2, current.width() + 2);
            if height > max_side || width > max_side {
                return Err(Error::GridTooLarge {
                    height,
                    width,
                    max_side,
                });
            }
            debug!("border is alive, growing grid to {}x{}", height, width);
            Ok(step(&current.grown()))
        }
    }
}
