use crate::Grid;

/// Offsets `(row, col)` of the eight cells at Chebyshev distance 1.
pub const MOORE_NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of alive cells around `(row, col)`, in `0..=8`.
///
/// Positions outside the grid count as dead, there is no wrap-around.
/// `(row, col)` itself may lie outside the grid.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    MOORE_NEIGHBORHOOD
        .iter()
        .filter(|&&(dr, dc)| {
            match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                (Some(r), Some(c)) => grid.cell(r, c).is_alive(),
                _ => false,
            }
        })
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plaintext;

    #[test]
    fn test_counts_inside() {
        let grid = plaintext::parse("OOO\nO.O\nOOO").unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1), 8);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 2);
        assert_eq!(count_live_neighbors(&grid, 0, 1), 4);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let grid = plaintext::parse("O..O\n....\nO..O").unwrap();
        // On a torus each corner would see the other three.
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
        assert_eq!(count_live_neighbors(&grid, 2, 3), 0);
        assert_eq!(count_live_neighbors(&grid, 1, 0), 2);
    }

    #[test]
    fn test_outside_coordinates() {
        let grid = plaintext::parse("OO\nOO").unwrap();
        assert_eq!(count_live_neighbors(&grid, 2, 2), 1);
        assert_eq!(count_live_neighbors(&grid, 2, 1), 2);
        assert_eq!(count_live_neighbors(&grid, 5, 5), 0);
        assert_eq!(count_live_neighbors(&grid, usize::MAX, 0), 0);
        assert_eq!(count_live_neighbors(&grid, 0, usize::MAX), 0);
    }
}
