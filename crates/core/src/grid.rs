//! Square boolean grid with toroidal addressing.
//!
//! A `Grid` stores `side * side` cells in row-major order. Signed coordinate
//! access wraps around both axes, so row `-1` is row `side - 1` and row `side`
//! is row `0`. No edge cell is special-cased.

use crate::error::LifeError;

/// A square matrix of alive/dead cells on a torus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid with `side` rows and columns.
    ///
    /// Returns `LifeError::InvalidDimensions` if `side` is zero or if
    /// `side * side` overflows `usize`.
    pub fn new(side: usize) -> Result<Self, LifeError> {
        let len = cell_count(side)?;
        Ok(Self {
            side,
            cells: vec![false; len],
        })
    }

    /// Creates a grid from a row-major cell buffer.
    ///
    /// Returns `LifeError::DimensionMismatch` if `cells.len() != side * side`.
    pub fn from_data(side: usize, cells: Vec<bool>) -> Result<Self, LifeError> {
        let expected = cell_count(side)?;
        if cells.len() != expected {
            return Err(LifeError::DimensionMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Creates a grid with the listed `(row, col)` cells alive.
    ///
    /// Coordinates outside `[0, side)` wrap toroidally.
    pub fn with_alive(side: usize, alive: &[(usize, usize)]) -> Result<Self, LifeError> {
        let mut grid = Self::new(side)?;
        for &(row, col) in alive {
            grid.set(row as isize, col as isize, true);
        }
        Ok(grid)
    }

    /// Number of rows (and columns).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Read-only access to the row-major cell buffer.
    pub fn data(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, row: isize, col: isize) -> usize {
        let n = self.side as isize;
        let r = row.rem_euclid(n) as usize;
        let c = col.rem_euclid(n) as usize;
        r * self.side + c
    }

    /// Cell state at `(row, col)` with toroidal wrapping.
    pub fn get(&self, row: isize, col: isize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Sets the cell at `(row, col)` with toroidal wrapping.
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Counts the living cells among the eight wrapped neighbors of `(row, col)`.
    ///
    /// `row` and `col` must lie in `[0, side)`.
    pub fn living_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.side;
        let up = wrap(row, -1, n);
        let down = wrap(row, 1, n);
        let left = wrap(col, -1, n);
        let right = wrap(col, 1, n);

        [
            (up, left),
            (up, col),
            (up, right),
            (row, left),
            (row, right),
            (down, left),
            (down, col),
            (down, right),
        ]
        .iter()
        .filter(|&&(r, c)| self.cells[r * n + c])
        .count() as u8
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Iterates over all cells yielding `(row, col, alive)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| (i / self.side, i % self.side, alive))
    }

    /// Iterates over the `(row, col)` coordinates of living cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(|&(_, _, alive)| alive)
            .map(|(row, col, _)| (row, col))
    }
}

/// `side * side`, rejecting zero and overflow.
fn cell_count(side: usize) -> Result<usize, LifeError> {
    if side == 0 {
        return Err(LifeError::InvalidDimensions);
    }
    side.checked_mul(side).ok_or(LifeError::InvalidDimensions)
}

/// Toroidal coordinate wrap: `(coord + offset) mod size`.
fn wrap(coord: usize, offset: isize, size: usize) -> usize {
    ((coord as isize + offset).rem_euclid(size as isize)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Constructor tests --

    #[test]
    fn new_creates_all_dead_grid() {
        let grid = Grid::new(7).unwrap();
        assert_eq!(grid.side(), 7);
        assert_eq!(grid.data().len(), 49);
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn new_with_zero_side_returns_error() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidDimensions)));
    }

    #[test]
    fn new_with_overflowing_side_returns_error() {
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(LifeError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_data_accepts_matching_length() {
        let grid = Grid::from_data(2, vec![true, false, false, true]).unwrap();
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 1));
        assert!(!grid.get(1, 0));
        assert!(grid.get(1, 1));
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = Grid::from_data(3, vec![false; 8]);
        assert!(matches!(
            result,
            Err(LifeError::DimensionMismatch {
                expected: 9,
                got: 8
            })
        ));
    }

    #[test]
    fn with_alive_sets_listed_cells_only() {
        let grid = Grid::with_alive(5, &[(1, 1), (1, 2), (1, 3)]).unwrap();
        assert_eq!(grid.population(), 3);
        assert!(grid.get(1, 2));
        assert!(!grid.get(2, 2));
    }

    // -- Toroidal access --

    #[test]
    fn get_wraps_negative_coordinates() {
        let grid = Grid::with_alive(4, &[(3, 3)]).unwrap();
        assert!(grid.get(-1, -1));
        assert!(grid.get(3, -1));
        assert!(grid.get(-1, 3));
    }

    #[test]
    fn get_wraps_overflowing_coordinates() {
        let grid = Grid::with_alive(4, &[(0, 0)]).unwrap();
        assert!(grid.get(4, 4));
        assert!(grid.get(8, 0));
        assert!(grid.get(0, -4));
    }

    #[test]
    fn set_wraps_coordinates() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(-1, 3, true);
        assert!(grid.get(2, 0));
        assert_eq!(grid.population(), 1);
    }

    // -- Neighbor counting --

    #[test]
    fn living_neighbors_of_empty_grid_is_zero() {
        let grid = Grid::new(5).unwrap();
        for (row, col, _) in grid.iter() {
            assert_eq!(grid.living_neighbors(row, col), 0);
        }
    }

    #[test]
    fn living_neighbors_excludes_the_cell_itself() {
        let grid = Grid::with_alive(5, &[(2, 2)]).unwrap();
        assert_eq!(grid.living_neighbors(2, 2), 0);
        assert_eq!(grid.living_neighbors(1, 1), 1);
        assert_eq!(grid.living_neighbors(3, 3), 1);
    }

    #[test]
    fn corner_cell_is_neighbor_of_opposite_corners() {
        let n = 10;
        let grid = Grid::with_alive(n, &[(0, 0)]).unwrap();
        assert_eq!(grid.living_neighbors(n - 1, 0), 1);
        assert_eq!(grid.living_neighbors(0, n - 1), 1);
        assert_eq!(grid.living_neighbors(n - 1, n - 1), 1);
    }

    #[test]
    fn opposite_corner_is_neighbor_of_origin() {
        let n = 10;
        for &(r, c) in &[(n - 1, 0), (0, n - 1), (n - 1, n - 1)] {
            let grid = Grid::with_alive(n, &[(r, c)]).unwrap();
            assert_eq!(
                grid.living_neighbors(0, 0),
                1,
                "({r}, {c}) should neighbor (0, 0)"
            );
        }
    }

    #[test]
    fn fully_alive_grid_has_eight_neighbors_everywhere() {
        let grid = Grid::from_data(4, vec![true; 16]).unwrap();
        for (row, col, _) in grid.iter() {
            assert_eq!(grid.living_neighbors(row, col), 8);
        }
    }

    // -- Iteration --

    #[test]
    fn iter_yields_row_major_order() {
        let grid = Grid::new(3).unwrap();
        let coords: Vec<(usize, usize)> = grid.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[3], (1, 0));
        assert_eq!(coords[8], (2, 2));
    }

    #[test]
    fn alive_cells_lists_living_coordinates() {
        let grid = Grid::with_alive(5, &[(4, 0), (0, 4), (2, 2)]).unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 4), (2, 2), (4, 0)]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn neighbor_count_never_exceeds_eight(
                side in 3_usize..=16,
                cells in proptest::collection::vec(any::<bool>(), 256),
            ) {
                let grid = Grid::from_data(side, cells[..side * side].to_vec()).unwrap();
                for (row, col, _) in grid.iter() {
                    prop_assert!(grid.living_neighbors(row, col) <= 8);
                }
            }

            #[test]
            fn neighbor_count_matches_signed_lookup(
                side in 3_usize..=12,
                cells in proptest::collection::vec(any::<bool>(), 144),
            ) {
                let grid = Grid::from_data(side, cells[..side * side].to_vec()).unwrap();
                for (row, col, _) in grid.iter() {
                    let (r, c) = (row as isize, col as isize);
                    let mut expected = 0;
                    for dr in -1..=1 {
                        for dc in -1..=1 {
                            if (dr, dc) != (0, 0) && grid.get(r + dr, c + dc) {
                                expected += 1;
                            }
                        }
                    }
                    prop_assert_eq!(grid.living_neighbors(row, col), expected);
                }
            }
        }
    }
}
