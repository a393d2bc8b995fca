//! Room occupancy grid
//!
//! Fixed-size square board of boolean cells. The generator only ever adds
//! cells, never removes them, so the grid is append-only for the life of
//! a dungeon.

/// Square occupancy map over integer coordinates.
///
/// Coordinates are signed so neighbor math at the border stays simple;
/// anything outside `0..size` reads as unoccupied.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, where the start room goes.
    pub fn center(&self) -> (i32, i32) {
        let c = (self.size / 2) as i32;
        (c, c)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Bounds-checked occupancy test. Out-of-bounds cells read as empty.
    pub fn in_grid_and_occupied(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.cells[y as usize * self.size + x as usize]
    }

    /// Mark a cell occupied. Out-of-bounds coordinates are ignored; the
    /// generator only calls this after a successful placement check.
    pub fn occupy(&mut self, x: i32, y: i32) {
        if self.contains(x, y) {
            self.cells[y as usize * self.size + x as usize] = true;
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Can a room be placed at (x, y)?
    ///
    /// Rejects out-of-bounds and already-occupied cells, and any placement
    /// that would complete a fully-occupied 2x2 block. The square check
    /// tests the two orthogonal neighbors toward each of the four
    /// diagonals; all four directions are checked independently.
    pub fn is_valid_placement(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        if self.in_grid_and_occupied(x, y) {
            return false;
        }

        // Down-right square
        if self.in_grid_and_occupied(x, y + 1) && self.in_grid_and_occupied(x + 1, y) {
            return false;
        }
        // Up-right square
        if self.in_grid_and_occupied(x, y - 1) && self.in_grid_and_occupied(x + 1, y) {
            return false;
        }
        // Down-left square
        if self.in_grid_and_occupied(x, y + 1) && self.in_grid_and_occupied(x - 1, y) {
            return false;
        }
        // Up-left square
        if self.in_grid_and_occupied(x, y - 1) && self.in_grid_and_occupied(x - 1, y) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_odd_grid() {
        let grid = Grid::new(7);
        assert_eq!(grid.center(), (3, 3));
    }

    #[test]
    fn test_out_of_bounds_reads_empty() {
        let grid = Grid::new(5);
        assert!(!grid.in_grid_and_occupied(-1, 0));
        assert!(!grid.in_grid_and_occupied(0, -1));
        assert!(!grid.in_grid_and_occupied(5, 0));
        assert!(!grid.in_grid_and_occupied(0, 5));
    }

    #[test]
    fn test_placement_rejects_occupied_and_out_of_bounds() {
        let mut grid = Grid::new(5);
        grid.occupy(2, 2);
        assert!(!grid.is_valid_placement(2, 2));
        assert!(!grid.is_valid_placement(-1, 2));
        assert!(!grid.is_valid_placement(2, 5));
        assert!(grid.is_valid_placement(2, 3));
    }

    #[test]
    fn test_placement_rejects_square_completion() {
        // An occupied orthogonal pair toward any diagonal rejects the
        // placement that would close the 2x2 block.
        let reject = |pair: [(i32, i32); 2]| {
            let mut grid = Grid::new(5);
            for (x, y) in pair {
                grid.occupy(x, y);
            }
            assert!(!grid.is_valid_placement(2, 2), "pair {:?}", pair);
        };
        reject([(2, 3), (3, 2)]); // down-right
        reject([(2, 1), (3, 2)]); // up-right
        reject([(2, 3), (1, 2)]); // down-left
        reject([(2, 1), (1, 2)]); // up-left
    }

    #[test]
    fn test_placement_allows_corridor() {
        let mut grid = Grid::new(5);
        grid.occupy(0, 0);
        grid.occupy(1, 0);
        grid.occupy(2, 0);
        // Straight line: extending it or branching is fine
        assert!(grid.is_valid_placement(3, 0));
        assert!(grid.is_valid_placement(1, 1));
    }

    #[test]
    fn test_square_check_ignores_missing_diagonal_cell() {
        // Both orthogonal neighbors occupied still rejects, even though the
        // diagonal cell itself is empty: density control, not overlap.
        let mut grid = Grid::new(5);
        grid.occupy(3, 2);
        grid.occupy(2, 3);
        assert!(!grid.is_valid_placement(2, 2));
    }
}
