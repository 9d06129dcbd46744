use crate::simulation::cell::is_alive;
use crate::simulation::grid::Grid;

/// Moore neighborhood of a square cell.
const SQUARE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Neighbors of an upward-pointing triangle, as (row, column) offsets. Every
/// edge- or vertex-adjacent triangle in the packed tessellation is a
/// neighbor; the table is authoritative, not derived.
const TRIANGLE_UP_OFFSETS: [(isize, isize); 12] = [
    (1, -1),  (1, 0),   (1, 1),
    (0, -2),  (0, -1),  (0, 1),  (0, 2),
    (-1, -2), (-1, -1), (-1, 0), (-1, 1), (-1, 2),
];

/// Neighbors of a downward-pointing triangle.
const TRIANGLE_DOWN_OFFSETS: [(isize, isize); 12] = [
    (1, -2),  (1, -1), (1, 0), (1, 1), (1, 2),
    (0, -2),  (0, -1), (0, 1), (0, 2),
    (-1, -1), (-1, 0), (-1, 1),
];

/// Grid tessellation, fixed at automaton construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Orthogonal square grid, 8-neighbor Moore neighborhood.
    Square,
    /// Packed triangular grid, 12-neighbor neighborhood that depends on
    /// which way the cell's triangle points.
    Triangle,
}

/// Whether the triangle at `(row, col)` points upward: matching row and
/// column parity means an up-pointing triangle under this indexing.
pub fn points_up(row: usize, col: usize) -> bool {
    row % 2 == col % 2
}

impl Topology {
    /// Count the neighbors of `(x, y)` that are exactly alive. Offsets
    /// landing off-grid contribute nothing; the grid does not wrap.
    pub fn count_alive_neighbors(self, grid: &Grid, x: usize, y: usize) -> usize {
        let offsets: &[(isize, isize)] = match self {
            Topology::Square => &SQUARE_OFFSETS,
            Topology::Triangle => {
                if points_up(x, y) {
                    &TRIANGLE_UP_OFFSETS
                } else {
                    &TRIANGLE_DOWN_OFFSETS
                }
            }
        };

        offsets
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                nx >= 0
                    && (nx as usize) < grid.height()
                    && ny >= 0
                    && (ny as usize) < grid.width()
                    && is_alive(grid.get(nx as usize, ny as usize))
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::cell::ALIVE;

    fn all_alive(height: usize, width: usize) -> Grid {
        let mut grid = Grid::dead(height, width);
        for x in 0..height {
            for y in 0..width {
                grid.set(x, y, ALIVE);
            }
        }
        grid
    }

    #[test]
    fn test_square_interior_counts_all_eight() {
        let grid = all_alive(3, 3);
        assert_eq!(Topology::Square.count_alive_neighbors(&grid, 1, 1), 8);
    }

    #[test]
    fn test_square_corner_clips_to_three() {
        let grid = all_alive(3, 3);
        assert_eq!(Topology::Square.count_alive_neighbors(&grid, 0, 0), 3);
        assert_eq!(Topology::Square.count_alive_neighbors(&grid, 2, 2), 3);
    }

    #[test]
    fn test_square_counts_only_exact_neighbors() {
        let mut grid = Grid::dead(3, 3);
        grid.set(0, 0, ALIVE);
        grid.set(0, 1, ALIVE);
        grid.set(2, 2, ALIVE);
        assert_eq!(Topology::Square.count_alive_neighbors(&grid, 1, 1), 3);
        // The center cell itself never counts.
        grid.set(1, 1, ALIVE);
        assert_eq!(Topology::Square.count_alive_neighbors(&grid, 1, 1), 3);
    }

    #[test]
    fn test_fading_cells_are_not_alive() {
        let mut grid = Grid::dead(3, 3);
        grid.set(0, 0, 90);
        grid.set(0, 1, 10);
        grid.set(0, 2, ALIVE);
        assert_eq!(Topology::Square.count_alive_neighbors(&grid, 1, 1), 1);
    }

    #[test]
    fn test_triangle_orientation() {
        assert!(points_up(0, 0));
        assert!(!points_up(0, 1));
        assert!(!points_up(1, 0));
        assert!(points_up(1, 1));
        assert!(points_up(2, 4));
        assert!(!points_up(2, 5));
    }

    #[test]
    fn test_triangle_interior_counts_all_twelve() {
        let grid = all_alive(3, 7);
        // (1, 3) points up, (1, 2) points down; both have all 12 candidates
        // in bounds on a 3x7 grid.
        assert!(points_up(1, 3));
        assert_eq!(Topology::Triangle.count_alive_neighbors(&grid, 1, 3), 12);
        assert!(!points_up(1, 2));
        assert_eq!(Topology::Triangle.count_alive_neighbors(&grid, 1, 2), 12);
    }

    #[test]
    fn test_triangle_corner_clips() {
        let grid = all_alive(3, 7);
        // Up-pointing (0, 0): only (1,0), (1,1), (0,1), (0,2) stay in bounds.
        assert_eq!(Topology::Triangle.count_alive_neighbors(&grid, 0, 0), 4);
    }

    #[test]
    fn test_triangle_orientation_selects_offset_table() {
        // The (1, -2) offset exists only in the down-pointing table: a lone
        // live cell at (2, 1) is a neighbor of the down cell at (1, 2)
        // (offset (1, -1)) but not of the up cell at (1, 3), whose table has
        // no way to reach it.
        let mut grid = Grid::dead(3, 7);
        grid.set(2, 1, ALIVE);
        assert_eq!(Topology::Triangle.count_alive_neighbors(&grid, 1, 3), 0);
        assert_eq!(Topology::Triangle.count_alive_neighbors(&grid, 1, 2), 1);
    }
}
