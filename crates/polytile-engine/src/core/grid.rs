use super::cell::CellPos;

/// Status of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Free cell, available for placement.
    #[default]
    Empty,
    /// Permanently excluded from placement for the lifetime of the grid.
    Blocked,
    /// Covered by a committed piece.
    Occupied,
}

impl CellState {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// Outcome of a placement legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Legality {
    Legal,
    Illegal,
}

/// Fixed-size cell grid for one puzzle instance.
///
/// Dimensions and blocked cells are set at construction and never change;
/// cell statuses flip from `Empty` to `Occupied` only through committed
/// placements. Replaced wholesale on reset or puzzle switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid of the given dimensions with the given cells blocked.
    ///
    /// Blocked positions outside the grid are ignored here; the puzzle
    /// catalog validates layouts before a grid is ever built from them.
    #[must_use]
    pub fn new(rows: usize, cols: usize, blocked: &[CellPos]) -> Self {
        let mut grid = Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
        };
        for &pos in blocked {
            if let Some(index) = grid.index(pos) {
                grid.cells[index] = CellState::Blocked;
            }
        }
        grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, pos: CellPos) -> bool {
        self.index(pos).is_some()
    }

    /// Returns the state of the cell at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn state_at(&self, pos: CellPos) -> Option<CellState> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Returns an iterator over the rows of cell states, top to bottom.
    pub fn row_states(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.cols)
    }

    /// Decides whether a new piece may occupy the resolved cell set.
    ///
    /// A placement is `Legal` iff the set is non-empty and every cell is in
    /// bounds, not blocked, and not occupied. An empty set fails closed.
    ///
    /// This is a pure predicate, re-evaluated from scratch on every call, so
    /// hover preview and click commit always agree.
    #[must_use]
    pub fn check_placement(&self, cells: &[CellPos]) -> Legality {
        if cells.is_empty() {
            return Legality::Illegal;
        }
        let all_free = cells
            .iter()
            .all(|&pos| self.state_at(pos) == Some(CellState::Empty));
        if all_free { Legality::Legal } else { Legality::Illegal }
    }

    /// Marks a cell occupied. Only called while committing a placement the
    /// caller has already validated.
    pub(crate) fn set_occupied(&mut self, pos: CellPos) {
        let Some(index) = self.index(pos) else {
            debug_assert!(false, "committing out-of-bounds cell {pos:?}");
            return;
        };
        debug_assert!(self.cells[index].is_empty(), "committing over {pos:?}");
        self.cells[index] = CellState::Occupied;
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::piece::{Orientation, PieceShape, Rotation};

    use super::*;

    #[test]
    fn test_new_grid_states() {
        let blocked = [CellPos::new(0, 0), CellPos::new(5, 5)];
        let grid = Grid::new(6, 6, &blocked);

        for row in 0..6 {
            for col in 0..6 {
                let pos = CellPos::new(row, col);
                let expected = if blocked.contains(&pos) {
                    CellState::Blocked
                } else {
                    CellState::Empty
                };
                assert_eq!(grid.state_at(pos), Some(expected), "at {pos:?}");
            }
        }
    }

    #[test]
    fn test_state_at_out_of_bounds() {
        let grid = Grid::new(6, 6, &[]);
        assert_eq!(grid.state_at(CellPos::new(-1, 0)), None);
        assert_eq!(grid.state_at(CellPos::new(0, -1)), None);
        assert_eq!(grid.state_at(CellPos::new(6, 0)), None);
        assert_eq!(grid.state_at(CellPos::new(0, 6)), None);
    }

    #[test]
    fn test_legal_placement() {
        let grid = Grid::new(6, 6, &[]);
        let cells = PieceShape::Domino(Orientation::Horizontal).resolve(CellPos::new(0, 0));
        assert!(grid.check_placement(&cells).is_legal());
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        let grid = Grid::new(6, 6, &[]);
        // (0, 5) resolves to [(0, 5), (0, 6)]; column 6 is out of bounds.
        let cells = PieceShape::Domino(Orientation::Horizontal).resolve(CellPos::new(0, 5));
        assert!(grid.check_placement(&cells).is_illegal());
    }

    #[test]
    fn test_blocked_cell_is_illegal() {
        let grid = Grid::new(6, 6, &[CellPos::new(0, 0)]);
        // Any resolved set containing (0, 0) is illegal regardless of occupancy.
        let cells = PieceShape::Domino(Orientation::Horizontal).resolve(CellPos::new(0, 0));
        assert!(grid.check_placement(&cells).is_illegal());
        let cells = PieceShape::Domino(Orientation::Vertical).resolve(CellPos::new(0, 0));
        assert!(grid.check_placement(&cells).is_illegal());
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let mut grid = Grid::new(6, 6, &[]);
        grid.set_occupied(CellPos::new(0, 0));
        grid.set_occupied(CellPos::new(0, 1));

        let cells = PieceShape::Domino(Orientation::Vertical).resolve(CellPos::new(0, 0));
        assert!(grid.check_placement(&cells).is_illegal());

        // A placement clear of the occupied cells is still fine.
        let cells = PieceShape::Domino(Orientation::Vertical).resolve(CellPos::new(1, 3));
        assert!(grid.check_placement(&cells).is_legal());
    }

    #[test]
    fn test_empty_cell_set_fails_closed() {
        let grid = Grid::new(6, 6, &[]);
        assert!(grid.check_placement(&[]).is_illegal());
    }

    #[test]
    fn test_legality_monotonic_under_board_growth() {
        // A placement legal on an NxN grid stays legal on any larger grid
        // with the same blocked cells.
        let blocked = [CellPos::new(1, 1)];
        let small = Grid::new(6, 6, &blocked);
        let large = Grid::new(8, 8, &blocked);

        let shapes = [
            PieceShape::Domino(Orientation::Horizontal),
            PieceShape::Domino(Orientation::Vertical),
            PieceShape::TTetromino(Rotation::R0),
            PieceShape::TTetromino(Rotation::R90),
            PieceShape::TTetromino(Rotation::R180),
            PieceShape::TTetromino(Rotation::R270),
        ];
        for shape in shapes {
            for row in 0..6 {
                for col in 0..6 {
                    let cells = shape.resolve(CellPos::new(row, col));
                    if small.check_placement(&cells).is_legal() {
                        assert!(
                            large.check_placement(&cells).is_legal(),
                            "{shape:?} at ({row}, {col}) lost legality on the larger grid",
                        );
                    }
                }
            }
        }
    }
}
