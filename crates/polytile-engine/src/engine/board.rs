use crate::core::{
    cell::CellPos,
    grid::{Grid, Legality},
    piece::{PieceShape, ResolvedCells},
};

use super::catalog::PuzzleSpec;

/// A committed piece: its shape plus the concrete cells it occupies.
///
/// Created when a placement is accepted; never mutated afterwards. Removed
/// only by undoing past its commit or by a full reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPiece {
    shape: PieceShape,
    cells: ResolvedCells,
}

impl PlacedPiece {
    #[must_use]
    pub fn shape(&self) -> PieceShape {
        self.shape
    }

    #[must_use]
    pub fn cells(&self) -> &[CellPos] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, pos: CellPos) -> bool {
        self.cells.contains(&pos)
    }
}

/// The canonical board: grid cell states plus the ordered placed-piece list.
///
/// `Board` is the sole authority for mutating either. Grid statuses are a
/// derived view of the placed pieces: every `Occupied` cell belongs to
/// exactly one placed piece, and blocked cells never appear in any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    placed: Vec<PlacedPiece>,
}

impl Board {
    /// Creates a fresh board for the given puzzle layout.
    #[must_use]
    pub fn new(spec: &PuzzleSpec) -> Self {
        Self {
            grid: Grid::new(spec.rows(), spec.cols(), spec.blocked_cells()),
            placed: Vec::new(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn placed_pieces(&self) -> &[PlacedPiece] {
        &self.placed
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Resolves `shape` at `anchor` and checks the placement against the
    /// current board, without mutating anything.
    #[must_use]
    pub fn check_placement(&self, shape: PieceShape, anchor: CellPos) -> Legality {
        self.grid.check_placement(&shape.resolve(anchor))
    }

    /// Returns the placed piece covering `pos`, if any.
    #[must_use]
    pub fn piece_at(&self, pos: CellPos) -> Option<&PlacedPiece> {
        self.placed.iter().find(|piece| piece.contains(pos))
    }

    /// Commits a placement the caller has already validated as legal.
    ///
    /// Marks every cell occupied and appends the placed piece. Legality is
    /// not re-checked here; the session is the only caller and checks first.
    pub(crate) fn commit_placement(&mut self, shape: PieceShape, cells: ResolvedCells) {
        debug_assert!(self.grid.check_placement(&cells).is_legal());
        for &pos in &cells {
            self.grid.set_occupied(pos);
        }
        self.placed.push(PlacedPiece { shape, cells });
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CellState, Orientation, PieceSet, Rotation,
        core::piece::PieceShape,
    };

    use super::*;

    fn open_board() -> Board {
        Board::new(&PuzzleSpec::for_tests("test", 6, 6, &[], 18, PieceSet::Dominoes))
    }

    fn place(board: &mut Board, shape: PieceShape, anchor: CellPos) {
        let cells = shape.resolve(anchor);
        assert!(board.grid().check_placement(&cells).is_legal());
        board.commit_placement(shape, cells);
    }

    #[test]
    fn test_commit_marks_cells_occupied() {
        let mut board = open_board();
        place(
            &mut board,
            PieceShape::Domino(Orientation::Horizontal),
            CellPos::new(0, 0),
        );

        assert_eq!(board.placed_count(), 1);
        assert_eq!(board.grid().state_at(CellPos::new(0, 0)), Some(CellState::Occupied));
        assert_eq!(board.grid().state_at(CellPos::new(0, 1)), Some(CellState::Occupied));
        assert_eq!(board.grid().state_at(CellPos::new(0, 2)), Some(CellState::Empty));
    }

    #[test]
    fn test_piece_at() {
        let mut board = open_board();
        place(
            &mut board,
            PieceShape::TTetromino(Rotation::R0),
            CellPos::new(2, 2),
        );

        let piece = board.piece_at(CellPos::new(3, 2)).unwrap();
        assert_eq!(piece.shape(), PieceShape::TTetromino(Rotation::R0));
        assert!(board.piece_at(CellPos::new(4, 4)).is_none());
    }

    #[test]
    fn test_placed_pieces_never_overlap() {
        let mut board = open_board();
        let shape = PieceShape::Domino(Orientation::Horizontal);
        for row in 0..6 {
            for col in [0, 2, 4] {
                place(&mut board, shape, CellPos::new(row, col));
            }
        }
        assert_eq!(board.placed_count(), 18);

        // Pairwise scan: no two placed pieces share a cell.
        let pieces = board.placed_pieces();
        for (i, a) in pieces.iter().enumerate() {
            for b in &pieces[i + 1..] {
                assert!(
                    a.cells().iter().all(|pos| !b.contains(*pos)),
                    "{a:?} and {b:?} overlap",
                );
            }
        }
    }

    #[test]
    fn test_occupied_cells_match_placed_pieces() {
        let mut board = open_board();
        place(
            &mut board,
            PieceShape::Domino(Orientation::Vertical),
            CellPos::new(1, 1),
        );
        place(
            &mut board,
            PieceShape::Domino(Orientation::Horizontal),
            CellPos::new(4, 2),
        );

        for row in 0..6 {
            for col in 0..6 {
                let pos = CellPos::new(row, col);
                let occupied = board.grid().state_at(pos) == Some(CellState::Occupied);
                assert_eq!(occupied, board.piece_at(pos).is_some(), "at {pos:?}");
            }
        }
    }
}
