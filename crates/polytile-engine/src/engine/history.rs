use super::board::Board;

/// Linear undo/redo history of board snapshots.
///
/// The snapshot at the cursor always equals the live board; committing a
/// placement pushes a new snapshot at the cursor and discards any redo tail.
/// Grows unboundedly within a puzzle session and is discarded wholesale on
/// reset or puzzle switch.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Creates a history with a single initial snapshot at cursor 0.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.snapshots.len() - 1
    }

    /// Records a new snapshot after an accepted mutation, discarding any
    /// snapshots beyond the cursor, and advances the cursor to it.
    pub fn record(&mut self, board: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor += 1;
    }

    /// Moves the cursor back one snapshot and returns it, or `None` at the
    /// start of history.
    pub fn undo(&mut self) -> Option<&Board> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Moves the cursor forward one snapshot and returns it, or `None` at
    /// the end of history.
    pub fn redo(&mut self) -> Option<&Board> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }
}

#[cfg(test)]
mod tests {
    use crate::{CellPos, Orientation, PieceSet, PieceShape, PuzzleSpec};

    use super::*;

    fn board_after_placements(count: usize) -> (Board, History) {
        let spec = PuzzleSpec::for_tests("test", 6, 6, &[], 18, PieceSet::Dominoes);
        let mut board = Board::new(&spec);
        let mut history = History::new(board.clone());
        for row in 0..count {
            let shape = PieceShape::Domino(Orientation::Horizontal);
            #[expect(clippy::cast_possible_truncation)]
            let anchor = CellPos::new(row as i16, 0);
            board.commit_placement(shape, shape.resolve(anchor));
            history.record(board.clone());
        }
        (board, history)
    }

    #[test]
    fn test_initial_history() {
        let (_, history) = board_after_placements(0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current().placed_count(), 0);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let (board, mut history) = board_after_placements(1);
        assert_eq!(*history.current(), board);

        let before = history.undo().unwrap().clone();
        assert_eq!(before.placed_count(), 0);

        let after = history.redo().unwrap().clone();
        assert_eq!(after, board);
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let (_, mut history) = board_after_placements(0);
        assert!(history.undo().is_none());
        assert_eq!(history.current().placed_count(), 0);
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let (_, mut history) = board_after_placements(2);
        assert!(history.redo().is_none());
        assert_eq!(history.current().placed_count(), 2);
    }

    #[test]
    fn test_record_discards_redo_tail() {
        let (mut board, mut history) = board_after_placements(3);
        history.undo();
        history.undo();
        assert_eq!(history.current().placed_count(), 1);

        // Recording from the rewound state drops the two "future" snapshots.
        board = history.current().clone();
        let shape = PieceShape::Domino(Orientation::Vertical);
        board.commit_placement(shape, shape.resolve(CellPos::new(3, 3)));
        history.record(board);

        assert!(!history.can_redo());
        assert_eq!(history.current().placed_count(), 2);

        // The discarded snapshots are gone: two undos reach the initial board.
        assert_eq!(history.undo().unwrap().placed_count(), 1);
        assert_eq!(history.undo().unwrap().placed_count(), 0);
        assert!(history.undo().is_none());
    }
}
