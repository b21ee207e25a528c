use crate::{
    UnknownPuzzleError,
    core::{
        cell::CellPos,
        grid::Legality,
        piece::{PieceShape, ResolvedCells},
    },
};

use super::{
    board::Board,
    catalog::{PuzzleCatalog, PuzzleSpec},
    history::History,
};

/// Resolved cells and legality for the currently hovered anchor.
///
/// Produced on demand by [`PuzzleSession::preview`]; the same pure legality
/// check runs again on placement, so preview and commit cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPreview {
    shape: PieceShape,
    cells: ResolvedCells,
    legality: Legality,
}

impl PlacementPreview {
    #[must_use]
    pub fn shape(&self) -> PieceShape {
        self.shape
    }

    #[must_use]
    pub fn cells(&self) -> &[CellPos] {
        &self.cells
    }

    #[must_use]
    pub fn legality(&self) -> Legality {
        self.legality
    }
}

/// One interactive puzzle session over a catalog.
///
/// Translates discrete UI events (piece selection, cell hover, cell click,
/// undo/redo, reset, puzzle switching) into operations on the board and its
/// snapshot history. All operations are total: invalid input is a no-op,
/// never an error.
///
/// A selected shape persists across placements, so the player can stamp
/// multiple copies; selection is cleared explicitly or by switching puzzles.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    catalog: PuzzleCatalog,
    puzzle_index: usize,
    board: Board,
    history: History,
    selected: Option<PieceShape>,
    hovered: Option<CellPos>,
}

impl PuzzleSession {
    /// Starts a session at the first puzzle of the catalog.
    #[must_use]
    pub fn new(catalog: PuzzleCatalog) -> Self {
        let board = Board::new(&catalog.puzzles()[0]);
        Self {
            catalog,
            puzzle_index: 0,
            history: History::new(board.clone()),
            board,
            selected: None,
            hovered: None,
        }
    }

    /// Starts a session at the puzzle with the given id.
    pub fn with_start(catalog: PuzzleCatalog, id: &str) -> Result<Self, UnknownPuzzleError> {
        let Some(index) = catalog.position_of(id) else {
            return Err(UnknownPuzzleError { id: id.to_owned() });
        };
        let mut session = Self::new(catalog);
        session.load_puzzle(index);
        Ok(session)
    }

    #[must_use]
    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn puzzle(&self) -> &PuzzleSpec {
        &self.catalog.puzzles()[self.puzzle_index]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selected_piece(&self) -> Option<PieceShape> {
        self.selected
    }

    #[must_use]
    pub fn hovered_cell(&self) -> Option<CellPos> {
        self.hovered
    }

    /// Selects a shape from the current puzzle's palette. Shapes of a kind
    /// the puzzle does not allow are ignored.
    pub fn select_piece(&mut self, shape: PieceShape) {
        if self.puzzle().pieces().allows(shape.kind()) {
            self.selected = Some(shape);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Advances the selection to the next palette shape: the first shape if
    /// nothing is selected, otherwise the held shape's next variant.
    pub fn cycle_piece(&mut self) {
        self.selected = Some(match self.selected {
            Some(shape) => shape.cycled(),
            None => self.puzzle().pieces().shapes()[0],
        });
    }

    /// Records the hovered anchor cell for preview computation.
    pub fn hover_cell(&mut self, pos: CellPos) {
        self.hovered = Some(pos);
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Resolves the held shape at the hovered anchor without mutating
    /// anything. `None` when no shape is held or no cell is hovered.
    #[must_use]
    pub fn preview(&self) -> Option<PlacementPreview> {
        let shape = self.selected?;
        let anchor = self.hovered?;
        let cells = shape.resolve(anchor);
        let legality = self.board.grid().check_placement(&cells);
        Some(PlacementPreview {
            shape,
            cells,
            legality,
        })
    }

    /// Attempts to place the held shape anchored at `pos`.
    ///
    /// On `Legal`, the placement is committed and a snapshot recorded; the
    /// selection persists so further copies can be stamped. On `Illegal`
    /// (including when no shape is held) nothing changes.
    pub fn place_at(&mut self, pos: CellPos) -> Legality {
        let Some(shape) = self.selected else {
            return Legality::Illegal;
        };
        let cells = shape.resolve(pos);
        let legality = self.board.grid().check_placement(&cells);
        if legality.is_legal() {
            self.board.commit_placement(shape, cells);
            self.history.record(self.board.clone());
        }
        legality
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot; no-op at the start of history.
    /// Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot; no-op at the end of history.
    /// Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    /// Reinitializes the current puzzle: fresh grid with its blocked-cell
    /// layout, no placed pieces, history reduced to the initial snapshot.
    /// The selection survives a reset; it is still valid for the puzzle.
    pub fn reset(&mut self) {
        self.board = Board::new(self.puzzle());
        self.history = History::new(self.board.clone());
    }

    /// Switches to the puzzle with the given id and reinitializes.
    pub fn reset_to(&mut self, id: &str) -> Result<(), UnknownPuzzleError> {
        let Some(index) = self.catalog.position_of(id) else {
            return Err(UnknownPuzzleError { id: id.to_owned() });
        };
        self.load_puzzle(index);
        Ok(())
    }

    /// Switches to the next puzzle, wrapping at the end of the catalog.
    pub fn next_puzzle(&mut self) {
        self.load_puzzle((self.puzzle_index + 1) % self.catalog.len());
    }

    /// Switches to the previous puzzle, wrapping at the start of the catalog.
    pub fn previous_puzzle(&mut self) {
        self.load_puzzle((self.puzzle_index + self.catalog.len() - 1) % self.catalog.len());
    }

    fn load_puzzle(&mut self, index: usize) {
        self.puzzle_index = index;
        self.board = Board::new(self.puzzle());
        self.history = History::new(self.board.clone());
        self.selected = None;
        self.hovered = None;
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.board.placed_count()
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.puzzle().target_piece_count()
    }

    /// Whether the per-puzzle target has been reached. Progress reporting
    /// only; there is no win detection beyond the count.
    #[must_use]
    pub fn is_target_reached(&self) -> bool {
        self.placed_count() >= self.target_count()
    }
}
