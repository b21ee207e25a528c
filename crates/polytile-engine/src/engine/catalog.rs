use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    CatalogError,
    core::{
        cell::CellPos,
        piece::{Orientation, PieceKind, PieceShape, Rotation},
    },
};

/// Largest supported grid dimension. The shipped puzzles are 6×6 and 8×8;
/// the cap keeps user catalogs within what the board widget can draw.
pub const MAX_GRID_DIM: usize = 16;

/// Which shapes a puzzle's palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceSet {
    /// The two domino orientations.
    Dominoes,
    /// The four T-tetromino rotations.
    TTetrominoes,
}

const DOMINO_SHAPES: [PieceShape; 2] = [
    PieceShape::Domino(Orientation::Horizontal),
    PieceShape::Domino(Orientation::Vertical),
];

const T_TETROMINO_SHAPES: [PieceShape; 4] = [
    PieceShape::TTetromino(Rotation::R0),
    PieceShape::TTetromino(Rotation::R90),
    PieceShape::TTetromino(Rotation::R180),
    PieceShape::TTetromino(Rotation::R270),
];

impl PieceSet {
    #[must_use]
    pub fn allows(self, kind: PieceKind) -> bool {
        match self {
            PieceSet::Dominoes => kind == PieceKind::Domino,
            PieceSet::TTetrominoes => kind == PieceKind::TTetromino,
        }
    }

    /// The palette shapes for this set, in display order.
    #[must_use]
    pub const fn shapes(self) -> &'static [PieceShape] {
        match self {
            PieceSet::Dominoes => &DOMINO_SHAPES,
            PieceSet::TTetrominoes => &T_TETROMINO_SHAPES,
        }
    }

    /// Cells per piece in this set.
    #[must_use]
    pub const fn piece_cells(self) -> usize {
        match self {
            PieceSet::Dominoes => 2,
            PieceSet::TTetrominoes => 4,
        }
    }
}

/// Static configuration of one puzzle: dimensions, blocked-cell layout,
/// target piece count, and the allowed piece set.
///
/// Deserializable so user catalogs can be loaded from JSON; always validated
/// through [`PuzzleCatalog::new`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PuzzleSpec {
    id: String,
    name: String,
    rows: usize,
    cols: usize,
    #[serde(default)]
    blocked_cells: Vec<CellPos>,
    target_piece_count: usize,
    pieces: PieceSet,
}

impl PuzzleSpec {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
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
    pub fn blocked_cells(&self) -> &[CellPos] {
        &self.blocked_cells
    }

    #[must_use]
    pub fn target_piece_count(&self) -> usize {
        self.target_piece_count
    }

    #[must_use]
    pub fn pieces(&self) -> PieceSet {
        self.pieces
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let in_range = |dim| (1..=MAX_GRID_DIM).contains(&dim);
        if !in_range(self.rows) || !in_range(self.cols) {
            return Err(CatalogError::InvalidDimensions {
                id: self.id.clone(),
                rows: self.rows,
                cols: self.cols,
            });
        }
        for pos in &self.blocked_cells {
            let row = usize::try_from(pos.row()).ok();
            let col = usize::try_from(pos.col()).ok();
            let in_bounds = matches!((row, col), (Some(r), Some(c)) if r < self.rows && c < self.cols);
            if !in_bounds {
                return Err(CatalogError::BlockedCellOutOfBounds {
                    id: self.id.clone(),
                    row: pos.row(),
                    col: pos.col(),
                });
            }
        }
        // Count distinct cells: duplicate blocked entries are harmless, but
        // counting them twice would understate capacity (or underflow).
        let blocked: HashSet<_> = self.blocked_cells.iter().collect();
        let free_cells = self.rows * self.cols - blocked.len();
        let capacity = free_cells / self.pieces.piece_cells();
        if self.target_piece_count > capacity {
            return Err(CatalogError::TargetExceedsCapacity {
                id: self.id.clone(),
                target: self.target_piece_count,
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
impl PuzzleSpec {
    pub(crate) fn for_tests(
        id: &str,
        rows: usize,
        cols: usize,
        blocked_cells: &[CellPos],
        target_piece_count: usize,
        pieces: PieceSet,
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
            rows,
            cols,
            blocked_cells: blocked_cells.to_vec(),
            target_piece_count,
            pieces,
        }
    }
}

/// Ordered collection of validated puzzle specs.
#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    puzzles: Vec<PuzzleSpec>,
}

impl PuzzleCatalog {
    /// Validates the given specs into a catalog.
    pub fn new(puzzles: Vec<PuzzleSpec>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, puzzle) in puzzles.iter().enumerate() {
            puzzle.validate()?;
            if puzzles[..i].iter().any(|other| other.id == puzzle.id) {
                return Err(CatalogError::DuplicateId {
                    id: puzzle.id.clone(),
                });
            }
        }
        Ok(Self { puzzles })
    }

    /// The shipped catalog: the domino and T-tetromino exercises from the
    /// original puzzle pages.
    #[must_use]
    pub fn builtin() -> Self {
        let spec = |id: &str, name: &str, rows, cols, blocked: &[(i16, i16)], target, pieces| {
            PuzzleSpec {
                id: id.to_owned(),
                name: name.to_owned(),
                rows,
                cols,
                blocked_cells: blocked.iter().map(|&(r, c)| CellPos::new(r, c)).collect(),
                target_piece_count: target,
                pieces,
            }
        };
        // Kept in sync with `test_builtin_catalog_is_valid`.
        Self {
            puzzles: vec![
                spec(
                    "dominoes-6",
                    "Open Court",
                    6,
                    6,
                    &[],
                    18,
                    PieceSet::Dominoes,
                ),
                spec(
                    "mutilated-6",
                    "Mutilated Board",
                    6,
                    6,
                    &[(0, 0), (5, 5)],
                    17,
                    PieceSet::Dominoes,
                ),
                spec(
                    "t-tiling-8",
                    "T Tiling",
                    8,
                    8,
                    &[],
                    16,
                    PieceSet::TTetrominoes,
                ),
                spec(
                    "courtyard-6",
                    "Courtyard",
                    6,
                    6,
                    &[(2, 2), (2, 3), (3, 2), (3, 3)],
                    8,
                    PieceSet::TTetrominoes,
                ),
            ],
        }
    }

    #[must_use]
    pub fn puzzles(&self) -> &[PuzzleSpec] {
        &self.puzzles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PuzzleSpec> {
        self.puzzles.iter().find(|puzzle| puzzle.id == id)
    }

    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.puzzles.iter().position(|puzzle| puzzle.id == id)
    }
}
