//! Headless engine for domino/T-tetromino tiling puzzles.
//!
//! The engine is split into two layers:
//!
//! - [`core`] - pure geometry and board primitives: [`PieceShape`] resolution,
//!   [`Grid`] cell states, and the placement [`Legality`] check
//! - [`engine`] - stateful puzzle session: [`Board`] with placed pieces,
//!   snapshot [`History`] for undo/redo, the [`PuzzleCatalog`], and the
//!   event-driven [`PuzzleSession`]
//!
//! No I/O happens here; rendering layers consume cell states and drive a
//! [`PuzzleSession`] from user input events.
//!
//! # Example
//!
//! ```
//! use polytile_engine::{CellPos, Orientation, PieceShape, PuzzleCatalog, PuzzleSession};
//!
//! let mut session = PuzzleSession::new(PuzzleCatalog::builtin());
//! session.select_piece(PieceShape::Domino(Orientation::Horizontal));
//!
//! let legality = session.place_at(CellPos::new(0, 0));
//! assert!(legality.is_legal());
//! assert_eq!(session.placed_count(), 1);
//!
//! session.undo();
//! assert_eq!(session.placed_count(), 0);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Validation failure when constructing a [`PuzzleCatalog`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// The catalog contains no puzzles.
    #[display("catalog contains no puzzles")]
    Empty,
    /// Two puzzles share the same id.
    #[display("duplicate puzzle id: {id}")]
    DuplicateId { id: String },
    /// Grid dimensions are zero or exceed the supported maximum.
    #[display("puzzle {id}: grid dimensions {rows}x{cols} out of range")]
    InvalidDimensions { id: String, rows: usize, cols: usize },
    /// A blocked cell lies outside the grid.
    #[display("puzzle {id}: blocked cell ({row}, {col}) out of bounds")]
    BlockedCellOutOfBounds { id: String, row: i16, col: i16 },
    /// The target piece count cannot fit on the board.
    #[display("puzzle {id}: target of {target} pieces exceeds board capacity of {capacity}")]
    TargetExceedsCapacity {
        id: String,
        target: usize,
        capacity: usize,
    },
}

/// A puzzle id that does not exist in the catalog.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown puzzle id: {id}")]
pub struct UnknownPuzzleError {
    pub id: String,
}
