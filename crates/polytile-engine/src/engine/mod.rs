//! Puzzle state management on top of the core primitives.
//!
//! - [`Board`] - canonical grid plus the ordered list of placed pieces
//! - [`History`] - board snapshots with a cursor for undo/redo
//! - [`PuzzleCatalog`] / [`PuzzleSpec`] - per-puzzle dimensions, blocked
//!   cells, target count, and allowed piece set
//! - [`PuzzleSession`] - translates discrete UI events (select, hover,
//!   place, undo, redo, reset, puzzle switch) into board mutations
//!
//! # Session Flow
//!
//! 1. Build a [`PuzzleSession`] from a catalog
//! 2. The player selects a shape, hovers for a preview, and places it
//! 3. Each accepted placement appends a snapshot; undo/redo walk the cursor
//! 4. Reset or puzzle switch rebuilds the board and discards history
//!
//! All operations run to completion synchronously and are total: rejected
//! placements and history navigation past either end are no-ops, never
//! errors.

pub use self::{board::*, catalog::*, history::*, session::*};

mod board;
mod catalog;
mod history;
mod session;
