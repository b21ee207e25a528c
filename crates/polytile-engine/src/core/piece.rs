use arrayvec::ArrayVec;

use super::cell::CellPos;

/// Maximum number of cells any placeable shape occupies.
pub const MAX_PIECE_CELLS: usize = 4;

/// Absolute cells a shape would occupy, anchor first.
pub type ResolvedCells = ArrayVec<CellPos, MAX_PIECE_CELLS>;

/// Orientation of a domino.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Rotation state of a T-tetromino, in 90° clockwise steps from the
/// stem-down spawn orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Stem pointing down.
    #[default]
    R0,
    /// Stem pointing right.
    R90,
    /// Stem pointing up.
    R180,
    /// Stem pointing left.
    R270,
}

impl Rotation {
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    #[must_use]
    pub const fn rotated_left(self) -> Self {
        self.rotated_right().rotated_right().rotated_right()
    }
}

/// Broad class of a shape, independent of orientation/rotation.
///
/// The puzzle catalog gates the palette by kind: domino puzzles offer the two
/// orientations, tetromino puzzles the four rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Domino,
    TTetromino,
}

/// A placeable shape: a kind plus its shape parameter.
///
/// Shapes are immutable values; orientation and rotation changes return new
/// `PieceShape` instances. Geometry is resolved relative to an anchor cell
/// with [`resolve`](Self::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceShape {
    Domino(Orientation),
    TTetromino(Rotation),
}

/// Cell offsets relative to the anchor. The anchor itself is first in every
/// table; legality depends only on the set, but the resolver contract fixes
/// the order.
const DOMINO_HORIZONTAL: [(i16, i16); 2] = [(0, 0), (0, 1)];
const DOMINO_VERTICAL: [(i16, i16); 2] = [(0, 0), (1, 0)];
const T_STEM_DOWN: [(i16, i16); 4] = [(0, 0), (0, -1), (0, 1), (1, 0)];
const T_STEM_RIGHT: [(i16, i16); 4] = [(0, 0), (-1, 0), (1, 0), (0, 1)];
const T_STEM_UP: [(i16, i16); 4] = [(0, 0), (0, -1), (0, 1), (-1, 0)];
const T_STEM_LEFT: [(i16, i16); 4] = [(0, 0), (-1, 0), (1, 0), (0, -1)];

impl PieceShape {
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            PieceShape::Domino(_) => PieceKind::Domino,
            PieceShape::TTetromino(_) => PieceKind::TTetromino,
        }
    }

    /// Number of cells this shape occupies (2 for dominoes, 4 for
    /// T-tetrominoes).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self {
            PieceShape::Domino(_) => 2,
            PieceShape::TTetromino(_) => 4,
        }
    }

    /// Relative cell offsets of this shape, anchor first.
    #[must_use]
    pub const fn offsets(self) -> &'static [(i16, i16)] {
        match self {
            PieceShape::Domino(Orientation::Horizontal) => &DOMINO_HORIZONTAL,
            PieceShape::Domino(Orientation::Vertical) => &DOMINO_VERTICAL,
            PieceShape::TTetromino(Rotation::R0) => &T_STEM_DOWN,
            PieceShape::TTetromino(Rotation::R90) => &T_STEM_RIGHT,
            PieceShape::TTetromino(Rotation::R180) => &T_STEM_UP,
            PieceShape::TTetromino(Rotation::R270) => &T_STEM_LEFT,
        }
    }

    /// Resolves the absolute cells this shape would occupy at `anchor`.
    ///
    /// The anchor cell is always the first element. No bounds checking is
    /// performed here; candidate cells outside the grid pass through and are
    /// rejected by [`Grid::check_placement`](super::grid::Grid::check_placement).
    ///
    /// # Example
    ///
    /// ```
    /// use polytile_engine::{CellPos, Orientation, PieceShape};
    ///
    /// let shape = PieceShape::Domino(Orientation::Horizontal);
    /// let cells = shape.resolve(CellPos::new(0, 0));
    /// assert_eq!(&cells[..], [CellPos::new(0, 0), CellPos::new(0, 1)]);
    /// ```
    #[must_use]
    pub fn resolve(self, anchor: CellPos) -> ResolvedCells {
        self.offsets()
            .iter()
            .map(|&(d_row, d_col)| anchor.offset(d_row, d_col))
            .collect()
    }

    /// Returns the next shape variant of the same kind: dominoes flip
    /// orientation, T-tetrominoes rotate 90° clockwise.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            PieceShape::Domino(orientation) => PieceShape::Domino(orientation.flipped()),
            PieceShape::TTetromino(rotation) => PieceShape::TTetromino(rotation.rotated_right()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domino_geometry() {
        let anchor = CellPos::new(3, 4);

        let cells = PieceShape::Domino(Orientation::Horizontal).resolve(anchor);
        assert_eq!(&cells[..], [CellPos::new(3, 4), CellPos::new(3, 5)]);

        let cells = PieceShape::Domino(Orientation::Vertical).resolve(anchor);
        assert_eq!(&cells[..], [CellPos::new(3, 4), CellPos::new(4, 4)]);
    }

    #[test]
    fn test_tetromino_geometry() {
        let anchor = CellPos::new(2, 2);

        let cells = PieceShape::TTetromino(Rotation::R0).resolve(anchor);
        assert_eq!(
            &cells[..],
            [
                CellPos::new(2, 2),
                CellPos::new(2, 1),
                CellPos::new(2, 3),
                CellPos::new(3, 2),
            ],
        );

        let cells = PieceShape::TTetromino(Rotation::R90).resolve(anchor);
        assert_eq!(
            &cells[..],
            [
                CellPos::new(2, 2),
                CellPos::new(1, 2),
                CellPos::new(3, 2),
                CellPos::new(2, 3),
            ],
        );

        let cells = PieceShape::TTetromino(Rotation::R180).resolve(anchor);
        assert_eq!(
            &cells[..],
            [
                CellPos::new(2, 2),
                CellPos::new(2, 1),
                CellPos::new(2, 3),
                CellPos::new(1, 2),
            ],
        );

        let cells = PieceShape::TTetromino(Rotation::R270).resolve(anchor);
        assert_eq!(
            &cells[..],
            [
                CellPos::new(2, 2),
                CellPos::new(1, 2),
                CellPos::new(3, 2),
                CellPos::new(2, 1),
            ],
        );
    }

    #[test]
    fn test_anchor_always_first() {
        let anchor = CellPos::new(5, 5);
        let shapes = [
            PieceShape::Domino(Orientation::Horizontal),
            PieceShape::Domino(Orientation::Vertical),
            PieceShape::TTetromino(Rotation::R0),
            PieceShape::TTetromino(Rotation::R90),
            PieceShape::TTetromino(Rotation::R180),
            PieceShape::TTetromino(Rotation::R270),
        ];
        for shape in shapes {
            let cells = shape.resolve(anchor);
            assert_eq!(cells.len(), shape.cell_count());
            assert_eq!(cells[0], anchor, "{shape:?} must resolve the anchor first");
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let shape = PieceShape::TTetromino(Rotation::R90);
        let anchor = CellPos::new(1, 1);
        assert_eq!(shape.resolve(anchor), shape.resolve(anchor));
    }

    #[test]
    fn test_off_grid_candidates_pass_through() {
        // No bounds checking in the resolver: a T at the top-left corner
        // produces negative coordinates.
        let cells = PieceShape::TTetromino(Rotation::R180).resolve(CellPos::new(0, 0));
        assert!(cells.contains(&CellPos::new(-1, 0)));
        assert!(cells.contains(&CellPos::new(0, -1)));
    }

    #[test]
    fn test_rotation_cycle() {
        let mut rotation = Rotation::R0;
        for _ in 0..4 {
            rotation = rotation.rotated_right();
        }
        assert_eq!(rotation, Rotation::R0);
        assert_eq!(Rotation::R0.rotated_left(), Rotation::R270);
        assert_eq!(Orientation::Horizontal.flipped().flipped(), Orientation::Horizontal);
    }

    #[test]
    fn test_cycled_stays_within_kind() {
        let mut shape = PieceShape::TTetromino(Rotation::R0);
        for _ in 0..4 {
            shape = shape.cycled();
            assert_eq!(shape.kind(), PieceKind::TTetromino);
        }
        assert_eq!(shape, PieceShape::TTetromino(Rotation::R0));

        let domino = PieceShape::Domino(Orientation::Horizontal);
        assert_eq!(domino.cycled(), PieceShape::Domino(Orientation::Vertical));
        assert_eq!(domino.cycled().cycled(), domino);
    }
}
