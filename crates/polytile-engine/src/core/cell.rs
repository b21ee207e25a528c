use serde::{Deserialize, Serialize};

/// Position of a grid cell.
///
/// Coordinates are signed: the geometry resolver produces candidate cells
/// without bounds checking, so positions one step outside the grid (including
/// negative rows/columns) are representable and rejected by the legality
/// check instead.
///
/// # Coordinate System
///
/// - (0, 0) is the top-left cell of the grid
/// - Rows increase downward, columns increase rightward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    row: i16,
    col: i16,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> i16 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i16 {
        self.col
    }

    /// Returns the position shifted by the given row/column deltas.
    #[must_use]
    pub const fn offset(self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl Serialize for CellPos {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: [row, col] (e.g., blocked_cells: [[0, 0], [5, 5]])
        (self.row, self.col).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellPos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (row, col) = <(i16, i16)>::deserialize(deserializer)?;
        Ok(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = CellPos::new(2, 3);
        assert_eq!(pos.offset(0, 0), pos);
        assert_eq!(pos.offset(1, -1), CellPos::new(3, 2));
        assert_eq!(CellPos::new(0, 0).offset(-1, 0), CellPos::new(-1, 0));
    }

    #[test]
    fn test_serialization_as_pair() {
        let pos = CellPos::new(4, 7);
        let serialized = serde_json::to_string(&pos).unwrap();
        assert_eq!(serialized, "[4,7]");

        let deserialized: CellPos = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, pos);
    }

    #[test]
    fn test_deserialization_error_cases() {
        assert!(serde_json::from_str::<CellPos>("[1]").is_err());
        assert!(serde_json::from_str::<CellPos>("\"1,2\"").is_err());
        assert!(serde_json::from_str::<CellPos>("{\"row\":1,\"col\":2}").is_err());
    }
}
