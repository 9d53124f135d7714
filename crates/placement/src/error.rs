// ---------------------------------------------------------------------------
// Placement errors: every rejected request leaves the editor unchanged
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::GridCoord;

/// Why a placement or removal request was rejected.
///
/// All variants are recoverable. The editor state is untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The anchor or some footprint cell lies outside the grid.
    OutOfBounds,
    /// At least one footprint cell is already occupied.
    Conflict,
    /// Removal was requested on a cell that holds no shape.
    Empty,
    /// A shape id no longer refers to a live shape.
    NotFound,
    /// The shape kind has no entry in the catalog.
    InvalidKind,
    /// A place/remove request arrived while no shape kind is selected.
    NoActiveKind,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Shape would extend outside the grid"),
            PlacementError::Conflict => write!(f, "One or more cells are already occupied"),
            PlacementError::Empty => write!(f, "No shape to remove in this cell"),
            PlacementError::NotFound => write!(f, "Shape no longer exists"),
            PlacementError::InvalidKind => write!(f, "Unknown shape kind"),
            PlacementError::NoActiveKind => write!(f, "Select a shape kind first"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Strict-mode diagnostic from [`crate::occupancy::OccupancyRegistry::release`]:
/// the listed cells were already free. The release itself still completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseError {
    pub not_occupied: Vec<GridCoord>,
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Released {} cell(s) that were not occupied:", self.not_occupied.len())?;
        for coord in &self.not_occupied {
            write!(f, " {coord}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ReleaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_error_display() {
        assert_eq!(
            PlacementError::Conflict.to_string(),
            "One or more cells are already occupied"
        );
        assert_eq!(
            PlacementError::Empty.to_string(),
            "No shape to remove in this cell"
        );
    }

    #[test]
    fn test_release_error_lists_cells() {
        let err = ReleaseError {
            not_occupied: vec![GridCoord::new(1, 2), GridCoord::new(3, 4)],
        };
        assert_eq!(
            err.to_string(),
            "Released 2 cell(s) that were not occupied: (1,2) (3,4)"
        );
    }

    #[test]
    fn test_placement_error_serialization() {
        let json = serde_json::to_string(&PlacementError::OutOfBounds).unwrap();
        let decoded: PlacementError = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, PlacementError::OutOfBounds);
    }
}
