use std::collections::HashSet;

use crate::error::{PlacementError, ReleaseError};
use crate::grid::GridCoord;

/// Set of occupied cells. A cell absent from the set is free.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyRegistry {
    occupied: HashSet<GridCoord>,
}

impl OccupancyRegistry {
    /// True iff none of `cells` is occupied.
    pub fn is_free(&self, cells: &[GridCoord]) -> bool {
        !cells.iter().any(|c| self.occupied.contains(c))
    }

    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.occupied.contains(&coord)
    }

    /// Mark every cell occupied, or none of them.
    pub fn reserve(&mut self, cells: &[GridCoord]) -> Result<(), PlacementError> {
        if !self.is_free(cells) {
            return Err(PlacementError::Conflict);
        }
        self.occupied.extend(cells.iter().copied());
        Ok(())
    }

    /// Free every cell. Cells that were already free are reported back but do
    /// not stop the rest from being released.
    pub fn release(&mut self, cells: &[GridCoord]) -> Result<(), ReleaseError> {
        let not_occupied: Vec<GridCoord> = cells
            .iter()
            .copied()
            .filter(|c| !self.occupied.remove(c))
            .collect();
        if not_occupied.is_empty() {
            Ok(())
        } else {
            Err(ReleaseError { not_occupied })
        }
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.occupied.iter().copied()
    }
}
