use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::footprint::Footprint;
use crate::grid::GridCoord;
use crate::shapes::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A shape living on the grid. The footprint is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub footprint: Footprint,
}

impl PlacedShape {
    pub fn anchor(&self) -> GridCoord {
        self.footprint.anchor()
    }
}

/// Owner of every [`PlacedShape`], with a per-cell index for footprint lookups.
///
/// Ids are never reused, so a stale id can't alias a newer shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: BTreeMap<ShapeId, PlacedShape>,
    by_cell: HashMap<GridCoord, ShapeId>,
    next_id: u64,
}

impl ShapeRegistry {
    /// Record a new shape. The caller has already made sure the footprint is
    /// free; the registry does not re-check occupancy.
    pub fn insert(&mut self, kind: ShapeKind, footprint: Footprint) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        for &cell in &footprint.cells {
            let previous = self.by_cell.insert(cell, id);
            debug_assert!(previous.is_none(), "cell {cell} indexed twice");
        }
        self.shapes.insert(id, PlacedShape { id, kind, footprint });
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&PlacedShape> {
        self.shapes.get(&id)
    }

    /// The shape whose footprint includes `coord`, if any.
    pub fn find_by_cell(&self, coord: GridCoord) -> Option<ShapeId> {
        self.by_cell.get(&coord).copied()
    }

    pub fn remove(&mut self, id: ShapeId) -> Result<PlacedShape, PlacementError> {
        let shape = self.shapes.remove(&id).ok_or(PlacementError::NotFound)?;
        for cell in &shape.footprint.cells {
            self.by_cell.remove(cell);
        }
        Ok(shape)
    }

    /// Live shapes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedShape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
impl ShapeRegistry {
    /// Assemble a registry from raw parts without any consistency checks.
    pub(crate) fn from_raw_parts(
        shapes: Vec<PlacedShape>,
        by_cell: HashMap<GridCoord, ShapeId>,
    ) -> Self {
        let next_id = shapes.iter().map(|s| s.id.0 + 1).max().unwrap_or(0);
        Self {
            shapes: shapes.into_iter().map(|s| (s.id, s)).collect(),
            by_cell,
            next_id,
        }
    }
}
