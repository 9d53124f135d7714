//! Runtime validation of the occupancy/shape consistency invariant.
//!
//! A cell is occupied exactly when one live shape's footprint covers it, and
//! no two footprints overlap. The controller maintains this by construction;
//! the debug-build system below re-checks it whenever the editor changes.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

use crate::editor::Editor;
use crate::grid::GridCoord;
use crate::occupancy::OccupancyRegistry;
use crate::registry::{ShapeId, ShapeRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The cell is marked occupied but no shape covers it.
    OrphanedCell(GridCoord),
    /// A shape covers the cell but it is not marked occupied.
    UnreservedCell { id: ShapeId, cell: GridCoord },
    /// Two shapes claim the same cell.
    Overlap {
        cell: GridCoord,
        first: ShapeId,
        second: ShapeId,
    },
    /// The cell index points at the wrong shape (or none).
    StaleIndex { id: ShapeId, cell: GridCoord },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::OrphanedCell(cell) => {
                write!(f, "cell {cell} is occupied but no shape covers it")
            }
            InvariantViolation::UnreservedCell { id, cell } => {
                write!(f, "shape {id} covers {cell} but the cell is free")
            }
            InvariantViolation::Overlap { cell, first, second } => {
                write!(f, "shapes {first} and {second} both cover {cell}")
            }
            InvariantViolation::StaleIndex { id, cell } => {
                write!(f, "cell index for {cell} does not point at shape {id}")
            }
        }
    }
}

impl Editor {
    /// Every violation of the occupancy/footprint invariant. Empty when healthy.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        check_registries(self.occupancy(), self.shapes())
    }
}

/// Cross-check an occupancy set against a shape registry.
pub fn check_registries(
    occupancy: &OccupancyRegistry,
    shapes: &ShapeRegistry,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut owner: HashMap<GridCoord, ShapeId> = HashMap::new();

    for shape in shapes.iter() {
        for &cell in &shape.footprint.cells {
            if let Some(&first) = owner.get(&cell) {
                violations.push(InvariantViolation::Overlap {
                    cell,
                    first,
                    second: shape.id,
                });
                continue;
            }
            owner.insert(cell, shape.id);
            if !occupancy.is_occupied(cell) {
                violations.push(InvariantViolation::UnreservedCell { id: shape.id, cell });
            }
            if shapes.find_by_cell(cell) != Some(shape.id) {
                violations.push(InvariantViolation::StaleIndex { id: shape.id, cell });
            }
        }
    }

    let mut orphans: Vec<GridCoord> = occupancy
        .iter()
        .filter(|cell| !owner.contains_key(cell))
        .collect();
    orphans.sort();
    violations.extend(orphans.into_iter().map(InvariantViolation::OrphanedCell));

    violations
}

/// Violations found by the last validation pass.
#[derive(Resource, Default, Debug)]
pub struct InvariantViolations {
    pub last_pass: u32,
    pub total: u32,
}

pub fn validate_editor_invariants(
    editor: Res<Editor>,
    mut violations: ResMut<InvariantViolations>,
) {
    if !editor.is_changed() {
        return;
    }

    let found = editor.check_invariants();
    for violation in &found {
        warn!("Invariant violation: {}", violation);
    }
    violations.last_pass = found.len() as u32;
    violations.total += found.len() as u32;
}
