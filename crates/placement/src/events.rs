//! The editor's event boundary.
//!
//! The input layer sends [`EditorInput`]; the controller answers with
//! [`EditorEvent`]s the renderer and UI react to. Points are ground-plane
//! world coordinates `(x, z)`; `None` means the pointer ray missed the ground.

use bevy::prelude::*;

use crate::editor::{EditMode, HoverChange, Placement, Removal};
use crate::error::PlacementError;
use crate::footprint::Footprint;
use crate::grid::GridCoord;
use crate::registry::ShapeId;
use crate::shapes::ShapeKind;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum EditorInput {
    PrimaryClick(Option<Vec2>),
    SecondaryClick(Option<Vec2>),
    PointerMoved(Option<Vec2>),
    SelectKind(Option<ShapeKind>),
}

#[derive(Event, Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ShapePlaced {
        id: ShapeId,
        kind: ShapeKind,
        footprint: Footprint,
        visual_origin: Vec3,
    },
    ShapeRemoved {
        id: ShapeId,
        footprint: Footprint,
    },
    /// Clear the highlight on `old`, then set it on `new`.
    CellHighlightChanged {
        old: Option<GridCoord>,
        new: Option<GridCoord>,
    },
    PlacementRejected {
        reason: PlacementError,
    },
    ModeChanged {
        mode: EditMode,
    },
    /// An idle click landed on a placed shape.
    ShapeProbed {
        id: ShapeId,
    },
}

impl From<Placement> for EditorEvent {
    fn from(p: Placement) -> Self {
        EditorEvent::ShapePlaced {
            id: p.id,
            kind: p.kind,
            footprint: p.footprint,
            visual_origin: p.visual_origin,
        }
    }
}

impl From<Removal> for EditorEvent {
    fn from(r: Removal) -> Self {
        EditorEvent::ShapeRemoved {
            id: r.id,
            footprint: r.footprint,
        }
    }
}

impl From<HoverChange> for EditorEvent {
    fn from(c: HoverChange) -> Self {
        EditorEvent::CellHighlightChanged {
            old: c.old,
            new: c.new,
        }
    }
}

/// What a handled input did, as recorded in [`crate::log::EditorLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Placed(ShapeId),
    Removed(ShapeId),
    /// Idle click; carries the shape under the pointer, if any.
    Probed(Option<ShapeId>),
    ModeChanged(EditMode),
    Rejected(PlacementError),
    /// Nothing to do (pick missed the ground, or the mode was already set).
    Ignored,
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}
