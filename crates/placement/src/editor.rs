//! The placement controller.
//!
//! [`Editor`] owns the grid, the shape catalog, and both registries, and is
//! the only thing allowed to mutate them. Every public operation either
//! completes fully or returns an error with the state untouched, so the
//! occupancy set always equals the union of the live shapes' footprints.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SHAPE_ELEVATION;
use crate::error::PlacementError;
use crate::footprint::{footprint_of, Footprint};
use crate::grid::{GridCoord, GridModel};
use crate::occupancy::OccupancyRegistry;
use crate::params::{EditorParams, ParamsError};
use crate::registry::{PlacedShape, ShapeId, ShapeRegistry};
use crate::shapes::{ShapeCatalog, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// No shape kind selected; clicks only probe existing shapes.
    #[default]
    Idle,
    /// Clicks place `kind`, secondary clicks remove, pointer moves highlight.
    Placing(ShapeKind),
}

impl EditMode {
    pub fn kind(self) -> Option<ShapeKind> {
        match self {
            EditMode::Idle => None,
            EditMode::Placing(kind) => Some(kind),
        }
    }

    /// User-facing line shown when the mode is entered.
    pub fn announcement(self) -> String {
        match self {
            EditMode::Idle => "Exited add mode.".to_string(),
            EditMode::Placing(kind) => format!(
                "Add mode: {}. Click a cell to add, right-click to remove.",
                kind.label()
            ),
        }
    }
}

/// Highlight transition: clear `old` (if any), then set `new` (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverChange {
    pub old: Option<GridCoord>,
    pub new: Option<GridCoord>,
}

/// A successful placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub footprint: Footprint,
    /// World position the renderer should centre the shape mesh on.
    pub visual_origin: Vec3,
}

/// A successful removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub footprint: Footprint,
}

impl From<PlacedShape> for Removal {
    fn from(shape: PlacedShape) -> Self {
        Self {
            id: shape.id,
            kind: shape.kind,
            footprint: shape.footprint,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Editor {
    grid: GridModel,
    catalog: ShapeCatalog,
    occupancy: OccupancyRegistry,
    shapes: ShapeRegistry,
    mode: EditMode,
    hovered: Option<GridCoord>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(GridModel::default(), ShapeCatalog::default())
    }
}

impl Editor {
    pub fn new(grid: GridModel, catalog: ShapeCatalog) -> Self {
        Self {
            grid,
            catalog,
            occupancy: OccupancyRegistry::default(),
            shapes: ShapeRegistry::default(),
            mode: EditMode::Idle,
            hovered: None,
        }
    }

    pub fn from_params(params: &EditorParams) -> Result<Self, ParamsError> {
        let (grid, catalog) = params.build()?;
        Ok(Self::new(grid, catalog))
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn occupancy(&self) -> &OccupancyRegistry {
        &self.occupancy
    }

    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn hovered(&self) -> Option<GridCoord> {
        self.hovered
    }

    /// The shape covering `coord`, if any.
    pub fn shape_at(&self, coord: GridCoord) -> Option<&PlacedShape> {
        self.shapes
            .find_by_cell(coord)
            .and_then(|id| self.shapes.get(id))
    }

    // -----------------------------------------------------------------------
    // Mode
    // -----------------------------------------------------------------------

    /// Enter `Placing(kind)`, or `Idle` for `None`.
    ///
    /// Leaving `Placing` clears the hover highlight; the returned change tells
    /// the renderer which cell to reset. Selecting a kind the catalog doesn't
    /// know is rejected and leaves the mode alone.
    pub fn select_kind(
        &mut self,
        kind: Option<ShapeKind>,
    ) -> Result<Option<HoverChange>, PlacementError> {
        match kind {
            Some(kind) => {
                if self.catalog.get(kind).is_none() {
                    return Err(PlacementError::InvalidKind);
                }
                self.mode = EditMode::Placing(kind);
                Ok(None)
            }
            None => Ok(self.cancel()),
        }
    }

    /// Return to `Idle`, clearing any hover highlight.
    pub fn cancel(&mut self) -> Option<HoverChange> {
        self.mode = EditMode::Idle;
        self.hovered.take().map(|old| HoverChange { old: Some(old), new: None })
    }

    // -----------------------------------------------------------------------
    // Placement and removal
    // -----------------------------------------------------------------------

    /// Place the selected kind at the cell under `pick` (ground-plane x, z).
    pub fn place(&mut self, pick: Vec2) -> Result<Placement, PlacementError> {
        let kind = self.mode.kind().ok_or(PlacementError::NoActiveKind)?;
        let anchor = self.grid.cell_at(pick);
        self.place_at(kind, anchor)
    }

    /// Place `kind` anchored at `anchor`, regardless of mode.
    pub fn place_at(
        &mut self,
        kind: ShapeKind,
        anchor: GridCoord,
    ) -> Result<Placement, PlacementError> {
        if !self.grid.in_bounds(anchor) {
            return Err(PlacementError::OutOfBounds);
        }
        let footprint = footprint_of(&self.grid, &self.catalog, kind, anchor)?;
        if !self.occupancy.is_free(&footprint.cells) {
            return Err(PlacementError::Conflict);
        }

        self.occupancy.reserve(&footprint.cells)?;
        let visual_origin = self.visual_origin(&footprint);
        let id = self.shapes.insert(kind, footprint.clone());

        Ok(Placement {
            id,
            kind,
            footprint,
            visual_origin,
        })
    }

    /// Remove the shape covering the cell under `pick`.
    pub fn remove_at(&mut self, pick: Vec2) -> Result<Removal, PlacementError> {
        if self.mode == EditMode::Idle {
            return Err(PlacementError::NoActiveKind);
        }
        let coord = self.grid.cell_at(pick);
        self.remove_cell(coord)
    }

    /// Remove the shape covering `coord`, regardless of mode.
    pub fn remove_cell(&mut self, coord: GridCoord) -> Result<Removal, PlacementError> {
        let id = self.shapes.find_by_cell(coord).ok_or(PlacementError::Empty)?;
        self.remove_shape(id)
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Result<Removal, PlacementError> {
        let shape = self.shapes.remove(id)?;
        if let Err(err) = self.occupancy.release(&shape.footprint.cells) {
            warn!("Removing shape {}: {}", id, err);
        }
        Ok(shape.into())
    }

    /// The shape under `pick`, if any. Used for idle clicks.
    pub fn probe(&self, pick: Vec2) -> Option<ShapeId> {
        self.shapes.find_by_cell(self.grid.cell_at(pick))
    }

    // -----------------------------------------------------------------------
    // Hover
    // -----------------------------------------------------------------------

    /// Track the cell under the pointer while placing.
    ///
    /// Returns `Some` only when the highlighted cell changes. `None` as the
    /// pick (or a pick off the grid) clears the highlight. Idle mode never
    /// highlights.
    pub fn hover(&mut self, pick: Option<Vec2>) -> Option<HoverChange> {
        if self.mode == EditMode::Idle {
            return None;
        }
        let new = pick.and_then(|p| self.grid.pick(p));
        if new == self.hovered {
            return None;
        }
        let old = std::mem::replace(&mut self.hovered, new);
        Some(HoverChange { old, new })
    }

    fn visual_origin(&self, footprint: &Footprint) -> Vec3 {
        let centre = self.grid.world_position_of(footprint.anchor()) + footprint.visual_offset;
        Vec3::new(centre.x, SHAPE_ELEVATION, centre.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(editor: &Editor, x: i32, y: i32) -> Vec2 {
        editor.grid().world_position_of(GridCoord::new(x, y))
    }

    fn placing(kind: ShapeKind) -> Editor {
        let mut editor = Editor::default();
        editor.select_kind(Some(kind)).unwrap();
        editor
    }

    #[test]
    fn test_place_records_shape_and_occupancy() {
        let mut editor = placing(ShapeKind::Rectangle);
        let p = pick(&editor, 0, 0);
        let placed = editor.place(p).unwrap();

        assert_eq!(placed.kind, ShapeKind::Rectangle);
        assert_eq!(
            placed.footprint.cells,
            vec![GridCoord::new(0, 0), GridCoord::new(1, 0)]
        );
        assert_eq!(placed.visual_origin, Vec3::new(-45.0, 2.5, -47.5));
        assert!(editor.occupancy().is_occupied(GridCoord::new(0, 0)));
        assert!(editor.occupancy().is_occupied(GridCoord::new(1, 0)));
        assert_eq!(editor.shapes().len(), 1);
    }

    #[test]
    fn test_place_without_kind_is_rejected() {
        let mut editor = Editor::default();
        let p = pick(&editor, 3, 3);
        assert_eq!(editor.place(p), Err(PlacementError::NoActiveKind));
        assert_eq!(editor.remove_at(p), Err(PlacementError::NoActiveKind));
        assert!(editor.occupancy().is_empty());
    }

    #[test]
    fn test_place_off_grid_is_out_of_bounds() {
        let mut editor = placing(ShapeKind::Box);
        assert_eq!(
            editor.place(Vec2::new(60.0, 0.0)),
            Err(PlacementError::OutOfBounds)
        );
        assert!(editor.shapes().is_empty());
    }

    #[test]
    fn test_large_square_conflicts_with_box() {
        let mut editor = Editor::default();
        editor.place_at(ShapeKind::Box, GridCoord::new(1, 0)).unwrap();
        let occupied_before: Vec<GridCoord> = editor.occupancy().iter().collect();

        assert_eq!(
            editor.place_at(ShapeKind::LargeSquare, GridCoord::new(0, 0)),
            Err(PlacementError::Conflict)
        );
        let occupied_after: Vec<GridCoord> = editor.occupancy().iter().collect();
        assert_eq!(occupied_before, occupied_after);
        assert_eq!(editor.shapes().len(), 1);
    }

    #[test]
    fn test_remove_at_any_footprint_cell_releases_everything() {
        let mut editor = placing(ShapeKind::LargeSquare);
        let p = pick(&editor, 4, 4);
        let placed = editor.place(p).unwrap();

        // Right-click on the far corner of the 2x2 block.
        let corner = pick(&editor, 5, 5);
        let removed = editor.remove_at(corner).unwrap();
        assert_eq!(removed.id, placed.id);
        assert_eq!(removed.footprint, placed.footprint);
        assert!(editor.occupancy().is_empty());
        assert!(editor.shapes().is_empty());
    }

    #[test]
    fn test_remove_empty_cell() {
        let mut editor = placing(ShapeKind::Box);
        let p = pick(&editor, 2, 2);
        assert_eq!(editor.remove_at(p), Err(PlacementError::Empty));
        assert_eq!(
            editor.remove_at(Vec2::new(-80.0, -80.0)),
            Err(PlacementError::Empty)
        );
    }

    #[test]
    fn test_remove_stale_id() {
        let mut editor = Editor::default();
        let placed = editor.place_at(ShapeKind::Sphere, GridCoord::new(7, 7)).unwrap();
        editor.remove_shape(placed.id).unwrap();
        assert_eq!(editor.remove_shape(placed.id), Err(PlacementError::NotFound));
    }

    #[test]
    fn test_select_unknown_kind_keeps_mode() {
        let catalog = ShapeCatalog::from_templates(
            crate::shapes::default_templates()
                .into_iter()
                .filter(|t| t.kind != ShapeKind::Cylinder)
                .collect(),
        )
        .unwrap();
        let mut editor = Editor::new(GridModel::default(), catalog);
        editor.select_kind(Some(ShapeKind::Box)).unwrap();
        assert_eq!(
            editor.select_kind(Some(ShapeKind::Cylinder)),
            Err(PlacementError::InvalidKind)
        );
        assert_eq!(editor.mode(), EditMode::Placing(ShapeKind::Box));
    }

    #[test]
    fn test_hover_tracks_single_cell() {
        let mut editor = placing(ShapeKind::Box);
        let a = pick(&editor, 1, 1);
        let b = pick(&editor, 2, 1);

        assert_eq!(
            editor.hover(Some(a)),
            Some(HoverChange {
                old: None,
                new: Some(GridCoord::new(1, 1))
            })
        );
        // Moving inside the same cell is not a change.
        assert_eq!(editor.hover(Some(a + Vec2::new(1.0, 1.0))), None);
        assert_eq!(
            editor.hover(Some(b)),
            Some(HoverChange {
                old: Some(GridCoord::new(1, 1)),
                new: Some(GridCoord::new(2, 1))
            })
        );
        assert_eq!(
            editor.hover(None),
            Some(HoverChange {
                old: Some(GridCoord::new(2, 1)),
                new: None
            })
        );
        assert_eq!(editor.hovered(), None);
    }

    #[test]
    fn test_hover_off_grid_clears() {
        let mut editor = placing(ShapeKind::Box);
        let a = pick(&editor, 0, 0);
        editor.hover(Some(a));
        assert_eq!(
            editor.hover(Some(Vec2::new(-75.0, 0.0))),
            Some(HoverChange {
                old: Some(GridCoord::new(0, 0)),
                new: None
            })
        );
    }

    #[test]
    fn test_cancel_clears_hover() {
        let mut editor = placing(ShapeKind::Box);
        let a = pick(&editor, 6, 6);
        editor.hover(Some(a));
        let change = editor.select_kind(None).unwrap();
        assert_eq!(
            change,
            Some(HoverChange {
                old: Some(GridCoord::new(6, 6)),
                new: None
            })
        );
        assert_eq!(editor.mode(), EditMode::Idle);
        assert_eq!(editor.hovered(), None);
        // Idle ignores pointer movement.
        assert_eq!(editor.hover(Some(a)), None);
    }

    #[test]
    fn test_switching_kind_keeps_hover() {
        let mut editor = placing(ShapeKind::Box);
        let a = pick(&editor, 6, 6);
        editor.hover(Some(a));
        assert_eq!(editor.select_kind(Some(ShapeKind::Sphere)), Ok(None));
        assert_eq!(editor.hovered(), Some(GridCoord::new(6, 6)));
    }

    #[test]
    fn test_probe_finds_shape_in_idle() {
        let mut editor = Editor::default();
        let placed = editor.place_at(ShapeKind::Rectangle, GridCoord::new(8, 8)).unwrap();
        let p = pick(&editor, 9, 8);
        assert_eq!(editor.probe(p), Some(placed.id));
        let q = pick(&editor, 10, 8);
        assert_eq!(editor.probe(q), None);
    }

    #[test]
    fn test_mode_announcements() {
        assert_eq!(EditMode::Idle.announcement(), "Exited add mode.");
        assert_eq!(
            EditMode::Placing(ShapeKind::LargeSquare).announcement(),
            "Add mode: Large Square. Click a cell to add, right-click to remove."
        );
    }
}
