//! # TestEditor: headless harness for the placement editor
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`PlacementPlugin`] so
//! integration tests can drive the editor through its event boundary without
//! a window or renderer.

use bevy::app::App;
use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use crate::editor::{EditMode, Editor};
use crate::events::{EditorEvent, EditorInput, Outcome};
use crate::grid::GridCoord;
use crate::invariants::InvariantViolations;
use crate::log::EditorLog;
use crate::params::EditorParams;
use crate::registry::PlacedShape;
use crate::plugin::PlacementPlugin;
use crate::shapes::ShapeKind;

pub struct TestEditor {
    app: App,
    cursor: EventCursor<EditorEvent>,
}

impl Default for TestEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditor {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default 20x20 grid with the stock shape table.
    pub fn new() -> Self {
        Self::with_params(EditorParams::default())
    }

    /// Editor built from custom params. Params must be inserted before the
    /// plugin builds.
    pub fn with_params(params: EditorParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(params);
        app.add_plugins(PlacementPlugin);
        app.update();
        Self {
            app,
            cursor: EventCursor::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Builder
    // -----------------------------------------------------------------------

    /// Place a shape directly, bypassing the event boundary.
    pub fn with_shape(mut self, kind: ShapeKind, x: i32, y: i32) -> Self {
        let result = self
            .app
            .world_mut()
            .resource_mut::<Editor>()
            .place_at(kind, GridCoord::new(x, y));
        assert!(result.is_ok(), "with_shape({kind}, {x}, {y}) failed: {result:?}");
        self
    }

    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.select(Some(kind));
        self
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Send one input and run a frame.
    pub fn send(&mut self, input: EditorInput) {
        self.app.world_mut().send_event(input);
        self.app.update();
    }

    /// Send several inputs that the editor handles within a single frame.
    pub fn send_batch(&mut self, inputs: impl IntoIterator<Item = EditorInput>) {
        for input in inputs {
            self.app.world_mut().send_event(input);
        }
        self.app.update();
    }

    pub fn select(&mut self, kind: Option<ShapeKind>) {
        self.send(EditorInput::SelectKind(kind));
    }

    pub fn click(&mut self, x: i32, y: i32) {
        let pick = self.cell_centre(x, y);
        self.send(EditorInput::PrimaryClick(Some(pick)));
    }

    pub fn right_click(&mut self, x: i32, y: i32) {
        let pick = self.cell_centre(x, y);
        self.send(EditorInput::SecondaryClick(Some(pick)));
    }

    pub fn hover(&mut self, x: i32, y: i32) {
        let pick = self.cell_centre(x, y);
        self.send(EditorInput::PointerMoved(Some(pick)));
    }

    /// World-space (x, z) centre of a cell.
    pub fn cell_centre(&self, x: i32, y: i32) -> Vec2 {
        self.editor().grid().world_position_of(GridCoord::new(x, y))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn editor(&self) -> &Editor {
        self.resource::<Editor>()
    }

    pub fn log(&self) -> &EditorLog {
        self.resource::<EditorLog>()
    }

    pub fn mode(&self) -> EditMode {
        self.editor().mode()
    }

    pub fn shape_count(&self) -> usize {
        self.editor().shapes().len()
    }

    /// Live shapes in creation order.
    pub fn live_shapes(&self) -> Vec<PlacedShape> {
        self.editor().shapes().iter().cloned().collect()
    }

    pub fn occupied_cells(&self) -> Vec<GridCoord> {
        let mut cells: Vec<GridCoord> = self.editor().occupancy().iter().collect();
        cells.sort();
        cells
    }

    /// Outcome of the most recent logged request.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.log().last().map(|(_, outcome)| *outcome)
    }

    /// Editor events emitted since the previous call.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        let events = self.app.world().resource::<Events<EditorEvent>>();
        self.cursor.read(events).cloned().collect()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_occupied(&self, cells: &[(i32, i32)]) {
        let mut expected: Vec<GridCoord> =
            cells.iter().map(|&(x, y)| GridCoord::new(x, y)).collect();
        expected.sort();
        assert_eq!(self.occupied_cells(), expected, "occupied cells differ");
    }

    pub fn assert_consistent(&self) {
        let violations = self.editor().check_invariants();
        assert!(violations.is_empty(), "invariant violations: {violations:?}");
        assert_eq!(
            self.resource::<InvariantViolations>().total,
            0,
            "the validation system reported violations"
        );
    }
}
