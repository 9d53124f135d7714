//! Plugin wiring for the editor core: resources, events, and the apply system.

use bevy::prelude::*;

use crate::editor::{EditMode, Editor};
use crate::error::PlacementError;
use crate::events::{EditorEvent, EditorInput, Outcome};
use crate::invariants::{validate_editor_invariants, InvariantViolations};
use crate::log::EditorLog;
use crate::params::EditorParams;
use crate::shapes::ShapeKind;

/// Ordering for everything that touches the editor within one `Update`.
///
/// Input producers run in `Input`, the controller consumes requests in
/// `Apply`, and renderers/UI read [`EditorEvent`]s in `React`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorSet {
    Input,
    Apply,
    React,
}

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        let params = app
            .world()
            .get_resource::<EditorParams>()
            .cloned()
            .unwrap_or_default();
        let (params, editor) = match Editor::from_params(&params) {
            Ok(editor) => (params, editor),
            Err(e) => {
                warn!("Invalid editor params, using defaults: {}", e);
                (EditorParams::default(), Editor::default())
            }
        };
        info!(
            "Editor grid: {}x{} cells of {} units, {} shape kinds",
            editor.grid().cells_per_side(),
            editor.grid().cells_per_side(),
            editor.grid().cell_size(),
            editor.catalog().templates().len()
        );

        app.insert_resource(params)
            .insert_resource(editor)
            .init_resource::<EditorLog>()
            .init_resource::<InvariantViolations>()
            .add_event::<EditorInput>()
            .add_event::<EditorEvent>()
            .configure_sets(
                Update,
                (EditorSet::Input, EditorSet::Apply, EditorSet::React).chain(),
            )
            .add_systems(
                Update,
                (
                    apply_editor_input,
                    validate_editor_invariants.run_if(|| cfg!(debug_assertions)),
                )
                    .chain()
                    .in_set(EditorSet::Apply),
            );
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains this frame's [`EditorInput`]s in order and applies them.
///
/// This is the only system holding `ResMut<Editor>`, so each request runs to
/// completion before the next one and the two registries never disagree.
pub fn apply_editor_input(
    mut inputs: EventReader<EditorInput>,
    mut editor: ResMut<Editor>,
    mut events: EventWriter<EditorEvent>,
    mut log: ResMut<EditorLog>,
) {
    for &input in inputs.read() {
        if let Some(outcome) = handle_input(input, &mut editor, &mut events) {
            log.push(input, outcome);
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Returns `None` for inputs that are not logged (pointer moves).
fn handle_input(
    input: EditorInput,
    editor: &mut Editor,
    events: &mut EventWriter<EditorEvent>,
) -> Option<Outcome> {
    match input {
        EditorInput::PointerMoved(pick) => {
            if let Some(change) = editor.hover(pick) {
                debug!("Highlight {:?} -> {:?}", change.old, change.new);
                events.send(change.into());
            }
            None
        }
        EditorInput::PrimaryClick(None) | EditorInput::SecondaryClick(None) => {
            Some(Outcome::Ignored)
        }
        EditorInput::PrimaryClick(Some(pick)) => Some(match editor.mode() {
            EditMode::Idle => probe(pick, editor, events),
            EditMode::Placing(_) => place(pick, editor, events),
        }),
        EditorInput::SecondaryClick(Some(pick)) => Some(remove(pick, editor, events)),
        EditorInput::SelectKind(kind) => Some(select_kind(kind, editor, events)),
    }
}

fn probe(pick: Vec2, editor: &Editor, events: &mut EventWriter<EditorEvent>) -> Outcome {
    let hit = editor.probe(pick);
    if let Some(id) = hit {
        info!("Object clicked: shape {}", id);
        events.send(EditorEvent::ShapeProbed { id });
    }
    Outcome::Probed(hit)
}

fn place(pick: Vec2, editor: &mut Editor, events: &mut EventWriter<EditorEvent>) -> Outcome {
    match editor.place(pick) {
        Ok(placed) => {
            info!(
                "Placed {} {} at {}",
                placed.kind,
                placed.id,
                placed.footprint.anchor()
            );
            let id = placed.id;
            events.send(placed.into());
            Outcome::Placed(id)
        }
        Err(reason) => reject(reason, events),
    }
}

fn remove(pick: Vec2, editor: &mut Editor, events: &mut EventWriter<EditorEvent>) -> Outcome {
    match editor.remove_at(pick) {
        Ok(removed) => {
            info!(
                "Removed {} {} from {}",
                removed.kind,
                removed.id,
                removed.footprint.anchor()
            );
            let id = removed.id;
            events.send(removed.into());
            Outcome::Removed(id)
        }
        Err(reason) => reject(reason, events),
    }
}

fn select_kind(
    kind: Option<ShapeKind>,
    editor: &mut Editor,
    events: &mut EventWriter<EditorEvent>,
) -> Outcome {
    if editor.mode().kind() == kind {
        return Outcome::Ignored;
    }
    match editor.select_kind(kind) {
        Ok(cleared) => {
            if let Some(change) = cleared {
                events.send(change.into());
            }
            let mode = editor.mode();
            info!("{}", mode.announcement());
            events.send(EditorEvent::ModeChanged { mode });
            Outcome::ModeChanged(mode)
        }
        Err(reason) => reject(reason, events),
    }
}

fn reject(reason: PlacementError, events: &mut EventWriter<EditorEvent>) -> Outcome {
    debug!("Request rejected: {}", reason);
    events.send(EditorEvent::PlacementRejected { reason });
    Outcome::Rejected(reason)
}
