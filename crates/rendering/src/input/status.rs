//! Editor outcomes surfaced as the transient status line.

use bevy::prelude::*;

use placement::EditorEvent;

use super::types::StatusMessage;

pub fn report_editor_events(
    mut events: EventReader<EditorEvent>,
    mut status: ResMut<StatusMessage>,
) {
    for event in events.read() {
        match event {
            EditorEvent::ModeChanged { mode } => status.set(mode.announcement(), false),
            EditorEvent::PlacementRejected { reason } => status.set(reason.to_string(), true),
            EditorEvent::ShapeProbed { id } => {
                status.set(format!("Object clicked! (shape {id})"), false)
            }
            EditorEvent::ShapePlaced { .. }
            | EditorEvent::ShapeRemoved { .. }
            | EditorEvent::CellHighlightChanged { .. } => {}
        }
    }
}
