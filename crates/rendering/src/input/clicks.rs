//! Mouse buttons to editor requests.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use placement::EditorInput;

use crate::camera::LeftClickDrag;
use crate::egui_input_guard::egui_wants_pointer;

use super::types::CursorGround;

/// Left release (that was not a camera drag) is a primary click; right press
/// is a secondary click. Must run before `camera_left_drag` clears the drag
/// state on release.
pub fn handle_editor_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    left_drag: Res<LeftClickDrag>,
    cursor: Res<CursorGround>,
    mut contexts: EguiContexts,
    mut inputs: EventWriter<EditorInput>,
) {
    if egui_wants_pointer(&mut contexts) {
        return;
    }

    if buttons.just_released(MouseButton::Left) && left_drag.pressed && !left_drag.is_dragging {
        inputs.send(EditorInput::PrimaryClick(cursor.world_pos));
    }

    if buttons.just_pressed(MouseButton::Right) {
        inputs.send(EditorInput::SecondaryClick(cursor.world_pos));
    }
}
