use bevy::prelude::*;
use bevy_egui::EguiContexts;

use placement::{EditMode, Editor, EditorInput};

use crate::camera::ToggleView;
use crate::egui_input_guard::egui_wants_keyboard;

const KIND_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// `1`-`5` select shape kinds in table order, `Escape` exits add mode,
/// `V` cycles the camera view.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    editor: Res<Editor>,
    mut contexts: EguiContexts,
    mut inputs: EventWriter<EditorInput>,
    mut toggles: EventWriter<ToggleView>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }

    for (key, kind) in KIND_KEYS.iter().zip(editor.catalog().kinds()) {
        if keys.just_pressed(*key) {
            inputs.send(EditorInput::SelectKind(Some(kind)));
        }
    }

    if keys.just_pressed(KeyCode::Escape) && editor.mode() != EditMode::Idle {
        inputs.send(EditorInput::SelectKind(None));
    }

    if keys.just_pressed(KeyCode::KeyV) {
        toggles.send(ToggleView);
    }
}
