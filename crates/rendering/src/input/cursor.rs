use bevy::prelude::*;
use bevy_egui::EguiContexts;

use placement::EditorInput;

use crate::egui_input_guard::egui_wants_pointer;

use super::types::{CursorGround, StatusMessage};

/// Intersect a ray with the `y = 0` ground plane. Returns the hit as `(x, z)`.
pub fn ground_hit(origin: Vec3, direction: Vec3) -> Option<Vec2> {
    if direction.y.abs() <= 0.001 {
        return None;
    }
    let t = -origin.y / direction.y;
    if t < 0.0 {
        return None;
    }
    let hit = origin + direction * t;
    Some(Vec2::new(hit.x, hit.z))
}

pub fn update_cursor_ground(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut cursor: ResMut<CursorGround>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let world_pos = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world(cam_transform, screen_pos).ok())
        .and_then(|ray| ground_hit(ray.origin, *ray.direction));

    cursor.set_if_neq(CursorGround { world_pos });
}

/// Forward cursor movement to the editor. A cursor over the toolbar counts as
/// off the grid so the highlight clears.
pub fn send_pointer_moves(
    cursor: Res<CursorGround>,
    mut contexts: EguiContexts,
    mut over_ui: Local<bool>,
    mut inputs: EventWriter<EditorInput>,
) {
    let ui = egui_wants_pointer(&mut contexts);
    if !cursor.is_changed() && ui == *over_ui {
        return;
    }
    *over_ui = ui;
    let pick = if ui { None } else { cursor.world_pos };
    inputs.send(EditorInput::PointerMoved(pick));
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}
