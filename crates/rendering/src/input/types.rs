use bevy::prelude::*;

/// Seconds a status line stays on screen.
pub const STATUS_SECS: f32 = 3.0;

/// Ground-plane point `(x, z)` under the mouse cursor, or `None` when the
/// cursor is outside the window or its ray misses the ground.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorGround {
    pub world_pos: Option<Vec2>,
}

/// Status message shown briefly on screen
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = STATUS_SECS;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}
