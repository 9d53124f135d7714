//! Input handling for the editor.
//!
//! Split into sub-modules by concern:
//! - `types`: Resource types (CursorGround, StatusMessage)
//! - `cursor`: Ground-plane picking, pointer-move forwarding, status tick
//! - `clicks`: Mouse buttons to editor requests
//! - `keyboard`: Kind hotkeys, escape, view toggle
//! - `status`: Editor outcomes to the status line

mod clicks;
mod cursor;
mod keyboard;
mod status;
mod types;


pub use types::{CursorGround, StatusMessage, STATUS_SECS};

pub use clicks::handle_editor_clicks;
pub use cursor::{ground_hit, send_pointer_moves, tick_status_message, update_cursor_ground};
pub use keyboard::keyboard_shortcuts;
pub use status::report_editor_events;
