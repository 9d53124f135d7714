use bevy::prelude::*;

pub mod camera;
pub mod cell_highlight;
pub mod egui_input_guard;
pub mod input;
pub mod scene;
pub mod shape_render;

use camera::{EditorCamera, LeftClickDrag, ToggleView};
use input::{CursorGround, StatusMessage};
use placement::EditorSet;
use scene::CellTiles;
use shape_render::{ShapeEntities, ShapePalette};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorCamera>()
            .init_resource::<LeftClickDrag>()
            .init_resource::<CursorGround>()
            .init_resource::<StatusMessage>()
            .init_resource::<CellTiles>()
            .init_resource::<ShapePalette>()
            .init_resource::<ShapeEntities>()
            .add_event::<ToggleView>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    scene::setup_lighting,
                    scene::spawn_floor_and_tiles,
                ),
            )
            .add_systems(
                Update,
                (
                    input::update_cursor_ground,
                    input::send_pointer_moves,
                    input::handle_editor_clicks,
                    input::keyboard_shortcuts,
                    camera::camera_left_drag,
                    camera::camera_zoom,
                )
                    .chain()
                    .in_set(EditorSet::Input),
            )
            .add_systems(
                Update,
                (
                    camera::toggle_view,
                    camera::animate_view_transition,
                    camera::apply_editor_camera,
                )
                    .chain()
                    .after(EditorSet::Input),
            )
            .add_systems(
                Update,
                (
                    cell_highlight::apply_cell_highlights,
                    shape_render::sync_shape_meshes,
                    input::report_editor_events,
                    input::tick_status_message,
                    scene::draw_grid_lines,
                )
                    .in_set(EditorSet::React),
            );
    }
}
