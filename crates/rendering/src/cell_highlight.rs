use bevy::prelude::*;

use placement::{EditorEvent, GridCoord};

use crate::scene::CellTiles;

/// Tile colour when not hovered: white, fully transparent.
pub const IDLE_TILE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.0);
/// Tile colour under the pointer while placing: red at half opacity.
pub const HOVER_TILE_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.5);

/// Apply `CellHighlightChanged`: reset the old tile first, then light the new one.
pub fn apply_cell_highlights(
    mut events: EventReader<EditorEvent>,
    tiles: Res<CellTiles>,
    tile_q: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        let EditorEvent::CellHighlightChanged { old, new } = event else {
            continue;
        };
        if let Some(old) = old {
            set_tile_color(*old, IDLE_TILE_COLOR, &tiles, &tile_q, &mut materials);
        }
        if let Some(new) = new {
            set_tile_color(*new, HOVER_TILE_COLOR, &tiles, &tile_q, &mut materials);
        }
    }
}

fn set_tile_color(
    coord: GridCoord,
    color: Color,
    tiles: &CellTiles,
    tile_q: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) {
    let Some(&entity) = tiles.tiles.get(&coord) else {
        return;
    };
    let Ok(handle) = tile_q.get(entity) else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.0) {
        material.base_color = color;
    }
}
