//! Static scene: background, lights, floor, grid lines and the per-cell tiles
//! that carry the hover highlight.

use std::collections::HashMap;

use bevy::prelude::*;

use placement::config::FLOOR_ELEVATION;
use placement::{Editor, GridCoord};

const BACKGROUND: Color = Color::srgb(0.94, 0.94, 0.94);
const FLOOR_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const GRID_LINE_COLOR: Color = Color::srgb(0.27, 0.27, 0.27);
/// Tiles sit just above the ground plane the pointer ray is tested against.
const TILE_ELEVATION: f32 = 0.01;
const TILE_THICKNESS: f32 = 0.02;
const FLOOR_THICKNESS: f32 = 0.1;

/// One transparent tile per grid cell; its material is private to the tile so
/// the highlight can be changed per cell.
#[derive(Component, Debug, Clone, Copy)]
pub struct CellTile {
    pub coord: GridCoord,
}

/// Cell -> tile entity lookup, filled at startup.
#[derive(Resource, Default)]
pub struct CellTiles {
    pub tiles: HashMap<GridCoord, Entity>,
}

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ClearColor(BACKGROUND));

    // Soft ambient fill
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.25, 0.25, 0.25),
        brightness: 300.0,
    });

    // Sun at (50, 50, 50) looking at the origin
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(50.0, 50.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn spawn_floor_and_tiles(
    mut commands: Commands,
    editor: Res<Editor>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tiles: ResMut<CellTiles>,
) {
    let grid = editor.grid();
    let extent = grid.extent();
    let cell = grid.cell_size();

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(extent, FLOOR_THICKNESS, extent))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: FLOOR_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, FLOOR_ELEVATION - FLOOR_THICKNESS * 0.5, 0.0),
    ));

    let tile_mesh = meshes.add(Cuboid::new(cell, TILE_THICKNESS, cell));
    for coord in grid.cells() {
        let centre = grid.world_position_of(coord);
        let material = materials.add(StandardMaterial {
            base_color: crate::cell_highlight::IDLE_TILE_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        let entity = commands
            .spawn((
                CellTile { coord },
                Mesh3d(tile_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_xyz(centre.x, TILE_ELEVATION, centre.y),
            ))
            .id();
        tiles.tiles.insert(coord, entity);
    }

    info!("Spawned {} cell tiles", tiles.tiles.len());
}

/// Draw one line per cell boundary across the whole grid.
pub fn draw_grid_lines(editor: Res<Editor>, mut gizmos: Gizmos) {
    let grid = editor.grid();
    let half = grid.half_extent();
    let y = TILE_ELEVATION + TILE_THICKNESS;
    for i in 0..=grid.cells_per_side() {
        let offset = -half + i as f32 * grid.cell_size();
        gizmos.line(
            Vec3::new(offset, y, -half),
            Vec3::new(offset, y, half),
            GRID_LINE_COLOR,
        );
        gizmos.line(
            Vec3::new(-half, y, offset),
            Vec3::new(half, y, offset),
            GRID_LINE_COLOR,
        );
    }
}
