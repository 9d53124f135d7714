//! Meshes for placed shapes.
//!
//! Spawns one mesh per `ShapePlaced` event at the reported visual origin and
//! despawns it on `ShapeRemoved`. Geometry comes from the shape catalog, so a
//! new template needs no code here.

use std::collections::HashMap;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use placement::{Editor, EditorEvent, ShapeGeometry, ShapeId};

/// Seed for the shape colour stream.
const DEFAULT_SEED: u64 = 42;
const SPHERE_SUBDIVISIONS: u32 = 5;
const CYLINDER_RESOLUTION: u32 = 32;

/// Colour RNG. Seeded so the same sequence of placements gives the same colours.
#[derive(Resource)]
pub struct ShapePalette(pub ChaCha8Rng);

impl Default for ShapePalette {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl ShapePalette {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A random opaque colour.
    pub fn next_color(&mut self) -> Color {
        Color::srgb(self.0.gen(), self.0.gen(), self.0.gen())
    }
}

/// Marker on a spawned shape mesh.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShapeMesh {
    pub id: ShapeId,
}

/// Shape id -> mesh entity.
#[derive(Resource, Default)]
pub struct ShapeEntities {
    pub entities: HashMap<ShapeId, Entity>,
}

pub fn geometry_mesh(geometry: ShapeGeometry) -> Mesh {
    match geometry {
        ShapeGeometry::Cuboid {
            width,
            height,
            depth,
        } => Cuboid::new(width, height, depth).into(),
        ShapeGeometry::Sphere { radius } => Sphere::new(radius)
            .mesh()
            .ico(SPHERE_SUBDIVISIONS)
            .unwrap_or_else(|_| Sphere::new(radius).mesh().uv(32, 18)),
        ShapeGeometry::Cylinder { radius, height } => Cylinder::new(radius, height)
            .mesh()
            .resolution(CYLINDER_RESOLUTION)
            .into(),
    }
}

pub fn sync_shape_meshes(
    mut commands: Commands,
    mut events: EventReader<EditorEvent>,
    editor: Res<Editor>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut palette: ResMut<ShapePalette>,
    mut spawned: ResMut<ShapeEntities>,
) {
    for event in events.read() {
        match event {
            EditorEvent::ShapePlaced {
                id,
                kind,
                visual_origin,
                ..
            } => {
                let Some(template) = editor.catalog().get(*kind) else {
                    warn!("No template for {} when spawning shape {}", kind, id);
                    continue;
                };
                let entity = commands
                    .spawn((
                        ShapeMesh { id: *id },
                        Mesh3d(meshes.add(geometry_mesh(template.geometry))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: palette.next_color(),
                            perceptual_roughness: 1.0,
                            ..default()
                        })),
                        Transform::from_translation(*visual_origin),
                    ))
                    .id();
                spawned.entities.insert(*id, entity);
            }
            EditorEvent::ShapeRemoved { id, .. } => {
                if let Some(entity) = spawned.entities.remove(id) {
                    commands.entity(entity).despawn_recursive();
                }
            }
            _ => {}
        }
    }
}
