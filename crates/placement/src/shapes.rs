//! Shape kinds and the data-driven template table.
//!
//! Every kind maps to one [`ShapeTemplate`]: the footprint offsets it covers
//! relative to its anchor cell and the geometry the renderer builds for it.
//! Placement, removal and rendering all read the same table, so adding a kind
//! means adding a row here and nothing else.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::params::ParamsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
    Rectangle,
    LargeSquare,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Rectangle,
        ShapeKind::LargeSquare,
    ];

    /// Stable identifier, also used in params files.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::LargeSquare => "largeSquare",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::LargeSquare => "Large Square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" => Ok(ShapeKind::Box),
            "sphere" => Ok(ShapeKind::Sphere),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "largesquare" | "large_square" => Ok(ShapeKind::LargeSquare),
            _ => Err(PlacementError::InvalidKind),
        }
    }
}

/// Mesh description handed to the renderer. Dimensions are in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeGeometry {
    Cuboid { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    pub kind: ShapeKind,
    /// Cell offsets from the anchor, anchor first. `(dx, dy)` in grid units.
    pub footprint: Vec<(i32, i32)>,
    pub geometry: ShapeGeometry,
}

impl ShapeTemplate {
    /// Translation from the anchor cell centre to the centre of the footprint's
    /// bounding box, in world units on the ground plane.
    pub fn visual_offset(&self, cell_size: f32) -> Vec2 {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0, 0, 0, 0);
        for &(dx, dy) in &self.footprint {
            min_x = min_x.min(dx);
            max_x = max_x.max(dx);
            min_y = min_y.min(dy);
            max_y = max_y.max(dy);
        }
        Vec2::new(
            (min_x + max_x) as f32 * 0.5 * cell_size,
            (min_y + max_y) as f32 * 0.5 * cell_size,
        )
    }

    fn validate(&self) -> Result<(), ParamsError> {
        if self.footprint.is_empty() {
            return Err(ParamsError::EmptyFootprint(self.kind));
        }
        if !self.footprint.contains(&(0, 0)) {
            return Err(ParamsError::MissingAnchor(self.kind));
        }
        for (i, offset) in self.footprint.iter().enumerate() {
            if self.footprint[..i].contains(offset) {
                return Err(ParamsError::DuplicateOffset {
                    kind: self.kind,
                    offset: *offset,
                });
            }
        }
        Ok(())
    }
}

/// The kind → template table.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ShapeCatalog {
    templates: Vec<ShapeTemplate>,
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self {
            templates: default_templates(),
        }
    }
}

impl ShapeCatalog {
    pub fn from_templates(templates: Vec<ShapeTemplate>) -> Result<Self, ParamsError> {
        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.kind == template.kind) {
                return Err(ParamsError::DuplicateKind(template.kind));
            }
            template.validate()?;
        }
        Ok(Self { templates })
    }

    pub fn get(&self, kind: ShapeKind) -> Option<&ShapeTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    /// Kinds in table order (the order toolbar buttons and number keys use).
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.templates.iter().map(|t| t.kind)
    }

    pub fn templates(&self) -> &[ShapeTemplate] {
        &self.templates
    }
}

pub fn default_templates() -> Vec<ShapeTemplate> {
    vec![
        ShapeTemplate {
            kind: ShapeKind::Box,
            footprint: vec![(0, 0)],
            geometry: ShapeGeometry::Cuboid {
                width: 4.0,
                height: 4.0,
                depth: 4.0,
            },
        },
        ShapeTemplate {
            kind: ShapeKind::Sphere,
            footprint: vec![(0, 0)],
            geometry: ShapeGeometry::Sphere { radius: 2.0 },
        },
        ShapeTemplate {
            kind: ShapeKind::Cylinder,
            footprint: vec![(0, 0)],
            geometry: ShapeGeometry::Cylinder {
                radius: 2.0,
                height: 4.0,
            },
        },
        ShapeTemplate {
            kind: ShapeKind::Rectangle,
            footprint: vec![(0, 0), (1, 0)],
            geometry: ShapeGeometry::Cuboid {
                width: 9.0,
                height: 4.0,
                depth: 4.0,
            },
        },
        ShapeTemplate {
            kind: ShapeKind::LargeSquare,
            footprint: vec![(0, 0), (1, 0), (0, 1), (1, 1)],
            geometry: ShapeGeometry::Cuboid {
                width: 9.0,
                height: 4.0,
                depth: 9.0,
            },
        },
    ]
}
