//! Data-driven editor parameters.
//!
//! [`EditorParams`] gathers the grid pitch, the grid extent and the shape
//! table into one serde-friendly resource so a build can be retuned from a
//! JSON file without recompiling. Missing fields fall back to the defaults in
//! [`crate::config`].

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, GRID_EXTENT};
use crate::grid::GridModel;
use crate::shapes::{default_templates, ShapeCatalog, ShapeKind, ShapeTemplate};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorParams {
    /// World units per cell.
    pub cell_size: f32,
    /// Side length of the square grid in world units.
    pub extent: f32,
    /// Shape table, in toolbar order.
    pub shapes: Vec<ShapeTemplate>,
}

impl Default for EditorParams {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            extent: GRID_EXTENT,
            shapes: default_templates(),
        }
    }
}

impl EditorParams {
    /// Parse and validate a params document.
    pub fn from_json(text: &str) -> Result<Self, ParamsError> {
        let params: Self =
            serde_json::from_str(text).map_err(|e| ParamsError::Json(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        self.build().map(|_| ())
    }

    /// Turn the params into the grid and catalog the editor runs on.
    pub fn build(&self) -> Result<(GridModel, ShapeCatalog), ParamsError> {
        let grid = GridModel::from_extent(self.cell_size, self.extent)?;
        let catalog = ShapeCatalog::from_templates(self.shapes.clone())?;
        Ok((grid, catalog))
    }
}

/// Errors from loading or validating [`EditorParams`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// Cell size is zero, negative, or not finite.
    InvalidCellSize(f32),
    /// Extent is not a positive whole number of cells.
    InvalidExtent { extent: f32, cell_size: f32 },
    /// The shape table lists the same kind more than once.
    DuplicateKind(ShapeKind),
    /// A template covers no cells.
    EmptyFootprint(ShapeKind),
    /// A template's footprint does not include the anchor offset `(0,0)`.
    MissingAnchor(ShapeKind),
    /// A template lists the same offset twice.
    DuplicateOffset { kind: ShapeKind, offset: (i32, i32) },
    /// The document is not valid JSON for this schema.
    Json(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::InvalidCellSize(size) => {
                write!(f, "Cell size must be a positive number, got {size}")
            }
            ParamsError::InvalidExtent { extent, cell_size } => write!(
                f,
                "Extent {extent} is not a positive whole number of {cell_size}-unit cells"
            ),
            ParamsError::DuplicateKind(kind) => write!(f, "Shape kind '{kind}' listed twice"),
            ParamsError::EmptyFootprint(kind) => write!(f, "Shape kind '{kind}' covers no cells"),
            ParamsError::MissingAnchor(kind) => {
                write!(f, "Shape kind '{kind}' footprint must include offset (0,0)")
            }
            ParamsError::DuplicateOffset { kind, offset } => write!(
                f,
                "Shape kind '{kind}' lists offset ({},{}) twice",
                offset.0, offset.1
            ),
            ParamsError::Json(msg) => write!(f, "Invalid params document: {msg}"),
        }
    }
}

impl std::error::Error for ParamsError {}
