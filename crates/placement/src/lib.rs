//! Grid-cell shape placement: the headless editor core.
//!
//! Maps ground-plane picks to grid cells, resolves multi-cell footprints from
//! a data-driven shape table, and keeps the occupancy set and the shape
//! registry in lockstep. Rendering and input live in other crates and talk
//! to this one only through [`EditorInput`] and [`EditorEvent`].

pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod footprint;
pub mod grid;
pub mod invariants;
pub mod log;
pub mod occupancy;
pub mod params;
pub mod plugin;
pub mod registry;
pub mod shapes;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use editor::{EditMode, Editor, HoverChange, Placement, Removal};
pub use error::{PlacementError, ReleaseError};
pub use events::{EditorEvent, EditorInput, Outcome};
pub use footprint::{footprint_of, Footprint};
pub use grid::{GridCoord, GridModel};
pub use invariants::{check_registries, InvariantViolation, InvariantViolations};
pub use log::EditorLog;
pub use occupancy::OccupancyRegistry;
pub use params::{EditorParams, ParamsError};
pub use plugin::{apply_editor_input, EditorSet, PlacementPlugin};
pub use registry::{PlacedShape, ShapeId, ShapeRegistry};
pub use shapes::{ShapeCatalog, ShapeGeometry, ShapeKind, ShapeTemplate};
