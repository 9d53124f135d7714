use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, GRID_CELLS};
use crate::params::ParamsError;

/// Integer cell index on the editor grid. Grid X follows world X, grid Y
/// follows world Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`. `None` if either axis overflows.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Returned by [`GridModel::cell_at`] for NaN or infinite points.
const OFF_GRID: GridCoord = GridCoord::new(-1, -1);

/// Square grid centred on the world origin.
///
/// Cell `(0,0)` is the cell whose minimum corner sits at `(-extent/2, -extent/2)`
/// on the ground plane; indices grow towards +X and +Z.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GridModel {
    cell_size: f32,
    cells_per_side: i32,
}

impl Default for GridModel {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            cells_per_side: GRID_CELLS,
        }
    }
}

impl GridModel {
    /// Build a grid from a cell pitch and a side length, both in world units.
    /// The extent must be a whole number of cells.
    pub fn from_extent(cell_size: f32, extent: f32) -> Result<Self, ParamsError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ParamsError::InvalidCellSize(cell_size));
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ParamsError::InvalidExtent { extent, cell_size });
        }
        let cells = extent / cell_size;
        if (cells - cells.round()).abs() > 1e-4 || cells.round() < 1.0 {
            return Err(ParamsError::InvalidExtent { extent, cell_size });
        }
        Ok(Self {
            cell_size,
            cells_per_side: cells.round() as i32,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cells_per_side(&self) -> i32 {
        self.cells_per_side
    }

    #[inline]
    pub fn extent(&self) -> f32 {
        self.cells_per_side as f32 * self.cell_size
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.extent() * 0.5
    }

    pub fn cell_count(&self) -> usize {
        (self.cells_per_side * self.cells_per_side) as usize
    }

    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.cells_per_side && coord.y < self.cells_per_side
    }

    /// Snap a ground-plane point (world x, world z) to the cell containing it.
    /// The result may lie outside the grid; see [`GridModel::pick`]. A
    /// non-finite point maps to a cell that is never in bounds.
    pub fn cell_at(&self, world: Vec2) -> GridCoord {
        if !world.is_finite() {
            return OFF_GRID;
        }
        let half = self.half_extent();
        GridCoord {
            x: ((world.x + half) / self.cell_size).floor() as i32,
            y: ((world.y + half) / self.cell_size).floor() as i32,
        }
    }

    /// Like [`GridModel::cell_at`] but returns `None` when the point misses the grid.
    pub fn pick(&self, world: Vec2) -> Option<GridCoord> {
        let coord = self.cell_at(world);
        self.in_bounds(coord).then_some(coord)
    }

    /// Centre of a cell on the ground plane (world x, world z).
    pub fn world_position_of(&self, coord: GridCoord) -> Vec2 {
        let half = self.half_extent();
        Vec2::new(
            -half + (coord.x as f32 + 0.5) * self.cell_size,
            -half + (coord.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let n = self.cells_per_side;
        (0..n).flat_map(move |y| (0..n).map(move |x| GridCoord::new(x, y)))
    }
}
