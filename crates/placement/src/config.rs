/// World units per grid cell.
pub const CELL_SIZE: f32 = 5.0;
/// Side length of the square grid in world units, centred on the origin.
pub const GRID_EXTENT: f32 = 100.0;
pub const GRID_CELLS: i32 = (GRID_EXTENT / CELL_SIZE) as i32;
pub const HALF_EXTENT: f32 = GRID_EXTENT / 2.0;

/// Height at which placed shapes are centred.
pub const SHAPE_ELEVATION: f32 = 2.5;

/// The floor plane sits slightly below the cell tiles so highlights never z-fight.
pub const FLOOR_ELEVATION: f32 = -0.5;
