//! Footprint resolution: which cells a shape covers when anchored at a cell.

use bevy::prelude::*;

use crate::error::PlacementError;
use crate::grid::{GridCoord, GridModel};
use crate::shapes::{ShapeCatalog, ShapeKind};

/// Cells covered by one shape, in template order (anchor first).
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub cells: Vec<GridCoord>,
    /// Translation from the anchor cell centre to the shape's visual centre.
    pub visual_offset: Vec2,
}

impl Footprint {
    pub fn anchor(&self) -> GridCoord {
        self.cells[0]
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Resolve the footprint of `kind` anchored at `anchor`.
///
/// Fails with [`PlacementError::InvalidKind`] if the catalog has no template
/// for `kind`, and with [`PlacementError::OutOfBounds`] if any covered cell
/// falls outside the grid.
pub fn footprint_of(
    grid: &GridModel,
    catalog: &ShapeCatalog,
    kind: ShapeKind,
    anchor: GridCoord,
) -> Result<Footprint, PlacementError> {
    let template = catalog.get(kind).ok_or(PlacementError::InvalidKind)?;

    // An offset that overflows i32 is as far off the grid as it gets.
    let cells = template
        .footprint
        .iter()
        .map(|&(dx, dy)| {
            anchor
                .checked_offset(dx, dy)
                .filter(|&c| grid.in_bounds(c))
                .ok_or(PlacementError::OutOfBounds)
        })
        .collect::<Result<Vec<GridCoord>, _>>()?;

    Ok(Footprint {
        cells,
        visual_offset: template.visual_offset(grid.cell_size()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeGeometry, ShapeTemplate};

    fn resolve(kind: ShapeKind, x: i32, y: i32) -> Result<Footprint, PlacementError> {
        footprint_of(
            &GridModel::default(),
            &ShapeCatalog::default(),
            kind,
            GridCoord::new(x, y),
        )
    }

    #[test]
    fn test_single_cell_kinds() {
        for kind in [ShapeKind::Box, ShapeKind::Sphere, ShapeKind::Cylinder] {
            let fp = resolve(kind, 4, 6).unwrap();
            assert_eq!(fp.cells, vec![GridCoord::new(4, 6)]);
            assert_eq!(fp.visual_offset, Vec2::ZERO);
        }
    }

    #[test]
    fn test_rectangle_covers_anchor_and_right_neighbour() {
        let fp = resolve(ShapeKind::Rectangle, 0, 0).unwrap();
        assert_eq!(fp.cells, vec![GridCoord::new(0, 0), GridCoord::new(1, 0)]);
        assert_eq!(fp.visual_offset, Vec2::new(2.5, 0.0));
        assert_eq!(fp.anchor(), GridCoord::new(0, 0));
    }

    #[test]
    fn test_large_square_covers_two_by_two() {
        let fp = resolve(ShapeKind::LargeSquare, 3, 3).unwrap();
        assert_eq!(
            fp.cells,
            vec![
                GridCoord::new(3, 3),
                GridCoord::new(4, 3),
                GridCoord::new(3, 4),
                GridCoord::new(4, 4),
            ]
        );
        assert_eq!(fp.visual_offset, Vec2::new(2.5, 2.5));
    }

    #[test]
    fn test_footprint_is_deterministic() {
        for kind in ShapeKind::ALL {
            for (x, y) in [(0, 0), (5, 12), (18, 18)] {
                assert_eq!(resolve(kind, x, y), resolve(kind, x, y));
            }
        }
    }

    #[test]
    fn test_footprint_past_edge_is_out_of_bounds() {
        // Last column: the rectangle's second cell would be x = 20.
        assert_eq!(
            resolve(ShapeKind::Rectangle, 19, 0),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            resolve(ShapeKind::LargeSquare, 0, 19),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            resolve(ShapeKind::Box, -1, 0),
            Err(PlacementError::OutOfBounds)
        );
        assert!(resolve(ShapeKind::Box, 19, 19).is_ok());
        assert!(resolve(ShapeKind::LargeSquare, 18, 18).is_ok());
    }

    #[test]
    fn test_anchor_at_integer_limits_is_out_of_bounds() {
        assert_eq!(
            resolve(ShapeKind::Rectangle, i32::MAX, 0),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            resolve(ShapeKind::LargeSquare, 0, i32::MAX),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            resolve(ShapeKind::Box, i32::MIN, i32::MIN),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn test_huge_template_offset_is_out_of_bounds() {
        let catalog = ShapeCatalog::from_templates(vec![ShapeTemplate {
            kind: ShapeKind::Rectangle,
            footprint: vec![(0, 0), (i32::MAX, 0)],
            geometry: ShapeGeometry::Cuboid {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
        }])
        .unwrap();
        for anchor in [GridCoord::new(0, 0), GridCoord::new(1, 0)] {
            assert_eq!(
                footprint_of(&GridModel::default(), &catalog, ShapeKind::Rectangle, anchor),
                Err(PlacementError::OutOfBounds)
            );
        }
    }

    #[test]
    fn test_kind_missing_from_catalog() {
        let catalog = ShapeCatalog::from_templates(vec![ShapeTemplate {
            kind: ShapeKind::Box,
            footprint: vec![(0, 0)],
            geometry: ShapeGeometry::Cuboid {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
        }])
        .unwrap();
        assert_eq!(
            footprint_of(
                &GridModel::default(),
                &catalog,
                ShapeKind::Sphere,
                GridCoord::new(1, 1)
            ),
            Err(PlacementError::InvalidKind)
        );
    }
}
