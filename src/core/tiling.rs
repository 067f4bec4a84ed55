//! Tile addressing for the slippy quad-tree tile scheme.
//!
//! At zoom `z` the projected world extent is divided into `2^z × 2^z` equal
//! cells. Tile (0, 0) sits at the north-west corner and y grows southward,
//! matching the OSM tile convention.
//!
//! Edge policy: a projected point exactly on a cell boundary belongs to the
//! higher-indexed tile (right/bottom-inclusive). This is implemented by
//! flooring the normalized offset and is load-bearing for tile cache key
//! uniqueness: do not change it without migrating cache keys. Points on the
//! extreme east/south world edge clamp into the last column/row.

use serde::{Deserialize, Serialize};

use crate::core::constants::{HALF_WORLD_METERS, WORLD_SIZE_METERS};
use crate::core::geo::LatLngBounds;
use crate::core::projection::{ProjectedPoint, ProjectedRect, ProjectedSize, Projection};

/// Number of tiles along one axis at the given zoom level.
///
/// Zoom levels above 30 overflow the tile index space and are a caller
/// contract violation.
pub fn total_tiles(zoom: u8) -> u32 {
    2u32.pow(zoom as u32)
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Tile containing the given projected point at the given zoom level.
    ///
    /// Assumes the caller has already clamped `zoom` to the supported range of
    /// the active tile sources; no re-validation happens here.
    pub fn for_projected(point: ProjectedPoint, zoom: u8) -> Self {
        let tiles = total_tiles(zoom);
        let max_index = tiles - 1;
        let tiles_f = tiles as f64;

        let nx = (point.x + HALF_WORLD_METERS) / WORLD_SIZE_METERS;
        let ny = (HALF_WORLD_METERS - point.y) / WORLD_SIZE_METERS;

        let x = ((nx * tiles_f).floor().max(0.0) as u32).min(max_index);
        let y = ((ny * tiles_f).floor().max(0.0) as u32).min(max_index);

        Self::new(x, y, zoom)
    }

    /// The exact projected rectangle covered by this tile
    pub fn projected_bounds(&self) -> ProjectedRect {
        let cell = WORLD_SIZE_METERS / total_tiles(self.z) as f64;
        let min_x = -HALF_WORLD_METERS + self.x as f64 * cell;
        let max_y = HALF_WORLD_METERS - self.y as f64 * cell;

        ProjectedRect::new(
            ProjectedPoint::new(min_x, max_y - cell),
            ProjectedSize::new(cell, cell),
        )
    }

    /// Geographic bounds of this tile under the given projection
    pub fn geo_bounds(&self, projection: &dyn Projection) -> LatLngBounds {
        let rect = self.projected_bounds();
        let south_west = projection.unproject(&rect.origin);
        let north_east = projection.unproject(&ProjectedPoint::new(rect.max_x(), rect.max_y()));

        LatLngBounds::new(south_west, north_east)
    }

    /// Gets the parent tile at a lower zoom level
    pub fn parent(&self) -> Option<TileCoord> {
        if self.z == 0 {
            None
        } else {
            Some(TileCoord::new(self.x / 2, self.y / 2, self.z - 1))
        }
    }

    /// Gets the four child tiles at the next zoom level
    pub fn children(&self) -> [TileCoord; 4] {
        [
            TileCoord::new(self.x * 2, self.y * 2, self.z + 1),
            TileCoord::new(self.x * 2 + 1, self.y * 2, self.z + 1),
            TileCoord::new(self.x * 2, self.y * 2 + 1, self.z + 1),
            TileCoord::new(self.x * 2 + 1, self.y * 2 + 1, self.z + 1),
        ]
    }

    /// Checks if the tile indices are within the grid for its zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = total_tiles(self.z);
        self.x < max_coord && self.y < max_coord
    }

    /// The tile one column east, if it stays within the grid
    pub fn east(&self) -> Option<TileCoord> {
        (self.x < total_tiles(self.z) - 1).then_some(TileCoord::new(self.x + 1, self.y, self.z))
    }

    /// The tile one column west, if it stays within the grid
    pub fn west(&self) -> Option<TileCoord> {
        Some(TileCoord::new(self.x.checked_sub(1)?, self.y, self.z))
    }

    /// The tile one row north, if it stays within the grid
    pub fn north(&self) -> Option<TileCoord> {
        Some(TileCoord::new(self.x, self.y.checked_sub(1)?, self.z))
    }

    /// The tile one row south, if it stays within the grid
    pub fn south(&self) -> Option<TileCoord> {
        (self.y < total_tiles(self.z) - 1).then_some(TileCoord::new(self.x, self.y + 1, self.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::core::projection::SphericalMercator;

    #[test]
    fn test_zoom_zero_is_a_single_root_tile() {
        let points = [
            ProjectedPoint::new(0.0, 0.0),
            ProjectedPoint::new(-HALF_WORLD_METERS, HALF_WORLD_METERS),
            ProjectedPoint::new(HALF_WORLD_METERS, -HALF_WORLD_METERS),
            ProjectedPoint::new(1234.5, -9876.5),
        ];

        for point in points {
            assert_eq!(TileCoord::for_projected(point, 0), TileCoord::new(0, 0, 0));
        }
    }

    #[test]
    fn test_tile_bounds_contain_their_points() {
        let projection = SphericalMercator;
        let coords = [
            LatLng::new(52.2647, 21.0003),
            LatLng::new(-33.8688, 151.2093),
            LatLng::new(0.0, 0.0),
            LatLng::new(84.9, -179.9),
        ];

        for zoom in [0u8, 1, 5, 12, 18] {
            for coord in coords {
                let point = projection.project(&coord);
                let tile = TileCoord::for_projected(point, zoom);

                assert!(tile.is_valid());
                assert!(
                    tile.projected_bounds().contains(&point),
                    "tile {tile:?} does not contain its own point at zoom {zoom}"
                );
            }
        }
    }

    #[test]
    fn test_boundary_points_go_to_higher_indexed_tile() {
        // The boundary between tile columns 0 and 1 at zoom 1 is x = 0.
        let on_boundary = ProjectedPoint::new(0.0, 1000.0);
        assert_eq!(TileCoord::for_projected(on_boundary, 1).x, 1);

        // Same for rows: y = 0 splits rows 0 and 1, and projected y decreases
        // southward, so the boundary point lands in the lower (southern) row.
        let on_row_boundary = ProjectedPoint::new(-1000.0, 0.0);
        assert_eq!(TileCoord::for_projected(on_row_boundary, 1).y, 1);
    }

    #[test]
    fn test_world_edges_clamp_into_grid() {
        let south_east_corner = ProjectedPoint::new(HALF_WORLD_METERS, -HALF_WORLD_METERS);
        let tile = TileCoord::for_projected(south_east_corner, 3);

        assert_eq!(tile, TileCoord::new(7, 7, 3));
        assert!(tile.is_valid());
    }

    #[test]
    fn test_cells_partition_the_world() {
        let zoom = 2u8;
        let tiles = total_tiles(zoom);
        let cell = WORLD_SIZE_METERS / tiles as f64;

        for y in 0..tiles {
            for x in 0..tiles {
                let bounds = TileCoord::new(x, y, zoom).projected_bounds();
                // Cell edges line up exactly with the grid, no gaps or overlaps
                assert!((bounds.size.width - cell).abs() < 1e-6);
                assert!((bounds.min_x() - (-HALF_WORLD_METERS + x as f64 * cell)).abs() < 1e-6);
                assert!((bounds.max_y() - (HALF_WORLD_METERS - y as f64 * cell)).abs() < 1e-6);

                // A sample point inside the cell maps back to the same tile
                let inside = ProjectedPoint::new(
                    bounds.min_x() + cell / 4.0,
                    bounds.min_y() + cell / 4.0,
                );
                assert_eq!(
                    TileCoord::for_projected(inside, zoom),
                    TileCoord::new(x, y, zoom)
                );
            }
        }
    }

    #[test]
    fn test_known_osm_tile() {
        // Warsaw Citadel, a well-known slippy-map reference point
        let citadel = SphericalMercator.project(&LatLng::new(52.26470, 21.00027));
        let tile = TileCoord::for_projected(citadel, 20);

        assert_eq!(tile, TileCoord::new(585455, 345104, 20));
    }

    #[test]
    fn test_parent_and_children() {
        let tile = TileCoord::new(5, 9, 4);

        assert_eq!(tile.parent(), Some(TileCoord::new(2, 4, 3)));
        assert_eq!(TileCoord::new(0, 0, 0).parent(), None);

        let children = tile.children();
        assert_eq!(children.len(), 4);
        for child in children {
            assert_eq!(child.parent(), Some(tile));
        }
    }

    #[test]
    fn test_neighbors_stop_at_the_grid_edge() {
        let corner = TileCoord::new(0, 0, 1);
        assert_eq!(corner.west(), None);
        assert_eq!(corner.north(), None);
        assert_eq!(corner.east(), Some(TileCoord::new(1, 0, 1)));
        assert_eq!(corner.south(), Some(TileCoord::new(0, 1, 1)));

        let opposite = TileCoord::new(1, 1, 1);
        assert_eq!(opposite.east(), None);
        assert_eq!(opposite.south(), None);
        assert_eq!(opposite.west(), Some(TileCoord::new(0, 1, 1)));
        assert_eq!(opposite.north(), Some(TileCoord::new(1, 0, 1)));
    }

    #[test]
    fn test_geo_bounds_roundtrip() {
        let projection = SphericalMercator;
        let tile = TileCoord::new(9, 5, 4);
        let geo = tile.geo_bounds(&projection);

        assert!(geo.is_valid());
        // Center of the geographic bounds must project back into the tile
        let center_projected = projection.project(&geo.center());
        assert_eq!(TileCoord::for_projected(center_projected, 4), tile);
    }
}
