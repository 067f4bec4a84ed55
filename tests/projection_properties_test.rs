//! Property-style sweeps over the projection, tiling, and constraint math.

use approx::assert_relative_eq;
use mapcore::constants::{HALF_WORLD_METERS, METERS_PER_PIXEL_AT_ZOOM_ZERO, TILE_SIZE};
use mapcore::{
    BoundingMask, LatLng, MapConstraints, ProjectedPoint, Projection, ScreenPoint, ScreenSize,
    SphericalMercator, TileCoord, Viewport,
};

#[test]
fn mercator_round_trips_across_the_valid_domain() {
    let projection = SphericalMercator;

    for lat_step in -8..=8 {
        for lng_step in -11..=11 {
            let coord = LatLng::new(lat_step as f64 * 10.0, lng_step as f64 * 16.0);
            let coord = coord.normalize();
            let back = projection.unproject(&projection.project(&coord));

            assert_relative_eq!(back.lat, coord.lat, max_relative = 1e-9, epsilon = 1e-12);
            assert_relative_eq!(back.lng, coord.lng, max_relative = 1e-9, epsilon = 1e-12);
        }
    }
}

#[test]
fn tiling_partitions_the_plane_without_gaps() {
    // Sample a grid of points including cell boundaries; every point must land
    // in a tile whose bounds contain it.
    for zoom in [1u8, 3, 7] {
        let tiles = mapcore::core::tiling::total_tiles(zoom);
        let cell = 2.0 * HALF_WORLD_METERS / tiles as f64;

        let world = cell * tiles as f64;
        for i in 0..=8 {
            for j in 0..=8 {
                // The eighth-steps include exact cell boundaries at the
                // samples where i or j is a multiple of tiles/8
                let px = -HALF_WORLD_METERS + i as f64 * world / 8.0;
                let py = HALF_WORLD_METERS - j as f64 * world / 8.0;
                let point = ProjectedPoint::new(px, py);

                let tile = TileCoord::for_projected(point, zoom);
                assert!(tile.is_valid(), "tile {tile:?} escaped the grid");
                assert!(
                    tile.projected_bounds().contains(&point),
                    "tile {tile:?} does not contain ({px}, {py}) at zoom {zoom}"
                );
            }
        }
    }
}

#[test]
fn pivot_invariant_holds_for_anchor_and_delta_sweep() {
    let projection = SphericalMercator;
    let mut viewport = Viewport::new(
        projection.project(&LatLng::new(37.7749, -122.4194)),
        12.0,
        ScreenSize::new(1024.0, 768.0),
    );

    let anchors = [
        ScreenPoint::new(0.0, 0.0),
        ScreenPoint::new(512.0, 384.0),
        ScreenPoint::new(1024.0, 768.0),
        ScreenPoint::new(37.0, 700.0),
    ];

    for anchor in anchors {
        for delta in [-4.0, -1.5, -0.25, 0.25, 1.5, 4.0] {
            let target = (viewport.zoom() + delta).clamp(0.0, 19.0);
            let before = viewport.screen_to_projected(anchor);
            viewport.zoom_around(anchor, target);
            let after = viewport.screen_to_projected(anchor);

            assert_relative_eq!(before.x, after.x, max_relative = 1e-9, epsilon = 1e-5);
            assert_relative_eq!(before.y, after.y, max_relative = 1e-9, epsilon = 1e-5);
        }
    }
}

#[test]
fn clamping_is_idempotent_everywhere() {
    let mut constraints = MapConstraints::new(2.0, 16.0);
    constraints
        .set_constraint_box(Some(mapcore::ProjectedRect::from_corners(
            ProjectedPoint::new(-4_000_000.0, -3_000_000.0),
            ProjectedPoint::new(4_000_000.0, 3_000_000.0),
        )))
        .unwrap();
    let size = ScreenSize::new(800.0, 600.0);

    for zoom in [-3.0, 0.0, 2.0, 9.9, 16.0, 30.0] {
        let once = constraints.clamp_zoom(zoom, size);
        assert_eq!(constraints.clamp_zoom(once, size), once);
    }

    for point in [
        ProjectedPoint::new(0.0, 0.0),
        ProjectedPoint::new(1e8, -1e8),
        ProjectedPoint::new(-3_999_999.0, 2_999_999.0),
    ] {
        let once = constraints.clamp_center(point, 10.0, size);
        assert_eq!(constraints.clamp_center(once, 10.0, size), once);
    }
}

#[test]
fn min_width_bound_shifts_one_level_per_width_doubling() {
    let mut constraints = MapConstraints::new(0.0, 18.0);
    constraints.set_bounding_mask(BoundingMask::MinWidth);

    let base = ScreenSize::new(2.0 * TILE_SIZE as f64, 600.0);
    let doubled = ScreenSize::new(4.0 * TILE_SIZE as f64, 600.0);

    let base_min = constraints.effective_min_zoom(base);
    let doubled_min = constraints.effective_min_zoom(doubled);

    assert_relative_eq!((doubled_min - base_min).abs(), 1.0, epsilon = 1e-12);
}

#[test]
fn meters_per_pixel_halves_every_zoom_level() {
    let mut viewport = Viewport::default();
    for zoom in 0..18 {
        viewport.set_zoom(zoom as f64);
        let coarse = viewport.meters_per_pixel();
        viewport.set_zoom(zoom as f64 + 1.0);
        assert_relative_eq!(viewport.meters_per_pixel() * 2.0, coarse, max_relative = 1e-12);
    }

    viewport.set_zoom(0.0);
    assert_relative_eq!(viewport.meters_per_pixel(), METERS_PER_PIXEL_AT_ZOOM_ZERO);
}
