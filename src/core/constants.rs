//! Core constants shared by the projection, tiling, and viewport math.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use std::f64::consts::PI;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// WGS84 equatorial radius in meters (the sphere used by Web Mercator).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude at which the square Web Mercator world is cut off.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Half the width of the projected world, in meters (x and y both span
/// `[-HALF_WORLD_METERS, HALF_WORLD_METERS]`).
pub const HALF_WORLD_METERS: f64 = PI * EARTH_RADIUS;

/// Full width of the projected world in meters.
pub const WORLD_SIZE_METERS: f64 = 2.0 * HALF_WORLD_METERS;

/// Ground resolution of a single pixel at zoom 0, at the equator.
pub const METERS_PER_PIXEL_AT_ZOOM_ZERO: f64 = WORLD_SIZE_METERS / TILE_SIZE as f64;

/// Default zoom range when neither the caller nor the tile sources narrow it.
pub const DEFAULT_MIN_ZOOM: f64 = 0.0;
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Snap zoom levels to these quanta (1 → integer zooms).
pub const DEFAULT_ZOOM_SNAP: f64 = 1.0;

/// Programmatic +/- zoom step used by the native zoom helpers.
pub const DEFAULT_ZOOM_DELTA: f64 = 1.0;

/// Standardized rendering pixel size (0.28 mm, per WMS) used to express a
/// cartographic scale denominator like 1:24000.
pub const WMS_PIXEL_SIZE_METERS: f64 = 0.000_28;
