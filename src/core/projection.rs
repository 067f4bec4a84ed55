//! Geographic projection between latitude/longitude and planar meters.
//!
//! The projected plane is the map's internal working coordinate space: x grows
//! eastward, y grows northward, both in meters. `SphericalMercator` (EPSG:3857)
//! is the default implementation; the `Projection` trait is the seam for
//! swapping in a different cylindrical projection.

use serde::{Deserialize, Serialize};

use crate::core::constants::{EARTH_RADIUS, HALF_WORLD_METERS, MAX_LATITUDE, WORLD_SIZE_METERS};
use crate::core::geo::{LatLng, LatLngBounds};

/// A point on the projected plane, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &ProjectedPoint) -> ProjectedPoint {
        ProjectedPoint::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &ProjectedPoint) -> ProjectedPoint {
        ProjectedPoint::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &ProjectedPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for ProjectedPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Extent on the projected plane, in meters. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSize {
    pub width: f64,
    pub height: f64,
}

impl ProjectedSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// An axis-aligned rectangle on the projected plane. The origin is the
/// minimum (south-west) corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRect {
    pub origin: ProjectedPoint,
    pub size: ProjectedSize,
}

impl ProjectedRect {
    pub fn new(origin: ProjectedPoint, size: ProjectedSize) -> Self {
        Self { origin, size }
    }

    /// Builds the rectangle spanned by two arbitrary corner points
    pub fn from_corners(a: ProjectedPoint, b: ProjectedPoint) -> Self {
        let origin = ProjectedPoint::new(a.x.min(b.x), a.y.min(b.y));
        let size = ProjectedSize::new((a.x - b.x).abs(), (a.y - b.y).abs());
        Self { origin, size }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> ProjectedPoint {
        ProjectedPoint::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Checks if the rectangle contains a point, edges included
    pub fn contains(&self, point: &ProjectedPoint) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    pub fn intersects(&self, other: &ProjectedRect) -> bool {
        !(other.max_x() < self.min_x()
            || other.min_x() > self.max_x()
            || other.max_y() < self.min_y()
            || other.min_y() > self.max_y())
    }
}

/// Forward/inverse projection between geographic coordinates and planar meters.
///
/// Implementations are pure: inputs outside the valid domain are clamped, never
/// rejected, and outputs are always finite.
pub trait Projection: Send + Sync {
    /// Projects a geographic coordinate onto the plane. Latitude is clamped to
    /// `max_latitude()` and longitude to [-180, 180] before any transcendental
    /// math, so the result is always inside `valid_extent()`.
    fn project(&self, coord: &LatLng) -> ProjectedPoint;

    /// Inverse of `project`. Points outside `valid_extent()` are clamped onto
    /// it first.
    fn unproject(&self, point: &ProjectedPoint) -> LatLng;

    /// The full projected extent of the world under this projection.
    fn valid_extent(&self) -> ProjectedRect;

    /// The largest latitude the projection can represent.
    fn max_latitude(&self) -> f64;
}

/// Spherical (Web) Mercator, EPSG:3857. The projection used by OpenStreetMap
/// and virtually every slippy tile source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphericalMercator;

impl Projection for SphericalMercator {
    fn project(&self, coord: &LatLng) -> ProjectedPoint {
        let lat = LatLng::clamp_lat(coord.lat);
        let lng = coord.lng.clamp(-180.0, 180.0);

        let x = lng.to_radians() * EARTH_RADIUS;
        let y = lat.to_radians().tan().asinh() * EARTH_RADIUS;

        ProjectedPoint::new(x, y)
    }

    fn unproject(&self, point: &ProjectedPoint) -> LatLng {
        let x = point.x.clamp(-HALF_WORLD_METERS, HALF_WORLD_METERS);
        let y = point.y.clamp(-HALF_WORLD_METERS, HALF_WORLD_METERS);

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (y / EARTH_RADIUS).sinh().atan().to_degrees();

        LatLng::new(lat, lng)
    }

    fn valid_extent(&self) -> ProjectedRect {
        ProjectedRect::new(
            ProjectedPoint::new(-HALF_WORLD_METERS, -HALF_WORLD_METERS),
            ProjectedSize::new(WORLD_SIZE_METERS, WORLD_SIZE_METERS),
        )
    }

    fn max_latitude(&self) -> f64 {
        MAX_LATITUDE
    }
}

impl SphericalMercator {
    /// Geographic bounds corresponding to the full projected extent
    pub fn world_geo_bounds(&self) -> LatLngBounds {
        LatLngBounds::from_coords(-MAX_LATITUDE, -180.0, MAX_LATITUDE, 180.0)
    }
}
