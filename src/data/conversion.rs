//! Conversions between the core's geographic types and the `geo-types`
//! ecosystem types, so callers can hand results straight to the wider Rust
//! geo stack. `geo-types` keeps coordinates as (x, y) = (lng, lat).

use geo_types::{Coord, Point, Rect};

use crate::core::geo::{LatLng, LatLngBounds};

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        LatLng::new(point.y(), point.x())
    }
}

impl From<LatLng> for Point<f64> {
    fn from(coord: LatLng) -> Self {
        Point::new(coord.lng, coord.lat)
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        LatLng::new(coord.y, coord.x)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(coord: LatLng) -> Self {
        Coord {
            x: coord.lng,
            y: coord.lat,
        }
    }
}

impl From<Rect<f64>> for LatLngBounds {
    fn from(rect: Rect<f64>) -> Self {
        LatLngBounds::new(rect.min().into(), rect.max().into())
    }
}

impl From<LatLngBounds> for Rect<f64> {
    fn from(bounds: LatLngBounds) -> Self {
        Rect::new(
            Coord::from(bounds.south_west),
            Coord::from(bounds.north_east),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trip() {
        let coord = LatLng::new(40.7128, -74.0060);
        let point: Point<f64> = coord.into();

        assert_eq!(point.x(), -74.0060);
        assert_eq!(point.y(), 40.7128);
        assert_eq!(LatLng::from(point), coord);
    }

    #[test]
    fn test_bounds_round_trip() {
        let bounds = LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0);
        let rect: Rect<f64> = bounds.clone().into();

        assert_eq!(rect.min().y, 40.0);
        assert_eq!(rect.max().x, -73.0);
        assert_eq!(LatLngBounds::from(rect), bounds);
    }
}
