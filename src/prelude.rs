//! Prelude module for common mapcore types
//!
//! Re-exports the most commonly used types for easy importing with
//! `use mapcore::prelude::*;`

pub use crate::animation::{CameraTransition, EasingType};
pub use crate::core::{
    builder::MapBuilder,
    constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, MAX_LATITUDE, TILE_SIZE},
    constraints::{BoundingMask, MapConstraints},
    geo::{LatLng, LatLngBounds},
    map::{Map, MapOptions},
    projection::{ProjectedPoint, ProjectedRect, ProjectedSize, Projection, SphericalMercator},
    tiling::TileCoord,
    viewport::{ScreenPoint, ScreenSize, Viewport},
};
pub use crate::events::{HandlerId, MapEvent};
pub use crate::tiles::{OpenStreetMapSource, TileSource, TileSourcesContainer};
pub use crate::{Error as MapError, Result};
