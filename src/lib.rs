//! # mapcore
//!
//! The coordinate-projection and tile-addressing core of an embeddable,
//! interactive map view.
//!
//! This crate owns the math a slippy-map widget is built on: conversions
//! between geographic coordinates, projected meters, screen pixels, and
//! discrete tile addresses, plus the clamping rules that keep every pan and
//! zoom in a valid, renderable state. Rendering, gestures, tile fetching, and
//! caching are collaborators that consume this core's outputs; none of them
//! live here, and nothing here blocks, suspends, or performs I/O.

pub mod animation;
pub mod core;
pub mod data;
pub mod events;
pub mod prelude;
pub mod tiles;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    constraints::{BoundingMask, MapConstraints},
    geo::{LatLng, LatLngBounds},
    map::{Map, MapOptions},
    projection::{ProjectedPoint, ProjectedRect, ProjectedSize, Projection, SphericalMercator},
    tiling::TileCoord,
    viewport::{ScreenPoint, ScreenSize, Viewport},
};

pub use crate::animation::CameraTransition;
pub use crate::events::{HandlerId, MapEvent};
pub use crate::tiles::{OpenStreetMapSource, TileSource, TileSourcesContainer};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("tile source error: {0}")]
    TileSource(String),
}

/// Error type alias for convenience
pub type Error = MapError;
