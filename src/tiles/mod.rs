//! Tile source metadata and the multi-source container.

pub mod container;
pub mod source;

pub use container::TileSourcesContainer;
pub use source::{OpenStreetMapSource, TileSource};
