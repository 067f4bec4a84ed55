//! The projection, tiling, viewport, and constraint components, plus the map
//! facade composing them.

pub mod builder;
pub mod constants;
pub mod constraints;
pub mod geo;
pub mod map;
pub mod projection;
pub mod tiling;
pub mod viewport;
