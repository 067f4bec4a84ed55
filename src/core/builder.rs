//! Map builder for fluent API configuration

use crate::core::constraints::BoundingMask;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::map::{Map, MapOptions};
use crate::core::viewport::ScreenSize;
use crate::tiles::TileSource;
use crate::Result;

/// Builder for creating and configuring Map instances
pub struct MapBuilder {
    center: LatLng,
    zoom: f64,
    size: ScreenSize,
    options: MapOptions,
    tile_sources: Vec<Box<dyn TileSource>>,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self {
            center: LatLng::default(),
            zoom: 0.0,
            size: ScreenSize::new(800.0, 600.0),
            options: MapOptions::default(),
            tile_sources: Vec::new(),
        }
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Set the view size in logical pixels
    pub fn with_size(mut self, size: ScreenSize) -> Self {
        self.size = size;
        self
    }

    /// Set the requested zoom limits
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.options.min_zoom = Some(min_zoom);
        self.options.max_zoom = Some(max_zoom);
        self
    }

    /// Constrain the view to a geographic boundary
    pub fn with_max_bounds(mut self, bounds: LatLngBounds) -> Self {
        self.options.max_bounds = Some(bounds);
        self
    }

    /// Select how minimum zoom-out follows the view size
    pub fn with_bounding_mask(mut self, mask: BoundingMask) -> Self {
        self.options.bounding_mask = mask;
        self
    }

    /// Set the display density of the hosting screen
    pub fn with_screen_scale(mut self, screen_scale: f64) -> Self {
        self.options.screen_scale = screen_scale;
        self
    }

    /// Enable drawing tiles one zoom level deeper on high-density screens
    pub fn with_retina_tile_adjustment(mut self, enabled: bool) -> Self {
        self.options.adjust_tiles_for_retina_display = enabled;
        self
    }

    /// Make zoom gestures always pivot on the view center
    pub fn with_zooming_pivots_around_center(mut self, enabled: bool) -> Self {
        self.options.zooming_pivots_around_center = enabled;
        self
    }

    /// Replace the whole options block
    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a tile source above any previously added ones
    pub fn with_tile_source(mut self, source: Box<dyn TileSource>) -> Self {
        self.tile_sources.push(source);
        self
    }

    /// Build the configured Map
    pub fn build(self) -> Result<Map> {
        let mut map = Map::with_options(self.center, self.zoom, self.size, self.options)?;
        for source in self.tile_sources {
            map.add_tile_source(source);
        }
        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
