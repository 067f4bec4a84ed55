//! The map facade: owns the viewport, routes every mutation through the
//! constraint engine, and notifies observers after each committed change.
//!
//! All methods are synchronous and none perform I/O. The owning GUI layer is
//! responsible for serializing mutating calls onto one logical thread; pure
//! conversions take `&self` and may be called concurrently between mutations.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animation::CameraTransition;
use crate::core::constants::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_DELTA, DEFAULT_ZOOM_SNAP,
    METERS_PER_PIXEL_AT_ZOOM_ZERO, WMS_PIXEL_SIZE_METERS,
};
use crate::core::constraints::{BoundingMask, MapConstraints};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::projection::{
    ProjectedPoint, ProjectedRect, ProjectedSize, Projection, SphericalMercator,
};
use crate::core::tiling::TileCoord;
use crate::core::viewport::{ScreenPoint, ScreenSize, Viewport};
use crate::events::{EventManager, HandlerId, MapEvent};
use crate::tiles::{TileSource, TileSourcesContainer};
use crate::{MapError, Result};

/// Behavior options fixed at construction time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Requested zoom limits; clamped to the tile sources' supported range
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    /// Geographic box the view may never leave
    pub max_bounds: Option<LatLngBounds>,
    /// How the minimum zoom-out follows the view size
    pub bounding_mask: BoundingMask,
    /// Quantum the native zoom helpers snap to (1 → integer zooms)
    pub zoom_snap: f64,
    /// Step used by `zoom_in`/`zoom_out`
    pub zoom_delta: f64,
    /// Zoom gestures always pivot on the view center instead of the gesture
    /// location
    pub zooming_pivots_around_center: bool,
    /// Draw tiles from one zoom level deeper to compensate for high-density
    /// screens showing standard tiles too small
    pub adjust_tiles_for_retina_display: bool,
    /// Display density of the hosting screen (2.0 on a typical retina display)
    pub screen_scale: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            min_zoom: None,
            max_zoom: None,
            max_bounds: None,
            bounding_mask: BoundingMask::default(),
            zoom_snap: DEFAULT_ZOOM_SNAP,
            zoom_delta: DEFAULT_ZOOM_DELTA,
            zooming_pivots_around_center: false,
            adjust_tiles_for_retina_display: false,
            screen_scale: 1.0,
        }
    }
}

/// An embeddable map view core: projection, tile addressing, viewport state,
/// and the constraint engine behind one mutation API.
pub struct Map {
    viewport: Viewport,
    constraints: MapConstraints,
    projection: Box<dyn Projection>,
    tile_sources: TileSourcesContainer,
    events: EventManager,
    options: MapOptions,
}

impl Map {
    /// Creates a map with default options, centered on `center` at `zoom`
    pub fn new(center: LatLng, zoom: f64, size: ScreenSize) -> Self {
        let mut map = Self::unclamped(center, zoom, size);
        map.recommit();
        map
    }

    /// Builds the map without establishing the constraint invariant yet
    fn unclamped(center: LatLng, zoom: f64, size: ScreenSize) -> Self {
        let mut map = Self {
            viewport: Viewport::new(ProjectedPoint::default(), zoom, size),
            constraints: MapConstraints::default(),
            projection: Box::new(SphericalMercator),
            tile_sources: TileSourcesContainer::new(),
            events: EventManager::new(),
            options: MapOptions::default(),
        };

        let projected = map.projection.project(&center.normalize());
        map.viewport.set_center(projected);
        map
    }

    /// Creates a map with explicit options.
    ///
    /// Fails on non-finite center coordinates and on a malformed `max_bounds`
    /// box; everything else is clamped into validity.
    pub fn with_options(
        center: LatLng,
        zoom: f64,
        size: ScreenSize,
        options: MapOptions,
    ) -> Result<Self> {
        if !center.lat.is_finite() || !center.lng.is_finite() {
            return Err(MapError::InvalidCoordinates(format!(
                "non-finite center ({}, {})",
                center.lat, center.lng
            )));
        }

        let mut map = Self::unclamped(center, zoom, size);
        let mut constraints = MapConstraints::new(
            options.min_zoom.unwrap_or(DEFAULT_MIN_ZOOM),
            options.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM),
        );
        constraints.set_bounding_mask(options.bounding_mask);
        map.constraints = constraints;
        map.viewport.set_screen_scale(options.screen_scale);

        if let Some(bounds) = options.max_bounds.clone() {
            map.set_constraints(bounds.south_west, bounds.north_east)?;
        }

        map.options = options;
        map.recommit();
        Ok(map)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn projection(&self) -> &dyn Projection {
        self.projection.as_ref()
    }

    pub fn constraints(&self) -> &MapConstraints {
        &self.constraints
    }

    // ---- movement -------------------------------------------------------

    pub fn center_coordinate(&self) -> LatLng {
        self.projection.unproject(&self.viewport.center())
    }

    pub fn center_projected(&self) -> ProjectedPoint {
        self.viewport.center()
    }

    /// Recenters the map on a geographic coordinate
    pub fn set_center_coordinate(
        &mut self,
        coordinate: LatLng,
        animated: bool,
    ) -> Option<CameraTransition> {
        let projected = self.projection.project(&coordinate.normalize());
        self.mutate(projected, self.viewport.zoom(), animated)
    }

    /// Recenters the map on a projected point
    pub fn set_center_projected(
        &mut self,
        point: ProjectedPoint,
        animated: bool,
    ) -> Option<CameraTransition> {
        self.mutate(point, self.viewport.zoom(), animated)
    }

    /// Moves the center by a screen-space delta. A positive x pans the view
    /// eastward, a positive y southward.
    pub fn move_by(&mut self, delta: ScreenPoint) {
        let mpp = self.viewport.meters_per_pixel();
        let center = self.viewport.center();
        let candidate =
            ProjectedPoint::new(center.x + delta.x * mpp, center.y - delta.y * mpp);
        self.mutate(candidate, self.viewport.zoom(), false);
    }

    // ---- zoom -----------------------------------------------------------

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn min_zoom(&self) -> f64 {
        self.constraints.min_zoom()
    }

    pub fn max_zoom(&self) -> f64 {
        self.constraints.max_zoom()
    }

    /// Narrows the minimum zoom; the value is clamped to the tile sources'
    /// supported range
    pub fn set_min_zoom(&mut self, min_zoom: f64) {
        let (source_min, source_max) = self.tile_sources.zoom_range();
        let clamped = min_zoom.clamp(source_min as f64, source_max as f64);
        self.constraints
            .set_zoom_range(clamped, self.constraints.max_zoom());
        self.recommit();
    }

    /// Narrows the maximum zoom; the value is clamped to the tile sources'
    /// supported range
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        let (source_min, source_max) = self.tile_sources.zoom_range();
        let clamped = max_zoom.clamp(source_min as f64, source_max as f64);
        self.constraints
            .set_zoom_range(self.constraints.min_zoom().min(clamped), clamped);
        self.recommit();
    }

    /// Zooms about the view center
    pub fn set_zoom(&mut self, zoom: f64, animated: bool) -> Option<CameraTransition> {
        self.mutate(self.viewport.center(), zoom, animated)
    }

    /// Steps the zoom in by the configured delta, about the view center
    pub fn zoom_in(&mut self, animated: bool) -> Option<CameraTransition> {
        self.set_zoom(self.viewport.zoom() + self.options.zoom_delta, animated)
    }

    /// Steps the zoom out by the configured delta, about the view center
    pub fn zoom_out(&mut self, animated: bool) -> Option<CameraTransition> {
        self.set_zoom(self.viewport.zoom() - self.options.zoom_delta, animated)
    }

    /// Zooms to an absolute level, keeping the projected point under
    /// `focus_point` fixed on screen; `None` pivots on the view center
    pub fn zoom_to(
        &mut self,
        zoom: f64,
        focus_point: Option<ScreenPoint>,
        animated: bool,
    ) -> Option<CameraTransition> {
        match focus_point {
            Some(pivot) => self.zoom_about(pivot, zoom, animated),
            None => self.set_zoom(zoom, animated),
        }
    }

    /// Zooms the map by a factor near a pivot point. A factor of 2 is one
    /// zoom level in, 0.5 one level out.
    pub fn zoom_by_factor(
        &mut self,
        factor: f64,
        pivot: ScreenPoint,
        animated: bool,
    ) -> Option<CameraTransition> {
        if factor <= 0.0 || !factor.is_finite() {
            debug!("ignoring zoom by non-positive factor {factor}");
            return None;
        }
        self.zoom_about(pivot, self.viewport.zoom() + factor.log2(), animated)
    }

    /// The next snap-aligned zoom level above the current one
    pub fn next_native_zoom(&self) -> f64 {
        let snap = self.zoom_snap();
        ((self.viewport.zoom() / snap).floor() + 1.0) * snap
    }

    /// The next snap-aligned zoom level below the current one
    pub fn previous_native_zoom(&self) -> f64 {
        let snap = self.zoom_snap();
        ((self.viewport.zoom() / snap).ceil() - 1.0) * snap
    }

    /// The factor `zoom_by_factor` would need to reach the next native zoom
    pub fn next_native_zoom_factor(&self) -> f64 {
        2f64.powf(self.next_native_zoom() - self.viewport.zoom())
    }

    /// The factor `zoom_by_factor` would need to reach the previous native zoom
    pub fn previous_native_zoom_factor(&self) -> f64 {
        2f64.powf(self.previous_native_zoom() - self.viewport.zoom())
    }

    /// Zooms in to the next integral (snap-aligned) zoom level near `pivot`
    pub fn zoom_in_to_next_native(
        &mut self,
        pivot: ScreenPoint,
        animated: bool,
    ) -> Option<CameraTransition> {
        self.zoom_about(pivot, self.next_native_zoom(), animated)
    }

    /// Zooms out to the previous integral (snap-aligned) zoom level near `pivot`
    pub fn zoom_out_to_next_native(
        &mut self,
        pivot: ScreenPoint,
        animated: bool,
    ) -> Option<CameraTransition> {
        self.zoom_about(pivot, self.previous_native_zoom(), animated)
    }

    // ---- resolution -----------------------------------------------------

    pub fn meters_per_pixel(&self) -> f64 {
        self.viewport.meters_per_pixel()
    }

    pub fn scaled_meters_per_pixel(&self) -> f64 {
        self.viewport.scaled_meters_per_pixel()
    }

    /// Sets the zoom indirectly through a ground resolution
    pub fn set_meters_per_pixel(
        &mut self,
        meters_per_pixel: f64,
        animated: bool,
    ) -> Option<CameraTransition> {
        if meters_per_pixel <= 0.0 || !meters_per_pixel.is_finite() {
            debug!("ignoring non-positive meters per pixel {meters_per_pixel}");
            return None;
        }
        let zoom = (METERS_PER_PIXEL_AT_ZOOM_ZERO / meters_per_pixel).log2();
        self.set_zoom(zoom, animated)
    }

    /// The denominator of the cartographic scale, like the 24000 in 1:24000,
    /// using the standardized 0.28 mm rendering pixel
    pub fn scale_denominator(&self) -> f64 {
        self.viewport.meters_per_pixel() / WMS_PIXEL_SIZE_METERS
    }

    pub fn screen_scale(&self) -> f64 {
        self.viewport.screen_scale()
    }

    pub fn set_screen_scale(&mut self, screen_scale: f64) {
        self.viewport.set_screen_scale(screen_scale);
    }

    /// The zoom the tiled layer should request tiles at, accounting for the
    /// retina adjustment
    pub fn adjusted_zoom_for_retina_display(&self) -> f64 {
        if self.options.adjust_tiles_for_retina_display {
            self.viewport.zoom() + self.viewport.screen_scale().log2()
        } else {
            self.viewport.zoom()
        }
    }

    // ---- bounds ---------------------------------------------------------

    pub fn projected_bounds(&self) -> ProjectedRect {
        self.viewport.projected_bounds()
    }

    /// Recenters and rezooms so the given projected rectangle is entirely
    /// visible at the deepest zoom that fits
    pub fn set_projected_bounds(
        &mut self,
        rect: ProjectedRect,
        animated: bool,
    ) -> Result<Option<CameraTransition>> {
        let (center, zoom) = self.viewport.fit_rect(&rect)?;
        Ok(self.mutate(center, zoom, animated))
    }

    /// Zooms the map to a geographic bounds box (fitBounds)
    pub fn zoom_with_bounds(
        &mut self,
        south_west: LatLng,
        north_east: LatLng,
        animated: bool,
    ) -> Result<Option<CameraTransition>> {
        let bounds = LatLngBounds::new(south_west, north_east);
        if !bounds.is_valid() {
            return Err(MapError::InvalidBounds(format!(
                "({}, {}) is not south-west of ({}, {})",
                south_west.lat, south_west.lng, north_east.lat, north_east.lng
            )));
        }

        let rect = ProjectedRect::from_corners(
            self.projection.project(&south_west),
            self.projection.project(&north_east),
        );
        self.set_projected_bounds(rect, animated)
    }

    /// The smallest geographic bounding box containing the entire view
    pub fn latitude_longitude_bounding_box(&self) -> LatLngBounds {
        self.geo_bounds_of(self.viewport.projected_bounds())
    }

    /// The smallest geographic bounding box containing a rectangular region
    /// of the view
    pub fn bounding_box_for_rect(&self, origin: ScreenPoint, size: ScreenSize) -> LatLngBounds {
        let bottom_left = self
            .viewport
            .screen_to_projected(ScreenPoint::new(origin.x, origin.y + size.height));
        let top_right = self
            .viewport
            .screen_to_projected(ScreenPoint::new(origin.x + size.width, origin.y));

        LatLngBounds::new(
            self.projection.unproject(&bottom_left),
            self.projection.unproject(&top_right),
        )
    }

    // ---- constraints ----------------------------------------------------

    /// Constrains panning and zooming to a geographic boundary
    pub fn set_constraints(&mut self, south_west: LatLng, north_east: LatLng) -> Result<()> {
        let bounds = LatLngBounds::new(south_west, north_east);
        if !bounds.is_valid() {
            return Err(MapError::InvalidBounds(format!(
                "constraint corner ({}, {}) is not south-west of ({}, {})",
                south_west.lat, south_west.lng, north_east.lat, north_east.lng
            )));
        }

        let rect = ProjectedRect::from_corners(
            self.projection.project(&south_west),
            self.projection.project(&north_east),
        );
        self.constraints.set_constraint_box(Some(rect))?;
        self.recommit();
        Ok(())
    }

    /// Constrains panning and zooming to a projected boundary
    pub fn set_projected_constraints(
        &mut self,
        south_west: ProjectedPoint,
        north_east: ProjectedPoint,
    ) -> Result<()> {
        if south_west.x >= north_east.x || south_west.y >= north_east.y {
            return Err(MapError::InvalidBounds(format!(
                "projected constraint corner ({}, {}) is not south-west of ({}, {})",
                south_west.x, south_west.y, north_east.x, north_east.y
            )));
        }

        self.constraints
            .set_constraint_box(Some(ProjectedRect::from_corners(south_west, north_east)))?;
        self.recommit();
        Ok(())
    }

    /// Removes the constraint box
    pub fn clear_constraints(&mut self) {
        self.constraints.clear_constraint_box();
        self.recommit();
    }

    pub fn bounding_mask(&self) -> BoundingMask {
        self.constraints.bounding_mask()
    }

    pub fn set_bounding_mask(&mut self, mask: BoundingMask) {
        self.constraints.set_bounding_mask(mask);
        self.recommit();
    }

    // ---- size -----------------------------------------------------------

    /// Resizes the view, re-deriving the effective minimum zoom and
    /// re-clamping the viewport
    pub fn set_size(&mut self, size: ScreenSize) {
        if size == self.viewport.size() {
            return;
        }
        self.viewport.set_size(size);
        let event = MapEvent::SizeChanged { size };
        self.events.emit(&event);

        if !self.recommit() {
            // Center and zoom survived the re-clamp, but the visible extent
            // still changed with the size.
            let event = MapEvent::BoundsChanged {
                bounds: self.viewport.projected_bounds(),
            };
            self.events.emit(&event);
        }
    }

    // ---- conversions ----------------------------------------------------

    pub fn coordinate_to_projected(&self, coordinate: &LatLng) -> ProjectedPoint {
        self.projection.project(coordinate)
    }

    pub fn projected_to_coordinate(&self, point: &ProjectedPoint) -> LatLng {
        self.projection.unproject(point)
    }

    pub fn coordinate_to_pixel(&self, coordinate: &LatLng) -> ScreenPoint {
        self.viewport
            .projected_to_screen(self.projection.project(coordinate))
    }

    pub fn pixel_to_coordinate(&self, pixel: ScreenPoint) -> LatLng {
        self.projection
            .unproject(&self.viewport.screen_to_projected(pixel))
    }

    pub fn projected_to_pixel(&self, point: ProjectedPoint) -> ScreenPoint {
        self.viewport.projected_to_screen(point)
    }

    pub fn pixel_to_projected(&self, pixel: ScreenPoint) -> ProjectedPoint {
        self.viewport.screen_to_projected(pixel)
    }

    pub fn view_size_to_projected_size(&self, size: ScreenSize) -> ProjectedSize {
        self.viewport.view_size_to_projected(size)
    }

    pub fn projected_size_to_view_size(&self, size: ProjectedSize) -> ScreenSize {
        self.viewport.projected_size_to_view(size)
    }

    pub fn normalize_coordinate(&self, coordinate: LatLng) -> LatLng {
        coordinate.normalize()
    }

    /// The tile containing a geographic coordinate at the given zoom
    pub fn tile_with_coordinate(&self, coordinate: &LatLng, zoom: u8) -> TileCoord {
        TileCoord::for_projected(self.projection.project(coordinate), zoom)
    }

    /// The geographic bounding box of a tile
    pub fn geo_bounds_for_tile(&self, tile: TileCoord) -> LatLngBounds {
        tile.geo_bounds(self.projection.as_ref())
    }

    // ---- tile sources ---------------------------------------------------

    pub fn tile_sources(&self) -> &TileSourcesContainer {
        &self.tile_sources
    }

    /// Adds a tile source above the current ones and narrows the zoom range
    /// to what all sources support
    pub fn add_tile_source(&mut self, source: Box<dyn TileSource>) {
        self.tile_sources.add(source);
        self.apply_tile_source_limits();
    }

    /// Adds a tile source at a given index; zero puts it below all others
    pub fn insert_tile_source(&mut self, index: usize, source: Box<dyn TileSource>) -> Result<()> {
        self.tile_sources.insert(index, source)?;
        self.apply_tile_source_limits();
        Ok(())
    }

    /// Removes and returns the tile source at the given index
    pub fn remove_tile_source(&mut self, index: usize) -> Result<Box<dyn TileSource>> {
        let source = self.tile_sources.remove(index)?;
        self.apply_tile_source_limits();
        Ok(source)
    }

    /// Moves a tile source between compositing positions
    pub fn move_tile_source(&mut self, from: usize, to: usize) -> Result<()> {
        self.tile_sources.move_source(from, to)
    }

    /// Hides or shows a tile source without removing it
    pub fn set_tile_source_hidden(&mut self, index: usize, hidden: bool) -> Result<()> {
        self.tile_sources.set_hidden(index, hidden)
    }

    /// Whether any visible tile source can supply imagery at the projected
    /// point
    pub fn tile_source_bounds_contain(&self, point: &ProjectedPoint) -> bool {
        self.tile_sources
            .coverage_contains(&self.projection.unproject(point))
    }

    /// The integral zoom the tiled layer should load at: the current zoom
    /// with the retina adjustment applied, rounded, clamped to the sources'
    /// supported range
    pub fn tile_zoom(&self) -> u8 {
        let (source_min, source_max) = self.tile_sources.zoom_range();
        self.adjusted_zoom_for_retina_display()
            .round()
            .clamp(source_min as f64, source_max as f64) as u8
    }

    /// The tile addresses covering the current view at `tile_zoom()`,
    /// row-major from the north-west corner. This is what the out-of-scope
    /// tiled layer and cache consume.
    pub fn visible_tiles(&self) -> Vec<TileCoord> {
        let zoom = self.tile_zoom();
        let bounds = self.viewport.projected_bounds();
        let first =
            TileCoord::for_projected(ProjectedPoint::new(bounds.min_x(), bounds.max_y()), zoom);
        let last =
            TileCoord::for_projected(ProjectedPoint::new(bounds.max_x(), bounds.min_y()), zoom);

        let columns = (last.x - first.x + 1) as usize;
        let rows = (last.y - first.y + 1) as usize;
        let mut tiles = Vec::with_capacity(columns * rows);
        for y in first.y..=last.y {
            for x in first.x..=last.x {
                tiles.push(TileCoord::new(x, y, zoom));
            }
        }
        tiles
    }

    // ---- events ---------------------------------------------------------

    /// Registers a change handler invoked synchronously after each committed
    /// mutation
    pub fn on_event<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&MapEvent) + Send + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Removes a previously registered handler
    pub fn off_event(&mut self, id: HandlerId) -> bool {
        self.events.unsubscribe(id)
    }

    // ---- internals ------------------------------------------------------

    fn zoom_snap(&self) -> f64 {
        if self.options.zoom_snap > 0.0 {
            self.options.zoom_snap
        } else {
            DEFAULT_ZOOM_SNAP
        }
    }

    /// Pivot-zoom helper honoring the pivots-around-center option
    fn zoom_about(
        &mut self,
        pivot: ScreenPoint,
        target: f64,
        animated: bool,
    ) -> Option<CameraTransition> {
        let size = self.viewport.size();
        let pivot = if self.options.zooming_pivots_around_center {
            ScreenPoint::new(size.width / 2.0, size.height / 2.0)
        } else {
            pivot
        };

        let zoom = self.constraints.clamp_zoom(target, size);
        let center = self.viewport.center_for_zoom_around(pivot, zoom);
        self.mutate(center, zoom, animated)
    }

    /// Routes a candidate state through the constraint engine, commits it if
    /// anything changed, and notifies observers. Returns the transition
    /// endpoints when the caller asked for an animated change.
    fn mutate(
        &mut self,
        center: ProjectedPoint,
        zoom: f64,
        animated: bool,
    ) -> Option<CameraTransition> {
        let transition = self.commit(center, zoom)?;
        animated.then_some(transition)
    }

    /// Clamps and applies a candidate state; `Some` when the viewport changed.
    ///
    /// Sub-micrometer center moves and sub-1e-9 zoom deltas count as no-ops,
    /// so converting a state out and back through geographic coordinates does
    /// not ripple change notifications.
    fn commit(&mut self, center: ProjectedPoint, zoom: f64) -> Option<CameraTransition> {
        const CENTER_EPSILON_METERS: f64 = 1e-6;
        const ZOOM_EPSILON: f64 = 1e-9;

        let size = self.viewport.size();
        let old_center = self.viewport.center();
        let old_zoom = self.viewport.zoom();

        let zoom = self.constraints.clamp_zoom(zoom, size);
        let mut center = self.constraints.clamp_center(center, zoom, size);

        let center_changed = center.distance_to(&old_center) > CENTER_EPSILON_METERS;
        let zoom_changed = (zoom - old_zoom).abs() > ZOOM_EPSILON;
        if !center_changed && !zoom_changed {
            return None;
        }
        if !center_changed {
            center = old_center;
        }
        let zoom = if zoom_changed { zoom } else { old_zoom };

        self.viewport.set_zoom(zoom);
        self.viewport.set_center(center);

        let mut pending = Vec::with_capacity(3);
        if center_changed {
            pending.push(MapEvent::CenterChanged {
                coordinate: self.projection.unproject(&center),
                projected: center,
            });
        }
        if zoom_changed {
            pending.push(MapEvent::ZoomChanged { zoom });
        }
        pending.push(MapEvent::BoundsChanged {
            bounds: self.viewport.projected_bounds(),
        });
        for event in &pending {
            self.events.emit(event);
        }

        Some(CameraTransition::new(old_center, center, old_zoom, zoom))
    }

    /// Re-clamps the current state after a constraint change; true when the
    /// viewport moved
    fn recommit(&mut self) -> bool {
        self.commit(self.viewport.center(), self.viewport.zoom())
            .is_some()
    }

    fn apply_tile_source_limits(&mut self) {
        let (source_min, source_max) = self.tile_sources.zoom_range();
        let min = self
            .constraints
            .min_zoom()
            .clamp(source_min as f64, source_max as f64);
        let max = self
            .constraints
            .max_zoom()
            .clamp(source_min as f64, source_max as f64);
        self.constraints.set_zoom_range(min, max);
        self.recommit();
    }

    fn geo_bounds_of(&self, rect: ProjectedRect) -> LatLngBounds {
        LatLngBounds::new(
            self.projection.unproject(&rect.origin),
            self.projection
                .unproject(&ProjectedPoint::new(rect.max_x(), rect.max_y())),
        )
    }
}
