//! Viewport state: the live projected center, zoom, and screen size, plus the
//! conversions between screen pixels and projected meters.
//!
//! Screen coordinates are logical pixels with the origin at the view's
//! top-left and y growing downward; projected y grows northward, so every
//! vertical conversion flips sign. `screen_scale` describes display density
//! (2.0 on a typical retina screen) and only affects the density-adjusted
//! readouts; the transform itself works in logical pixels.

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_MAX_ZOOM, METERS_PER_PIXEL_AT_ZOOM_ZERO};
use crate::core::projection::{ProjectedPoint, ProjectedRect, ProjectedSize};
use crate::{MapError, Result};

/// A point in screen space, in logical pixels from the view's top-left corner.
/// Also used for pixel deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for ScreenPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// The size of the view in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Manages the current view of the map: projected center, zoom, and screen
/// dimensions.
///
/// The viewport itself never validates against zoom limits or constraint
/// boxes; [`Map`](crate::core::map::Map) routes every mutation through the
/// constraint engine first, which is what keeps the "always valid" invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center: ProjectedPoint,
    zoom: f64,
    size: ScreenSize,
    screen_scale: f64,
}

impl Viewport {
    /// Creates a new viewport with a standard-density screen
    pub fn new(center: ProjectedPoint, zoom: f64, size: ScreenSize) -> Self {
        Self {
            center,
            zoom,
            size,
            screen_scale: 1.0,
        }
    }

    pub fn with_screen_scale(mut self, screen_scale: f64) -> Self {
        self.screen_scale = screen_scale.max(f64::MIN_POSITIVE);
        self
    }

    pub fn center(&self) -> ProjectedPoint {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn size(&self) -> ScreenSize {
        self.size
    }

    pub fn screen_scale(&self) -> f64 {
        self.screen_scale
    }

    pub fn set_center(&mut self, center: ProjectedPoint) {
        self.center = center;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    pub fn set_size(&mut self, size: ScreenSize) {
        self.size = size;
    }

    pub fn set_screen_scale(&mut self, screen_scale: f64) {
        self.screen_scale = screen_scale.max(f64::MIN_POSITIVE);
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2f64.powf(self.zoom)
    }

    /// Ground resolution at the current zoom, in meters per logical pixel
    pub fn meters_per_pixel(&self) -> f64 {
        METERS_PER_PIXEL_AT_ZOOM_ZERO / self.scale()
    }

    /// Ground resolution per device pixel on a high-density display
    pub fn scaled_meters_per_pixel(&self) -> f64 {
        self.meters_per_pixel() / self.screen_scale
    }

    /// Converts a screen location into a point on the projected plane
    pub fn screen_to_projected(&self, pixel: ScreenPoint) -> ProjectedPoint {
        let mpp = self.meters_per_pixel();
        let screen_center = self.size.center();

        ProjectedPoint::new(
            self.center.x + (pixel.x - screen_center.x) * mpp,
            self.center.y - (pixel.y - screen_center.y) * mpp,
        )
    }

    /// Converts a point on the projected plane into a screen location
    pub fn projected_to_screen(&self, point: ProjectedPoint) -> ScreenPoint {
        let mpp = self.meters_per_pixel();
        let screen_center = self.size.center();

        ScreenPoint::new(
            screen_center.x + (point.x - self.center.x) / mpp,
            screen_center.y - (point.y - self.center.y) / mpp,
        )
    }

    /// Projected extent of a screen-space size at the current zoom
    pub fn view_size_to_projected(&self, size: ScreenSize) -> ProjectedSize {
        let mpp = self.meters_per_pixel();
        ProjectedSize::new(size.width * mpp, size.height * mpp)
    }

    /// Screen-space size of a projected extent at the current zoom
    pub fn projected_size_to_view(&self, size: ProjectedSize) -> ScreenSize {
        let mpp = self.meters_per_pixel();
        ScreenSize::new(size.width / mpp, size.height / mpp)
    }

    /// The projected rectangle currently visible in the view
    pub fn projected_bounds(&self) -> ProjectedRect {
        let span = self.view_size_to_projected(self.size);
        ProjectedRect::new(
            ProjectedPoint::new(
                self.center.x - span.width / 2.0,
                self.center.y - span.height / 2.0,
            ),
            span,
        )
    }

    /// Moves the center by a screen-space delta. A positive x delta pans the
    /// view eastward, a positive y delta pans it southward.
    pub fn pan_by(&mut self, delta: ScreenPoint) {
        let mpp = self.meters_per_pixel();
        self.center = ProjectedPoint::new(
            self.center.x + delta.x * mpp,
            self.center.y - delta.y * mpp,
        );
    }

    /// The center the viewport must move to so that the projected point under
    /// `anchor` stays under `anchor` after changing to `zoom`.
    pub fn center_for_zoom_around(&self, anchor: ScreenPoint, zoom: f64) -> ProjectedPoint {
        let anchor_projected = self.screen_to_projected(anchor);
        let new_mpp = METERS_PER_PIXEL_AT_ZOOM_ZERO / 2f64.powf(zoom);
        let screen_center = self.size.center();

        ProjectedPoint::new(
            anchor_projected.x - (anchor.x - screen_center.x) * new_mpp,
            anchor_projected.y + (anchor.y - screen_center.y) * new_mpp,
        )
    }

    /// Changes the zoom while keeping the projected point under `anchor`
    /// fixed on screen (pivot invariant)
    pub fn zoom_around(&mut self, anchor: ScreenPoint, zoom: f64) {
        self.center = self.center_for_zoom_around(anchor, zoom);
        self.zoom = zoom;
    }

    /// Computes the center and the maximum zoom level at which `rect` fits
    /// entirely within the current screen on both axes.
    ///
    /// Exact fits at a fractional zoom round down (zoom out) so the full
    /// rectangle stays visible, never cropped. The returned zoom is not
    /// clamped against any zoom limits; the constraint engine does that.
    pub fn fit_rect(&self, rect: &ProjectedRect) -> Result<(ProjectedPoint, f64)> {
        if !self.size.is_renderable() {
            return Err(MapError::InvalidViewport(format!(
                "cannot fit bounds into a {}x{} screen",
                self.size.width, self.size.height
            )));
        }

        let required_mpp = (rect.size.width / self.size.width)
            .max(rect.size.height / self.size.height);

        let zoom = if required_mpp > 0.0 {
            (METERS_PER_PIXEL_AT_ZOOM_ZERO / required_mpp).log2().floor()
        } else {
            // Degenerate (point-sized) rect: any zoom fits, go as deep as the
            // default range allows and let the constraint engine clamp.
            DEFAULT_MAX_ZOOM
        };

        Ok((rect.center(), zoom))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            ProjectedPoint::new(0.0, 0.0),
            0.0,
            ScreenSize::new(800.0, 600.0),
        )
    }
}
