//! Bounds and zoom constraint engine.
//!
//! Re-establishes the invariant "zoom within limits, center within the
//! constraint box" after every viewport mutation. Pure constraint
//! satisfaction: inputs are clamped, never rejected, and clamping is
//! idempotent.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, METERS_PER_PIXEL_AT_ZOOM_ZERO, WORLD_SIZE_METERS,
};
use crate::core::projection::{ProjectedPoint, ProjectedRect, ProjectedSize};
use crate::core::viewport::ScreenSize;
use crate::{MapError, Result};

/// Selects whether minimum zoom-out is limited by view height, view width, or
/// not limited at all.
///
/// With `MinWidth` (the default) the map can never be zoomed out past the
/// point where its constrained extent becomes narrower than the view, so the
/// view never shows empty space beyond the map's west/east edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundingMask {
    /// The map can be zoomed out past the view limits
    None,
    /// Minimum map height when zooming out is restricted to the view height
    MinHeight,
    /// Minimum map width when zooming out is restricted to the view width
    MinWidth,
}

impl Default for BoundingMask {
    fn default() -> Self {
        Self::MinWidth
    }
}

/// Zoom limits, optional constraint box, and the bounding mask policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConstraints {
    min_zoom: f64,
    max_zoom: f64,
    constraint_box: Option<ProjectedRect>,
    bounding_mask: BoundingMask,
}

impl Default for MapConstraints {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

impl MapConstraints {
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            min_zoom: min_zoom.min(max_zoom),
            max_zoom,
            constraint_box: None,
            bounding_mask: BoundingMask::default(),
        }
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn bounding_mask(&self) -> BoundingMask {
        self.bounding_mask
    }

    pub fn constraint_box(&self) -> Option<&ProjectedRect> {
        self.constraint_box.as_ref()
    }

    pub fn set_zoom_range(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom;
    }

    pub fn set_bounding_mask(&mut self, mask: BoundingMask) {
        self.bounding_mask = mask;
    }

    /// Configures the constraint box. The box must have a positive extent on
    /// both axes.
    pub fn set_constraint_box(&mut self, rect: Option<ProjectedRect>) -> Result<()> {
        if let Some(rect) = &rect {
            if rect.size.width <= 0.0 || rect.size.height <= 0.0 {
                return Err(MapError::InvalidBounds(format!(
                    "constraint box must span a positive area, got {}x{} meters",
                    rect.size.width, rect.size.height
                )));
            }
        }
        self.constraint_box = rect;
        Ok(())
    }

    /// Removes the constraint box
    pub fn clear_constraint_box(&mut self) {
        self.constraint_box = None;
    }

    /// The projected extent that the bounding mask measures the view against:
    /// the constraint box if one is set, the whole world otherwise.
    fn bounded_extent(&self) -> ProjectedSize {
        self.constraint_box
            .map(|rect| rect.size)
            .unwrap_or_else(|| ProjectedSize::new(WORLD_SIZE_METERS, WORLD_SIZE_METERS))
    }

    /// The effective minimum zoom for the given screen size.
    ///
    /// With a width/height bounding mask this is the configured minimum raised
    /// to the zoom at which the bounded extent exactly fills the view on the
    /// masked axis; it shifts by exactly one level whenever that view
    /// dimension doubles or halves. Recompute whenever the screen size
    /// changes.
    pub fn effective_min_zoom(&self, size: ScreenSize) -> f64 {
        let extent = self.bounded_extent();
        let floor = match self.bounding_mask {
            BoundingMask::None => return self.min_zoom,
            BoundingMask::MinWidth => Self::zoom_filling(size.width, extent.width),
            BoundingMask::MinHeight => Self::zoom_filling(size.height, extent.height),
        };

        match floor {
            Some(floor) => self.min_zoom.max(floor),
            None => self.min_zoom,
        }
    }

    /// The zoom at which `extent_meters` spans exactly `view_pixels`
    fn zoom_filling(view_pixels: f64, extent_meters: f64) -> Option<f64> {
        if view_pixels <= 0.0 || extent_meters <= 0.0 {
            return None;
        }
        Some((view_pixels * METERS_PER_PIXEL_AT_ZOOM_ZERO / extent_meters).log2())
    }

    /// Clamps a zoom level into the effective range for the given screen size.
    /// Idempotent.
    ///
    /// If the mask-derived minimum exceeds the configured maximum the mask
    /// wins: the map never becomes smaller than the view on the masked axis.
    pub fn clamp_zoom(&self, zoom: f64, size: ScreenSize) -> f64 {
        let lo = self.effective_min_zoom(size);
        let hi = self.max_zoom.max(lo);
        zoom.clamp(lo, hi)
    }

    /// Clamps a candidate center so the visible viewport rectangle at `zoom`
    /// never extends past the constraint box. On an axis where the viewport is
    /// larger than the box, the center snaps to the box midpoint. Idempotent.
    pub fn clamp_center(&self, center: ProjectedPoint, zoom: f64, size: ScreenSize) -> ProjectedPoint {
        let Some(rect) = &self.constraint_box else {
            return center;
        };

        let mpp = METERS_PER_PIXEL_AT_ZOOM_ZERO / 2f64.powf(zoom);
        let half_width = size.width * mpp / 2.0;
        let half_height = size.height * mpp / 2.0;
        let box_center = rect.center();

        let x = if rect.size.width <= size.width * mpp {
            box_center.x
        } else {
            center.x.clamp(rect.min_x() + half_width, rect.max_x() - half_width)
        };

        let y = if rect.size.height <= size.height * mpp {
            box_center.y
        } else {
            center.y.clamp(rect.min_y() + half_height, rect.max_y() - half_height)
        };

        ProjectedPoint::new(x, y)
    }
}
