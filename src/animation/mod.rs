//! Camera transition endpoints for animated view changes.
//!
//! The core holds no timers and has no notion of an animation being "in
//! progress": an animated mutation commits its target state immediately and
//! returns a [`CameraTransition`] describing the endpoints. The collaborating
//! GUI layer drives the animation by sampling intermediate states frame by
//! frame; dropping the transition cancels nothing because nothing is pending.

use crate::core::projection::ProjectedPoint;

/// Easing curves for camera transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingType {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => t * t * t,
            EasingType::EaseOut => 1.0 - (1.0 - t).powi(3),
            EasingType::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl Default for EasingType {
    fn default() -> Self {
        Self::EaseOut
    }
}

/// Endpoints of an animated center/zoom change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    from_center: ProjectedPoint,
    to_center: ProjectedPoint,
    from_zoom: f64,
    to_zoom: f64,
    easing: EasingType,
}

impl CameraTransition {
    pub fn new(
        from_center: ProjectedPoint,
        to_center: ProjectedPoint,
        from_zoom: f64,
        to_zoom: f64,
    ) -> Self {
        Self {
            from_center,
            to_center,
            from_zoom,
            to_zoom,
            easing: EasingType::default(),
        }
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self) -> (ProjectedPoint, f64) {
        (self.from_center, self.from_zoom)
    }

    pub fn target(&self) -> (ProjectedPoint, f64) {
        (self.to_center, self.to_zoom)
    }

    /// Whether the transition starts and ends in the same state
    pub fn is_noop(&self) -> bool {
        self.from_center == self.to_center && self.from_zoom == self.to_zoom
    }

    /// The interpolated (center, zoom) at normalized progress `t`.
    ///
    /// `t` is clamped to [0, 1]; 0 returns the starting state, 1 the committed
    /// target state, exactly.
    pub fn sample(&self, t: f64) -> (ProjectedPoint, f64) {
        if t >= 1.0 {
            return (self.to_center, self.to_zoom);
        }
        let eased = self.easing.apply(t);
        let center = ProjectedPoint::new(
            self.from_center.x + (self.to_center.x - self.from_center.x) * eased,
            self.from_center.y + (self.to_center.y - self.from_center.y) * eased,
        );
        let zoom = self.from_zoom + (self.to_zoom - self.from_zoom) * eased;

        (center, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_endpoints() {
        let transition = CameraTransition::new(
            ProjectedPoint::new(0.0, 0.0),
            ProjectedPoint::new(1000.0, -500.0),
            3.0,
            7.0,
        );

        assert_eq!(transition.sample(0.0), (ProjectedPoint::new(0.0, 0.0), 3.0));
        assert_eq!(
            transition.sample(1.0),
            (ProjectedPoint::new(1000.0, -500.0), 7.0)
        );
        // Out-of-range progress clamps
        assert_eq!(transition.sample(2.5), transition.sample(1.0));
    }

    #[test]
    fn test_linear_midpoint() {
        let transition = CameraTransition::new(
            ProjectedPoint::new(0.0, 0.0),
            ProjectedPoint::new(100.0, 200.0),
            0.0,
            2.0,
        )
        .with_easing(EasingType::Linear);

        let (center, zoom) = transition.sample(0.5);
        assert_relative_eq!(center.x, 50.0);
        assert_relative_eq!(center.y, 100.0);
        assert_relative_eq!(zoom, 1.0);
    }

    #[test]
    fn test_easing_stays_normalized() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseIn,
            EasingType::EaseOut,
            EasingType::EaseInOut,
        ] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
            for step in 1..10 {
                let v = easing.apply(step as f64 / 10.0);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
