use crate::config::{DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::TrackError;
use crate::types::Point;
use std::sync::Arc;

/// Drivable surface the environment checks the car against.
///
/// `is_on_track` must be deterministic and free of side effects; collision
/// detection samples it several times per step.
pub trait Track {
    fn start_position(&self) -> Point;

    /// Heading in degrees (counter-clockwise on screen, 0 = +x)
    fn start_angle(&self) -> f64;

    fn is_on_track(&self, point: Point) -> bool;
}

impl<T: Track + ?Sized> Track for &T {
    fn start_position(&self) -> Point {
        (**self).start_position()
    }

    fn start_angle(&self) -> f64 {
        (**self).start_angle()
    }

    fn is_on_track(&self, point: Point) -> bool {
        (**self).is_on_track(point)
    }
}

impl<T: Track + ?Sized> Track for Box<T> {
    fn start_position(&self) -> Point {
        (**self).start_position()
    }

    fn start_angle(&self) -> f64 {
        (**self).start_angle()
    }

    fn is_on_track(&self, point: Point) -> bool {
        (**self).is_on_track(point)
    }
}

impl<T: Track + ?Sized> Track for Arc<T> {
    fn start_position(&self) -> Point {
        (**self).start_position()
    }

    fn start_angle(&self) -> f64 {
        (**self).start_angle()
    }

    fn is_on_track(&self, point: Point) -> bool {
        (**self).is_on_track(point)
    }
}

// A circular track: the annulus between two radii around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTrack {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl RingTrack {
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Result<Self, TrackError> {
        if !(center.x.is_finite()
            && center.y.is_finite()
            && inner_radius.is_finite()
            && outer_radius.is_finite())
        {
            return Err(TrackError::NonFinite);
        }
        if inner_radius <= 0.0 {
            return Err(TrackError::InvalidInnerRadius(inner_radius));
        }
        if inner_radius >= outer_radius {
            return Err(TrackError::InvalidRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        log::debug!(
            "Ring track at ({:.1}, {:.1}), radii {:.1}..{:.1}",
            center.x,
            center.y,
            inner_radius,
            outer_radius
        );

        Ok(RingTrack {
            center,
            inner_radius,
            outer_radius,
        })
    }

    /// Ring of the given radii centred on the screen
    pub fn centered(inner_radius: f64, outer_radius: f64) -> Result<Self, TrackError> {
        let center = Point::new(SCREEN_WIDTH as f64 / 2.0, SCREEN_HEIGHT as f64 / 2.0);
        Self::new(center, inner_radius, outer_radius)
    }

    pub fn lane_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    pub fn centerline_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

impl Default for RingTrack {
    fn default() -> Self {
        RingTrack {
            center: Point::new(SCREEN_WIDTH as f64 / 2.0, SCREEN_HEIGHT as f64 / 2.0),
            inner_radius: DEFAULT_INNER_RADIUS,
            outer_radius: DEFAULT_OUTER_RADIUS,
        }
    }
}

impl Track for RingTrack {
    // Rightmost point of the centre line
    fn start_position(&self) -> Point {
        Point::new(self.center.x + self.centerline_radius(), self.center.y)
    }

    // Facing up the screen, so the car laps counter-clockwise
    fn start_angle(&self) -> f64 {
        90.0
    }

    fn is_on_track(&self, point: Point) -> bool {
        let dist = self.center.distance(&point);
        dist >= self.inner_radius && dist <= self.outer_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_default_ring_fits_screen() {
        let track = RingTrack::default();
        assert!(track.center.x + track.outer_radius <= SCREEN_WIDTH as f64);
        assert!(track.center.y + track.outer_radius <= SCREEN_HEIGHT as f64);
        assert_approx_eq!(track.lane_width(), 150.0);
        assert_approx_eq!(track.centerline_radius(), 275.0);
    }

    #[test]
    fn test_start_pose_is_on_track() {
        let track = RingTrack::default();
        let start = track.start_position();
        assert!(track.is_on_track(start));
        assert_approx_eq!(start.x, 875.0);
        assert_approx_eq!(start.y, 400.0);
        assert_approx_eq!(track.start_angle(), 90.0);
    }

    #[test]
    fn test_membership() {
        let track = RingTrack::new(Point::new(0.0, 0.0), 10.0, 20.0).unwrap();
        assert!(!track.is_on_track(Point::new(0.0, 0.0)), "Infield is off track");
        assert!(!track.is_on_track(Point::new(9.9, 0.0)));
        assert!(track.is_on_track(Point::new(10.0, 0.0)), "Inner edge is inclusive");
        assert!(track.is_on_track(Point::new(0.0, -15.0)));
        assert!(track.is_on_track(Point::new(20.0, 0.0)), "Outer edge is inclusive");
        assert!(!track.is_on_track(Point::new(20.1, 0.0)));
    }

    #[test]
    fn test_invalid_geometry() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(
            RingTrack::new(origin, 0.0, 10.0),
            Err(TrackError::InvalidInnerRadius(0.0))
        );
        assert_eq!(
            RingTrack::new(origin, 20.0, 10.0),
            Err(TrackError::InvalidRadii {
                inner: 20.0,
                outer: 10.0
            })
        );
        assert_eq!(
            RingTrack::new(origin, 10.0, 10.0),
            Err(TrackError::InvalidRadii {
                inner: 10.0,
                outer: 10.0
            })
        );
        assert_eq!(
            RingTrack::new(Point::new(f64::NAN, 0.0), 10.0, 20.0),
            Err(TrackError::NonFinite)
        );
        assert_eq!(
            RingTrack::new(origin, 10.0, f64::INFINITY),
            Err(TrackError::NonFinite)
        );
    }

    #[test]
    fn test_shared_track_delegates() {
        let track = Arc::new(RingTrack::default());
        let shared: Arc<dyn Track> = track.clone();
        assert_eq!(shared.start_position(), track.start_position());
        assert_eq!(shared.start_angle(), track.start_angle());
        assert!(shared.is_on_track(track.start_position()));
    }
}
