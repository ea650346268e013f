//! Angle and point math for the gauge ring.
//!
//! Angles are in degrees, measured clockwise from the top of the circle, in a
//! y-down coordinate system.

/// Largest angle a percent maps to. A full 360° sweep would put the end point
/// on top of the start point, which arc primitives draw as nothing at all.
pub const MAX_SWEEP_ANGLE: f64 = 359.999;

/// Clamp applied by [`point_on_circle`] to angles of 360° and more.
pub const MAX_POINT_ANGLE: f64 = 359.9;

/// Horizontal gap left between the end and the start of the background track.
pub const TRACK_GAP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Outer size of a gauge: the diameter plus one stroke width.
    pub fn of_gauge(radius: f64, thickness: f64) -> Self {
        let side = radius * 2.0 + thickness;
        Self::new(side, side)
    }
}

pub fn percent_to_angle(percent: f64) -> f64 {
    let angle = percent / 100.0 * 360.0;
    if angle >= 360.0 {
        MAX_SWEEP_ANGLE
    } else {
        angle
    }
}

pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let angle = if angle >= 360.0 { MAX_POINT_ANGLE } else { angle };
    let radians = angle.to_radians();
    Point::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

/// Whether the arc from the top of the circle to `angle` is the long way round.
pub fn is_large_arc(angle: f64) -> bool {
    angle > 180.0
}

/// Clockwise angle of `point` around `center`, in `[0, 360)`.
pub fn angle_of(center: Point, point: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx.atan2(-dy).to_degrees().rem_euclid(360.0)
}

/// Derived points of one redraw. Never kept across redraws.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryState {
    pub center: Point,
    pub start: Point,
    pub end: Point,
}

impl GeometryState {
    pub fn compute(radius: f64, angle: f64) -> Self {
        let center = Point::new(radius, radius);
        let start = Point::new(center.x, 0.0);
        let end = point_on_circle(center, radius, angle);
        Self { center, start, end }
    }

    /// End point of the background track, just short of the start point.
    pub fn track_end(&self) -> Point {
        Point::new(self.center.x - TRACK_GAP, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn angle_of_inverts_point_on_circle() {
        let center = Point::new(10.0, 20.0);
        for angle in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let point = point_on_circle(center, 7.0, angle);
            assert!((angle_of(center, point) - angle).abs() < 1e-6, "{angle}");
        }
    }

    #[test]
    fn geometry_places_center_and_start() {
        let geometry = GeometryState::compute(50.0, 180.0);
        assert_eq!(geometry.center, Point::new(50.0, 50.0));
        assert_eq!(geometry.start, Point::new(50.0, 0.0));
        assert!((geometry.end.x - 50.0).abs() < EPS);
        assert!((geometry.end.y - 100.0).abs() < EPS);
        assert_eq!(geometry.track_end(), Point::new(49.9, 0.0));
    }

    #[test]
    fn gauge_size_adds_one_stroke() {
        assert_eq!(Size::of_gauge(50.0, 2.0), Size::new(102.0, 102.0));
    }
}
