use ringgauge::geometry::{MAX_POINT_ANGLE, MAX_SWEEP_ANGLE};
use ringgauge::{is_large_arc, percent_to_angle, point_on_circle, Point};

const EPS: f64 = 1e-9;

fn assert_point_near(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_percent_maps_linearly_below_full() {
    for percent in [0.0, 0.5, 10.0, 25.0, 50.0, 75.0, 99.0, 99.9997] {
        let angle = percent_to_angle(percent);
        assert_eq!(angle, percent / 100.0 * 360.0);
        assert!(angle < 360.0);
    }
}

#[test]
fn test_full_percent_is_clamped() {
    assert_eq!(percent_to_angle(100.0), 359.999);
    assert_eq!(percent_to_angle(150.0), MAX_SWEEP_ANGLE);
}

#[test]
fn test_point_at_top_of_circle() {
    let point = point_on_circle(Point::new(50.0, 50.0), 50.0, 0.0);
    assert_point_near(point, Point::new(50.0, 0.0));
}

#[test]
fn test_point_at_right_of_circle() {
    let point = point_on_circle(Point::new(50.0, 50.0), 50.0, 90.0);
    assert_point_near(point, Point::new(100.0, 50.0));
}

#[test]
fn test_point_below_and_left_of_circle() {
    let center = Point::new(50.0, 50.0);
    assert_point_near(point_on_circle(center, 50.0, 180.0), Point::new(50.0, 100.0));
    assert_point_near(point_on_circle(center, 50.0, 270.0), Point::new(0.0, 50.0));
}

#[test]
fn test_full_turn_point_is_clamped() {
    let center = Point::new(50.0, 50.0);
    let clamped = point_on_circle(center, 50.0, MAX_POINT_ANGLE);
    assert_eq!(point_on_circle(center, 50.0, 360.0), clamped);
    assert_eq!(point_on_circle(center, 50.0, 720.0), clamped);
    // Just left of the top, not on top of it.
    assert!(clamped.x < 50.0);
}

#[test]
fn test_large_arc_threshold() {
    for angle in [0.0, 45.0, 90.0, 179.9, 180.0] {
        assert!(!is_large_arc(angle), "{angle}");
    }
    for angle in [180.001, 200.0, 270.0, 359.999] {
        assert!(is_large_arc(angle), "{angle}");
    }
}
