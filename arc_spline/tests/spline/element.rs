/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_arc_spline::shape::*;
use flo_arc_spline::spline::*;
use flo_arc_spline::*;

fn quarter_circle_anticlockwise() -> SplineArc {
    SplineArc::new(
        Circle::new(Coord2(0.0, 0.0), 10.0),
        Coord2(10.0, 0.0),
        Coord2(0.0, 1.0),
        Coord2(0.0, 10.0),
        None,
    )
}

#[test]
fn anticlockwise_arc_angles() {
    let arc = quarter_circle_anticlockwise();

    assert!(arc.start_angle.abs() < 1e-9);
    assert!((arc.sweep_angle - 90.0).abs() < 1e-9);
    assert!(arc.start_point().distance_to(&Coord2(10.0, 0.0)) < 1e-9);
    assert!(arc.end_point().distance_to(&Coord2(0.0, 10.0)) < 1e-9);
}

#[test]
fn clockwise_arc_goes_the_long_way_round() {
    // Heading down from (10, 0), so the arc has to go through the bottom and left of the circle to reach (0, 10)
    let arc = SplineArc::new(
        Circle::new(Coord2(0.0, 0.0), 10.0),
        Coord2(10.0, 0.0),
        Coord2(0.0, -1.0),
        Coord2(0.0, 10.0),
        Some(BiarcHalf::Second),
    );

    assert!((arc.sweep_angle + 270.0).abs() < 1e-9);
    assert!(arc.end_point().distance_to(&Coord2(0.0, 10.0)) < 1e-9);
    assert!(arc.index_in_biarc == Some(BiarcHalf::Second));

    // (-10, 0) is on this arc, but not on the anticlockwise quarter circle
    assert!(arc.distance_to(Coord2(-10.0, 0.0)) < 1e-9);
    assert!(quarter_circle_anticlockwise().distance_to(Coord2(-10.0, 0.0)) > 10.0);
}

#[test]
fn distance_to_arc() {
    let arc = quarter_circle_anticlockwise();
    let diagonal = Coord2(1.0, 1.0).to_unit_vector();

    assert!((arc.distance_to(Coord2(20.0, 0.0)) - 10.0).abs() < 1e-9);
    assert!((arc.distance_to(diagonal * 15.0) - 5.0).abs() < 1e-9);
    assert!((arc.distance_to(diagonal * 4.0) - 6.0).abs() < 1e-9);
}

#[test]
fn distance_beyond_arc_uses_end_points() {
    let arc = quarter_circle_anticlockwise();

    assert!((arc.distance_to(Coord2(-10.0, 0.0)) - 200.0_f64.sqrt()).abs() < 1e-9);
    assert!((arc.distance_to(Coord2(10.0, -5.0)) - 5.0).abs() < 1e-9);
}

#[test]
fn distance_to_arc_end_point() {
    let arc = quarter_circle_anticlockwise();

    assert!((arc.distance_to_end_point(Coord2(10.0, 3.0)) - 3.0).abs() < 1e-9);
    assert!((arc.distance_to_end_point(Coord2(0.0, 12.0)) - 2.0).abs() < 1e-9);
}

#[test]
fn arc_crossing_negative_x_axis() {
    // Starts at 135 degrees and sweeps 90 degrees anticlockwise to 225 degrees
    let circle = Circle::new(Coord2(5.0, 5.0), 10.0);
    let p0 = circle.point_at_angle(135.0_f64.to_radians());
    let p1 = circle.point_at_angle(225.0_f64.to_radians());
    let tangent = Coord2(-1.0, -1.0).to_unit_vector();
    let arc = SplineArc::new(circle, p0, tangent, p1, None);

    assert!((arc.start_angle - 135.0).abs() < 1e-9);
    assert!((arc.sweep_angle - 90.0).abs() < 1e-9);
    assert!(arc.distance_to(circle.point_at_angle(180.0_f64.to_radians())) < 1e-9);
    assert!((arc.distance_to(Coord2(5.0, 5.0) + Coord2(-12.0, 0.0)) - 2.0).abs() < 1e-9);
}

#[test]
fn distance_to_segment() {
    let segment = SplineSegment::new(Coord2(0.0, 0.0), Coord2(10.0, 0.0), None);

    assert!((segment.distance_to(Coord2(5.0, 3.0)) - 3.0).abs() < 1e-12);
    assert!((segment.distance_to(Coord2(-3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert!((segment.distance_to(Coord2(13.0, -4.0)) - 5.0).abs() < 1e-12);
    assert!((segment.distance_to_end_point(Coord2(5.0, 3.0)) - 34.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn element_dispatches_to_shape() {
    let arc = SplineElement::Arc(quarter_circle_anticlockwise());
    let segment = SplineElement::Segment(SplineSegment::new(Coord2(0.0, 0.0), Coord2(10.0, 0.0), Some(BiarcHalf::First)));

    assert!((arc.distance_to(Coord2(20.0, 0.0)) - 10.0).abs() < 1e-9);
    assert!((segment.distance_to(Coord2(5.0, 3.0)) - 3.0).abs() < 1e-12);
    assert!((segment.distance_to_end_point(Coord2(10.0, 1.0)) - 1.0).abs() < 1e-12);

    assert!(arc.index_in_biarc() == None);
    assert!(segment.index_in_biarc() == Some(BiarcHalf::First));
    assert!(segment.start_point() == Coord2(0.0, 0.0));
    assert!(segment.end_point() == Coord2(10.0, 0.0));
    assert!(arc.end_point().distance_to(&Coord2(0.0, 10.0)) < 1e-9);
}
