/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::circle::*;
use super::line::*;
use super::signed_distance::*;

use crate::consts::*;
use crate::geo::*;

///
/// A shape that is either a circle or a straight line
///
/// Lines are used in place of circles whose radius is too large to compute accurately.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CircleOrLine {
    Circle(Circle),
    Line(Line),
}

impl CircleOrLine {
    /// The circle represented by this shape, if it's a circle
    pub fn circle(&self) -> Option<&Circle> {
        match self {
            CircleOrLine::Circle(circle) => Some(circle),
            CircleOrLine::Line(_) => None,
        }
    }

    /// The line represented by this shape, if it's a line
    pub fn line(&self) -> Option<&Line> {
        match self {
            CircleOrLine::Circle(_) => None,
            CircleOrLine::Line(line) => Some(line),
        }
    }
}

impl SignedDistance for CircleOrLine {
    #[inline]
    fn signed_distance_to(&self, point: Coord2) -> f64 {
        match self {
            CircleOrLine::Circle(circle) => circle.signed_distance_to(point),
            CircleOrLine::Line(line) => line.signed_distance_to(point),
        }
    }
}

///
/// Finds the circle that passes through `point0` and `point1`, and that has the direction `tangent0` at `point0`
///
/// The center of the circle lies on the line through `point0` perpendicular to the tangent, at the same distance from
/// both points. If that circle would be too large to represent accurately, this returns the straight line between the two
/// points instead. When the two points are the same, the result is a circle with a radius of 0.
///
pub fn fit_circle_or_line(point0: Coord2, tangent0: Coord2, point1: Coord2) -> CircleOrLine {
    let chord_length_squared = (point1 - point0).magnitude_squared();

    let result = if chord_length_squared > EPSILON2 {
        // The line through point0, perpendicular to the tangent (the circle's center must be on this line)
        let perpendicular = Line::from_point_and_normal(point0, -tangent0);

        let mid = (point0 + point1) * 0.5;
        let dist = perpendicular.signed_distance_to(mid);
        let proj = perpendicular.project(mid);
        let lead = proj - point0;
        let lead_length_squared = lead.magnitude_squared();

        let circle = if lead_length_squared > EPSILON2 {
            let center = proj + lead * (dist * dist / lead_length_squared);
            let radius = (center - point0).magnitude();

            let max_ratio = MAX_ARC_RADIUS_TO_CHORD_LENGTH_RATIO;
            if radius <= MAX_ARC_RADIUS
                && radius * radius < max_ratio * max_ratio * chord_length_squared
            {
                Some(Circle::new(center, radius))
            } else {
                None
            }
        } else {
            // The tangent points along the chord
            None
        };

        match circle {
            Some(circle) => CircleOrLine::Circle(circle),
            None => CircleOrLine::Line(Line::between(point0, point1)),
        }
    } else {
        CircleOrLine::Circle(Circle::new(point0, 0.0))
    };

    test_assert!(result.signed_distance_to(point0).abs() < MAX_SPLINE_GAP);
    test_assert!(result.signed_distance_to(point1).abs() < MAX_SPLINE_GAP);

    result
}
