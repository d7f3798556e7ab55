/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;
use crate::shape::*;

///
/// Which half of a biarc a spline element was generated from
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BiarcHalf {
    /// The arc from the start point to the mid point
    First,

    /// The arc from the mid point to the end point
    Second,
}

///
/// A circular arc that forms part of an arc spline
///
/// Angles are in degrees, anticlockwise from the x axis. A negative sweep angle indicates an arc that runs clockwise from
/// its start.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SplineArc {
    pub circle: Circle,
    pub start_angle: f64,
    pub sweep_angle: f64,

    /// The half of the biarc this arc was generated from
    pub index_in_biarc: Option<BiarcHalf>,
}

///
/// A straight segment that forms part of an arc spline
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SplineSegment {
    pub p0: Coord2,
    pub p1: Coord2,

    /// The half of the biarc this segment was generated from, or `None` for segments that were found between corners
    pub index_in_biarc: Option<BiarcHalf>,
}

///
/// An element of an arc spline
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SplineElement {
    Arc(SplineArc),
    Segment(SplineSegment),
}

impl SplineArc {
    ///
    /// Creates the arc of a circle that starts at `p0` heading in the direction of `tangent_at_p0` and ends at `p1`
    ///
    /// Both points are expected to be on the circle.
    ///
    pub fn new(circle: Circle, p0: Coord2, tangent_at_p0: Coord2, p1: Coord2, index_in_biarc: Option<BiarcHalf>) -> SplineArc {
        let arm0 = p0 - circle.center;
        let arm1 = p1 - circle.center;

        let start_angle = arm0.y().atan2(arm0.x()).to_degrees();
        let end_angle = arm1.y().atan2(arm1.x()).to_degrees();
        let mut sweep_angle = end_angle - start_angle;

        // The tangent determines which way around the circle the arc goes
        if arm0.cross(&tangent_at_p0) * sweep_angle < 0.0 {
            sweep_angle += if sweep_angle < 0.0 { 360.0 } else { -360.0 };
        }

        SplineArc {
            circle,
            start_angle,
            sweep_angle,
            index_in_biarc,
        }
    }

    /// The angle (in degrees) where this arc ends
    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// The point where this arc starts
    pub fn start_point(&self) -> Coord2 {
        self.circle.point_at_angle(self.start_angle.to_radians())
    }

    /// The point where this arc ends
    pub fn end_point(&self) -> Coord2 {
        self.circle.point_at_angle(self.end_angle().to_radians())
    }

    ///
    /// The distance from a point to the nearest point on this arc
    ///
    pub fn distance_to(&self, point: Coord2) -> f64 {
        let start = f64::min(self.start_angle, self.end_angle());
        let end = f64::max(self.start_angle, self.end_angle());

        let arm = point - self.circle.center;
        let mut angle = arm.y().atan2(arm.x()).to_degrees();
        if angle < start {
            angle += 360.0;
        }
        if end < angle {
            angle -= 360.0;
        }

        if start <= angle && angle <= end {
            (arm.magnitude() - self.circle.radius).abs()
        } else {
            self.distance_to_end_point(point)
        }
    }

    ///
    /// The distance from a point to the nearer of the two ends of this arc
    ///
    pub fn distance_to_end_point(&self, point: Coord2) -> f64 {
        f64::min(point.distance_to(&self.start_point()), point.distance_to(&self.end_point()))
    }
}

impl SplineSegment {
    pub fn new(p0: Coord2, p1: Coord2, index_in_biarc: Option<BiarcHalf>) -> SplineSegment {
        SplineSegment { p0, p1, index_in_biarc }
    }

    ///
    /// The distance from a point to the nearest point on this segment
    ///
    pub fn distance_to(&self, point: Coord2) -> f64 {
        let u = point - self.p0;
        let v = self.p1 - self.p0;

        let along = u.dot(&v);
        let length_squared = v.dot(&v);

        let closest_point = if along <= 0.0 {
            self.p0
        } else if length_squared <= along {
            self.p1
        } else {
            self.p0 + v * (along / length_squared)
        };

        closest_point.distance_to(&point)
    }

    ///
    /// The distance from a point to the nearer of the two ends of this segment
    ///
    pub fn distance_to_end_point(&self, point: Coord2) -> f64 {
        f64::min(point.distance_to(&self.p0), point.distance_to(&self.p1))
    }
}

impl SplineElement {
    ///
    /// The distance from a point to the nearest point on this element
    ///
    pub fn distance_to(&self, point: Coord2) -> f64 {
        match self {
            SplineElement::Arc(arc) => arc.distance_to(point),
            SplineElement::Segment(segment) => segment.distance_to(point),
        }
    }

    ///
    /// The distance from a point to the nearer of the two ends of this element
    ///
    pub fn distance_to_end_point(&self, point: Coord2) -> f64 {
        match self {
            SplineElement::Arc(arc) => arc.distance_to_end_point(point),
            SplineElement::Segment(segment) => segment.distance_to_end_point(point),
        }
    }

    /// The half of a biarc this element was generated from, if it came from a biarc
    pub fn index_in_biarc(&self) -> Option<BiarcHalf> {
        match self {
            SplineElement::Arc(arc) => arc.index_in_biarc,
            SplineElement::Segment(segment) => segment.index_in_biarc,
        }
    }

    /// The point where this element starts
    pub fn start_point(&self) -> Coord2 {
        match self {
            SplineElement::Arc(arc) => arc.start_point(),
            SplineElement::Segment(segment) => segment.p0,
        }
    }

    /// The point where this element ends
    pub fn end_point(&self) -> Coord2 {
        match self {
            SplineElement::Arc(arc) => arc.end_point(),
            SplineElement::Segment(segment) => segment.p1,
        }
    }

    ///
    /// Creates the element for one half of a biarc
    ///
    pub(crate) fn from_biarc_half(shape: &CircleOrLine, p0: Coord2, tangent_at_p0: Coord2, p1: Coord2, half: BiarcHalf) -> SplineElement {
        match shape {
            CircleOrLine::Circle(circle) => SplineElement::Arc(SplineArc::new(*circle, p0, tangent_at_p0, p1, Some(half))),
            CircleOrLine::Line(_) => SplineElement::Segment(SplineSegment::new(p0, p1, Some(half))),
        }
    }
}
