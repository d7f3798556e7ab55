/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::signed_distance::*;

use crate::geo::*;

///
/// An infinite line, stored in the normal form `a*x + b*y + c = 0` (where `a^2 + b^2 = 1`)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    ///
    /// Creates the line through a point with the specified unit normal
    ///
    pub fn from_point_and_normal(point: Coord2, normal: Coord2) -> Line {
        test_assert!(
            (normal.magnitude_squared() - 1.0).abs() <= 1e-4,
            "Line normal {:?} is not a unit vector",
            normal
        );

        Line {
            a: normal.x(),
            b: normal.y(),
            c: -normal.dot(&point),
        }
    }

    ///
    /// Creates the line passing through two points
    ///
    /// The normal points to the left of the direction from `p0` to `p1`.
    ///
    pub fn between(p0: Coord2, p1: Coord2) -> Line {
        Line::from_point_and_normal(p0, p0.direction_to(&p1).rotate_90())
    }

    /// The unit normal of this line
    #[inline]
    pub fn normal(&self) -> Coord2 {
        Coord2(self.a, self.b)
    }

    ///
    /// Projects a point onto this line
    ///
    pub fn project(&self, point: Coord2) -> Coord2 {
        point - self.normal() * self.signed_distance_to(point)
    }
}

impl SignedDistance for Line {
    #[inline]
    fn signed_distance_to(&self, point: Coord2) -> f64 {
        self.normal().dot(&point) + self.c
    }
}
