/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::signed_distance::*;

use crate::geo::*;

///
/// A circle, described by its center and radius
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle {
    pub center: Coord2,
    pub radius: f64,
}

impl Circle {
    ///
    /// Creates a new circle
    ///
    pub fn new(center: Coord2, radius: f64) -> Circle {
        Circle { center, radius }
    }

    ///
    /// Returns the point on this circle at the specified angle (in radians, anticlockwise from the x axis)
    ///
    pub fn point_at_angle(&self, radians: f64) -> Coord2 {
        self.center + (Coord2::unit_x() * self.radius).rotate(radians)
    }
}

impl SignedDistance for Circle {
    ///
    /// Distance from the edge of the circle: negative inside it and positive outside
    ///
    #[inline]
    fn signed_distance_to(&self, point: Coord2) -> f64 {
        (point - self.center).magnitude() - self.radius
    }
}
