/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Trait implemented by shapes that can measure the signed distance from their edge to a point
///
/// The sign indicates which side of the shape the point is on: its meaning depends on the shape, but squared distances
/// are always a measure of how well the shape fits the point.
///
pub trait SignedDistance {
    ///
    /// Returns the signed distance from this shape to the specified point
    ///
    fn signed_distance_to(&self, point: Coord2) -> f64;
}
