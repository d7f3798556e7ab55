/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::biarc::*;

use crate::freeform::*;
use crate::geo::*;
use crate::shape::*;

///
/// Estimates the error between a section of a line and a shape fitted to it
///
/// The line is sampled every `t_step` units from `t_start` up to (but not including) `t_end`, and the result is the mean
/// of the squared signed distances from the samples to the shape. Empty sections have an error of 0.
///
pub fn mean_squared_error(
    line: &FreeformLine,
    t_start: f64,
    t_step: f64,
    t_end: f64,
    fitting_shape: &impl SignedDistance,
) -> f64 {
    assert!(t_step > 0.0, "Error measurement step must be positive");

    let mut num_measurements = 0.0;
    let mut sum_error_squared = 0.0;
    let mut t = t_start;

    while t < t_end {
        let signed_dist = fitting_shape.signed_distance_to(line.point_at(t));
        sum_error_squared += signed_dist * signed_dist;
        num_measurements += 1.0;

        t += t_step;
    }

    sum_error_squared / (num_measurements + f64::MIN_POSITIVE)
}

///
/// The point halfway along the curve of a biarc
///
/// For biarcs made up of two arcs this is the point where they meet. For single arcs, it's the point on the arc halfway
/// between its ends.
///
pub fn biarc_curve_mid_point(biarc: &Biarc) -> Coord2 {
    match (biarc.is_single_arc(), biarc.shape0()) {
        (true, CircleOrLine::Circle(circle)) => {
            let center = circle.center;
            let arm = (biarc.point0() + biarc.point1() - center * 2.0).to_unit_vector() * circle.radius;

            // Arcs that turn away from the chord are more than 180 degrees, so their mid point is on the far side of the center
            if biarc.endpoints().chord().dot(&biarc.tangent0()) >= 0.0 {
                center + arm
            } else {
                center - arm
            }
        }

        _ => biarc.mid_point(),
    }
}

///
/// Finds the distance from the mid-point of a biarc to the nearest sample on a section of a line
///
/// Biarcs that fit well at their sample points can still bulge away from the line between them: this detects those by
/// checking how close the line comes to the point halfway along the biarc.
///
pub fn min_dist_to_biarc_mid_point(
    line: &FreeformLine,
    t_start: f64,
    t_step: f64,
    t_end: f64,
    biarc: &Biarc,
) -> f64 {
    assert!(t_step > 0.0, "Distance measurement step must be positive");

    let mid_point = biarc_curve_mid_point(biarc);
    let mut min_dist_squared = f64::MAX;
    let mut t = t_start;

    while t < t_end {
        let dist_squared = (line.point_at(t) - mid_point).magnitude_squared();
        min_dist_squared = f64::min(min_dist_squared, dist_squared);

        t += t_step;
    }

    min_dist_squared.sqrt()
}
