/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::config::*;
use super::error_metric::*;

use crate::consts::*;
use crate::freeform::*;
use crate::geo::*;
use crate::shape::*;

///
/// The largest mean squared error allowed for a straight segment with the specified chord length
///
/// The allowed squared error grows in proportion to the length of the segment.
///
pub fn segment_error_limit(chord_length: f64, input: &SegmentsInput) -> f64 {
    let max_error = input.max_mean_error_at_reference_length;

    max_error * max_error * (chord_length / input.reference_segment_length)
}

///
/// Checks whether or not a straight segment is a good approximation of a section of a line
///
/// Returns whether or not the section is a segment, along with the mean squared error between the section and the straight
/// line through its end points. Sections whose end points are the same are never segments.
///
pub fn is_segment(line: &FreeformLine, segment_bounds: Range, input: &SegmentsInput) -> (bool, f64) {
    test_assert!(segment_bounds.start >= 0.0 && segment_bounds.end <= line.length());

    let p0 = line.point_at(segment_bounds.start);
    let p1 = line.point_at(segment_bounds.end);

    // A section that ends where it starts is a loop rather than a segment
    if p0.distance_to(&p1) <= EPSILON {
        return (false, f64::MAX);
    }

    let chord = Line::between(p0, p1);

    let mean_error_squared = mean_squared_error(
        line,
        segment_bounds.start,
        input.t_step,
        segment_bounds.end,
        &chord,
    );

    let is_segment = mean_error_squared <= segment_error_limit(p0.distance_to(&p1), input);

    (is_segment, mean_error_squared)
}
