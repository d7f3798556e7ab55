/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

///
/// A stroke parametrized by the distance travelled along it
///
/// The samples are stored in order of their 't' value, with a sentinel sample at `-A_LOT` and another at `A_LOT` that
/// repeat the first and last real points. Queries past either end of the line therefore return the end points without
/// needing any special cases.
///
#[derive(Clone, PartialEq, Debug)]
pub struct FreeformLine {
    /// Distance either side of a point that is used to estimate the tangent there. Must be greater than `EPSILON`.
    pub half_smoothing_spread: f64,

    /// The samples on this line, as `(t, point)` pairs, including the two sentinels
    pub(super) points: Vec<(f64, Coord2)>,

    /// The t value of the last real sample
    pub(super) length: f64,

    /// Tangent calculations only sample points within this range
    bounds: Range,

    /// Distance from the ends of the bounds where the tangent stops changing
    clip_margin: f64,
}

impl Default for FreeformLine {
    fn default() -> FreeformLine {
        FreeformLine::new()
    }
}

impl FreeformLine {
    ///
    /// Creates a new line with no points and the default smoothing spread
    ///
    pub fn new() -> FreeformLine {
        FreeformLine::with_smoothing_spread(10.0)
    }

    ///
    /// Creates a new line with no points, which estimates tangents using points the specified distance either side of the
    /// point being queried
    ///
    pub fn with_smoothing_spread(half_smoothing_spread: f64) -> FreeformLine {
        FreeformLine {
            half_smoothing_spread,
            points: vec![],
            length: 0.0,
            bounds: Range::new(-A_LOT, A_LOT),
            clip_margin: 0.0,
        }
    }

    ///
    /// Creates a line from a list of samples that have already been parametrized
    ///
    /// The samples must be in increasing order of t, and the first sample is expected to be at `t = 0`.
    ///
    pub(super) fn from_samples(
        half_smoothing_spread: f64,
        samples: Vec<(f64, Coord2)>,
    ) -> FreeformLine {
        let mut line = FreeformLine::with_smoothing_spread(half_smoothing_spread);

        if let (Some(first), Some(last)) = (samples.first().copied(), samples.last().copied()) {
            line.points.reserve(samples.len() + 2);
            line.points.push((-A_LOT, first.1));
            line.points.extend(samples);
            line.points.push((A_LOT, last.1));
            line.length = last.0;
        }

        line
    }

    ///
    /// Appends a point to the end of this line
    ///
    pub fn add_point(&mut self, point: Coord2) {
        if self.points.is_empty() {
            self.points = vec![(-A_LOT, point), (0.0, point), (A_LOT, point)];
            self.length = 0.0;
            return;
        }

        let sentinel_idx = self.points.len() - 1;
        let (last_t, last_point) = self.points[sentinel_idx - 1];
        let t = last_t + last_point.distance_to(&point);

        if t > last_t {
            self.points.insert(sentinel_idx, (t, point));
        } else {
            // Repeated points map to the same t value, so just replace the last one
            self.points[sentinel_idx - 1].1 = point;
        }

        // The end sentinel always repeats the last point
        let sentinel_idx = self.points.len() - 1;
        self.points[sentinel_idx].1 = point;
        self.length = t;
    }

    ///
    /// The total length of this line
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// True if no points have been added to this line
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// The real samples on this line (excluding the sentinels), as `(t, point)` pairs
    ///
    pub fn samples(&self) -> &[(f64, Coord2)] {
        if self.points.len() < 2 {
            &[]
        } else {
            &self.points[1..self.points.len() - 1]
        }
    }

    ///
    /// The point that is `t` units along this line from its start
    ///
    /// Values of `t` before the start or after the end of the line return the first or last point.
    ///
    pub fn point_at(&self, t: f64) -> Coord2 {
        assert!(!self.points.is_empty(), "Cannot query a point on an empty line");

        // Find the first sample after t: the sentinels mean there's nearly always a sample before and after
        let next_idx = self.points.partition_point(|(sample_t, _)| *sample_t <= t);

        if next_idx == 0 {
            return self.points[0].1;
        } else if next_idx >= self.points.len() {
            return self.points[self.points.len() - 1].1;
        }

        let (prev_t, prev_point) = self.points[next_idx - 1];
        let (next_t, next_point) = self.points[next_idx];
        let local_t = (t - prev_t) / (next_t - prev_t);

        Coord2::lerp(prev_point, next_point, local_t)
    }

    ///
    /// An estimate of the tangent of this line at `t` units along it
    ///
    /// This is the direction between two points `half_smoothing_spread` units either side of `t`. These points are
    /// clipped to within the bounds of the line, and the margin means that the tangent stops changing when `t` is
    /// close to the end of the bounds rather than being measured over an ever-shorter distance.
    ///
    pub fn tangent_at(&self, t: f64) -> Coord2 {
        assert!(
            self.half_smoothing_spread > EPSILON,
            "Smoothing spread must be positive"
        );

        let bounds = &self.bounds;
        let t_a = clip(
            t - self.half_smoothing_spread,
            bounds.start,
            bounds.end - self.clip_margin,
        );
        let t_b = clip(
            t + self.half_smoothing_spread,
            bounds.start + self.clip_margin,
            bounds.end,
        );

        let a = self.point_at(t_a);
        let b = self.point_at(t_b);

        (b - a).to_unit_vector()
    }

    ///
    /// The range that tangent calculations are clipped to
    ///
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    ///
    /// Restricts the points used for tangent calculations to a range
    ///
    pub fn set_bounds(&mut self, range: Range) {
        assert!(range.is_valid(), "Cannot clip tangents to an invalid range");

        self.bounds = range;
        self.clip_margin = f64::min(2.0 * self.half_smoothing_spread, range.length());
    }

    ///
    /// Removes any restriction on the points used for tangent calculations
    ///
    pub fn clear_bounds(&mut self) {
        self.bounds = Range::new(-A_LOT, A_LOT);
        self.clip_margin = 0.0;
    }
}

///
/// Clips a value to a range
///
#[inline]
fn clip(value: f64, min: f64, max: f64) -> f64 {
    test_assert!(min <= max + EPSILON);

    f64::min(f64::max(min, value), max)
}
