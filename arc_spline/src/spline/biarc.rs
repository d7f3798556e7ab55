/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;
use crate::shape::*;

use log::*;
use roots::{find_roots_quadratic, Roots};
use smallvec::*;

///
/// The pair of parameters that determines the shape of a biarc
///
/// `d0` and `d1` are the distances along the start and end tangents to the two internal control points of the biarc. A
/// `d1` of 0 describes a degenerate biarc made up of a single arc, whose tangent does not match the end tangent.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct DParam {
    pub d0: f64,
    pub d1: f64,
}

impl DParam {
    /// True if these parameters describe a single arc rather than a pair of arcs
    #[inline]
    pub fn is_single_arc(&self) -> bool {
        self.d1 == 0.0
    }
}

///
/// The start and end points and tangents of a biarc, which are known before its parameters are chosen
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BiarcEndpoints {
    pub point0: Coord2,
    pub tangent0: Coord2,
    pub point1: Coord2,
    pub tangent1: Coord2,
}

///
/// A pair of arcs that meet at a shared point and tangent
///
/// The child arcs are cached as `CircleOrLine` shapes, so the signed distance from a biarc to a point is measured against
/// the full circle (or line) of whichever arc the point is closest to, rather than the arc itself. This is accurate enough
/// for points near the biarc, which is all that's needed for measuring fitting errors.
///
/// Only biarcs with positive `d0` and `d1` parameters (or a `d1` of 0) are supported.
///
/// See <http://www.ryanjuckett.com/programming/biarc-interpolation/>
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Biarc {
    ends: BiarcEndpoints,
    param: DParam,

    /// Line through the mid-point that divides the points nearest to each arc
    div_line: Line,

    /// The shapes of the first and second arcs
    shape0: CircleOrLine,
    shape1: CircleOrLine,
}

impl BiarcEndpoints {
    ///
    /// The vector from the start to the end point
    ///
    #[inline]
    pub fn chord(&self) -> Coord2 {
        self.point1 - self.point0
    }

    ///
    /// Finds possible `d0, d1` parameters for biarcs between these end points
    ///
    /// There are infinitely many biarcs joining two points with two tangents, but there is a single solution for each ratio
    /// `r = d0 / d1`. `num_results` ratios are tried, spaced geometrically between `r_lower` and `r_upper` (or just a ratio
    /// of 1.0 if only one result is requested). Ratios without a positive solution are skipped.
    ///
    /// If `add_single_arc_result` is set, the parameters for the single arc joining the points (which has a tangent
    /// discontinuity at the end point) are added too, if one exists.
    ///
    pub fn find_possible_params(
        &self,
        r_lower: f64,
        r_upper: f64,
        num_results: u32,
        add_single_arc_result: bool,
    ) -> SmallVec<[DParam; 16]> {
        let v = self.chord();
        let mut result = smallvec![];

        let r_multiplier = if num_results > 1 {
            (r_upper / r_lower).powf(1.0 / ((num_results - 1) as f64 + EPSILON))
        } else {
            1.0
        };
        let mut r = if num_results > 1 { r_lower } else { 1.0 };

        for _ in 0..num_results {
            if let Some(d1) = self.solve_d1(r) {
                if d1 > EPSILON {
                    result.push(DParam { d0: r * d1, d1 });
                }
            }

            r *= r_multiplier;
        }

        if add_single_arc_result {
            // Negative d0 values are allowed here: they describe arcs of more than 180 degrees
            let v_dot_t0 = v.dot(&self.tangent0);

            if v_dot_t0.abs() > f64::MIN_POSITIVE {
                let d0 = v.dot(&v) / (2.0 * v_dot_t0);

                if d0.abs() > EPSILON {
                    result.push(DParam { d0, d1: 0.0 });
                }
            }
        }

        result
    }

    ///
    /// Solves for the `d1` parameter of the biarc where `d0 = r * d1`
    ///
    /// The two control points are `d0 + d1` apart, which gives `a*d1^2 + b*d1 + c = 0` with the coefficients below. `a`
    /// is 0 when the tangents are parallel, in which case the equation becomes linear.
    ///
    pub fn solve_d1(&self, r: f64) -> Option<f64> {
        let (t0, t1) = (self.tangent0, self.tangent1);
        let v = self.chord();
        let t = t0 * r + t1;

        let a = r * (1.0 - t0.dot(&t1));
        let b = v.dot(&t);
        let c = -0.5 * v.dot(&v);

        if a.abs() > EPSILON {
            let largest_root = match find_roots_quadratic(a, b, c) {
                Roots::One([x]) => Some(x),
                Roots::Two([x1, x2]) => Some(f64::max(x1, x2)),
                _ => None,
            };

            match largest_root {
                Some(d1) if d1 >= 0.0 => {
                    if d1 < MAX_D_PARAM {
                        return Some(d1);
                    }
                }

                _ => {
                    warn!("No biarc solution for ratio {} (a = {}, b = {}, c = {})", r, a, b, c);
                    return None;
                }
            }
        }

        if b.abs() > f64::MIN_POSITIVE {
            let d1 = -c / b;

            if d1 < MAX_D_PARAM {
                return Some(d1);
            }
        }

        None
    }

    ///
    /// Creates the biarc with these end points and the specified parameters
    ///
    pub fn to_biarc(&self, param: DParam) -> Biarc {
        Biarc::new(*self, param)
    }
}

impl Biarc {
    ///
    /// Creates a biarc from its end points and parameters
    ///
    pub fn new(ends: BiarcEndpoints, param: DParam) -> Biarc {
        test_assert!(param.d1 >= 0.0);

        // The shapes are cached so measuring the distance to the biarc is fast
        let mid_point = mid_point(&ends, &param);
        let mid_tangent = q0(&ends, &param).direction_to(&q1(&ends, &param));

        let shape0 = fit_circle_or_line(ends.point0, ends.tangent0, mid_point);
        let shape1 = fit_circle_or_line(ends.point1, ends.tangent1, mid_point);
        let div_line = Line::from_point_and_normal(mid_point, mid_tangent);

        Biarc {
            ends,
            param,
            div_line,
            shape0,
            shape1,
        }
    }

    ///
    /// Creates a straight biarc from one point to another (both arcs are straight lines along the chord)
    ///
    /// The two points must be different.
    ///
    pub fn straight(point0: Coord2, point1: Coord2) -> Biarc {
        assert!(point0.distance_to(&point1) > EPSILON, "Cannot create a straight biarc between identical points");

        let direction = point0.direction_to(&point1);
        let quarter_length = point0.distance_to(&point1) * 0.25;

        let ends = BiarcEndpoints {
            point0,
            tangent0: direction,
            point1,
            tangent1: direction,
        };

        Biarc::new(
            ends,
            DParam {
                d0: quarter_length,
                d1: quarter_length,
            },
        )
    }

    #[inline]
    pub fn endpoints(&self) -> &BiarcEndpoints {
        &self.ends
    }

    #[inline]
    pub fn point0(&self) -> Coord2 {
        self.ends.point0
    }

    #[inline]
    pub fn tangent0(&self) -> Coord2 {
        self.ends.tangent0
    }

    #[inline]
    pub fn point1(&self) -> Coord2 {
        self.ends.point1
    }

    #[inline]
    pub fn tangent1(&self) -> Coord2 {
        self.ends.tangent1
    }

    #[inline]
    pub fn param(&self) -> DParam {
        self.param
    }

    /// True if this is a degenerate biarc made up of a single arc
    #[inline]
    pub fn is_single_arc(&self) -> bool {
        self.param.is_single_arc()
    }

    /// The shape of the first arc
    #[inline]
    pub fn shape0(&self) -> &CircleOrLine {
        &self.shape0
    }

    /// The shape of the second arc (a circle with a radius of 0 for single arcs)
    #[inline]
    pub fn shape1(&self) -> &CircleOrLine {
        &self.shape1
    }

    /// The internal control point along the start tangent
    #[inline]
    pub fn q0(&self) -> Coord2 {
        q0(&self.ends, &self.param)
    }

    /// The internal control point along the end tangent
    #[inline]
    pub fn q1(&self) -> Coord2 {
        q1(&self.ends, &self.param)
    }

    ///
    /// The point where the two arcs meet
    ///
    pub fn mid_point(&self) -> Coord2 {
        mid_point(&self.ends, &self.param)
    }

    ///
    /// The tangent at the point where the two arcs meet
    ///
    pub fn mid_tangent(&self) -> Coord2 {
        test_assert!(self.param.d0 >= 0.0 || self.param.d1 == 0.0);

        self.q0().direction_to(&self.q1())
    }

    ///
    /// The actual tangent of the curve at its end point
    ///
    /// This is `tangent1` except for single arcs, where it's the start tangent reflected across the chord's normal.
    ///
    pub fn end_tangent(&self) -> Coord2 {
        if self.is_single_arc() {
            let chord_direction = self.ends.chord().to_unit_vector();
            let t0 = self.ends.tangent0;

            chord_direction * (2.0 * t0.dot(&chord_direction)) - t0
        } else {
            self.ends.tangent1
        }
    }
}

impl SignedDistance for Biarc {
    ///
    /// The signed distance from the arc nearest to the point
    ///
    fn signed_distance_to(&self, point: Coord2) -> f64 {
        // Points on the same side of the dividing line as the start point use the first arc (as do all points for single arcs)
        let sign = self.div_line.signed_distance_to(self.ends.point0)
            * self.div_line.signed_distance_to(point)
            * self.param.d1;

        if sign >= 0.0 {
            self.shape0.signed_distance_to(point)
        } else {
            self.shape1.signed_distance_to(point)
        }
    }
}

#[inline]
fn q0(ends: &BiarcEndpoints, param: &DParam) -> Coord2 {
    ends.point0 + ends.tangent0 * param.d0
}

#[inline]
fn q1(ends: &BiarcEndpoints, param: &DParam) -> Coord2 {
    ends.point1 - ends.tangent1 * param.d1
}

#[inline]
fn mid_point(ends: &BiarcEndpoints, param: &DParam) -> Coord2 {
    Coord2::lerp(
        q0(ends, param),
        q1(ends, param),
        param.d0 / (param.d0 + param.d1 + f64::MIN_POSITIVE),
    )
}
