/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic shapes used for fitting
//!
//! `Line` is an infinite line and `Circle` is a full circle: both can report the signed distance to a point, which is
//! how the error between a stroke and the shapes fitted to it is measured.
//!
//! `fit_circle_or_line()` finds the circle that passes through two points with a given tangent at the first point. When
//! the circle would be too large to represent accurately it falls back to a straight line, so the result is a
//! `CircleOrLine`.
//!
//! ```
//! # use flo_arc_spline::*;
//! # use flo_arc_spline::shape::*;
//! #
//! let shape = fit_circle_or_line(Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(10.0, 10.0));
//!
//! assert!(shape.signed_distance_to(Coord2(10.0, 10.0)).abs() < 1e-6);
//! ```
//!

mod circle;
mod circle_or_line;
mod line;
mod signed_distance;

pub use self::circle::*;
pub use self::circle_or_line::*;
pub use self::line::*;
pub use self::signed_distance::*;
