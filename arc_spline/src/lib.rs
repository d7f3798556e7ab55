/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_arc_spline
//!
//! `flo_arc_spline` converts freehand strokes, as recorded from a mouse or a pen, into splines made up of
//! circular arcs and straight segments. Strokes are noisy and densely sampled, and the splines generated
//! here approximate them within a bounded error using a handful of analytic shapes that are easy to render,
//! edit and hit-test.
//!
//! ```
//! # use std::rc::*;
//! # use flo_arc_spline::*;
//! # use flo_arc_spline::freeform::*;
//! # use flo_arc_spline::spline::*;
//! #
//! let mut stroke = FreeformLine::new();
//! for x in 0..=100 {
//!     stroke.add_point(Coord2(x as f64, 20.0));
//! }
//!
//! let spline = ArcSpline::new(Rc::new(stroke), Rc::new(ProcessingInput::default()));
//! assert!(spline.display_shapes().len() == 1);
//! ```
//!
//! Fitting happens in a few stages:
//!
//! * Corners (points where the tangent changes abruptly) are found with `find_corners()`
//! * The sections between corners are tested with `is_segment()` to see if they're straight
//! * Any remaining sections are turned into a series of biarcs by `convert_line_to_biarcs()`
//! * `ArcSpline` runs all of these stages and turns the results into `SplineElement`s
//!
//! The algorithm is tuned for strokes where one unit corresponds to one pixel on the screen: it works well
//! for lines that span hundreds of units and have local curvature radii of tens of units. Strokes should be
//! scaled to their on-screen size for consistent results.
//!

#![allow(clippy::needless_range_loop)]

#[macro_use]
extern crate serde_derive;

#[macro_use]
mod test_assert;

mod consts;
pub mod freeform;
pub mod geo;
pub mod session;
pub mod shape;
pub mod spline;

pub use self::consts::*;
pub use self::geo::*;
