/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Generating arc splines from freeform lines
//!
//! `ArcSpline` converts a `FreeformLine` into a list of `SplineElement`s, each of which is either a circular arc or
//! a straight segment. The conversion is performed in stages, each of which is also available as a separate function:
//!
//! * `find_corners()` finds the points where the line's tangent changes abruptly
//! * `is_segment()` checks whether the section between two corners is close enough to a straight line
//! * `convert_line_to_biarcs()` fits the remaining sections with biarcs: pairs of arcs that meet at a shared point
//!   and tangent. Starting at the beginning of a section, it repeatedly fits the longest biarc that stays within the
//!   error tolerance and then continues from its end point.
//!
//! The thresholds used by each stage are set in a `ProcessingInput`.
//!

mod arc_spline;
mod biarc;
mod biarc_fit;
mod config;
mod corners;
mod element;
mod error_metric;
mod segments;

pub use self::arc_spline::*;
pub use self::biarc::*;
pub use self::biarc_fit::*;
pub use self::config::*;
pub use self::corners::*;
pub use self::element::*;
pub use self::error_metric::*;
pub use self::segments::*;
