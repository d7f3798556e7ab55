/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Freeform lines
//!
//! A `FreeformLine` records the points of a stroke as they arrive and indexes them by the distance travelled from the
//! start of the stroke (the 't' value). Points and smoothed tangents can then be queried at any distance along the line.
//!
//! Mouse input is noisy and consecutive points are often only a pixel or so apart, so the tangent at a point is estimated
//! from a secant between two points `half_smoothing_spread` units either side of it. Setting the bounds of the line
//! restricts where those two points can be taken from, which lets a section of a line be treated as if it were the whole
//! line.
//!
//! Lines can be written as text using `Display` and read back using `FromStr` or `FreeformLine::read_tokens()`.
//!

mod freeform_line;
mod load_error;
mod serialize;

pub use self::freeform_line::*;
pub use self::load_error::*;
