/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Coord2` is the 2D point and vector type used throughout the crate. `Range` describes an interval of a scalar
//! value: it is mostly used to mark sections of a stroke by their distance from its start.
//!

mod coord2;
mod range;

pub use self::coord2::*;
pub use self::range::*;
