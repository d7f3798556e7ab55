/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Values closer together than this are considered to be the same
pub const EPSILON: f64 = 1e-6;

/// Square of `EPSILON`, for comparing squared lengths
pub const EPSILON2: f64 = EPSILON * EPSILON;

/// A very large value, used instead of `f64::MAX` so that dividing by small numbers cannot overflow
pub const A_LOT: f64 = 1e10;

/// Shapes or gaps shorter than this are too small to display (and are usually merged into their neighbours)
pub const MAX_SPLINE_GAP: f64 = 1.0;

/// Largest biarc 'd' parameter that is considered to be a valid solution
pub const MAX_D_PARAM: f64 = 10000.0;

/// Circles with a larger radius than this are fitted as straight lines
pub const MAX_ARC_RADIUS: f64 = 10000.0;

/// Largest ratio of radius to chord length that a fitted circle can have (larger circles are numerically unstable)
pub const MAX_ARC_RADIUS_TO_CHORD_LENGTH_RATIO: f64 = 1000.0;

/// Mean squared errors below this are considered equivalent when balancing biarc length against error (deviations
/// smaller than the display gap can't be seen)
pub const MIN_BALANCED_ERROR: f64 = MAX_SPLINE_GAP * MAX_SPLINE_GAP;
