/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Drawing sessions
//!
//! A `StrokeSession` holds the state of a simple drawing tool: the stroke currently being drawn, the splines fitted to
//! the strokes that have been finished, and the spline that is selected. Strokes are recorded with `begin_stroke()`,
//! `extend_stroke()` and `end_stroke()`, and the most recent spline near a point can be found for selection.
//!
//! Sessions can be saved to and loaded from a stream. Only the freeform lines are stored: splines are fitted again when
//! a session is loaded.
//!

mod stroke_session;

pub use self::stroke_session::*;
