/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate flo_arc_spline;
extern crate rand;
extern crate serde_json;

mod arc_spline;
mod biarc_fit;
mod element;
mod segments;
