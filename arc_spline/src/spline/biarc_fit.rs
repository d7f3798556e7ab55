/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::biarc::*;
use super::config::*;
use super::error_metric::*;

use crate::consts::*;
use crate::freeform::*;
use crate::geo::*;

use log::*;

///
/// A biarc that could be the next one in the fit of a section
///
#[derive(Clone, Copy, Debug)]
struct Candidate {
    biarc: Biarc,

    /// Where the biarc ends on the line
    t: f64,

    /// Mean squared error between the biarc and the line
    error: f64,
}

///
/// Converts a section of a line into a series of biarcs
///
/// Starting at the beginning of the section, this tries biarcs ending at points every `t_step` units along the line, with
/// a range of ratios between the lengths of their two arcs. The longest one within the error tolerance is kept, except
/// that a longer biarc is rejected if its error has grown by more than `dist_to_error_threshold` compared to the best
/// shorter one. The next biarc then starts where the previous one ended, until the end of the section is reached.
///
/// The final biarc of a section may be a single arc. These are accepted by comparing the tangent at their end to the line
/// rather than by their mean error, and are preferred to biarcs of the same length.
///
/// The bounds of the line should be set to the section before calling this, so that the tangents at the end of the section
/// are not influenced by the parts of the line outside it.
///
pub fn convert_line_to_biarcs(line: &FreeformLine, input: &BiarcsInput, section: Range) -> Vec<Biarc> {
    assert!(input.t_step > 0.0, "Biarc step must be positive");

    let mut biarcs = vec![];
    let mut t_start = section.start;
    let mut point0 = line.point_at(t_start);
    let mut tangent0 = line.tangent_at(t_start);

    while t_start < section.end {
        match fit_next_biarc(line, input, section, t_start, point0, tangent0) {
            Some(next) => {
                trace!(
                    "Biarc from t = {} to t = {} (error {}, single arc: {})",
                    t_start,
                    next.t,
                    next.error,
                    next.biarc.is_single_arc()
                );

                t_start = next.t;
                point0 = next.biarc.point1();
                tangent0 = next.biarc.tangent1();
                biarcs.push(next.biarc);
            }

            None => {
                debug!("Section {:?} could not be fitted past t = {}", section, t_start);
                break;
            }
        }
    }

    biarcs
}

///
/// Finds the best biarc starting at the specified point
///
fn fit_next_biarc(
    line: &FreeformLine,
    input: &BiarcsInput,
    section: Range,
    t_start: f64,
    point0: Coord2,
    tangent0: Coord2,
) -> Option<Candidate> {
    let is_whole_section = t_start == section.start;

    // Best biarc within the tolerance, and the lowest-error biarc in case nothing is in tolerance
    let mut best: Option<Candidate> = None;
    let mut lowest_error: Option<Candidate> = None;
    let mut t = t_start;

    loop {
        t = f64::min(t + input.t_step, section.end);

        let at_end = t >= section.end;
        let suspend_balancing = section.end - t <= input.end_of_line_okay_factor * input.t_step;

        let ends = BiarcEndpoints {
            point0,
            tangent0,
            point1: line.point_at(t),
            tangent1: line.tangent_at(t),
        };
        let params = ends.find_possible_params(
            input.min_biarc_ratio,
            input.max_biarc_ratio,
            input.num_biarc_ratio_samples,
            at_end && input.allow_half_arc_at_section_end,
        );

        for param in params {
            let biarc = ends.to_biarc(param);
            let error = mean_squared_error(line, t_start, input.t_step, t, &biarc);
            let candidate = Candidate { biarc, t, error };

            let within_tolerance = if param.is_single_arc() {
                end_angle_error(&biarc) <= end_angle_tolerance(input, is_whole_section)
            } else {
                if lowest_error.map(|lowest| error < lowest.error).unwrap_or(true) {
                    lowest_error = Some(candidate);
                }

                error <= input.max_mean_error
            };

            if within_tolerance
                && is_better(&candidate, best.as_ref(), suspend_balancing, input)
                && mid_point_is_near_line(line, t_start, &candidate, input)
            {
                best = Some(candidate);
            }
        }

        if at_end {
            break;
        }
    }

    best.or_else(|| {
        if let Some(lowest_error) = lowest_error {
            // Nothing fits within the tolerance: use whatever fits best so the fit can continue
            debug!(
                "No biarc within tolerance after t = {}, using the lowest error biarc (error {})",
                t_start, lowest_error.error
            );

            return Some(lowest_error);
        }

        let end_point = line.point_at(section.end);
        if point0.distance_to(&end_point) > EPSILON {
            warn!(
                "No biarc parameters found after t = {}, joining the end of the section with a straight line",
                t_start
            );

            let biarc = Biarc::straight(point0, end_point);
            let error = mean_squared_error(line, t_start, input.t_step, section.end, &biarc);

            Some(Candidate {
                biarc,
                t: section.end,
                error,
            })
        } else {
            None
        }
    })
}

///
/// The tolerance for the tangent error at the end of a single arc
///
fn end_angle_tolerance(input: &BiarcsInput, is_whole_section: bool) -> f64 {
    if is_whole_section && input.allow_extra_tolerance_for_single_arc_sections {
        input.end_angle_tolerance_for_single_arc_section
    } else {
        input.end_angle_tolerance
    }
}

///
/// The angle in degrees between the tangent at the end of a biarc and the tangent of the line it was fitted to
///
fn end_angle_error(biarc: &Biarc) -> f64 {
    biarc
        .end_tangent()
        .angle_to(&biarc.tangent1())
        .abs()
        .to_degrees()
}

///
/// Errors below `MIN_BALANCED_ERROR` are too small to see, so they're all treated as the same when balancing
///
#[inline]
fn balanced_error(error: f64) -> f64 {
    f64::max(error, MIN_BALANCED_ERROR)
}

///
/// True if a candidate biarc should replace the current best one
///
fn is_better(
    candidate: &Candidate,
    best: Option<&Candidate>,
    suspend_balancing: bool,
    input: &BiarcsInput,
) -> bool {
    let best = match best {
        Some(best) => best,
        None => return true,
    };

    if candidate.t > best.t {
        // Longer biarcs are better, unless they increase the error too much
        suspend_balancing
            || balanced_error(candidate.error)
                <= balanced_error(best.error) * input.dist_to_error_threshold
    } else if candidate.biarc.is_single_arc() != best.biarc.is_single_arc() {
        candidate.biarc.is_single_arc()
    } else {
        candidate.error < best.error
    }
}

///
/// False if the middle of a biarc has drifted too far from the line
///
fn mid_point_is_near_line(line: &FreeformLine, t_start: f64, candidate: &Candidate, input: &BiarcsInput) -> bool {
    let mid_point_dist = min_dist_to_biarc_mid_point(line, t_start, MAX_SPLINE_GAP, candidate.t, &candidate.biarc);

    mid_point_dist <= input.max_dist_to_mid_point
}
