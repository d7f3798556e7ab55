/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::config::*;

use crate::consts::*;
use crate::freeform::*;
use crate::geo::*;

use log::*;

///
/// Finds the corners of a line
///
/// A corner is a point where the tangent changes significantly, but stays relatively constant either side of it. Four
/// tangents are measured around each point tested: the angle between the two inner tangents must be large, and the
/// angles between each inner tangent and the outer tangent on the same side must be small. Sections of consecutive
/// positive tests are then reduced to a single point for each corner.
///
/// Only the part of the line within its bounds is searched (or the whole line, if it has no bounds). The result is a list of zero-length ranges, one for each
/// corner, in order along the line.
///
pub fn find_corners(line: &FreeformLine, input: &CornersInput) -> Vec<Range> {
    assert!(input.t_step > 0.0, "Corner step must be positive");

    // Fresh lines are unbounded, so the scan is clipped to the line itself
    let bounds = line.bounds();
    let scan_start = f64::max(bounds.start, 0.0);
    let scan_end = f64::min(bounds.end, line.length());
    let offsets = measurement_offsets(line, input);
    let margin = (input.outer_inter_measurement_factor + 0.5 * input.inner_inter_measurement_factor).ceil();

    let mut sections = vec![];
    let mut corner_section = Range::invalid();
    let mut t = scan_start + margin;

    while t <= scan_end - margin {
        if is_corner_candidate(line, input, &offsets, t) {
            corner_section.include(t);
        } else {
            end_corner_section(&mut sections, &mut corner_section, input);
        }

        t += input.t_step;
    }
    end_corner_section(&mut sections, &mut corner_section, input);

    trace!("Found {} corner sections", sections.len());

    sections
        .into_iter()
        .map(|section| {
            let t = best_corner_point(line, input, &offsets, section);
            Range::new(t, t)
        })
        .collect()
}

///
/// The offsets from a point where the four tangents used to test for a corner are measured
///
fn measurement_offsets(line: &FreeformLine, input: &CornersInput) -> [f64; 4] {
    let inner = input.inner_inter_measurement_factor;
    let outer = input.outer_inter_measurement_factor;
    let spread = line.half_smoothing_spread;

    [
        -(outer + inner) * spread,
        -inner * spread,
        inner * spread,
        (inner + outer) * spread,
    ]
}

///
/// True if the tangent changes sharply at `t` but not on the arms either side of it
///
fn is_corner_candidate(line: &FreeformLine, input: &CornersInput, offsets: &[f64; 4], t: f64) -> bool {
    let tangents = [
        line.tangent_at(t + offsets[0]),
        line.tangent_at(t + offsets[1]),
        line.tangent_at(t + offsets[2]),
        line.tangent_at(t + offsets[3]),
    ];

    let angles = [
        tangents[0].angle_to(&tangents[1]).abs().to_degrees(),
        tangents[1].angle_to(&tangents[2]).abs().to_degrees(),
        tangents[2].angle_to(&tangents[3]).abs().to_degrees(),
    ];

    // The outer angles must be small compared to the inner one, so curves where the tangent changes steadily aren't corners
    angles[0] < input.outer_max_angle_in_deg
        && angles[1] > input.inner_min_angle_in_deg
        && angles[2] < input.outer_max_angle_in_deg
        && angles[0] / angles[1] < 1.0 / 3.0
        && angles[2] / angles[1] < 1.0 / 3.0
}

///
/// Stores the current corner section if it's long enough, merging it with the previous one if they're close together
///
fn end_corner_section(sections: &mut Vec<Range>, corner_section: &mut Range, input: &CornersInput) {
    if corner_section.is_valid()
        && corner_section.length() >= input.min_number_test_positives_in_series as f64
    {
        let merge_distance = input.max_dist_between_corners_to_merge as f64;

        match sections.last_mut() {
            Some(previous) if previous.end + merge_distance >= corner_section.start => {
                previous.end = corner_section.end;
            }

            _ => sections.push(*corner_section),
        }
    }

    corner_section.invalidate();
}

///
/// Picks the point that best represents a corner section
///
/// This is the point that's furthest along the direction that the tangent changes by across the corner. The section is
/// inflated first, as chains of short segments close to the smoothing spread in length can otherwise miss the true corner.
///
fn best_corner_point(line: &FreeformLine, input: &CornersInput, offsets: &[f64; 4], section: Range) -> f64 {
    let tangent0 = line.tangent_at(section.start + offsets[1]);
    let tangent1 = line.tangent_at(section.end + offsets[2]);
    let search_dir = tangent0 - tangent1;

    let mut best_t = 0.5 * (section.start + section.end);

    if search_dir.magnitude_squared() > EPSILON2 {
        let bounds = line.bounds();
        let mut search_section = section;
        search_section.inflate(2.0 * input.inner_inter_measurement_factor * line.half_smoothing_spread);
        search_section.start = f64::max(search_section.start, f64::max(bounds.start, 0.0));
        search_section.end = f64::min(search_section.end, f64::min(bounds.end, line.length()));

        let mut furthest_along_dir = -f64::MAX;
        let mut t = search_section.start;

        while t <= search_section.end {
            let along_dir = search_dir.dot(&line.point_at(t));

            if along_dir > furthest_along_dir {
                best_t = t;
                furthest_along_dir = along_dir;
            }

            t += 1.0;
        }
    }

    trace!("Corner section {:?} reduced to t = {}", section, best_t);

    best_t
}
