/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::strokes::*;

use flo_arc_spline::freeform::*;
use flo_arc_spline::spline::*;
use flo_arc_spline::*;

fn bump(height: f64) -> FreeformLine {
    let mut line = FreeformLine::new();

    for x in 0..=100 {
        let x = x as f64;
        line.add_point(Coord2(x, height * (1.0 - (x - 50.0).abs() / 50.0)));
    }

    line
}

#[test]
fn straight_line_is_segment() {
    let line = straight_line();
    let (is_segment, error) = is_segment(&line, Range::new(0.0, line.length()), &SegmentsInput::default());

    assert!(is_segment);
    assert!(error < 1e-12);
}

#[test]
fn part_of_straight_line_is_segment() {
    let line = l_shape();
    let (is_segment, _) = is_segment(&line, Range::new(5.0, 45.0), &SegmentsInput::default());

    assert!(is_segment);
}

#[test]
fn circular_arc_is_not_segment() {
    let line = circular_arc();
    let (is_segment, error) = is_segment(&line, Range::new(0.0, line.length()), &SegmentsInput::default());

    assert!(!is_segment);
    assert!(error > segment_error_limit(69.0, &SegmentsInput::default()));
}

#[test]
fn loop_is_not_segment() {
    let mut line = FreeformLine::new();
    line.add_point(Coord2(0.0, 0.0));
    line.add_point(Coord2(10.0, 0.0));
    line.add_point(Coord2(10.0, 10.0));
    line.add_point(Coord2(0.0, 0.0));

    let (is_segment, _) = is_segment(&line, Range::new(0.0, line.length()), &SegmentsInput::default());

    assert!(!is_segment);
}

#[test]
fn error_limit_grows_with_length() {
    let input = SegmentsInput::default();

    assert!((segment_error_limit(20.0, &input) - 6.25).abs() < 1e-12);
    assert!((segment_error_limit(40.0, &input) - 12.5).abs() < 1e-12);
    assert!(segment_error_limit(10.0, &input) < segment_error_limit(11.0, &input));
}

#[test]
fn segment_acceptance_is_monotonic_in_error() {
    let input = SegmentsInput::default();
    let mut last_error = -1.0;
    let mut rejected = false;

    for step in 0..30 {
        let height = step as f64 * 0.5;
        let line = bump(height);
        let (is_segment, error) = is_segment(&line, Range::new(0.0, line.length()), &input);

        // Chord length is always 100, so a larger error can never turn a rejection into an acceptance
        assert!(error >= last_error, "Error decreased at height {}", height);
        assert!(!(rejected && is_segment), "Accepted a segment at height {} after rejecting a smaller one", height);

        if !is_segment {
            rejected = true;
        }
        last_error = error;
    }

    assert!(rejected);
}
