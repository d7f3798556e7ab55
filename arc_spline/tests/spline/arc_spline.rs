/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::strokes::*;

use flo_arc_spline::freeform::*;
use flo_arc_spline::spline::*;
use flo_arc_spline::*;

use std::rc::*;

fn fit(line: FreeformLine) -> ArcSpline {
    ArcSpline::new(Rc::new(line), Rc::new(ProcessingInput::default()))
}

#[test]
fn straight_line_is_one_segment() {
    let spline = fit(straight_line());

    assert!(spline.corners().len() == 0);
    assert!(spline.display_shapes().len() == 1);

    match &*spline.display_shapes()[0] {
        SplineElement::Segment(segment) => {
            assert!(segment.p0 == Coord2(0.0, 20.0));
            assert!(segment.p1 == Coord2(100.0, 20.0));
            assert!(segment.index_in_biarc.is_none());
        }

        other => panic!("Expected a segment, found {:?}", other),
    }
}

#[test]
fn l_shape_is_two_segments() {
    let spline = fit(l_shape());

    assert!(spline.corners().len() == 1, "{:?}", spline.corners());
    assert!(spline.corners()[0].distance_to(&Coord2(50.0, 0.0)) <= 1.0);
    assert!(spline.display_shapes().len() == 2, "{:?}", spline.display_shapes());

    let segments = spline
        .display_shapes()
        .iter()
        .map(|shape| match &**shape {
            SplineElement::Segment(segment) => *segment,
            other => panic!("Expected a segment, found {:?}", other),
        })
        .collect::<Vec<_>>();

    assert!(segments[0].p0 == Coord2(0.0, 0.0));
    assert!(segments[1].p1 == Coord2(50.0, 50.0));
    assert!(segments[0].p1 == segments[1].p0);
    assert!(segments[0].p1 == spline.corners()[0]);
}

#[test]
fn circular_arc_is_one_arc() {
    let spline = fit(circular_arc());

    assert!(spline.corners().len() == 0);
    assert!(spline.display_shapes().len() == 1, "{:?}", spline.display_shapes());

    match &*spline.display_shapes()[0] {
        SplineElement::Arc(arc) => {
            assert!((arc.circle.radius - 40.0).abs() < 1.5, "Radius {}", arc.circle.radius);
            assert!((arc.sweep_angle - 120.0).abs() < 5.0, "Sweep {}", arc.sweep_angle);
            assert!(arc.index_in_biarc == Some(BiarcHalf::First));
            assert!(arc.start_point().distance_to(&Coord2(40.0, 0.0)) < 1e-6);
        }

        other => panic!("Expected an arc, found {:?}", other),
    }
}

#[test]
fn markers_for_l_shape() {
    let mut line = l_shape();
    let markers = ArcSpline::find_corners_and_segments(&mut line, &ProcessingInput::default());

    assert!(markers.len() == 3, "{:?}", markers);
    assert!(markers[0].start == 0.0);
    assert!(markers[1].length() == 0.0);
    assert!(markers[2].end == line.length());
    assert!(markers[0].end == markers[1].start);
    assert!(markers[1].end == markers[2].start);
}

#[test]
fn markers_are_sorted() {
    for seed in 0..5 {
        let mut line = jittered_stroke(seed);
        let markers = ArcSpline::find_corners_and_segments(&mut line, &ProcessingInput::default());

        for idx in 1..markers.len() {
            assert!(Range::cmp_start_end(&markers[idx - 1], &markers[idx]) != std::cmp::Ordering::Greater);
        }
    }
}

#[test]
fn shapes_cover_s_curve() {
    let line = s_curve();
    let start = line.point_at(0.0);
    let end = line.point_at(line.length());
    let spline = fit(line);
    let shapes = spline.display_shapes();

    assert!(shapes.len() >= 2);
    assert!(shapes[0].start_point().distance_to(&start) < MAX_SPLINE_GAP + 1e-6);
    assert!(shapes[shapes.len() - 1].end_point().distance_to(&end) < MAX_SPLINE_GAP + 1e-6);

    // Consecutive shapes meet (gaps are only left where a biarc half is too short to display)
    for idx in 1..shapes.len() {
        let gap = shapes[idx - 1].end_point().distance_to(&shapes[idx].start_point());
        assert!(gap < 2.0 * MAX_SPLINE_GAP, "Gap of {} between shapes {} and {}", gap, idx - 1, idx);
    }
}

#[test]
fn jittered_strokes_produce_shapes() {
    for seed in 0..5 {
        let line = jittered_stroke(seed);
        let spline = fit(line);

        assert!(spline.display_shapes().len() > 0);

        for shape in spline.display_shapes().iter() {
            let start = shape.start_point();
            let end = shape.end_point();

            assert!(start.x().is_finite() && start.y().is_finite());
            assert!(end.x().is_finite() && end.y().is_finite());
        }
    }
}

#[test]
fn stroke_near_its_spline() {
    let line = s_curve();
    let spline = fit(line.clone());

    // Every point on the stroke should be near some element of the spline
    for (_, point) in line.samples().iter() {
        let nearest = spline
            .display_shapes()
            .iter()
            .map(|shape| shape.distance_to(*point))
            .fold(f64::MAX, f64::min);

        assert!(nearest < 10.0, "{:?} is {} from the spline", point, nearest);
    }
}

#[test]
fn recreate_with_new_settings() {
    let mut spline = fit(l_shape());

    // Corners need a much sharper angle with these settings, so the L becomes a curve instead
    let mut input = ProcessingInput::default();
    input.corners.inner_min_angle_in_deg = 120.0;
    let input = Rc::new(input);

    spline.recreate_spline(Some(Rc::clone(&input)));

    assert!(Rc::ptr_eq(spline.processing_input(), &input));
    assert!(spline.corners().len() == 0);
    assert!(spline.display_shapes().len() > 0);
    assert!(spline
        .display_shapes()
        .iter()
        .all(|shape| shape.index_in_biarc().is_some()));
}

#[test]
fn shapes_outlive_refit() {
    let mut spline = fit(straight_line());
    let shape = Rc::clone(&spline.display_shapes()[0]);

    assert!(Rc::strong_count(&shape) == 2);

    spline.recreate_spline(None);

    assert!(Rc::strong_count(&shape) == 1);
    assert!(shape.distance_to(Coord2(50.0, 20.0)) < 1e-9);
}

#[test]
fn source_line_is_not_changed() {
    let line = Rc::new(l_shape());
    let spline = ArcSpline::new(Rc::clone(&line), Rc::new(ProcessingInput::default()));

    assert!(Rc::ptr_eq(spline.source_line(), &line));
    assert!(spline.source_line().bounds() == l_shape().bounds());
}

#[test]
#[should_panic]
fn impossible_settings_are_rejected() {
    let mut input = ProcessingInput::default();
    input.biarcs.min_biarc_ratio = 10.0;

    fit_with(l_shape(), input);
}

fn fit_with(line: FreeformLine, input: ProcessingInput) -> ArcSpline {
    ArcSpline::new(Rc::new(line), Rc::new(input))
}

#[test]
fn circular_arc_with_default_smoothing() {
    // The end tangent is smoothed over the last 20 units, so a single arc is out by too much and extra shapes are needed
    let spline = fit(circular_arc_with_spread(FreeformLine::new().half_smoothing_spread));

    assert!(spline.corners().len() == 0);
    assert!(spline.display_shapes().len() == 3, "{:?}", spline.display_shapes());
}
