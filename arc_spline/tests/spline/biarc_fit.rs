/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::strokes::*;

use flo_arc_spline::freeform::*;
use flo_arc_spline::spline::*;
use flo_arc_spline::*;

fn fit_section(line: &mut FreeformLine, section: Range) -> Vec<Biarc> {
    fit_section_with(line, section, &BiarcsInput::default())
}

fn fit_section_with(line: &mut FreeformLine, section: Range, input: &BiarcsInput) -> Vec<Biarc> {
    line.set_bounds(section);
    convert_line_to_biarcs(line, input, section)
}

fn assert_continuous(line: &FreeformLine, section: Range, biarcs: &Vec<Biarc>) {
    assert!(biarcs.len() > 0);
    assert!(biarcs[0].point0() == line.point_at(section.start));
    assert!(biarcs[biarcs.len() - 1].point1() == line.point_at(section.end));

    for idx in 1..biarcs.len() {
        assert!(biarcs[idx - 1].point1() == biarcs[idx].point0());
        assert!(biarcs[idx - 1].tangent1() == biarcs[idx].tangent0());
    }
}

#[test]
fn circular_arc_is_single_arc() {
    let mut line = circular_arc();
    let section = Range::new(0.0, line.length());
    let biarcs = fit_section(&mut line, section);

    assert!(biarcs.len() == 1, "{:?}", biarcs);
    assert!(biarcs[0].is_single_arc());

    let circle = biarcs[0].shape0().circle().unwrap();
    assert!((circle.radius - 40.0).abs() < 1.5, "Radius {}", circle.radius);
    assert!(circle.center.distance_to(&Coord2(0.0, 0.0)) < 1.5, "Center {:?}", circle.center);
}

#[test]
fn straight_line_is_one_biarc() {
    let mut line = straight_line();
    let section = Range::new(0.0, line.length());
    let biarcs = fit_section(&mut line, section);

    assert!(biarcs.len() == 1, "{:?}", biarcs);
    assert!(mean_squared_error(&line, 0.0, 1.0, line.length(), &biarcs[0]) < 1e-9);
}

#[test]
fn s_curve_biarcs_are_continuous() {
    let mut line = s_curve();
    let section = Range::new(0.0, line.length());
    let biarcs = fit_section(&mut line, section);

    assert_continuous(&line, section, &biarcs);
}

#[test]
fn s_curve_biarcs_follow_line() {
    let mut line = s_curve();
    let section = Range::new(0.0, line.length());
    let input = BiarcsInput::default();
    let biarcs = fit_section(&mut line, section);

    // The mid point of every biarc is close to the line
    for biarc in biarcs.iter() {
        let mid_point = biarc_curve_mid_point(biarc);
        let nearest = line
            .samples()
            .iter()
            .map(|(_, point)| point.distance_to(&mid_point))
            .fold(f64::MAX, f64::min);

        assert!(nearest <= input.max_dist_to_mid_point + 1.0, "Biarc mid point {:?} is {} from the line", mid_point, nearest);
    }
}

#[test]
fn fit_part_of_line() {
    let mut line = s_curve();
    let section = Range::new(40.0, 200.0);
    let biarcs = fit_section(&mut line, section);

    assert_continuous(&line, section, &biarcs);
}

#[test]
fn jittered_stroke_biarcs_are_continuous() {
    for seed in 0..5 {
        let mut line = jittered_stroke(seed);
        let section = Range::new(0.0, line.length());
        let biarcs = fit_section(&mut line, section);

        assert_continuous(&line, section, &biarcs);
    }
}

#[test]
fn short_section_is_fitted() {
    let mut line = l_shape();
    let section = Range::new(10.0, 12.0);
    let biarcs = fit_section(&mut line, section);

    assert_continuous(&line, section, &biarcs);
}

#[test]
fn no_single_arcs_when_half_arcs_are_not_allowed() {
    let mut line = circular_arc();
    let section = Range::new(0.0, line.length());
    let input = BiarcsInput {
        allow_half_arc_at_section_end: false,
        ..BiarcsInput::default()
    };
    let biarcs = fit_section_with(&mut line, section, &input);

    // With the default settings, this is fitted by a single arc
    assert_continuous(&line, section, &biarcs);
    assert!(biarcs.iter().all(|biarc| !biarc.is_single_arc()), "{:?}", biarcs);
}

#[test]
fn extra_end_angle_tolerance_for_single_arc_sections() {
    // A single arc across the whole section ends about 21 degrees away from the tangent at the end of the line
    let mut line = line_into_quarter_circle();
    let section = Range::new(0.0, line.length());
    let input = BiarcsInput {
        max_dist_to_mid_point: 10.0,
        ..BiarcsInput::default()
    };
    let extra_tolerance = BiarcsInput {
        allow_extra_tolerance_for_single_arc_sections: true,
        ..input.clone()
    };

    let biarcs = fit_section_with(&mut line, section, &input);
    assert_continuous(&line, section, &biarcs);
    assert!(!biarcs[0].is_single_arc(), "{:?}", biarcs);

    let biarcs = fit_section_with(&mut line, section, &extra_tolerance);
    assert!(biarcs.len() == 1, "{:?}", biarcs);
    assert!(biarcs[0].is_single_arc());
    assert!(biarcs[0].point1() == line.point_at(section.end));
}

#[test]
fn balancing_is_suspended_near_end_of_line() {
    // Biarcs along the arc fit exactly, but none of them can reach the end of the tail. Longer biarcs are never preferred
    // while balancing, so the arc is split into the shortest possible biarcs unless balancing is suspended.
    let mut line = arc_with_tail();
    let section = Range::new(15.0_f64.to_radians() * 40.0, line.length());
    let balanced = BiarcsInput {
        max_mean_error: 1e-4,
        dist_to_error_threshold: 0.5,
        allow_half_arc_at_section_end: false,
        ..BiarcsInput::default()
    };
    let suspended = BiarcsInput {
        end_of_line_okay_factor: 1000.0,
        ..balanced.clone()
    };

    line.set_bounds(Range::new(0.0, line.length()));
    let balanced_biarcs = convert_line_to_biarcs(&line, &balanced, section);
    let suspended_biarcs = convert_line_to_biarcs(&line, &suspended, section);

    assert_continuous(&line, section, &balanced_biarcs);
    assert_continuous(&line, section, &suspended_biarcs);

    assert!(balanced_biarcs[0].point1() == line.point_at(section.start + balanced.t_step));
    assert!(suspended_biarcs[0].point1() != line.point_at(section.start + balanced.t_step));
    assert!(
        suspended_biarcs.len() < balanced_biarcs.len(),
        "{} biarcs with balancing suspended, {} with balancing",
        suspended_biarcs.len(),
        balanced_biarcs.len()
    );
}

#[test]
fn biarcs_with_distant_mid_points_are_rejected() {
    // No biarc can have its mid point exactly on a sample, so every candidate is rejected and the fitter falls back to
    // the biarcs with the lowest error (which never include single arcs)
    let mut line = circular_arc();
    let section = Range::new(0.0, line.length());
    let input = BiarcsInput {
        max_dist_to_mid_point: 0.0,
        ..BiarcsInput::default()
    };
    let biarcs = fit_section_with(&mut line, section, &input);

    assert_continuous(&line, section, &biarcs);
    assert!(biarcs.iter().all(|biarc| !biarc.is_single_arc()), "{:?}", biarcs);
}
