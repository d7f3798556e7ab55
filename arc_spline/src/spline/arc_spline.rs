/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::biarc_fit::*;
use super::config::*;
use super::corners::*;
use super::element::*;
use super::segments::*;

use crate::consts::*;
use crate::freeform::*;
use crate::geo::*;

use itertools::*;
use log::*;

use std::iter;
use std::rc::*;

///
/// A spline made up of arcs and straight segments, fitted to a freeform line
///
/// The spline keeps a reference to the line it was generated from and to the settings that were used, so it can be
/// regenerated when the settings change. Display shapes are reference counted, so they can be held by other parts of an
/// application (for instance, to track a selection) without holding on to the whole spline.
///
#[derive(Clone, Debug)]
pub struct ArcSpline {
    source_line: Rc<FreeformLine>,
    processing_input: Rc<ProcessingInput>,

    /// The elements making up the spline, in order along the line
    display_shapes: Vec<Rc<SplineElement>>,

    /// Points where the tangent of the spline is discontinuous
    corners: Vec<Coord2>,
}

impl ArcSpline {
    ///
    /// Fits a spline to a line using the specified settings
    ///
    pub fn new(source_line: Rc<FreeformLine>, processing_input: Rc<ProcessingInput>) -> ArcSpline {
        let mut spline = ArcSpline {
            source_line,
            processing_input,
            display_shapes: vec![],
            corners: vec![],
        };

        spline.recreate_spline(None);
        spline
    }

    ///
    /// Regenerates the shapes in this spline, optionally replacing the settings used to generate it
    ///
    pub fn recreate_spline(&mut self, processing_input: Option<Rc<ProcessingInput>>) {
        if let Some(processing_input) = processing_input {
            self.processing_input = processing_input;
        }
        self.processing_input.check();

        // Bounds are changed while fitting, so work on a copy of the line
        let mut line = (*self.source_line).clone();

        let markers = ArcSpline::find_corners_and_segments(&mut line, &self.processing_input);
        let (display_shapes, corners) =
            ArcSpline::generate_biarcs_and_final_shapes(&mut line, &self.processing_input, &markers);

        debug!(
            "Fitted spline to line of length {}: {} markers, {} shapes, {} corners",
            line.length(),
            markers.len(),
            display_shapes.len(),
            corners.len()
        );

        self.display_shapes = display_shapes;
        self.corners = corners;
    }

    ///
    /// Finds the corners and straight segments in a line
    ///
    /// The result is sorted in order along the line. Corners are zero-length ranges and segments have a positive length.
    /// The bounds of the line are set to cover the whole line.
    ///
    pub fn find_corners_and_segments(line: &mut FreeformLine, processing_input: &ProcessingInput) -> Vec<Range> {
        let length = line.length();
        line.set_bounds(Range::new(0.0, length));
        let line = &*line;

        let corners = find_corners(line, &processing_input.corners);

        // Test the gaps between consecutive corners (and the ends of the line) to see if they're straight
        let start = Range::new(0.0, 0.0);
        let terminal = Range::new(length, length);
        let segments = iter::once(&start)
            .chain(corners.iter())
            .chain(iter::once(&terminal))
            .tuple_windows()
            .filter(|(prev_corner, next_corner)| next_corner.start - prev_corner.end > MAX_SPLINE_GAP)
            .map(|(prev_corner, next_corner)| Range::new(prev_corner.end, next_corner.start))
            .filter(|section| is_segment(line, *section, &processing_input.segments).0)
            .collect::<Vec<_>>();

        trace!("{} corners and {} segments", corners.len(), segments.len());

        let mut markers = corners;
        markers.extend(segments);
        markers.sort_by(Range::cmp_start_end);

        markers
    }

    ///
    /// Fits biarcs to the gaps between a list of markers (as generated by `find_corners_and_segments()`), and generates the
    /// display shapes for the spline
    ///
    /// Returns the display shapes and the positions of the corners.
    ///
    pub fn generate_biarcs_and_final_shapes(
        line: &mut FreeformLine,
        processing_input: &ProcessingInput,
        markers: &[Range],
    ) -> (Vec<Rc<SplineElement>>, Vec<Coord2>) {
        let length = line.length();
        let terminal = Range::new(length, length + 1.0);

        let mut display_shapes = vec![];
        let mut corners = vec![];
        let mut prev_end = 0.0;

        for (idx, marker) in markers.iter().chain(iter::once(&terminal)).enumerate() {
            // Sections that aren't covered by a segment are fitted with biarcs
            if marker.start - prev_end > MAX_SPLINE_GAP {
                let section = Range::new(prev_end, marker.start);
                line.set_bounds(section);

                for biarc in convert_line_to_biarcs(line, &processing_input.biarcs, section) {
                    let mid_point = biarc.mid_point();

                    if MAX_SPLINE_GAP <= biarc.point0().distance_to(&mid_point) {
                        display_shapes.push(Rc::new(SplineElement::from_biarc_half(
                            biarc.shape0(),
                            biarc.point0(),
                            biarc.tangent0(),
                            mid_point,
                            BiarcHalf::First,
                        )));
                    }

                    if MAX_SPLINE_GAP <= biarc.point1().distance_to(&mid_point) {
                        display_shapes.push(Rc::new(SplineElement::from_biarc_half(
                            biarc.shape1(),
                            mid_point,
                            biarc.mid_tangent(),
                            biarc.point1(),
                            BiarcHalf::Second,
                        )));
                    }
                }
            }

            // The terminal only marks the end of the final section
            if idx < markers.len() {
                if marker.length() > MAX_SPLINE_GAP {
                    let segment = SplineSegment::new(line.point_at(marker.start), line.point_at(marker.end), None);
                    display_shapes.push(Rc::new(SplineElement::Segment(segment)));
                } else if marker.length() == 0.0 {
                    corners.push(line.point_at(marker.start));
                }
            }

            prev_end = f64::max(prev_end, marker.end);
        }

        (display_shapes, corners)
    }

    ///
    /// The line that this spline was fitted to
    ///
    #[inline]
    pub fn source_line(&self) -> &Rc<FreeformLine> {
        &self.source_line
    }

    ///
    /// The settings that were used to generate this spline
    ///
    #[inline]
    pub fn processing_input(&self) -> &Rc<ProcessingInput> {
        &self.processing_input
    }

    ///
    /// The elements making up this spline, in order along the line
    ///
    #[inline]
    pub fn display_shapes(&self) -> &[Rc<SplineElement>] {
        &self.display_shapes
    }

    ///
    /// The points where the tangent of the spline changes abruptly
    ///
    #[inline]
    pub fn corners(&self) -> &[Coord2] {
        &self.corners
    }
}
