/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::freeform::*;
use crate::geo::*;
use crate::spline::*;

use log::*;

use std::cell::*;
use std::io::{Read, Write};
use std::io;
use std::rc::*;

///
/// The result of searching a session for the spline element nearest to a point
///
#[derive(Clone, Debug)]
pub struct ElementHit {
    /// The spline containing the element that was hit
    pub spline: Rc<RefCell<ArcSpline>>,

    /// The element that was hit
    pub element: Rc<SplineElement>,

    /// True if the point was close to one of the ends of the element
    pub is_endpoint: bool,
}

///
/// The strokes and fitted splines that make up a drawing
///
#[derive(Clone, Debug)]
pub struct StrokeSession {
    /// Settings used when fitting new splines
    processing_input: Rc<ProcessingInput>,

    /// The stroke that's being drawn, if there is one
    active_line: Option<FreeformLine>,

    /// The splines for the finished strokes, from oldest to newest
    splines: Vec<Rc<RefCell<ArcSpline>>>,

    selected: Option<Rc<RefCell<ArcSpline>>>,
}

impl Default for StrokeSession {
    fn default() -> StrokeSession {
        StrokeSession::new()
    }
}

impl StrokeSession {
    ///
    /// Creates an empty session that fits splines using the default settings
    ///
    pub fn new() -> StrokeSession {
        StrokeSession::with_processing_input(ProcessingInput::default())
    }

    ///
    /// Creates an empty session that fits new splines with the specified settings
    ///
    pub fn with_processing_input(processing_input: ProcessingInput) -> StrokeSession {
        processing_input.check();

        StrokeSession {
            processing_input: Rc::new(processing_input),
            active_line: None,
            splines: vec![],
            selected: None,
        }
    }

    ///
    /// Starts drawing a new stroke at the specified point, discarding any stroke that's in progress
    ///
    pub fn begin_stroke(&mut self, point: Coord2) {
        let mut line = FreeformLine::new();
        line.add_point(point);

        self.active_line = Some(line);
    }

    ///
    /// Adds a point to the stroke that's being drawn
    ///
    /// The selection is cleared once a stroke is being drawn. Returns false if there's no stroke in progress.
    ///
    pub fn extend_stroke(&mut self, point: Coord2) -> bool {
        match self.active_line.as_mut() {
            Some(line) => {
                line.add_point(point);
                self.selected = None;
                true
            }

            None => false,
        }
    }

    ///
    /// Finishes the stroke that's being drawn, and fits a spline to it
    ///
    /// Strokes with no length (where the pointer never moved) are discarded and return `None`.
    ///
    pub fn end_stroke(&mut self) -> Option<Rc<RefCell<ArcSpline>>> {
        let line = self.active_line.take()?;

        if line.length() > 0.0 {
            let spline = Rc::new(RefCell::new(ArcSpline::new(Rc::new(line), Rc::clone(&self.processing_input))));
            self.splines.push(Rc::clone(&spline));

            Some(spline)
        } else {
            None
        }
    }

    ///
    /// The stroke that's currently being drawn
    ///
    #[inline]
    pub fn active_line(&self) -> Option<&FreeformLine> {
        self.active_line.as_ref()
    }

    ///
    /// The splines in this session, from oldest to newest
    ///
    #[inline]
    pub fn splines(&self) -> &[Rc<RefCell<ArcSpline>>] {
        &self.splines
    }

    ///
    /// Finds the element of the most recent spline that's within `max_dist` of a point
    ///
    /// Splines and the elements within them are searched from newest to oldest, so the result is the element that was drawn
    /// last. `is_endpoint` is set in the result if the point is within `endpoint_dist` of one of the ends of the element.
    ///
    pub fn find_latest_element_in_distance(&self, point: Coord2, max_dist: f64, endpoint_dist: f64) -> Option<ElementHit> {
        self.splines.iter().rev().find_map(|spline| {
            let element = spline
                .borrow()
                .display_shapes()
                .iter()
                .rev()
                .find(|element| element.distance_to(point) <= max_dist)
                .cloned()?;

            let is_endpoint = element.distance_to_end_point(point) <= endpoint_dist;

            Some(ElementHit {
                spline: Rc::clone(spline),
                element,
                is_endpoint,
            })
        })
    }

    ///
    /// Sets the selected spline
    ///
    pub fn select(&mut self, spline: Option<Rc<RefCell<ArcSpline>>>) {
        self.selected = spline;
    }

    ///
    /// The spline that's currently selected
    ///
    #[inline]
    pub fn selected(&self) -> Option<&Rc<RefCell<ArcSpline>>> {
        self.selected.as_ref()
    }

    ///
    /// True if the specified spline is the selected one
    ///
    pub fn is_selected(&self, spline: &Rc<RefCell<ArcSpline>>) -> bool {
        self.selected
            .as_ref()
            .map(|selected| Rc::ptr_eq(selected, spline))
            .unwrap_or(false)
    }

    ///
    /// Removes all of the splines from this session and cancels any stroke that's being drawn
    ///
    pub fn clear(&mut self) {
        self.active_line = None;
        self.splines.clear();
        self.selected = None;
    }

    ///
    /// The settings used when fitting new splines
    ///
    #[inline]
    pub fn processing_input(&self) -> &Rc<ProcessingInput> {
        &self.processing_input
    }

    ///
    /// Replaces the settings for a spline, and fits it again
    ///
    pub fn set_processing_input(&self, spline: &Rc<RefCell<ArcSpline>>, processing_input: ProcessingInput) {
        spline.borrow_mut().recreate_spline(Some(Rc::new(processing_input)));
    }

    ///
    /// Writes the lines in this session to a stream
    ///
    /// The number of lines is written first, followed by each line on its own line of text. Splines and their settings are
    /// not saved.
    ///
    pub fn save(&self, target: &mut impl Write) -> io::Result<()> {
        writeln!(target, "{}", self.splines.len())?;

        for spline in self.splines.iter() {
            writeln!(target, "{}", spline.borrow().source_line())?;
        }

        Ok(())
    }

    ///
    /// Replaces the contents of this session with the lines read from a stream (as written by `save()`)
    ///
    /// New splines are fitted to the lines using the session's settings. The session is left unchanged if the stream
    /// can't be read.
    ///
    pub fn load(&mut self, source: &mut impl Read) -> Result<(), LoadError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        let mut tokens = text.split_whitespace();
        let num_lines = tokens.next().ok_or(LoadError::MissingValue)?.parse::<usize>()?;

        let mut lines = vec![];
        for _ in 0..num_lines {
            lines.push(FreeformLine::read_tokens(&mut tokens)?);
        }

        debug!("Loaded {} lines", lines.len());

        self.clear();
        self.splines = lines
            .into_iter()
            .map(|line| Rc::new(RefCell::new(ArcSpline::new(Rc::new(line), Rc::clone(&self.processing_input)))))
            .collect();

        Ok(())
    }
}
