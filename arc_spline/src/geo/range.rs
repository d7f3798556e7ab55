/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;

///
/// An interval of scalar values
///
/// A range is invalid when `start > end`: this is the state of a range that has not included any values yet. Ranges only
/// ever grow, via `include()` or `inflate()`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    ///
    /// Creates a valid range
    ///
    pub fn new(start: f64, end: f64) -> Range {
        assert!(start <= end, "Range start ({}) is after its end ({})", start, end);

        Range { start, end }
    }

    ///
    /// Creates an invalid range, which will become valid once it has included a value
    ///
    pub fn invalid() -> Range {
        Range {
            start: f64::MAX,
            end: -f64::MAX,
        }
    }

    ///
    /// The length of this range, or 0 if it is invalid
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        if self.is_valid() {
            self.end - self.start
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    ///
    /// Resets this range to the invalid state
    ///
    pub fn invalidate(&mut self) {
        *self = Range::invalid();
    }

    ///
    /// Expands this range so that it includes the specified value
    ///
    pub fn include(&mut self, value: f64) {
        self.start = f64::min(value, self.start);
        self.end = f64::max(self.end, value);
    }

    ///
    /// Pads this range on both sides
    ///
    pub fn inflate(&mut self, padding: f64) {
        assert!(padding >= 0.0);

        self.start -= padding;
        self.end += padding;
    }

    /// True if the value is within this range (inclusive of both ends)
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    ///
    /// Orders ranges by their start value, with ties broken by the end value
    ///
    pub fn cmp_start_end(a: &Range, b: &Range) -> Ordering {
        a.start
            .total_cmp(&b.start)
            .then_with(|| a.end.total_cmp(&b.end))
    }
}

impl Default for Range {
    fn default() -> Range {
        Range::invalid()
    }
}
