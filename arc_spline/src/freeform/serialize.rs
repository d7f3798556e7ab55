/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::freeform_line::*;
use super::load_error::*;

use crate::consts::*;
use crate::geo::*;

use std::fmt;
use std::str::FromStr;

///
/// Writes a line as `half_smoothing_spread num_samples t x y t x y ...`
///
/// The sentinel samples are not written, and only the samples are stored: the bounds used for tangent calculations are
/// processing state.
///
impl fmt::Display for FreeformLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let samples = self.samples();

        write!(f, "{} {}", self.half_smoothing_spread, samples.len())?;
        for (t, point) in samples.iter() {
            write!(f, " {} {} {}", t, point.x(), point.y())?;
        }

        Ok(())
    }
}

impl FromStr for FreeformLine {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<FreeformLine, LoadError> {
        FreeformLine::read_tokens(&mut text.split_whitespace())
    }
}

impl FreeformLine {
    ///
    /// Reads a line written by the `Display` implementation from a stream of whitespace-separated tokens
    ///
    /// Only the tokens for one line are consumed, so several lines can be read from the same stream. Sentinel samples
    /// (as written by some older files) are skipped.
    ///
    pub fn read_tokens<'a>(
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<FreeformLine, LoadError> {
        let half_smoothing_spread = next_finite(tokens)?;
        if !(half_smoothing_spread > EPSILON) {
            return Err(LoadError::BadSmoothingSpread);
        }

        // The count is only trusted as far as there are tokens to back it up
        let num_samples = next_number::<usize>(tokens)?;
        let mut samples: Vec<(f64, Coord2)> = vec![];

        for _ in 0..num_samples {
            let t = next_finite(tokens)?;
            let x = next_finite(tokens)?;
            let y = next_finite(tokens)?;

            if t.abs() >= A_LOT {
                continue;
            }

            if let Some((last_t, _)) = samples.last() {
                if t <= *last_t {
                    return Err(LoadError::UnorderedSamples);
                }
            }

            samples.push((t, Coord2(x, y)));
        }

        Ok(FreeformLine::from_samples(half_smoothing_spread, samples))
    }
}

///
/// Reads the next token as a number
///
fn next_number<'a, TNumber>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<TNumber, LoadError>
where
    TNumber: FromStr,
    LoadError: From<TNumber::Err>,
{
    let token = tokens.next().ok_or(LoadError::MissingValue)?;

    Ok(token.parse::<TNumber>()?)
}

///
/// Reads the next token as a finite floating point number
///
fn next_finite<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f64, LoadError> {
    let value = next_number::<f64>(tokens)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoadError::BadNumber(format!("{} is not a finite number", value)))
    }
}
