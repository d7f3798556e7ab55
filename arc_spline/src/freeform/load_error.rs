/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError};

///
/// Errors that can occur while reading freeform lines from text
///
#[derive(Clone, PartialEq, Debug)]
pub enum LoadError {
    /// The text ended before all of the values for a line were read
    MissingValue,

    /// A value could not be read as a number
    BadNumber(String),

    /// The smoothing spread for a line was not a positive value
    BadSmoothingSpread,

    /// The samples for a line were not in increasing order of distance
    UnorderedSamples,

    /// The source of the text could not be read
    Io(io::ErrorKind),
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> LoadError {
        LoadError::Io(error.kind())
    }
}

impl From<ParseFloatError> for LoadError {
    fn from(error: ParseFloatError) -> LoadError {
        LoadError::BadNumber(error.to_string())
    }
}

impl From<ParseIntError> for LoadError {
    fn from(error: ParseIntError) -> LoadError {
        LoadError::BadNumber(error.to_string())
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::MissingValue => write!(f, "unexpected end of line data"),
            LoadError::BadNumber(msg) => write!(f, "invalid number: {}", msg),
            LoadError::BadSmoothingSpread => write!(f, "smoothing spread must be positive"),
            LoadError::UnorderedSamples => write!(f, "line samples are not in order"),
            LoadError::Io(kind) => write!(f, "could not read line data: {:?}", kind),
        }
    }
}

impl Error for LoadError {}
