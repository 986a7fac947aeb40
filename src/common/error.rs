// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Failure modes of the calendar, clock and zone subsystems.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalendarError {
    InvalidYear,
    InvalidMonth,
    InvalidDay,
    InvalidDayOfYear,
    InvalidWeek,
    InvalidHour,
    InvalidMinute,
    InvalidSecond,
    InvalidNanosecond,
    InvalidZone,
    /// An Anno Domini conversion was requested for the nonexistent year 0.
    YearZero,
    OutOfBounds,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidYear => write!(f, "Invalid year"),
            CalendarError::InvalidMonth => write!(f, "Invalid month"),
            CalendarError::InvalidDay => write!(f, "Invalid day"),
            CalendarError::InvalidDayOfYear => write!(f, "Invalid day of year"),
            CalendarError::InvalidWeek => write!(f, "Invalid week"),
            CalendarError::InvalidHour => write!(f, "Invalid hour"),
            CalendarError::InvalidMinute => write!(f, "Invalid minute"),
            CalendarError::InvalidSecond => write!(f, "Invalid second"),
            CalendarError::InvalidNanosecond => write!(f, "Invalid nanosecond"),
            CalendarError::InvalidZone => write!(f, "Invalid timezone offset"),
            CalendarError::YearZero => write!(f, "Year 0 does not exist in Anno Domini numbering"),
            CalendarError::OutOfBounds => write!(f, "Out of bounds"),
        }
    }
}

impl Error for CalendarError {}

/// Failure modes of the format compiler and the parser.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    /// The compiled pattern exceeds the segment cap.
    PatternTooLong,
    /// The pattern compiled, but contains a directive the parser rejects.
    UnsupportedFormatString,
    /// A segment could not consume a prefix of the input.
    InvalidInput,
    /// Two parsed fields imply different values.
    ConflictingInput,
    /// The parsed fields do not form a valid date, time or zone.
    Date(CalendarError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::PatternTooLong => write!(f, "Pattern exceeds the segment cap"),
            ParseError::UnsupportedFormatString => write!(f, "Unsupported format directive"),
            ParseError::InvalidInput => write!(f, "Input does not match the pattern"),
            ParseError::ConflictingInput => write!(f, "Input fields conflict"),
            ParseError::Date(e) => write!(f, "Parsed fields are invalid: {}", e),
        }
    }
}

impl Error for ParseError {}

impl From<CalendarError> for ParseError {
    fn from(e: CalendarError) -> ParseError {
        ParseError::Date(e)
    }
}
