// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::common::error::CalendarError;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
use crate::day_count::ToRataDie;
use crate::day_cycle::Weekday;
use num_traits::FromPrimitive;
use num_traits::ToPrimitive;
use std::num::NonZero;

/// Calendar systems with leap years
pub trait HasLeapYears {
    /// [`true`] if the given year is a leap year.
    fn is_leap(year: i32) -> bool;
}

/// Represents a combination of numeric year, month and day
///
/// This is not specific to any particular calendar system.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct CommonDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CommonDate {
    /// Create a `CommonDate`
    pub fn new(year: i32, month: u8, day: u8) -> CommonDate {
        CommonDate { year, month, day }
    }
}

/// Represents a numeric year and day of year.
///
/// This is not specific to any particular calendar system.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct OrdinalDate {
    pub year: i32,
    pub day_of_year: u16,
}

/// Calendar systems in which a date can be represented by a year, month and day
pub trait ToFromCommonDate<T: FromPrimitive>: Sized {
    /// Convert calendar date to a year, month and day
    fn to_common_date(self) -> CommonDate;
    /// Convert a year, month and day into a calendar date without checking validity
    ///
    /// In almost all cases, [`try_from_common_date`](ToFromCommonDate::try_from_common_date)
    /// is preferred.
    fn from_common_date_unchecked(d: CommonDate) -> Self;
    /// Returns error if the year, month or day is invalid
    fn valid_ymd(d: CommonDate) -> Result<(), CalendarError>;
    /// Number of days in the given month of the given year
    fn month_length(year: i32, month: T) -> u8;
    /// Start of the year as a numeric year, month and day
    fn year_start_date(year: i32) -> CommonDate {
        CommonDate::new(year, 1, 1)
    }
    /// End of the year as a numeric year, month and day
    fn year_end_date(year: i32) -> CommonDate;

    /// Attempt to create a date in a specific calendar from a [`CommonDate`]
    fn try_from_common_date(d: CommonDate) -> Result<Self, CalendarError> {
        match Self::valid_ymd(d) {
            Err(e) => Err(e),
            Ok(_) => Ok(Self::from_common_date_unchecked(d)),
        }
    }

    /// Attempt to create a date at the start of a specific year
    ///
    /// This may return an error if the year is 0, and the implementor does
    /// not support year 0.
    fn try_year_start(year: i32) -> Result<Self, CalendarError> {
        Self::try_from_common_date(Self::year_start_date(year))
    }

    /// Attempt to create a date at the end of a specific year
    fn try_year_end(year: i32) -> Result<Self, CalendarError> {
        Self::try_from_common_date(Self::year_end_date(year))
    }

    fn day(self) -> u8 {
        self.to_common_date().day
    }

    /// Attempt to return the month
    ///
    /// Callers using a calendar which guarantees that every date has a month
    /// should use [`GuaranteedMonth::month`].
    fn try_month(self) -> Option<T> {
        T::from_u8(self.to_common_date().month)
    }

    fn year(self) -> i32 {
        self.to_common_date().year
    }
}

/// Calendar systems in which dates are guaranteed to have a month
pub trait GuaranteedMonth<T: FromPrimitive + ToPrimitive>: ToFromCommonDate<T> {
    fn month(self) -> T {
        self.try_month().expect("Month is guaranteed")
    }

    /// Attempt to create a date in a specific calendar system
    fn try_new(year: i32, month: T, day: u8) -> Result<Self, CalendarError> {
        let m = month.to_u8().expect("Month is correct type");
        Self::try_from_common_date(CommonDate::new(year, m, day))
    }
}

/// Calendar systems in which a date can be represented by a year and day of year
pub trait ToFromOrdinalDate: Sized {
    /// Check if the year and day of year is valid for a particular calendar system
    fn valid_ordinal(ord: OrdinalDate) -> Result<(), CalendarError>;
    /// Calculate the year and day of year from a [`RataDie`].
    fn ordinal_from_rata_die(d: RataDie) -> OrdinalDate;
    /// Calculate the year and day of year from a calendar date.
    fn to_ordinal(self) -> OrdinalDate;
    /// Convert a year and day of year into a calendar date without checking validity
    ///
    /// In almost all cases, [`try_from_ordinal`](ToFromOrdinalDate::try_from_ordinal)
    /// is preferred.
    fn from_ordinal_unchecked(ord: OrdinalDate) -> Self;
    /// Attempt to create a date in a specific calendar from an [`OrdinalDate`]
    fn try_from_ordinal(ord: OrdinalDate) -> Result<Self, CalendarError> {
        match Self::valid_ordinal(ord) {
            Err(e) => Err(e),
            Ok(_) => Ok(Self::from_ordinal_unchecked(ord)),
        }
    }
}

/// Weekday navigation within months and years.
///
/// All results are day numbers; callers decode them into whichever calendar
/// they need.
pub trait CommonWeekOfYear<T: FromPrimitive>:
    ToFromCommonDate<T> + ToRataDie + FromRataDie
{
    /// Calculate the 1-based week of year for a particular date, with weeks
    /// counted in blocks of 7 days from the start of the year.
    fn week_of_year(self) -> u8 {
        let today = self.to_rata_die();
        let start = Self::try_year_start(self.year())
            .expect("Year known to be valid")
            .to_rata_die();
        (today.diff(start).div_euclid(7) + 1) as u8
    }

    /// Earliest date with weekday `k` on or after the first of this date's month.
    fn first_kday(self, k: Weekday) -> RataDie {
        let d = self.to_common_date();
        let first = Self::from_common_date_unchecked(CommonDate::new(d.year, d.month, 1));
        k.on_or_after(first.to_rata_die())
    }

    /// Latest date with weekday `k` on or before the last of this date's month.
    fn last_kday(self, k: Weekday) -> RataDie {
        let d = self.to_common_date();
        let m = T::from_u8(d.month).expect("Month of an existing date");
        let last = Self::from_common_date_unchecked(CommonDate::new(
            d.year,
            d.month,
            Self::month_length(d.year, m),
        ));
        k.on_or_before(last.to_rata_die())
    }

    /// Find the nth occurrence of a given day of the week within this date's
    /// month. Negative `n` counts backwards from the end of the month.
    ///
    /// Fails with [`CalendarError::InvalidDay`] when the result would leave
    /// the month.
    fn try_nth_kday(self, nz: NonZero<i16>, k: Weekday) -> Result<RataDie, CalendarError> {
        let n = nz.get() as i64;
        let result = if n > 0 {
            RataDie::checked_new(self.first_kday(k).get() + 7 * (n - 1))?
        } else {
            RataDie::checked_new(self.last_kday(k).get() + 7 * (n + 1))?
        };
        let home = self.to_common_date();
        let found = Self::from_rata_die(result).to_common_date();
        if found.year == home.year && found.month == home.month {
            Ok(result)
        } else {
            Err(CalendarError::InvalidDay)
        }
    }

    /// Days left in the year, including the current day.
    fn days_remaining(self) -> i64 {
        let end = Self::try_year_end(self.year())
            .expect("Year known to be valid")
            .to_rata_die();
        end.diff(self.to_rata_die()) + 1
    }
}
