// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::prelude::ToFromCommonDate;
use crate::calendar::prelude::ToFromOrdinalDate;
use crate::calendar::Gregorian;
use crate::calendar::HasLeapYears;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::Epoch;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
use crate::day_count::ToRataDie;
use num_traits::FromPrimitive;
use crate::day_cycle::Weekday;
use std::cmp::Ordering;
use std::num::NonZero;

/// Represents a date in the ISO-8601 week-date calendar
///
/// This is an alternative naming system for Gregorian dates: week 1 is the
/// week containing the Gregorian year's first Thursday, and weeks start on
/// Monday. **The ISO year may start and end a few days away from the
/// Gregorian year**: if the Gregorian year X ends in the middle of an ISO
/// week, the following days belong to Gregorian year X+1 but ISO year X.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IsoWeek {
    year: i32,
    week: NonZero<u8>,
    day: Weekday,
}

impl IsoWeek {
    /// Attempt to create a new ISO week date
    pub fn try_new(year: i32, week: u8, day: Weekday) -> Result<Self, CalendarError> {
        if week < 1 || week > 53 || (week == 53 && !Self::is_leap(year)) {
            return Err(CalendarError::InvalidWeek);
        }
        Ok(IsoWeek {
            year,
            week: NonZero::<u8>::new(week).expect("Checked in if"),
            day,
        })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn week(self) -> NonZero<u8> {
        self.week
    }

    /// Note that the numeric values of the Weekday enum are not consistent
    /// with ISO-8601. Use [`IsoWeek::day_num`] for the numeric day number.
    pub fn day(self) -> Weekday {
        self.day
    }

    /// Represents Sunday as 7 instead of 0, as required by ISO-8601.
    pub fn day_num(self) -> u8 {
        self.day.iso_number()
    }

    pub fn new_year(year: i32) -> Self {
        IsoWeek::try_new(year, 1, Weekday::Monday).expect("Week 1 known to be valid")
    }
}

impl PartialOrd for IsoWeek {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.year != other.year {
            self.year.partial_cmp(&other.year)
        } else if self.week != other.week {
            self.week.partial_cmp(&other.week)
        } else {
            self.day.iso_number().partial_cmp(&other.day.iso_number())
        }
    }
}

impl Epoch for IsoWeek {
    fn epoch() -> RataDie {
        Gregorian::epoch()
    }
}

impl HasLeapYears for IsoWeek {
    /// An ISO "leap year" has 53 weeks instead of 52.
    fn is_leap(i_year: i32) -> bool {
        let jan1 = Gregorian::try_year_start(i_year)
            .expect("Year known to be valid")
            .convert::<Weekday>();
        let dec31 = Gregorian::try_year_end(i_year)
            .expect("Year known to be valid")
            .convert::<Weekday>();
        jan1 == Weekday::Thursday || dec31 == Weekday::Thursday
    }
}

impl FromRataDie for IsoWeek {
    fn from_rata_die(rd: RataDie) -> IsoWeek {
        let date = rd.get();
        let approx = Gregorian::ordinal_from_rata_die(RataDie::new(date - 3)).year;
        let next = IsoWeek::new_year(approx + 1).to_rata_die().get();
        let year = if date >= next { approx + 1 } else { approx };
        let current = IsoWeek::new_year(year).to_rata_die().get();
        let week = (date - current).div_euclid(7) + 1;
        debug_assert!(week < 55 && week > 0);
        let day = Weekday::from_i64(date.modulus(7)).expect("In range due to modulus");
        IsoWeek::try_new(year, week as u8, day).expect("Week known to be valid")
    }
}

impl ToRataDie for IsoWeek {
    fn to_rata_die(self) -> RataDie {
        //Anchor on December 28, which is always inside the last ISO week of
        //the prior ISO year.
        let anchor = Gregorian::try_from_common_date(crate::calendar::CommonDate::new(
            self.year - 1,
            12,
            28,
        ))
        .expect("Month 12, day 28 is always valid for Gregorian")
        .to_rata_die();
        let sunday = Weekday::Sunday.before(anchor);
        RataDie::new(sunday.get() + (7 * self.week.get() as i64) + (self.day_num() as i64))
    }
}
