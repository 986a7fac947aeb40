// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::gregorian::GregorianMonth;
use crate::calendar::prelude::CommonDate;
use crate::calendar::prelude::CommonWeekOfYear;
use crate::calendar::prelude::GuaranteedMonth;
use crate::calendar::prelude::HasLeapYears;
use crate::calendar::prelude::OrdinalDate;
use crate::calendar::prelude::ToFromCommonDate;
use crate::calendar::prelude::ToFromOrdinalDate;
use crate::calendar::Gregorian;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::Epoch;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
use crate::day_count::ToRataDie;
use std::num::NonZero;

#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;

/// Represents a month in the Julian calendar
pub type JulianMonth = GregorianMonth;

const JULIAN_EPOCH_RD: i64 = -1;

/// Convert an Anno Domini year to its astronomical form.
///
/// 1 BC (written -1) becomes 0, 2 BC becomes -1, and so on; positive years
/// are unchanged. Year 0 does not exist in Anno Domini numbering and is
/// reported as [`CalendarError::YearZero`].
pub fn ad_to_astronomical(ad_year: i32) -> Result<i32, CalendarError> {
    if ad_year == 0 {
        Err(CalendarError::YearZero)
    } else if ad_year < 0 {
        Ok(ad_year + 1)
    } else {
        Ok(ad_year)
    }
}

/// Convert an astronomical year to Anno Domini numbering.
///
/// 0 becomes 1 BC (written -1). Total: every astronomical year has an
/// Anno Domini name.
pub fn astronomical_to_ad(year: i32) -> i32 {
    if year <= 0 {
        year - 1
    } else {
        year
    }
}

/// Represents a date in the proleptic Julian calendar
///
/// Years are numbered in the Anno Domini convention: **year 0 is not
/// supported**, and the year before AD 1 is 1 BC, written -1. Use
/// [`ad_to_astronomical`] and [`astronomical_to_ad`] to move between this
/// convention and the astronomical numbering used by
/// [`Gregorian`](crate::calendar::Gregorian).
///
/// Leap years are every fourth year, with the quadrennial rule applied to
/// the astronomical form of the year (so 1 BC, 5 BC, 9 BC ... are leap).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Julian(CommonDate);

impl Julian {
    pub fn nz_year(self) -> NonZero<i32> {
        NonZero::new(self.0.year).expect("Will not be assigned zero")
    }

    /// Days before January 1 of the given year, counted from the epoch.
    pub fn prior_elapsed_days(year: i32) -> i64 {
        let y = if year < 0 { year + 1 } else { year } as i64;
        let offset_e = Julian::epoch().get() - 1;
        let offset_y = 365 * (y - 1);
        let offset_leap = (y - 1).div_euclid(4);
        offset_e + offset_y + offset_leap
    }
}

impl HasLeapYears for Julian {
    fn is_leap(j_year: i32) -> bool {
        let m4 = j_year.modulus(4);
        if j_year > 0 {
            m4 == 0
        } else {
            m4 == 3
        }
    }
}

impl Epoch for Julian {
    fn epoch() -> RataDie {
        RataDie::new(JULIAN_EPOCH_RD)
    }
}

impl ToFromOrdinalDate for Julian {
    fn valid_ordinal(ord: OrdinalDate) -> Result<(), CalendarError> {
        let correction = if Julian::is_leap(ord.year) { 1 } else { 0 };
        if ord.year == 0 {
            Err(CalendarError::InvalidYear)
        } else if ord.day_of_year > 0 && ord.day_of_year <= (365 + correction) {
            Ok(())
        } else {
            Err(CalendarError::InvalidDayOfYear)
        }
    }

    fn ordinal_from_rata_die(rd: RataDie) -> OrdinalDate {
        let date = rd.get();
        let epoch = Julian::epoch().get();
        let approx = ((4 * (date - epoch)) + 1464).div_euclid(1461);
        let year = if approx <= 0 { approx - 1 } else { approx } as i32;
        let year_start = Julian(CommonDate::new(year, 1, 1)).to_rata_die().get();
        let prior_days = (date - year_start) as u16;
        OrdinalDate {
            year,
            day_of_year: prior_days + 1,
        }
    }

    fn to_ordinal(self) -> OrdinalDate {
        let year = self.0.year;
        let month = self.0.month as i64;
        let day = self.0.day as i64;
        let offset_m = ((367 * month) - 362).div_euclid(12);
        let offset_x = if month <= 2 {
            0
        } else if Julian::is_leap(year) {
            -1
        } else {
            -2
        };
        OrdinalDate {
            year,
            day_of_year: (offset_m + offset_x + day) as u16,
        }
    }

    fn from_ordinal_unchecked(ord: OrdinalDate) -> Self {
        let year = ord.year;
        let prior_days = ord.day_of_year - 1;
        let march1 = Julian(CommonDate::new(year, 3, 1)).to_ordinal();
        let correction = if ord < march1 {
            0
        } else if Julian::is_leap(year) {
            1
        } else {
            2
        };
        let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u8;
        let month_start = Julian(CommonDate::new(year, month, 1)).to_ordinal();
        let day = ((ord.day_of_year - month_start.day_of_year) as u8) + 1;
        debug_assert!(day > 0);
        Julian(CommonDate { year, month, day })
    }
}

impl FromRataDie for Julian {
    fn from_rata_die(rd: RataDie) -> Julian {
        let ord = Self::ordinal_from_rata_die(rd);
        Self::from_ordinal_unchecked(ord)
    }
}

impl ToRataDie for Julian {
    fn to_rata_die(self) -> RataDie {
        let offset_prior = Julian::prior_elapsed_days(self.0.year);
        let ord = self.to_ordinal();
        RataDie::new(offset_prior + (ord.day_of_year as i64))
    }
}

impl ToFromCommonDate<JulianMonth> for Julian {
    fn to_common_date(self) -> CommonDate {
        self.0
    }

    fn from_common_date_unchecked(date: CommonDate) -> Self {
        debug_assert!(Self::valid_ymd(date).is_ok());
        Self(date)
    }

    fn valid_ymd(date: CommonDate) -> Result<(), CalendarError> {
        let month_opt = JulianMonth::from_u8(date.month);
        match month_opt {
            None => Err(CalendarError::InvalidMonth),
            Some(m) => {
                if date.year == 0 {
                    Err(CalendarError::InvalidYear)
                } else if date.day < 1 || date.day > Julian::month_length(date.year, m) {
                    Err(CalendarError::InvalidDay)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn year_end_date(year: i32) -> CommonDate {
        let m = JulianMonth::December;
        CommonDate::new(year, m as u8, Julian::month_length(year, m))
    }

    fn month_length(year: i32, month: JulianMonth) -> u8 {
        match month {
            JulianMonth::February => {
                if Julian::is_leap(year) {
                    29
                } else {
                    28
                }
            }
            _ => Gregorian::month_length(year, month),
        }
    }
}

impl GuaranteedMonth<JulianMonth> for Julian {}
impl CommonWeekOfYear<JulianMonth> for Julian {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn julian_gregorian_conversion() {
        // Official adoption dates of the Gregorian calendar: a Julian date
        // followed by the Gregorian date of the next day.
        // https://en.wikipedia.org/wiki/List_of_adoption_dates_of_the_Gregorian_calendar_by_country
        let gap_list = [
            (CommonDate::new(1582, 10, 4), CommonDate::new(1582, 10, 15)), //Papal States
            (CommonDate::new(1582, 12, 9), CommonDate::new(1582, 12, 20)), //France
            (CommonDate::new(1700, 2, 18), CommonDate::new(1700, 3, 1)),   //Denmark-Norway
            (CommonDate::new(1752, 9, 2), CommonDate::new(1752, 9, 14)),   //British Empire
            (CommonDate::new(1918, 1, 31), CommonDate::new(1918, 2, 14)),  //Soviet Union
            (CommonDate::new(1923, 2, 15), CommonDate::new(1923, 3, 1)),   //Greece
        ];

        for pair in gap_list {
            let dj = Julian::try_from_common_date(pair.0).unwrap().to_rata_die();
            let dg = Gregorian::try_from_common_date(pair.1).unwrap().to_rata_die();
            assert_eq!(dj.get() + 1, dg.get());
        }
    }

    #[test]
    fn cross_epoch() {
        let new_years_eve = Julian::try_year_end(-1).unwrap().to_rata_die();
        let new_years_day = Julian::try_year_start(1).unwrap().to_rata_die();
        assert_eq!(new_years_day.get(), new_years_eve.get() + 1);
        assert!(Julian::try_year_start(0).is_err());
        assert!(Julian::try_year_end(0).is_err());
    }

    #[test]
    fn bc_leap_years() {
        //1 BC, 5 BC, 9 BC are leap in the proleptic Julian calendar.
        assert!(Julian::is_leap(-1));
        assert!(Julian::is_leap(-5));
        assert!(Julian::is_leap(-9));
        assert!(!Julian::is_leap(-2));
        assert!(Julian::is_leap(4));
        assert!(Julian::is_leap(100)); //Julian centuries stay leap
    }

    #[test]
    fn year_numbering() {
        assert_eq!(ad_to_astronomical(1).unwrap(), 1);
        assert_eq!(ad_to_astronomical(-1).unwrap(), 0);
        assert_eq!(ad_to_astronomical(-2).unwrap(), -1);
        assert_eq!(ad_to_astronomical(0), Err(CalendarError::YearZero));
        assert_eq!(astronomical_to_ad(0), -1);
        assert_eq!(astronomical_to_ad(-1), -2);
        assert_eq!(astronomical_to_ad(1), 1);
    }

    proptest! {
        #[test]
        fn invalid_year_0(month in 1 as u8..12, day in 1 as u8..28) {
            let c = CommonDate::new(0, month, day);
            assert!(Julian::try_from_common_date(c).is_err())
        }

        #[test]
        fn ad_round_trip(year in -1000000 as i32..1000000) {
            if year != 0 {
                assert_eq!(astronomical_to_ad(ad_to_astronomical(year).unwrap()), year);
            }
        }
    }
}
