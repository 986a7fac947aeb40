// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::prelude::CommonDate;
use crate::calendar::prelude::CommonWeekOfYear;
use crate::calendar::prelude::GuaranteedMonth;
use crate::calendar::prelude::HasLeapYears;
use crate::calendar::prelude::OrdinalDate;
use crate::calendar::prelude::ToFromCommonDate;
use crate::calendar::prelude::ToFromOrdinalDate;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::Epoch;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
use crate::day_count::ToRataDie;

#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;

const GREGORIAN_EPOCH_RD: i64 = 1;

/// Represents a month in the Gregorian calendar
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Hash, FromPrimitive, ToPrimitive)]
pub enum GregorianMonth {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// Represents a date in the proleptic Gregorian calendar
///
/// Years are numbered astronomically: year 0 is valid and corresponds to
/// 1 BC, year -1 to 2 BC, and so on. Leap years occur on every year
/// divisible by 400, and additionally on every year divisible by 4 but not
/// divisible by 100.
///
/// There are no "skipped days" at the point where the Gregorian calendar
/// was historically introduced. For historical dates before the reform,
/// applications should probably use [`Julian`](crate::calendar::Julian) and
/// convert:
///
/// ```
/// use kalends::calendar::*;
/// use kalends::day_count::*;
///
/// let j = Julian::try_new(1752, JulianMonth::September, 3).unwrap();
/// let g = j.convert::<Gregorian>();
/// assert_eq!(g, Gregorian::try_new(1752, GregorianMonth::September, 14).unwrap());
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Gregorian(CommonDate);

impl Gregorian {
    /// Days before January 1 of the given year, counted from the epoch.
    pub fn prior_elapsed_days(year: i32) -> i64 {
        let year = year as i64;
        let offset_e = Gregorian::epoch().get() - 1;
        let offset_y = 365 * (year - 1);
        let offset_leap =
            (year - 1).div_euclid(4) - (year - 1).div_euclid(100) + (year - 1).div_euclid(400);
        offset_e + offset_y + offset_leap
    }
}

impl HasLeapYears for Gregorian {
    fn is_leap(g_year: i32) -> bool {
        let m4 = g_year.modulus(4);
        let m400 = g_year.modulus(400);
        m4 == 0 && m400 != 100 && m400 != 200 && m400 != 300
    }
}

impl Epoch for Gregorian {
    fn epoch() -> RataDie {
        RataDie::new(GREGORIAN_EPOCH_RD)
    }
}

impl ToFromOrdinalDate for Gregorian {
    fn valid_ordinal(ord: OrdinalDate) -> Result<(), CalendarError> {
        let correction = if Gregorian::is_leap(ord.year) { 1 } else { 0 };
        if ord.day_of_year > 0 && ord.day_of_year <= (365 + correction) {
            Ok(())
        } else {
            Err(CalendarError::InvalidDayOfYear)
        }
    }

    fn ordinal_from_rata_die(rd: RataDie) -> OrdinalDate {
        //Decompose the day count into 400/100/4/1 year cycles.
        let date = rd.get();
        let epoch = Gregorian::epoch().get();
        let d0 = date - epoch;
        let n400 = d0.div_euclid(400 * 365 + 100 - 3);
        let d1 = d0.modulus(400 * 365 + 100 - 3);
        let n100 = d1.div_euclid(365 * 100 + 25 - 1);
        let d2 = d1.modulus(365 * 100 + 25 - 1);
        let n4 = d2.div_euclid(365 * 4 + 1);
        let d3 = d2.modulus(365 * 4 + 1);
        let n1 = d3.div_euclid(365);
        let year = (400 * n400) + (100 * n100) + (4 * n4) + n1;
        if n100 == 4 || n1 == 4 {
            OrdinalDate {
                year: year as i32,
                day_of_year: 366,
            }
        } else {
            OrdinalDate {
                year: (year + 1) as i32,
                day_of_year: (d3.modulus(365) + 1) as u16,
            }
        }
    }

    fn to_ordinal(self) -> OrdinalDate {
        let month = self.0.month as i64;
        let day = self.0.day as i64;
        let offset_m = ((367 * month) - 362).div_euclid(12);
        let offset_x = if month <= 2 {
            0
        } else if Gregorian::is_leap(self.0.year) {
            -1
        } else {
            -2
        };
        OrdinalDate {
            year: self.0.year,
            day_of_year: (offset_m + offset_x + day) as u16,
        }
    }

    fn from_ordinal_unchecked(ord: OrdinalDate) -> Self {
        let year = ord.year;
        let prior_days = (ord.day_of_year as i32) - 1;
        let ord_march1 = Gregorian(CommonDate::new(year, 3, 1)).to_ordinal();
        let correction: i32 = if ord < ord_march1 {
            0
        } else if Gregorian::is_leap(year) {
            1
        } else {
            2
        };
        let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u8;
        let ord_month = Gregorian(CommonDate::new(year, month, 1)).to_ordinal();
        let day = ((ord.day_of_year - ord_month.day_of_year) as u8) + 1;
        debug_assert!(day > 0);
        Gregorian(CommonDate { year, month, day })
    }
}

impl FromRataDie for Gregorian {
    fn from_rata_die(rd: RataDie) -> Gregorian {
        let ord = Gregorian::ordinal_from_rata_die(rd);
        Gregorian::from_ordinal_unchecked(ord)
    }
}

impl ToRataDie for Gregorian {
    fn to_rata_die(self) -> RataDie {
        let offset_prior = Gregorian::prior_elapsed_days(self.0.year);
        let ord = self.to_ordinal().day_of_year as i64;
        RataDie::new(offset_prior + ord)
    }
}

impl ToFromCommonDate<GregorianMonth> for Gregorian {
    fn to_common_date(self) -> CommonDate {
        self.0
    }

    fn from_common_date_unchecked(date: CommonDate) -> Self {
        debug_assert!(Self::valid_ymd(date).is_ok());
        Self(date)
    }

    fn valid_ymd(date: CommonDate) -> Result<(), CalendarError> {
        let month_opt = GregorianMonth::from_u8(date.month);
        match month_opt {
            None => Err(CalendarError::InvalidMonth),
            Some(m) => {
                if date.day < 1 || date.day > Self::month_length(date.year, m) {
                    Err(CalendarError::InvalidDay)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn year_end_date(year: i32) -> CommonDate {
        let m = GregorianMonth::December;
        CommonDate::new(year, m as u8, Self::month_length(year, m))
    }

    fn month_length(year: i32, month: GregorianMonth) -> u8 {
        match month {
            GregorianMonth::January => 31,
            GregorianMonth::February => {
                if Gregorian::is_leap(year) {
                    29
                } else {
                    28
                }
            }
            GregorianMonth::March => 31,
            GregorianMonth::April => 30,
            GregorianMonth::May => 31,
            GregorianMonth::June => 30,
            GregorianMonth::July => 31,
            GregorianMonth::August => 31,
            GregorianMonth::September => 30,
            GregorianMonth::October => 31,
            GregorianMonth::November => 30,
            GregorianMonth::December => 31,
        }
    }
}

impl GuaranteedMonth<GregorianMonth> for Gregorian {}
impl CommonWeekOfYear<GregorianMonth> for Gregorian {}
