// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::prelude::CommonDate;
use crate::calendar::prelude::CommonWeekOfYear;
use crate::calendar::prelude::GuaranteedMonth;
use crate::calendar::prelude::HasLeapYears;
use crate::calendar::prelude::ToFromCommonDate;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::Epoch;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
use crate::day_count::ToRataDie;

#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;

//Tishri 1 of year 1, i.e. the Gregorian date September 7, 3761 BCE.
const HEBREW_EPOCH_RD: i64 = -1373427;

/// Represents a month in the Hebrew calendar
///
/// Months are numbered in the religious order starting at Nisan, but the
/// civil year starts at Tishri. In a leap year the month named `Adar` acts
/// as the first Adar with 30 days and is followed by `AdarII`; in a common
/// year `Adar` is the last month of the year and `AdarII` does not exist.
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Hash, FromPrimitive, ToPrimitive)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishri,
    Marheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarII,
}

/// Represents a date in the Hebrew calendar
///
/// This is the classical arithmetic calendar: leap years follow the 19-year
/// Metonic cycle, and the start of each year is fixed by the molad of
/// Tishri together with the four postponement rules. A year therefore has
/// one of six lengths (353, 354, 355, 383, 384 or 385 days), with
/// Marheshvan stretching to 30 days in complete years and Kislev shrinking
/// to 29 in deficient ones.
///
/// The civil year runs from Tishri 1 to Elul 29; the year number increments
/// at Tishri 1 even though months are numbered from Nisan.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Hebrew(CommonDate);

impl Hebrew {
    pub fn months_in_year(year: i32) -> u8 {
        if Hebrew::is_leap(year) {
            13
        } else {
            12
        }
    }

    /// The month which closes the year: `AdarII` in leap years, `Adar` otherwise.
    pub fn last_month_of_year(year: i32) -> HebrewMonth {
        if Hebrew::is_leap(year) {
            HebrewMonth::AdarII
        } else {
            HebrewMonth::Adar
        }
    }

    //Months of the Metonic cycle before the first molad of the given year.
    fn elapsed_months(year: i32) -> i64 {
        let prior = (year as i64) - 1;
        let cycles = prior.div_euclid(19);
        let remainder = prior.modulus(19);
        (235 * cycles) + (12 * remainder) + ((7 * remainder) + 1).div_euclid(19)
    }

    /// Days from the calendar's reference point to Tishri 1 of the given
    /// year, after applying the molad and the four postponements.
    pub fn elapsed_days(year: i32) -> i64 {
        let months = Hebrew::elapsed_months(year);
        let parts_elapsed = 204 + (793 * months.modulus(1080));
        let hours_elapsed =
            5 + (12 * months) + (793 * months.div_euclid(1080)) + parts_elapsed.div_euclid(1080);
        let parts = parts_elapsed.modulus(1080) + (1080 * hours_elapsed.modulus(24));
        let day = 1 + (29 * months) + hours_elapsed.div_euclid(24);
        //Dechiyot: molad too late in the day, or a start which would force
        //an impossible year length.
        let postponed = if parts >= 19440
            || (day.modulus(7) == 2 && parts >= 9924 && !Hebrew::is_leap(year))
            || (day.modulus(7) == 1 && parts >= 16789 && Hebrew::is_leap(year - 1))
        {
            day + 1
        } else {
            day
        };
        //Lo ADU Rosh: Tishri 1 may not fall on Sunday, Wednesday or Friday.
        if matches!(postponed.modulus(7), 0 | 3 | 5) {
            postponed + 1
        } else {
            postponed
        }
    }

    fn new_year_rd(year: i32) -> i64 {
        HEBREW_EPOCH_RD - 1 + Hebrew::elapsed_days(year)
    }

    /// Number of days in the given year.
    pub fn year_length(year: i32) -> u16 {
        (Hebrew::new_year_rd(year + 1) - Hebrew::new_year_rd(year)) as u16
    }

    /// [`true`] if Marheshvan has 30 days in the given year.
    pub fn long_marheshvan(year: i32) -> bool {
        matches!(Hebrew::year_length(year), 355 | 385)
    }

    /// [`true`] if Kislev has 29 days in the given year.
    pub fn short_kislev(year: i32) -> bool {
        matches!(Hebrew::year_length(year), 353 | 383)
    }

    //Days of the months of the civil year before the given month.
    fn elapsed_days_in_year(year: i32, month: HebrewMonth) -> i64 {
        let civil_span = |from: u8, to_exclusive: u8| -> i64 {
            (from..to_exclusive)
                .map(|m| {
                    Hebrew::month_length(year, HebrewMonth::from_u8(m).expect("Range is valid"))
                        as i64
                })
                .sum()
        };
        let m = month as u8;
        let tishri = HebrewMonth::Tishri as u8;
        if m < tishri {
            //Tishri through the closing Adar, then Nisan up to the month.
            civil_span(tishri, Hebrew::months_in_year(year) + 1) + civil_span(1, m)
        } else {
            civil_span(tishri, m)
        }
    }
}

impl HasLeapYears for Hebrew {
    fn is_leap(h_year: i32) -> bool {
        ((7 * h_year) + 1).modulus(19) < 7
    }
}

impl Epoch for Hebrew {
    fn epoch() -> RataDie {
        RataDie::new(HEBREW_EPOCH_RD)
    }
}

impl FromRataDie for Hebrew {
    fn from_rata_die(rd: RataDie) -> Hebrew {
        let date = rd.get();
        //Approximate, then settle the year with the exact new-year days.
        let mut year = ((date - HEBREW_EPOCH_RD).div_euclid(365) + 1) as i32;
        while Hebrew::new_year_rd(year) > date {
            year -= 1;
        }
        while Hebrew::new_year_rd(year + 1) <= date {
            year += 1;
        }
        //The civil year scans Tishri..Adar or Nisan..Elul, never both.
        let nisan1 = Hebrew(CommonDate::new(year, HebrewMonth::Nisan as u8, 1));
        let mut month = if date < nisan1.to_rata_die().get() {
            HebrewMonth::Tishri as u8
        } else {
            HebrewMonth::Nisan as u8
        };
        loop {
            let m = HebrewMonth::from_u8(month).expect("Scan stays within the year");
            let month_end = Hebrew(CommonDate::new(year, month, Hebrew::month_length(year, m)));
            if date <= month_end.to_rata_die().get() {
                break;
            }
            month += 1;
        }
        let month_start = Hebrew(CommonDate::new(year, month, 1)).to_rata_die().get();
        let day = (date - month_start + 1) as u8;
        Hebrew(CommonDate::new(year, month, day))
    }
}

impl ToRataDie for Hebrew {
    fn to_rata_die(self) -> RataDie {
        let month = HebrewMonth::from_u8(self.0.month).expect("Month of an existing date");
        let days = Hebrew::new_year_rd(self.0.year)
            + Hebrew::elapsed_days_in_year(self.0.year, month)
            + (self.0.day as i64)
            - 1;
        RataDie::new(days)
    }
}

impl ToFromCommonDate<HebrewMonth> for Hebrew {
    fn to_common_date(self) -> CommonDate {
        self.0
    }

    fn from_common_date_unchecked(date: CommonDate) -> Self {
        debug_assert!(Self::valid_ymd(date).is_ok());
        Self(date)
    }

    fn valid_ymd(date: CommonDate) -> Result<(), CalendarError> {
        let month_opt = HebrewMonth::from_u8(date.month);
        match month_opt {
            None => Err(CalendarError::InvalidMonth),
            Some(HebrewMonth::AdarII) if !Hebrew::is_leap(date.year) => {
                Err(CalendarError::InvalidMonth)
            }
            Some(m) => {
                if date.day < 1 || date.day > Self::month_length(date.year, m) {
                    Err(CalendarError::InvalidDay)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn year_start_date(year: i32) -> CommonDate {
        CommonDate::new(year, HebrewMonth::Tishri as u8, 1)
    }

    fn year_end_date(year: i32) -> CommonDate {
        let m = HebrewMonth::Elul;
        CommonDate::new(year, m as u8, 29)
    }

    fn month_length(year: i32, month: HebrewMonth) -> u8 {
        match month {
            HebrewMonth::Nisan => 30,
            HebrewMonth::Iyyar => 29,
            HebrewMonth::Sivan => 30,
            HebrewMonth::Tammuz => 29,
            HebrewMonth::Av => 30,
            HebrewMonth::Elul => 29,
            HebrewMonth::Tishri => 30,
            HebrewMonth::Marheshvan => {
                if Hebrew::long_marheshvan(year) {
                    30
                } else {
                    29
                }
            }
            HebrewMonth::Kislev => {
                if Hebrew::short_kislev(year) {
                    29
                } else {
                    30
                }
            }
            HebrewMonth::Tevet => 29,
            HebrewMonth::Shevat => 30,
            HebrewMonth::Adar => {
                if Hebrew::is_leap(year) {
                    30
                } else {
                    29
                }
            }
            HebrewMonth::AdarII => 29,
        }
    }
}

impl GuaranteedMonth<HebrewMonth> for Hebrew {}
impl CommonWeekOfYear<HebrewMonth> for Hebrew {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Gregorian;
    use crate::day_cycle::Weekday;
    use proptest::proptest;

    #[test]
    fn metonic_leap_years() {
        for year in [5779, 5782, 5784, 5749, 5252, 4528] {
            assert!(Hebrew::is_leap(year), "year = {}", year);
        }
        for year in [5780, 5781, 5783, 5778, 5511, 4527] {
            assert!(!Hebrew::is_leap(year), "year = {}", year);
        }
    }

    #[test]
    fn elapsed_days_table() {
        let dlist = [
            (1, 1),
            (2, 356),
            (123, 44563),
            (1234, 450344),
            (3671, 1340455),
            (3762, 1373677),
            (5708, 2084447),
            (5762, 2104174),
            (5763, 2104528),
            (5764, 2104913),
            (5765, 2105268),
            (5766, 2105651),
            (5780, 2110760),
        ];
        for pair in dlist {
            assert_eq!(Hebrew::elapsed_days(pair.0), pair.1, "year = {}", pair.0);
        }
    }

    #[test]
    fn year_length_table() {
        let dlist = [
            (1, 355),
            (2, 355),
            (123, 355),
            (1234, 353),
            (3671, 354),
            (3762, 383),
            (5761, 353),
            (5762, 354),
            (5763, 385),
            (5764, 355),
            (5765, 383),
            (5766, 354),
            (5779, 385),
            (5780, 355),
            (5781, 353),
            (5782, 384),
            (5783, 355),
            (5784, 383),
            (5785, 355),
            (5786, 354),
            (5787, 385),
        ];
        for pair in dlist {
            assert_eq!(Hebrew::year_length(pair.0), pair.1, "year = {}", pair.0);
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(Hebrew::month_length(5780, HebrewMonth::Iyyar), 29);
        assert_eq!(Hebrew::month_length(5780, HebrewMonth::Sivan), 30);
        assert_eq!(Hebrew::month_length(5782, HebrewMonth::Marheshvan), 29);
        assert_eq!(Hebrew::month_length(5783, HebrewMonth::Marheshvan), 30);
        assert_eq!(Hebrew::month_length(5783, HebrewMonth::Kislev), 30);
        assert_eq!(Hebrew::month_length(5784, HebrewMonth::Kislev), 29);
        assert_eq!(Hebrew::month_length(5784, HebrewMonth::Adar), 30); //leap year
        assert_eq!(Hebrew::month_length(5784, HebrewMonth::AdarII), 29);
        assert_eq!(Hebrew::month_length(5783, HebrewMonth::Adar), 29); //common year
    }

    #[test]
    fn epoch_date() {
        let h = Hebrew::try_new(1, HebrewMonth::Tishri, 1).unwrap();
        assert_eq!(h.to_rata_die().get(), HEBREW_EPOCH_RD);
        let g = h.convert::<Gregorian>();
        assert_eq!(g.to_common_date(), CommonDate::new(-3760, 9, 7));
    }

    #[test]
    fn known_dates() {
        let h = Hebrew::try_new(5769, HebrewMonth::Marheshvan, 15).unwrap();
        assert_eq!(h.to_rata_die().get(), 733359);
        assert_eq!(Hebrew::from_rata_die(RataDie::new(733359)), h);

        //Rosh Hashanah of AM 5785 fell on October 3, 2024.
        let rh = Hebrew::try_new(5785, HebrewMonth::Tishri, 1).unwrap();
        let g = rh.convert::<Gregorian>();
        assert_eq!(g.to_common_date(), CommonDate::new(2024, 10, 3));
    }

    #[test]
    fn adar_ii_validity() {
        assert!(Hebrew::try_new(5784, HebrewMonth::AdarII, 1).is_ok()); //leap
        assert!(Hebrew::try_new(5783, HebrewMonth::AdarII, 1).is_err()); //common
        assert!(Hebrew::try_new(5784, HebrewMonth::Adar, 30).is_ok());
        assert!(Hebrew::try_new(5783, HebrewMonth::Adar, 30).is_err());
    }

    proptest! {
        #[test]
        fn year_lengths_are_classified(year in 1 as i32..8000) {
            let len = Hebrew::year_length(year);
            if Hebrew::is_leap(year) {
                assert!(matches!(len, 383 | 384 | 385), "year = {}, len = {}", year, len);
            } else {
                assert!(matches!(len, 353 | 354 | 355), "year = {}, len = {}", year, len);
            }
        }

        #[test]
        fn new_year_never_sunday_wednesday_friday(year in 1 as i32..8000) {
            let rh = Hebrew::try_new(year, HebrewMonth::Tishri, 1).unwrap();
            let w = rh.convert::<Weekday>();
            assert!(!matches!(w, Weekday::Sunday | Weekday::Wednesday | Weekday::Friday));
        }

        #[test]
        fn months_cover_the_year(year in 1 as i32..8000) {
            let total: i64 = (1..=Hebrew::months_in_year(year))
                .map(|m| Hebrew::month_length(year, HebrewMonth::from_u8(m).unwrap()) as i64)
                .sum();
            assert_eq!(total, Hebrew::year_length(year) as i64);
        }
    }
}
