// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::julian::ad_to_astronomical;
use crate::calendar::prelude::GuaranteedMonth;
use crate::calendar::Gregorian;
use crate::calendar::GregorianMonth;
use crate::calendar::Julian;
use crate::calendar::JulianMonth;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::FromRataDie;
use crate::day_count::ToRataDie;
use crate::day_cycle::Weekday;

/// Date of Easter in the proleptic Gregorian calendar.
///
/// Uses the ecclesiastical computus: the shifted epact locates the paschal
/// full moon, and Easter is the first Sunday strictly after it.
pub fn easter(g_year: i32) -> Result<Gregorian, CalendarError> {
    let century = g_year.div_euclid(100) + 1;
    let mut shifted_epact = (14 + (11 * g_year.modulus(19)) - (3 * century).div_euclid(4)
        + (5 + (8 * century)).div_euclid(25))
    .modulus(30);
    //Epacts 0 and (for long Metonic positions) 1 point at the wrong lunation.
    if shifted_epact == 0 || (shifted_epact == 1 && g_year.modulus(19) > 10) {
        shifted_epact += 1;
    }
    let april19 = Gregorian::try_new(g_year, GregorianMonth::April, 19)?;
    let paschal_moon = april19.to_rata_die().checked_sub(shifted_epact as i64)?;
    Ok(Gregorian::from_rata_die(Weekday::Sunday.after(paschal_moon)))
}

/// Date of Easter in the Julian calendar, as observed by the Eastern
/// Orthodox churches.
///
/// The year is given in Anno Domini numbering; the 19-year cycle position
/// is taken from its astronomical form.
pub fn orthodox_easter(ad_year: i32) -> Result<Julian, CalendarError> {
    let year = ad_to_astronomical(ad_year)?;
    let shifted_epact = (14 + (11 * year.modulus(19))).modulus(30);
    let april19 = Julian::try_new(ad_year, JulianMonth::April, 19)?;
    let paschal_moon = april19.to_rata_die().checked_sub(shifted_epact as i64)?;
    Ok(Julian::from_rata_die(Weekday::Sunday.after(paschal_moon)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CommonDate;
    use crate::calendar::ToFromCommonDate;
    use proptest::proptest;

    #[test]
    fn gregorian_easter_dates() {
        let dlist = [
            (2020, CommonDate::new(2020, 4, 12)),
            (2021, CommonDate::new(2021, 4, 4)),
            (2022, CommonDate::new(2022, 4, 17)),
            (2023, CommonDate::new(2023, 4, 9)),
            (2024, CommonDate::new(2024, 3, 31)),
            (2025, CommonDate::new(2025, 4, 20)),
            (2026, CommonDate::new(2026, 4, 5)),
            (2027, CommonDate::new(2027, 3, 28)),
            (2028, CommonDate::new(2028, 4, 16)),
            (2029, CommonDate::new(2029, 4, 1)),
            (2030, CommonDate::new(2030, 4, 21)),
        ];
        for pair in dlist {
            let e = easter(pair.0).unwrap();
            assert_eq!(e.to_common_date(), pair.1, "year = {}", pair.0);
        }
    }

    #[test]
    fn orthodox_easter_dates() {
        //Gregorian dates of the Julian (Orthodox) Easter.
        let dlist = [
            (2020, CommonDate::new(2020, 4, 19)),
            (2021, CommonDate::new(2021, 5, 2)),
            (2022, CommonDate::new(2022, 4, 24)),
            (2023, CommonDate::new(2023, 4, 16)),
            (2024, CommonDate::new(2024, 5, 5)),
            (2025, CommonDate::new(2025, 4, 20)),
        ];
        for pair in dlist {
            let e = orthodox_easter(pair.0).unwrap();
            let g = e.convert::<Gregorian>();
            assert_eq!(g.to_common_date(), pair.1, "year = {}", pair.0);
        }
    }

    #[test]
    fn orthodox_easter_rejects_year_zero() {
        assert_eq!(orthodox_easter(0), Err(CalendarError::YearZero));
    }

    proptest! {
        #[test]
        fn easter_is_a_sunday(year in -9999 as i32..9999) {
            let e = easter(year).unwrap();
            assert_eq!(e.convert::<Weekday>(), Weekday::Sunday);
        }

        #[test]
        fn easter_stays_in_season(year in 1583 as i32..9999) {
            //March 22 through April 25 in the reformed calendar.
            let e = easter(year).unwrap().to_common_date();
            let lo = CommonDate::new(year, 3, 22);
            let hi = CommonDate::new(year, 4, 25);
            assert!(e >= lo && e <= hi, "easter = {:?}", e);
        }

        #[test]
        fn orthodox_easter_is_a_sunday(year in 1 as i32..9999) {
            let e = orthodox_easter(year).unwrap();
            assert_eq!(e.convert::<Weekday>(), Weekday::Sunday);
        }
    }
}
