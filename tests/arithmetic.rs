// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kalends::calendar::CommonWeekOfYear;
use kalends::calendar::Gregorian;
use kalends::calendar::HasLeapYears;
use kalends::calendar::Hebrew;
use kalends::calendar::Julian;
use kalends::calendar::ToFromCommonDate;
use kalends::day_count::DateArithmetic;
use kalends::day_count::FromRataDie;
use kalends::day_count::RataDie;
use kalends::day_count::ToRataDie;
use kalends::day_cycle::Weekday;
use kalends::error::ParseError;
use kalends::format::parse_moment;
use kalends::format::Format;
use num_traits::FromPrimitive;
use proptest::proptest;
use std::fmt::Debug;

const RD_RANGE: i64 = 3_652_500;

fn add_days_homomorphism<T: FromRataDie + ToRataDie + PartialEq + Debug>(rd: i64, n: i64) {
    let d0 = T::from_rata_die(RataDie::new(rd));
    let d1 = d0.add_days(n).unwrap();
    assert_eq!(d1.to_rata_die().get(), rd + n);
    assert_eq!(d1.sub_days(n).unwrap(), d0);
    assert_eq!(d1.day_difference(d0), n);
}

proptest! {
    #[test]
    fn gregorian_add_days(rd in -RD_RANGE..RD_RANGE, n in -100000 as i64..100000) {
        add_days_homomorphism::<Gregorian>(rd, n);
    }

    #[test]
    fn julian_add_days(rd in -RD_RANGE..RD_RANGE, n in -100000 as i64..100000) {
        add_days_homomorphism::<Julian>(rd, n);
    }

    #[test]
    fn hebrew_add_days(rd in -RD_RANGE..RD_RANGE, n in -100000 as i64..100000) {
        add_days_homomorphism::<Hebrew>(rd, n);
    }

    #[test]
    fn weekday_navigation_closure(rd in -RD_RANGE..RD_RANGE, w in 0 as u8..6) {
        let w = Weekday::from_u8(w).unwrap();
        let d = RataDie::new(rd);
        let found = w.on_or_before(d);
        assert_eq!(Weekday::from_rata_die(found), w);
        assert!(found <= d && d.get() - found.get() < 7);
    }

    #[test]
    fn julian_leap_parity(year in -10000 as i32..10000) {
        if year != 0 {
            let y0 = Julian::try_year_start(year).unwrap();
            let next = if year == -1 { 1 } else { year + 1 };
            let y1 = Julian::try_year_start(next).unwrap();
            let span = y1.day_difference(y0);
            assert_eq!(span == 366, Julian::is_leap(year));
        }
    }

    #[test]
    fn hebrew_leap_parity(year in -10000 as i32..10000) {
        //Leap years have 13 months; the day count follows the year class.
        let len = Hebrew::year_length(year);
        if Hebrew::is_leap(year) {
            assert!(len >= 383);
        } else {
            assert!(len <= 355);
        }
    }

    #[test]
    fn week_of_year_counts_from_year_start(rd in -RD_RANGE..RD_RANGE) {
        let g = Gregorian::from_rata_die(RataDie::new(rd));
        let w = g.week_of_year();
        let start = Gregorian::try_year_start(g.year()).unwrap();
        let elapsed = g.day_difference(start);
        assert_eq!(w as i64, elapsed / 7 + 1);
    }

    #[test]
    fn march_never_holds_week_52(year in -9999 as i32..9999) {
        let pattern = Format::compile("Y-MM-'W'RR").unwrap();
        let input = format!("{}-03-W52", year);
        assert_eq!(
            parse_moment(&input, &pattern),
            Err(ParseError::ConflictingInput),
            "year = {}",
            year
        );
    }
}
