// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kalends::calendar::Gregorian;
use kalends::calendar::Hebrew;
use kalends::calendar::IsoWeek;
use kalends::calendar::Julian;
use kalends::day_count::DateArithmetic;
use kalends::day_count::FromRataDie;
use kalends::day_count::RataDie;
use kalends::day_count::ToRataDie;
use kalends::day_cycle::Weekday;
use proptest::proptest;
use std::fmt::Debug;

//Roughly ten thousand years either side of the epoch.
const RD_RANGE: i64 = 3_652_500;

fn roundtrip<T: FromRataDie + ToRataDie + PartialEq + Debug>(rd: i64) {
    let d0 = RataDie::new(rd);
    let c0 = T::from_rata_die(d0);
    let d1 = c0.to_rata_die();
    let c1 = T::from_rata_die(d1);
    assert_eq!(d0, d1, "c0 = {:?}", c0);
    assert_eq!(c0, c1, "d0 = {:?}", d0);
}

proptest! {
    #[test]
    fn gregorian(rd in -RD_RANGE..RD_RANGE) {
        roundtrip::<Gregorian>(rd);
    }

    #[test]
    fn julian(rd in -RD_RANGE..RD_RANGE) {
        roundtrip::<Julian>(rd);
    }

    #[test]
    fn hebrew(rd in -RD_RANGE..RD_RANGE) {
        roundtrip::<Hebrew>(rd);
    }

    #[test]
    fn iso_week(rd in -RD_RANGE..RD_RANGE) {
        roundtrip::<IsoWeek>(rd);
    }

    #[test]
    fn weekday_is_stable_across_calendars(rd in -RD_RANGE..RD_RANGE) {
        let d = RataDie::new(rd);
        let via_gregorian = Gregorian::from_rata_die(d).weekday();
        let via_julian = Julian::from_rata_die(d).weekday();
        let via_hebrew = Hebrew::from_rata_die(d).weekday();
        assert_eq!(via_gregorian, via_julian);
        assert_eq!(via_gregorian, via_hebrew);
        assert_eq!(via_gregorian, Weekday::from_rata_die(d));
    }
}
