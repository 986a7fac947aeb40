// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate num_derive;

mod common {
    pub mod error;
    pub mod math;
}
pub use common::error;
pub use common::math;
pub mod day_count {
    mod rata_die;

    pub use rata_die::DateArithmetic;
    pub use rata_die::Epoch;
    pub use rata_die::FromRataDie;
    pub use rata_die::RataDie;
    pub use rata_die::ToRataDie;
    pub use rata_die::RD_MAX;
    pub use rata_die::RD_MIN;
}
pub mod day_cycle {
    mod week;

    pub use week::Weekday;
}
pub mod calendar {
    mod easter;
    mod gregorian;
    mod hebrew;
    mod iso;
    mod julian;
    mod moment;
    mod prelude;

    pub use easter::easter;
    pub use easter::orthodox_easter;
    pub use gregorian::Gregorian;
    pub use gregorian::GregorianMonth;
    pub use hebrew::Hebrew;
    pub use hebrew::HebrewMonth;
    pub use iso::IsoWeek;
    pub use julian::ad_to_astronomical;
    pub use julian::astronomical_to_ad;
    pub use julian::Julian;
    pub use julian::JulianMonth;
    pub use moment::ZonedMoment;
    pub use prelude::CommonDate;
    pub use prelude::CommonWeekOfYear;
    pub use prelude::GuaranteedMonth;
    pub use prelude::HasLeapYears;
    pub use prelude::OrdinalDate;
    pub use prelude::ToFromCommonDate;
    pub use prelude::ToFromOrdinalDate;
}
pub mod clock {
    mod time_of_day;
    mod zone;

    pub use time_of_day::TimeOfDay;
    pub use zone::TimeZone;
}
pub mod format {
    #[cfg(feature = "display")]
    mod display;
    mod parse;
    mod segment;

    #[cfg(feature = "display")]
    pub use display::format_moment;
    pub use parse::parse_moment;
    pub use parse::Era;
    pub use parse::Meridiem;
    pub use parse::ParsedFields;
    pub use segment::Format;
    pub use segment::Segment;
    pub use segment::SegmentKind;
    pub use segment::MAX_SEGMENTS;
}
pub mod holiday;

pub use common::error::CalendarError;
pub use common::error::ParseError;
