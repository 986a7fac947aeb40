// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::astronomical_to_ad;
use crate::calendar::Gregorian;
use crate::calendar::IsoWeek;
use crate::calendar::ToFromCommonDate;
use crate::calendar::ToFromOrdinalDate;
use crate::calendar::ZonedMoment;
use crate::clock::TimeZone;
use crate::common::error::ParseError;
use crate::day_count::DateArithmetic;
use crate::day_count::FromRataDie;
use crate::day_count::ToRataDie;
use crate::format::Format;
use crate::format::SegmentKind;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
//Indexed in ISO order: Monday first.
const DAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const DAYS_LONG: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const DAYS_FIRST2: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

fn push_padded(out: &mut String, value: u64, width: usize) {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(value);
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(digits);
}

fn push_offset(out: &mut String, zone: &TimeZone, colon: bool, omit_zero_minutes: bool) {
    let total = zone.offset_minutes();
    out.push(if total < 0 { '-' } else { '+' });
    push_padded(out, zone.offset_hours_part().unsigned_abs() as u64, 2);
    let minutes = zone.offset_minutes_part();
    if minutes == 0 && omit_zero_minutes {
        return;
    }
    if colon {
        out.push(':');
    }
    push_padded(out, minutes as u64, 2);
}

/// Render a zoned Gregorian moment under a compiled pattern.
///
/// Every segment kind the parser accepts is supported; the compile-only
/// directives report [`ParseError::UnsupportedFormatString`]. Rendering a
/// negative year through the unsigned `y` directive requires an era
/// directive somewhere in the pattern to carry the sign.
pub fn format_moment(
    moment: &ZonedMoment<Gregorian>,
    format: &Format,
) -> Result<String, ParseError> {
    let date = moment.date();
    let time = moment.time();
    let zone = moment.zone();
    let common = date.to_common_date();
    let has_era = format.segments().iter().any(|s| {
        matches!(
            s.kind,
            SegmentKind::EraDesignatorShort | SegmentKind::EraDesignatorLong
        )
    });
    //The era designator carries the sign for the unsigned year directive.
    let (era_year, bc) = if has_era && common.year <= 0 {
        (astronomical_to_ad(common.year).unsigned_abs() as u64, true)
    } else {
        (common.year.unsigned_abs() as u64, false)
    };

    let mut out = String::new();
    for segment in format.segments() {
        let run = segment.literal.len();
        match segment.kind {
            SegmentKind::YearIso => {
                if common.year < 0 {
                    out.push('-');
                }
                push_padded(&mut out, common.year.unsigned_abs() as u64, run);
            }
            SegmentKind::Year => {
                if run == 2 || run == 3 {
                    //Offset from the year 2000, mirroring the parser.
                    let v = (common.year as i64) - 2000;
                    if v >= 0 && v < 10i64.pow(run as u32) {
                        push_padded(&mut out, v as u64, run);
                    } else {
                        push_padded(&mut out, era_year, run);
                    }
                } else {
                    push_padded(&mut out, era_year, run);
                }
            }
            SegmentKind::SignedYear => {
                out.push(if common.year < 0 { '-' } else { '+' });
                push_padded(&mut out, common.year.unsigned_abs() as u64, run);
            }
            SegmentKind::EraDesignatorShort => {
                out.push_str(if bc || common.year <= 0 { "BC" } else { "AD" });
            }
            SegmentKind::EraDesignatorLong => {
                out.push_str(if bc || common.year <= 0 {
                    "Before Christ"
                } else {
                    "Anno Domini"
                });
            }
            SegmentKind::MonthNum => push_padded(&mut out, common.month as u64, run),
            SegmentKind::MonthNameShort => {
                out.push_str(MONTHS_SHORT[common.month as usize - 1]);
            }
            SegmentKind::MonthNameLong => {
                out.push_str(MONTHS_LONG[common.month as usize - 1]);
            }
            SegmentKind::WeekInYear => {
                let week = IsoWeek::from_rata_die(date.to_rata_die()).week().get();
                push_padded(&mut out, week as u64, run);
            }
            SegmentKind::DayOfMonthNum => push_padded(&mut out, common.day as u64, run),
            SegmentKind::DayOfYearNum => {
                push_padded(&mut out, date.to_ordinal().day_of_year as u64, run);
            }
            SegmentKind::DayOfWeekNum => {
                let w = date.weekday();
                push_padded(&mut out, w.iso_number() as u64, run);
            }
            SegmentKind::DayOfWeekNameShort => {
                let w = date.weekday();
                out.push_str(DAYS_SHORT[w.iso_number() as usize - 1]);
            }
            SegmentKind::DayOfWeekNameFull => {
                let w = date.weekday();
                out.push_str(DAYS_LONG[w.iso_number() as usize - 1]);
            }
            SegmentKind::DayOfWeekNameFirst2Letters => {
                let w = date.weekday();
                out.push_str(DAYS_FIRST2[w.iso_number() as usize - 1]);
            }
            SegmentKind::TimeOfDayLocale | SegmentKind::TimeOfDayUpper => {
                out.push_str(if time.hour < 12 { "AM" } else { "PM" });
            }
            SegmentKind::TimeOfDayLower => {
                out.push_str(if time.hour < 12 { "am" } else { "pm" });
            }
            SegmentKind::TimeOfDayDotted => {
                out.push_str(if time.hour < 12 { "a.m." } else { "p.m." });
            }
            SegmentKind::TimeOfDayLetter => {
                out.push_str(if time.hour < 12 { "a" } else { "p" });
            }
            SegmentKind::Hour12Num => {
                let h = ((time.hour as u64 + 11) % 12) + 1;
                push_padded(&mut out, h, run);
            }
            SegmentKind::Hour24Num => push_padded(&mut out, time.hour as u64, run),
            SegmentKind::MinuteNum => push_padded(&mut out, time.minute as u64, run),
            SegmentKind::SecondNum => push_padded(&mut out, time.second as u64, run),
            SegmentKind::FractionOfSecond => {
                let scaled = (time.nanosecond as u64) / 10u64.pow((9 - run.min(9)) as u32);
                push_padded(&mut out, scaled, run);
            }
            SegmentKind::TimezoneOffset => match run {
                1 => push_offset(&mut out, zone, false, true),
                2 => push_offset(&mut out, zone, false, false),
                _ => push_offset(&mut out, zone, true, false),
            },
            SegmentKind::TimezoneOffsetZ => {
                if zone.offset_minutes() == 0 {
                    out.push('Z');
                } else {
                    match run {
                        1 => push_offset(&mut out, zone, false, true),
                        2 => push_offset(&mut out, zone, false, false),
                        _ => push_offset(&mut out, zone, true, false),
                    }
                }
            }
            SegmentKind::GmtOffset | SegmentKind::GmtOffsetFull => {
                out.push_str("GMT");
                if zone.offset_minutes() != 0 {
                    push_offset(&mut out, zone, true, false);
                }
            }
            SegmentKind::Text => out.push_str(segment.literal),
            SegmentKind::TextQuoted => {
                let mut chars = segment.literal.chars();
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        if let Some(e) = chars.next() {
                            out.push(e);
                        }
                    } else {
                        out.push(c);
                    }
                }
            }
            SegmentKind::EraDesignatorNarrow
            | SegmentKind::MonthNameFirstLetter
            | SegmentKind::DayOfWeekNameFirstLetter
            | SegmentKind::QuarterNum
            | SegmentKind::QuarterName
            | SegmentKind::DayOfMonthOrdinal => {
                return Err(ParseError::UnsupportedFormatString);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CommonDate;
    use crate::clock::TimeOfDay;
    use crate::format::parse_moment;
    use proptest::proptest;

    fn moment(date: CommonDate, time: TimeOfDay, zone: TimeZone) -> ZonedMoment<Gregorian> {
        ZonedMoment::new(
            Gregorian::try_from_common_date(date).unwrap(),
            time,
            zone,
        )
    }

    #[test]
    fn iso_datetime() {
        let m = moment(
            CommonDate::new(2024, 12, 20),
            TimeOfDay::try_new(22, 38, 58, 0).unwrap(),
            TimeZone::utc(),
        );
        let f = Format::compile("YYYY-MM-ddTHH:mm:ssX").unwrap();
        assert_eq!(format_moment(&m, &f).unwrap(), "2024-12-20T22:38:58Z");
    }

    #[test]
    fn rfc_like() {
        let m = moment(
            CommonDate::new(2024, 10, 29),
            TimeOfDay::try_new(16, 56, 32, 0).unwrap(),
            TimeZone::gmt(),
        );
        let f = Format::compile("eee, dd MMM yyyy HH:mm:ss O").unwrap();
        assert_eq!(
            format_moment(&m, &f).unwrap(),
            "Tue, 29 Oct 2024 16:56:32 GMT"
        );
    }

    #[test]
    fn week_date() {
        let m = moment(
            CommonDate::new(2024, 12, 20),
            TimeOfDay::midnight(),
            TimeZone::utc(),
        );
        let f = Format::compile("YYYY-'W'RR-e").unwrap();
        assert_eq!(format_moment(&m, &f).unwrap(), "2024-W51-5");
    }

    #[test]
    fn bc_year_with_era() {
        let m = moment(
            CommonDate::new(-43, 3, 15),
            TimeOfDay::midnight(),
            TimeZone::utc(),
        );
        let f = Format::compile("MMMM d, y G").unwrap();
        assert_eq!(format_moment(&m, &f).unwrap(), "March 15, 44 BC");
    }

    #[test]
    fn unsupported_directives() {
        let m = moment(
            CommonDate::new(2024, 1, 1),
            TimeOfDay::midnight(),
            TimeZone::utc(),
        );
        let f = Format::compile("QQQ").unwrap();
        assert_eq!(
            format_moment(&m, &f),
            Err(ParseError::UnsupportedFormatString)
        );
    }

    proptest! {
        #[test]
        fn round_trip_through_parser(
            rd in -365000 as i64..3650000,
            h in 0 as u8..24,
            min in 0 as u8..60,
            s in 0 as u8..60,
            offset in -800 as i32..800,
        ) {
            use crate::day_count::FromRataDie;
            use crate::day_count::RataDie;
            let date = Gregorian::from_rata_die(RataDie::new(rd));
            let time = TimeOfDay::try_new(h, min, s, 0).unwrap();
            let zone = TimeZone::try_from_minutes(offset as i16).unwrap();
            let m = ZonedMoment::new(date, time, zone);
            let f = Format::compile("YYYY-MM-ddTHH:mm:ssxxx").unwrap();
            let text = format_moment(&m, &f).unwrap();
            let parsed = parse_moment(&text, &f).unwrap();
            assert_eq!(parsed, m);
        }
    }
}
