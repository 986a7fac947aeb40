// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::ad_to_astronomical;
use crate::calendar::CommonDate;
use crate::calendar::Gregorian;
use crate::calendar::IsoWeek;
use crate::calendar::OrdinalDate;
use crate::calendar::ToFromCommonDate;
use crate::calendar::ToFromOrdinalDate;
use crate::calendar::ZonedMoment;
use crate::clock::TimeOfDay;
use crate::clock::TimeZone;
use crate::common::error::CalendarError;
use crate::common::error::ParseError;
use crate::day_count::DateArithmetic;
use crate::day_count::FromRataDie;
use crate::day_count::ToRataDie;
use crate::day_cycle::Weekday;
use crate::format::Format;
use crate::format::Segment;
use crate::format::SegmentKind;

//Effectively unbounded digit run for width-1 year directives.
const MAX_YEAR_DIGITS: usize = 250;

/// Era designator recovered from `G` directives.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Era {
    AnnoDomini,
    BeforeChrist,
}

/// Meridiem marker recovered from `a`/`A` directives.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Meridiem {
    Am,
    Pm,
}

/// The partial field record filled while consuming input under a pattern.
///
/// Fields are optionals; reconciliation into a concrete date happens in
/// [`ParsedFields::resolve`] and nowhere else.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ParsedFields {
    pub year_unsigned: Option<i64>,
    pub era: Option<Era>,
    pub year_signed: Option<i64>,
    pub month: Option<u8>,
    pub iso_week: Option<u8>,
    pub day_of_week: Option<Weekday>,
    pub day_of_month: Option<u8>,
    pub day_of_year: Option<u16>,
    pub meridiem: Option<Meridiem>,
    pub hour12: Option<u8>,
    pub hour24: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub nanosecond: Option<u32>,
    pub zone: Option<TimeZone>,
}

struct Cursor<'i> {
    bytes: &'i [u8],
    pos: usize,
}

impl<'i> Cursor<'i> {
    fn new(input: &'i str) -> Cursor<'i> {
        Cursor {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn rest(&self) -> &'i [u8] {
        &self.bytes[self.pos..]
    }

    fn bump(&mut self, n: usize) {
        self.pos += n;
    }

    fn done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consume up to `max` ASCII digits and return them.
    fn eat_digits(&mut self, max: usize) -> &'i [u8] {
        let rest = self.rest();
        let n = rest
            .iter()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.bump(n);
        &rest[..n]
    }

    /// Consume an exact byte sequence.
    fn eat_literal(&mut self, lit: &[u8]) -> bool {
        if self.rest().starts_with(lit) {
            self.bump(lit.len());
            true
        } else {
            false
        }
    }

    /// Consume an ASCII case-insensitive byte sequence.
    fn eat_literal_ci(&mut self, lit: &[u8]) -> bool {
        let rest = self.rest();
        if rest.len() >= lit.len() && rest[..lit.len()].eq_ignore_ascii_case(lit) {
            self.bump(lit.len());
            true
        } else {
            false
        }
    }
}

fn digits_value(digits: &[u8]) -> i64 {
    let mut v: i64 = 0;
    for &b in digits {
        v = v.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    v
}

//Width of an unadorned single-letter numeric directive.
fn natural_width(kind: SegmentKind) -> usize {
    match kind {
        SegmentKind::DayOfYearNum => 3,
        SegmentKind::DayOfWeekNum => 1,
        _ => 2,
    }
}

fn numeric_width(kind: SegmentKind, run: usize) -> usize {
    if run == 1 {
        natural_width(kind)
    } else {
        run
    }
}

const MONTHS_SHORT: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const MONTHS_LONG: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];
//Indexed in ISO order: Monday first.
const DAYS_SHORT: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
const DAYS_LONG: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];
const DAYS_FIRST2: [&str; 7] = ["mo", "tu", "we", "th", "fr", "sa", "su"];

//Case-sensitive abbreviated eras, longest spellings first so that a
//prefix never shadows a longer match.
const ERAS_SHORT: [(&str, Era); 16] = [
    ("b.c.e.", Era::BeforeChrist),
    ("B.C.E.", Era::BeforeChrist),
    ("a.d.", Era::AnnoDomini),
    ("A.D.", Era::AnnoDomini),
    ("c.e.", Era::AnnoDomini),
    ("C.E.", Era::AnnoDomini),
    ("b.c.", Era::BeforeChrist),
    ("B.C.", Era::BeforeChrist),
    ("bce", Era::BeforeChrist),
    ("BCE", Era::BeforeChrist),
    ("ad", Era::AnnoDomini),
    ("AD", Era::AnnoDomini),
    ("ce", Era::AnnoDomini),
    ("CE", Era::AnnoDomini),
    ("bc", Era::BeforeChrist),
    ("BC", Era::BeforeChrist),
];

const ERAS_LONG: [(&str, Era); 4] = [
    ("before current era", Era::BeforeChrist),
    ("before christ", Era::BeforeChrist),
    ("current era", Era::AnnoDomini),
    ("anno domini", Era::AnnoDomini),
];

impl ParsedFields {
    /// Consume `input` under a compiled pattern, filling the field record.
    ///
    /// Each segment consumes a prefix of the remaining input; there is no
    /// backtracking, and the first failure propagates. The whole input must
    /// be consumed.
    pub fn from_input(input: &str, format: &Format) -> Result<ParsedFields, ParseError> {
        let mut fields = ParsedFields::default();
        let mut cur = Cursor::new(input);
        for segment in format.segments() {
            fields.consume_segment(&mut cur, segment)?;
        }
        if !cur.done() {
            return Err(ParseError::InvalidInput);
        }
        Ok(fields)
    }

    fn consume_segment(&mut self, cur: &mut Cursor, segment: &Segment) -> Result<(), ParseError> {
        let run = segment.literal.len();
        match segment.kind {
            SegmentKind::YearIso => {
                let negative = cur.eat_literal(b"-");
                let width = if run == 1 { MAX_YEAR_DIGITS } else { run };
                let v = consume_uint(cur, width)?;
                self.year_signed = Some(if negative { -v } else { v });
            }
            SegmentKind::Year => {
                let width = if run == 1 { MAX_YEAR_DIGITS } else { run };
                let v = consume_uint(cur, width)?;
                self.year_unsigned = Some(if run == 2 || run == 3 { v + 2000 } else { v });
            }
            SegmentKind::SignedYear => {
                let negative = match cur.peek() {
                    Some(b'+') => false,
                    Some(b'-') => true,
                    _ => return Err(ParseError::InvalidInput),
                };
                cur.bump(1);
                let width = if run == 1 { MAX_YEAR_DIGITS } else { run };
                let v = consume_uint(cur, width)?;
                self.year_signed = Some(if negative { -v } else { v });
            }
            SegmentKind::EraDesignatorShort => {
                self.era = Some(consume_era(cur, &ERAS_SHORT, false)?);
            }
            SegmentKind::EraDesignatorLong => {
                self.era = Some(consume_era(cur, &ERAS_LONG, true)?);
            }
            SegmentKind::MonthNum => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.month = Some(v as u8);
            }
            SegmentKind::MonthNameShort => {
                self.month = Some(consume_name(cur, &MONTHS_SHORT)? as u8 + 1);
            }
            SegmentKind::MonthNameLong => {
                self.month = Some(consume_name(cur, &MONTHS_LONG)? as u8 + 1);
            }
            SegmentKind::WeekInYear => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.iso_week = Some(v as u8);
            }
            SegmentKind::DayOfMonthNum => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.day_of_month = Some(v as u8);
            }
            SegmentKind::DayOfYearNum => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.day_of_year = Some(v as u16);
            }
            SegmentKind::DayOfWeekNum => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                if v > 7 {
                    return Err(ParseError::InvalidInput);
                }
                self.day_of_week =
                    Some(Weekday::try_from_iso_number(v as u8).expect("Checked above"));
            }
            SegmentKind::DayOfWeekNameShort => {
                let i = consume_name(cur, &DAYS_SHORT)?;
                self.day_of_week = Some(weekday_from_iso_index(i));
            }
            SegmentKind::DayOfWeekNameFull => {
                let i = consume_name(cur, &DAYS_LONG)?;
                self.day_of_week = Some(weekday_from_iso_index(i));
            }
            SegmentKind::DayOfWeekNameFirst2Letters => {
                let i = consume_name(cur, &DAYS_FIRST2)?;
                self.day_of_week = Some(weekday_from_iso_index(i));
            }
            SegmentKind::TimeOfDayLocale => {
                //Longest spelling first; any case.
                for (lit, m) in [
                    ("a.m.", Meridiem::Am),
                    ("p.m.", Meridiem::Pm),
                    ("am", Meridiem::Am),
                    ("pm", Meridiem::Pm),
                    ("a", Meridiem::Am),
                    ("p", Meridiem::Pm),
                ] {
                    if cur.eat_literal_ci(lit.as_bytes()) {
                        self.meridiem = Some(m);
                        return Ok(());
                    }
                }
                return Err(ParseError::InvalidInput);
            }
            SegmentKind::TimeOfDayUpper => {
                self.meridiem = Some(consume_meridiem(cur, "AM", "PM")?);
            }
            SegmentKind::TimeOfDayLower => {
                self.meridiem = Some(consume_meridiem(cur, "am", "pm")?);
            }
            SegmentKind::TimeOfDayDotted => {
                self.meridiem = Some(consume_meridiem(cur, "a.m.", "p.m.")?);
            }
            SegmentKind::TimeOfDayLetter => {
                self.meridiem = Some(consume_meridiem(cur, "a", "p")?);
            }
            SegmentKind::Hour12Num => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.hour12 = Some(v as u8);
            }
            SegmentKind::Hour24Num => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.hour24 = Some(v as u8);
            }
            SegmentKind::MinuteNum => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.minute = Some(v as u8);
            }
            SegmentKind::SecondNum => {
                let v = consume_uint(cur, numeric_width(segment.kind, run))?;
                self.second = Some(v as u8);
            }
            SegmentKind::FractionOfSecond => {
                let digits = cur.eat_digits(run);
                if digits.is_empty() {
                    return Err(ParseError::InvalidInput);
                }
                //Digits beyond nanosecond precision are consumed and dropped.
                let kept = digits.len().min(9);
                let scale = 10u32.pow((9 - kept) as u32);
                self.nanosecond = Some((digits_value(&digits[..kept]) as u32) * scale);
            }
            SegmentKind::TimezoneOffset => {
                self.zone = Some(consume_offset(cur, false)?);
            }
            SegmentKind::TimezoneOffsetZ => {
                self.zone = Some(consume_offset(cur, true)?);
            }
            SegmentKind::GmtOffset => {
                self.zone = Some(consume_gmt(cur, false)?);
            }
            SegmentKind::GmtOffsetFull => {
                self.zone = Some(consume_gmt(cur, true)?);
            }
            SegmentKind::Text => {
                if !cur.eat_literal(segment.literal.as_bytes()) {
                    return Err(ParseError::InvalidInput);
                }
            }
            SegmentKind::TextQuoted => {
                let mut bytes = segment.literal.as_bytes().iter();
                while let Some(&b) = bytes.next() {
                    let expected = if b == b'\\' {
                        match bytes.next() {
                            Some(&e) => e,
                            None => return Err(ParseError::InvalidInput),
                        }
                    } else {
                        b
                    };
                    if cur.peek() != Some(expected) {
                        return Err(ParseError::InvalidInput);
                    }
                    cur.bump(1);
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
        Ok(())
    }

    /// Reconcile the parsed fields into a zoned Gregorian date-time.
    pub fn resolve(&self) -> Result<ZonedMoment<Gregorian>, ParseError> {
        let year = self.resolve_year()?;
        let mut date = Gregorian::try_year_start(year).map_err(ParseError::Date)?;

        if let Some(m) = self.month {
            if !(1..=12).contains(&m) {
                return Err(ParseError::Date(CalendarError::InvalidMonth));
            }
            date = Gregorian::try_from_common_date(CommonDate::new(year, m, 1))
                .map_err(ParseError::Date)?;
        }

        if let Some(w) = self.iso_week {
            date = self.resolve_week(year, w)?;
        }

        if let Some(doy) = self.day_of_year {
            let g = Gregorian::try_from_ordinal(OrdinalDate {
                year,
                day_of_year: doy,
            })
            .map_err(ParseError::Date)?;
            if (self.month.is_some() || self.iso_week.is_some())
                && g.day_difference(date).abs() > 7
            {
                return Err(ParseError::ConflictingInput);
            }
            date = g;
        }

        if let Some(d) = self.day_of_month {
            let c = date.to_common_date();
            date = Gregorian::try_from_common_date(CommonDate::new(c.year, c.month, d))
                .map_err(ParseError::Date)?;
        }

        if let Some(w) = self.day_of_week {
            let snapped = w.on_or_after(date.to_rata_die());
            if snapped != date.to_rata_die() {
                if self.day_of_month.is_some() || self.day_of_year.is_some() {
                    return Err(ParseError::ConflictingInput);
                }
                date = Gregorian::from_rata_die(snapped);
            }
        }

        let time = self.resolve_time()?;
        let zone = self.zone.clone().unwrap_or_else(TimeZone::utc);
        Ok(ZonedMoment::new(date, time, zone))
    }

    fn resolve_year(&self) -> Result<i32, ParseError> {
        let from_unsigned = |y: i64, era: Option<Era>| -> Result<i64, ParseError> {
            match era {
                Some(Era::BeforeChrist) => {
                    let ad = i32::try_from(-y).map_err(|_| CalendarError::OutOfBounds)?;
                    Ok(ad_to_astronomical(ad).map_err(ParseError::Date)? as i64)
                }
                _ => Ok(y),
            }
        };
        let year = match (self.year_signed, self.year_unsigned) {
            (Some(ys), Some(yu)) => {
                if ys != from_unsigned(yu, self.era)? {
                    return Err(ParseError::ConflictingInput);
                }
                ys
            }
            (Some(ys), None) => ys,
            (None, Some(yu)) => from_unsigned(yu, self.era)?,
            (None, None) => 1,
        };
        i32::try_from(year).map_err(|_| ParseError::Date(CalendarError::OutOfBounds))
    }

    fn resolve_week(&self, year: i32, week: u8) -> Result<Gregorian, ParseError> {
        let monday = IsoWeek::try_new(year, week, Weekday::Monday)
            .map_err(ParseError::Date)?
            .to_rata_die();
        let mut g = Gregorian::from_rata_die(monday);
        if g.year() < year {
            //Week 1 can start in the closing days of the prior year.
            g = Gregorian::try_year_start(year).map_err(ParseError::Date)?;
        }
        if let Some(m) = self.month {
            let gm = g.to_common_date().month;
            if gm == m {
                //Week agrees with the month.
            } else if gm + 1 == m {
                //The week starts at the tail of the prior month; accept it
                //if the set month begins inside the week.
                let first = Gregorian::try_from_common_date(CommonDate::new(year, m, 1))
                    .map_err(ParseError::Date)?;
                let gap = first.day_difference(g);
                if gap >= 1 && gap <= 7 {
                    g = first;
                } else {
                    return Err(ParseError::ConflictingInput);
                }
            } else {
                return Err(ParseError::ConflictingInput);
            }
        }
        Ok(g)
    }

    fn resolve_time(&self) -> Result<TimeOfDay, ParseError> {
        let hour = match (self.hour12, self.hour24) {
            (Some(h12), h24) => {
                if !(1..=12).contains(&h12) {
                    return Err(ParseError::Date(CalendarError::InvalidHour));
                }
                let pm = self.meridiem == Some(Meridiem::Pm);
                let h = match (h12, pm) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (_, true) => h12 + 12,
                    (_, false) => h12,
                };
                if let Some(h24) = h24 {
                    if h24 != h {
                        return Err(ParseError::ConflictingInput);
                    }
                }
                h
            }
            (None, Some(h24)) => h24,
            (None, None) => 0,
        };
        TimeOfDay::try_new(
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.nanosecond.unwrap_or(0),
        )
        .map_err(ParseError::Date)
    }
}

fn weekday_from_iso_index(i: usize) -> Weekday {
    Weekday::try_from_iso_number(i as u8 + 1).expect("Index of a 7-element table")
}

fn consume_uint(cur: &mut Cursor, max_digits: usize) -> Result<i64, ParseError> {
    let digits = cur.eat_digits(max_digits);
    if digits.is_empty() {
        return Err(ParseError::InvalidInput);
    }
    Ok(digits_value(digits))
}

fn consume_name(cur: &mut Cursor, names: &[&str]) -> Result<usize, ParseError> {
    for (i, name) in names.iter().enumerate() {
        if cur.eat_literal_ci(name.as_bytes()) {
            return Ok(i);
        }
    }
    Err(ParseError::InvalidInput)
}

fn consume_era(cur: &mut Cursor, table: &[(&str, Era)], ci: bool) -> Result<Era, ParseError> {
    for (name, era) in table {
        let matched = if ci {
            cur.eat_literal_ci(name.as_bytes())
        } else {
            cur.eat_literal(name.as_bytes())
        };
        if matched {
            return Ok(*era);
        }
    }
    Err(ParseError::InvalidInput)
}

fn consume_meridiem(cur: &mut Cursor, am: &str, pm: &str) -> Result<Meridiem, ParseError> {
    if cur.eat_literal(am.as_bytes()) {
        Ok(Meridiem::Am)
    } else if cur.eat_literal(pm.as_bytes()) {
        Ok(Meridiem::Pm)
    } else {
        Err(ParseError::InvalidInput)
    }
}

fn consume_offset(cur: &mut Cursor, accept_z: bool) -> Result<TimeZone, ParseError> {
    if accept_z && matches!(cur.peek(), Some(b'Z') | Some(b'z')) {
        cur.bump(1);
        return Ok(TimeZone::utc());
    }
    let sign: i16 = match cur.peek() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(ParseError::InvalidInput),
    };
    cur.bump(1);
    let digits = cur.eat_digits(4);
    let (hours, mut minutes) = match digits.len() {
        2 => (digits_value(digits) as i16, 0),
        4 => (
            digits_value(&digits[..2]) as i16,
            digits_value(&digits[2..]) as i16,
        ),
        _ => return Err(ParseError::InvalidInput),
    };
    if digits.len() == 2 && cur.peek() == Some(b':') {
        cur.bump(1);
        let more = cur.eat_digits(2);
        if more.len() != 2 {
            return Err(ParseError::InvalidInput);
        }
        minutes = digits_value(more) as i16;
    }
    if minutes > 59 {
        return Err(ParseError::Date(CalendarError::InvalidZone));
    }
    TimeZone::try_from_minutes(sign * (hours * 60 + minutes)).map_err(ParseError::Date)
}

fn consume_gmt(cur: &mut Cursor, minutes_required: bool) -> Result<TimeZone, ParseError> {
    if !cur.eat_literal(b"GMT") {
        return Err(ParseError::InvalidInput);
    }
    let sign: i16 = match cur.peek() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Ok(TimeZone::gmt()),
    };
    cur.bump(1);
    let hours = consume_uint(cur, 2)? as i16;
    let mut minutes: i16 = 0;
    if cur.peek() == Some(b':') {
        cur.bump(1);
        let more = cur.eat_digits(2);
        if more.len() != 2 {
            return Err(ParseError::InvalidInput);
        }
        minutes = digits_value(more) as i16;
    } else if minutes_required {
        return Err(ParseError::InvalidInput);
    }
    if minutes > 59 {
        return Err(ParseError::Date(CalendarError::InvalidZone));
    }
    let zone = TimeZone::try_from_minutes(sign * (hours * 60 + minutes))
        .map_err(ParseError::Date)?;
    Ok(zone.with_label("GMT"))
}

/// Parse `input` under `format` and reconcile into a zoned Gregorian moment.
pub fn parse_moment(input: &str, format: &Format) -> Result<ZonedMoment<Gregorian>, ParseError> {
    ParsedFields::from_input(input, format)?.resolve()
}
