// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::common::error::CalendarError;

const MAX_OFFSET_MINUTES: i16 = 14 * 60 + 59;

/// Represents a fixed offset from Universal Time
///
/// The offset is stored as a signed count of minutes; there is no daylight
/// saving rule, no zone database and no historical transition handling. An
/// optional label carries display text such as `"GMT"`.
///
/// Equality ignores the label: two zones are the same zone when their
/// offsets agree.
#[derive(Debug, Clone, Default)]
pub struct TimeZone {
    offset_minutes: i16,
    label: Option<String>,
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.offset_minutes == other.offset_minutes
    }
}

impl Eq for TimeZone {}

impl TimeZone {
    /// Universal Time, no label.
    pub fn utc() -> TimeZone {
        TimeZone::default()
    }

    /// Universal Time labelled "GMT".
    pub fn gmt() -> TimeZone {
        TimeZone {
            offset_minutes: 0,
            label: Some(String::from("GMT")),
        }
    }

    /// Attempt to create a zone from an hour and minute offset.
    ///
    /// The two fields must not carry contradictory signs: `(-5, 30)` is
    /// rejected, `(-5, -30)` means five and a half hours west of Greenwich.
    pub fn try_new(hours: i8, minutes: i8) -> Result<TimeZone, CalendarError> {
        if hours > 0 && minutes < 0 || hours < 0 && minutes > 0 {
            return Err(CalendarError::InvalidZone);
        }
        if hours.unsigned_abs() > 14 || minutes.unsigned_abs() > 59 {
            return Err(CalendarError::InvalidZone);
        }
        TimeZone::try_from_minutes((hours as i16) * 60 + (minutes as i16))
    }

    /// Attempt to create a zone from a total minute offset.
    pub fn try_from_minutes(total: i16) -> Result<TimeZone, CalendarError> {
        if total.unsigned_abs() > MAX_OFFSET_MINUTES as u16 {
            Err(CalendarError::InvalidZone)
        } else {
            Ok(TimeZone {
                offset_minutes: total,
                label: None,
            })
        }
    }

    /// The same zone carrying display text.
    pub fn with_label(self, label: &str) -> TimeZone {
        TimeZone {
            offset_minutes: self.offset_minutes,
            label: Some(String::from(label)),
        }
    }

    pub fn offset_minutes(&self) -> i16 {
        self.offset_minutes
    }

    /// Hour part of the offset, signed.
    pub fn offset_hours_part(&self) -> i8 {
        (self.offset_minutes / 60) as i8
    }

    /// Minute part of the offset, always non-negative.
    pub fn offset_minutes_part(&self) -> u8 {
        (self.offset_minutes % 60).unsigned_abs() as u8
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn constants() {
        assert_eq!(TimeZone::utc().offset_minutes(), 0);
        assert_eq!(TimeZone::utc().label(), None);
        assert_eq!(TimeZone::gmt().offset_minutes(), 0);
        assert_eq!(TimeZone::gmt().label(), Some("GMT"));
        //Same zone, different dress.
        assert_eq!(TimeZone::utc(), TimeZone::gmt());
    }

    #[test]
    fn offset_limits() {
        assert!(TimeZone::try_new(14, 0).is_ok());
        assert!(TimeZone::try_new(-14, 0).is_ok());
        assert!(TimeZone::try_new(15, 0).is_err());
        assert!(TimeZone::try_new(-15, 0).is_err());
        assert!(TimeZone::try_new(0, 60).is_err());
        assert!(TimeZone::try_from_minutes(14 * 60 + 59).is_ok());
        assert!(TimeZone::try_from_minutes(15 * 60).is_err());
    }

    #[test]
    fn sign_consistency() {
        assert!(TimeZone::try_new(-5, 30).is_err());
        assert!(TimeZone::try_new(5, -30).is_err());
        assert_eq!(TimeZone::try_new(-5, -30).unwrap().offset_minutes(), -330);
        assert_eq!(TimeZone::try_new(5, 30).unwrap().offset_minutes(), 330);
        assert_eq!(TimeZone::try_new(0, -30).unwrap().offset_minutes(), -30);
    }

    #[test]
    fn parts() {
        let z = TimeZone::try_new(-5, -30).unwrap();
        assert_eq!(z.offset_hours_part(), -5);
        assert_eq!(z.offset_minutes_part(), 30);
        let z = TimeZone::try_new(9, 30).unwrap();
        assert_eq!(z.offset_hours_part(), 9);
        assert_eq!(z.offset_minutes_part(), 30);
    }

    proptest! {
        #[test]
        fn parts_recombine(total in -(MAX_OFFSET_MINUTES as i32)..(MAX_OFFSET_MINUTES as i32)) {
            let z = TimeZone::try_from_minutes(total as i16).unwrap();
            let sign = if total < 0 { -1 } else { 1 };
            let recombined = (z.offset_hours_part() as i32) * 60
                + sign * (z.offset_minutes_part() as i32);
            assert_eq!(recombined, total);
        }
    }
}
