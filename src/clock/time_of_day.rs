// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::common::error::CalendarError;

/// Represents a clock time as hours, minutes, seconds and nanoseconds
///
/// Leap seconds are not representable; second 60 is rejected.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

fn check_fields(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<(), CalendarError> {
    if hour > 23 {
        Err(CalendarError::InvalidHour)
    } else if minute > 59 {
        Err(CalendarError::InvalidMinute)
    } else if second > 59 {
        Err(CalendarError::InvalidSecond)
    } else if nanosecond > 999_999_999 {
        Err(CalendarError::InvalidNanosecond)
    } else {
        Ok(())
    }
}

impl TimeOfDay {
    /// Validate the combination of fields and aggregate into a `TimeOfDay`
    pub fn try_new(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<TimeOfDay, CalendarError> {
        match check_fields(hour, minute, second, nanosecond) {
            Ok(()) => Ok(TimeOfDay {
                hour,
                minute,
                second,
                nanosecond,
            }),
            Err(error) => Err(error),
        }
    }

    pub fn midnight() -> TimeOfDay {
        TimeOfDay::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn field_limits() {
        assert!(TimeOfDay::try_new(23, 59, 59, 999_999_999).is_ok());
        assert_eq!(
            TimeOfDay::try_new(24, 0, 0, 0),
            Err(CalendarError::InvalidHour)
        );
        assert_eq!(
            TimeOfDay::try_new(0, 60, 0, 0),
            Err(CalendarError::InvalidMinute)
        );
        assert_eq!(
            TimeOfDay::try_new(0, 0, 60, 0),
            Err(CalendarError::InvalidSecond)
        );
        assert_eq!(
            TimeOfDay::try_new(0, 0, 0, 1_000_000_000),
            Err(CalendarError::InvalidNanosecond)
        );
    }

    #[test]
    fn midnight_is_zero() {
        let m = TimeOfDay::midnight();
        assert_eq!(m, TimeOfDay::try_new(0, 0, 0, 0).unwrap());
    }

    proptest! {
        #[test]
        fn ordering_is_lexicographic(h1 in 0 as u8..24, m1 in 0 as u8..60, h2 in 0 as u8..24, m2 in 0 as u8..60) {
            let t1 = TimeOfDay::try_new(h1, m1, 0, 0).unwrap();
            let t2 = TimeOfDay::try_new(h2, m2, 0, 0).unwrap();
            let seconds1 = (h1 as u32) * 3600 + (m1 as u32) * 60;
            let seconds2 = (h2 as u32) * 3600 + (m2 as u32) * 60;
            assert_eq!(t1.cmp(&t2), seconds1.cmp(&seconds2));
        }
    }
}
