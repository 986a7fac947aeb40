// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::common::error::CalendarError;
use crate::day_cycle::Weekday;

/// Maximum supported value for a `RataDie`.
///
/// This is somewhere after January 1, 2700000 Common Era in the proleptic
/// Gregorian calendar - far wider than the calendars here need, but narrow
/// enough that a year never overflows an `i32` and a day count never
/// overflows an `i64` during intermediate sums.
pub const RD_MAX: i64 = 1_000_000_000;
/// Minimum supported value for a `RataDie`.
pub const RD_MIN: i64 = -RD_MAX;

/// A count of days from the Rata Die epoch.
///
/// Day 1 is January 1 of year 1 in the proleptic Gregorian calendar; day 0
/// is the day before. Every calendar in this crate converts to and from
/// this type, and all date arithmetic happens in this space.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
pub struct RataDie(i64);

impl RataDie {
    pub fn new(d: i64) -> RataDie {
        debug_assert!(RataDie::in_bounds(d).is_ok(), "d = {}", d);
        RataDie(d)
    }

    pub fn checked_new(d: i64) -> Result<RataDie, CalendarError> {
        RataDie::in_bounds(d)?;
        Ok(RataDie(d))
    }

    pub fn clamped_new(d: i64) -> RataDie {
        RataDie(d.clamp(RD_MIN, RD_MAX))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, n: i64) -> Result<RataDie, CalendarError> {
        match self.0.checked_add(n) {
            Some(d) => RataDie::checked_new(d),
            None => Err(CalendarError::OutOfBounds),
        }
    }

    pub fn checked_sub(self, n: i64) -> Result<RataDie, CalendarError> {
        match self.0.checked_sub(n) {
            Some(d) => RataDie::checked_new(d),
            None => Err(CalendarError::OutOfBounds),
        }
    }

    pub fn clamped_add(self, n: i64) -> RataDie {
        RataDie::clamped_new(self.0.saturating_add(n))
    }

    pub fn clamped_sub(self, n: i64) -> RataDie {
        RataDie::clamped_new(self.0.saturating_sub(n))
    }

    /// Days from `other` to `self`; positive when `self` is later.
    pub fn diff(self, other: RataDie) -> i64 {
        self.0 - other.0
    }

    fn in_bounds(d: i64) -> Result<(), CalendarError> {
        if d >= RD_MIN && d <= RD_MAX {
            Ok(())
        } else {
            Err(CalendarError::OutOfBounds)
        }
    }
}

/// Values which can be decoded from a day number.
pub trait FromRataDie: Copy + Clone {
    fn from_rata_die(d: RataDie) -> Self;
}

/// Values which can be encoded as a day number.
pub trait ToRataDie: Copy + Clone {
    fn to_rata_die(self) -> RataDie;

    /// Convert to any other day-number representation.
    fn convert<T: FromRataDie>(self) -> T {
        T::from_rata_die(self.to_rata_die())
    }
}

/// Calendar systems with a known epoch.
pub trait Epoch {
    fn epoch() -> RataDie;
}

/// Date algebra shared by every calendar, defined once in day-number space.
pub trait DateArithmetic: ToRataDie + FromRataDie {
    fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        Ok(Self::from_rata_die(self.to_rata_die().checked_add(n)?))
    }

    fn sub_days(self, n: i64) -> Result<Self, CalendarError> {
        Ok(Self::from_rata_die(self.to_rata_die().checked_sub(n)?))
    }

    fn day_difference(self, other: Self) -> i64 {
        self.to_rata_die().diff(other.to_rata_die())
    }

    fn weekday(self) -> Weekday {
        Weekday::from_rata_die(self.to_rata_die())
    }
}

impl<T: ToRataDie + FromRataDie> DateArithmetic for T {}

impl FromRataDie for RataDie {
    fn from_rata_die(d: RataDie) -> RataDie {
        d
    }
}

impl ToRataDie for RataDie {
    fn to_rata_die(self) -> RataDie {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn reject_out_of_bounds() {
        assert!(RataDie::checked_new(RD_MAX + 1).is_err());
        assert!(RataDie::checked_new(RD_MIN - 1).is_err());
        assert!(RataDie::checked_new(i64::MAX).is_err());
    }

    #[test]
    fn accept_ok() {
        for d in [RD_MIN, -1, 0, 1, RD_MAX] {
            assert!(RataDie::checked_new(d).is_ok());
        }
    }

    #[test]
    fn epoch_weekday() {
        //Rata Die 1 is Monday, January 1 of year 1.
        assert_eq!(RataDie::new(1).weekday(), Weekday::Monday);
        assert_eq!(RataDie::new(0).weekday(), Weekday::Sunday);
    }

    #[test]
    fn saturating_arithmetic() {
        let top = RataDie::new(RD_MAX);
        assert_eq!(top.clamped_add(10), top);
        assert!(top.checked_add(10).is_err());
        let bottom = RataDie::new(RD_MIN);
        assert_eq!(bottom.clamped_sub(10), bottom);
        assert!(bottom.checked_sub(10).is_err());
    }

    proptest! {
        #[test]
        fn add_then_sub(d in RD_MIN / 2..RD_MAX / 2, n in -1000000 as i64..1000000) {
            let d0 = RataDie::new(d);
            let d1 = d0.checked_add(n).unwrap();
            let d2 = d1.checked_sub(n).unwrap();
            assert_eq!(d0, d2);
            assert_eq!(d1.diff(d0), n);
            assert_eq!(d0.diff(d1), -n);
        }

        #[test]
        fn ordering_matches_get(a in RD_MIN..RD_MAX, b in RD_MIN..RD_MAX) {
            let ra = RataDie::new(a);
            let rb = RataDie::new(b);
            assert_eq!(ra.cmp(&rb), a.cmp(&b));
        }
    }
}
