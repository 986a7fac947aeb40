// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;

/// Represents a day of the 7-day week.
///
/// The discriminants follow the Rata Die convention (day 0 of the epoch is
/// a Sunday, hence Sunday = 0). Two numbering schemes are in common use on
/// top of this cycle and both are exposed: [`Weekday::iso_number`] counts
/// Monday = 1 through Sunday = 7, [`Weekday::sunday_number`] counts
/// Sunday = 1 through Saturday = 7.
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Hash, FromPrimitive, ToPrimitive)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl FromRataDie for Weekday {
    fn from_rata_die(d: RataDie) -> Weekday {
        Weekday::from_i64(d.get().modulus(7)).expect("Modulus guaranteed within range")
    }
}

impl Weekday {
    /// Monday = 1 .. Sunday = 7.
    pub fn iso_number(self) -> u8 {
        (self as i64).adjusted_remainder(7) as u8
    }

    /// Sunday = 1 .. Saturday = 7.
    pub fn sunday_number(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Weekday::iso_number`]. Both 0 and 7 mean Sunday.
    pub fn try_from_iso_number(n: u8) -> Result<Weekday, CalendarError> {
        match n {
            0 | 7 => Ok(Weekday::Sunday),
            1..=6 => Ok(Weekday::from_u8(n).expect("Checked in match")),
            _ => Err(CalendarError::InvalidDay),
        }
    }

    pub fn unchecked_on_or_before(self, date: i64) -> i64 {
        let k = self as i64;
        date - (date - k).modulus(7)
    }

    /// Largest day number with this weekday which is not after `date`.
    pub fn on_or_before(self, date: RataDie) -> RataDie {
        RataDie::new(self.unchecked_on_or_before(date.get()))
    }

    /// Smallest day number with this weekday which is not before `date`.
    pub fn on_or_after(self, date: RataDie) -> RataDie {
        RataDie::new(self.unchecked_on_or_before(date.get() + 6))
    }

    /// Day number with this weekday within 3 days of `date`.
    pub fn nearest(self, date: RataDie) -> RataDie {
        RataDie::new(self.unchecked_on_or_before(date.get() + 3))
    }

    /// Largest day number with this weekday strictly before `date`.
    pub fn before(self, date: RataDie) -> RataDie {
        RataDie::new(self.unchecked_on_or_before(date.get() - 1))
    }

    /// Smallest day number with this weekday strictly after `date`.
    pub fn after(self, date: RataDie) -> RataDie {
        RataDie::new(self.unchecked_on_or_before(date.get() + 7))
    }
}
