// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::clock::TimeOfDay;
use crate::clock::TimeZone;
use crate::day_count::FromRataDie;
use crate::day_count::RataDie;
use crate::day_count::ToRataDie;

/// Represents an instant in time using calendar system T
///
/// The instant is the combination of a calendar date, a time of day and a
/// fixed-offset zone. The zone does not shift the date or the time; it
/// records the offset the fields are expressed in.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ZonedMoment<T> {
    date: T,
    time: TimeOfDay,
    zone: TimeZone,
}

impl<T> ZonedMoment<T> {
    /// Create a ZonedMoment with the given date, time and zone
    pub fn new(date: T, time: TimeOfDay, zone: TimeZone) -> Self {
        Self { date, time, zone }
    }

    pub fn date(&self) -> T
    where
        T: Copy,
    {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// The same instant with the date converted to another calendar system.
    pub fn convert_date<U: FromRataDie>(&self) -> ZonedMoment<U>
    where
        T: ToRataDie,
    {
        ZonedMoment::new(self.date.convert::<U>(), self.time, self.zone.clone())
    }
}

impl<T: ToRataDie> ZonedMoment<T> {
    pub fn to_rata_die(&self) -> RataDie {
        self.date.to_rata_die()
    }
}

impl<T: FromRataDie> ZonedMoment<T> {
    /// Midnight UTC at the start of the given day.
    pub fn from_rata_die(d: RataDie) -> Self {
        Self::new(T::from_rata_die(d), TimeOfDay::midnight(), TimeZone::utc())
    }
}
