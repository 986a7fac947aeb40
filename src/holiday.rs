// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projection of holidays onto Gregorian years.
//!
//! Holiday rules live outside this crate; what lives here is the projection
//! they all need. A rule is a function from a year number to a date on some
//! calendar. Because other calendars' years straddle the Gregorian year
//! boundary, the date for Gregorian year N can come from the rule evaluated
//! at N-1, N or N+1; the adapters evaluate all three and keep the results
//! that land inside the requested Gregorian year.

use crate::calendar::Gregorian;
use crate::calendar::ToFromCommonDate;
use crate::common::error::CalendarError;
use crate::day_count::ToRataDie;

/// A bounded ordered set of Gregorian dates.
///
/// Insertion keeps the dates sorted and ignores duplicates; pushing past
/// the capacity reports [`CalendarError::OutOfBounds`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GregorianSet<const N: usize> {
    dates: [Option<Gregorian>; N],
    len: usize,
}

impl<const N: usize> GregorianSet<N> {
    pub fn new() -> Self {
        GregorianSet {
            dates: [None; N],
            len: 0,
        }
    }

    pub fn push(&mut self, d: Gregorian) -> Result<(), CalendarError> {
        let mut i = 0;
        while i < self.len {
            let cur = self.dates[i].expect("Slots below len are filled");
            if cur == d {
                return Ok(());
            }
            if cur > d {
                break;
            }
            i += 1;
        }
        if self.len >= N {
            return Err(CalendarError::OutOfBounds);
        }
        let mut j = self.len;
        while j > i {
            self.dates[j] = self.dates[j - 1];
            j -= 1;
        }
        self.dates[i] = Some(d);
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, i: usize) -> Option<Gregorian> {
        if i < self.len {
            self.dates[i]
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Gregorian> + '_ {
        self.dates[..self.len]
            .iter()
            .map(|d| d.expect("Slots below len are filled"))
    }
}

impl<const N: usize> Default for GregorianSet<N> {
    fn default() -> Self {
        GregorianSet::new()
    }
}

/// Every Gregorian date inside `year` produced by a single-date holiday
/// rule evaluated at `year - 1`, `year` and `year + 1`.
pub fn holiday_in_gregorian_year<D, F>(year: i32, f: F) -> Result<GregorianSet<3>, CalendarError>
where
    D: ToRataDie,
    F: Fn(i32) -> Result<D, CalendarError>,
{
    let mut out = GregorianSet::new();
    for y in [year - 1, year, year + 1] {
        let g: Gregorian = f(y)?.convert();
        if g.year() == year {
            out.push(g)?;
        }
    }
    Ok(out)
}

/// Array analogue of [`holiday_in_gregorian_year`] for rules that produce
/// several dates per year. The capacity `N` must accommodate up to `3 * C`
/// dates; overflow reports [`CalendarError::OutOfBounds`].
pub fn holidays_in_gregorian_year<D, F, const C: usize, const N: usize>(
    year: i32,
    f: F,
) -> Result<GregorianSet<N>, CalendarError>
where
    D: ToRataDie,
    F: Fn(i32) -> Result<[D; C], CalendarError>,
{
    let mut out = GregorianSet::new();
    for y in [year - 1, year, year + 1] {
        for d in f(y)? {
            let g: Gregorian = d.convert();
            if g.year() == year {
                out.push(g)?;
            }
        }
    }
    Ok(out)
}
