// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num_traits::Euclid;
use num_traits::FromPrimitive;
use num_traits::PrimInt;
use num_traits::ToPrimitive;

/// Numeric operations shared by the calendar computations.
///
/// Calendar arithmetic wants the euclidean remainder (always the sign of the
/// divisor) rather than Rust's truncating `%`.
pub trait TermNum: PrimInt + Euclid + FromPrimitive + ToPrimitive {
    fn modulus(self, other: Self) -> Self {
        debug_assert!(other != Self::zero());
        if other > Self::zero() {
            Euclid::rem_euclid(&self, &other)
        } else {
            let x = Self::zero() - self;
            let y = Self::zero() - other;
            Self::zero() - Euclid::rem_euclid(&x, &y)
        }
    }

    /// Remainder in the range `1..=b` instead of `0..b`.
    fn adjusted_remainder(self, b: Self) -> Self {
        let m = self.modulus(b);
        if m == Self::zero() {
            b
        } else {
            m
        }
    }
}

impl TermNum for i64 {}
impl TermNum for i32 {}
impl TermNum for i16 {}
impl TermNum for i8 {}
impl TermNum for u64 {}
impl TermNum for u32 {}
impl TermNum for u16 {}
impl TermNum for u8 {}
impl TermNum for usize {}
