// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Day of the Week
//!
//! `Weekday` encodes a day of the week as an integer with Sunday = 0. The
//! encoding is stored verbatim: construction never range-checks, `ok()` is
//! the lazy validity gate, and arithmetic is defined through Euclidean
//! modulo so it always lands back in `[0, 6]` regardless of the operands'
//! signs or validity.

use crate::duration::Days;
use crate::indexed::{WeekdayIndexed, WeekdayLast};
use keel_core::num::ops::floor_mod::floor_mod;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A day of the week, Sunday = 0, valid encodings in `[0, 6]`.
///
/// Any `u8` is storable; out-of-range encodings are representable but
/// report `ok() == false`. Arithmetic with [`Days`] wraps modulo 7 using
/// Euclidean (floor) division, so the result is always valid even when the
/// starting weekday was not, and `w + d == d + w` for every combination.
///
/// # Examples
///
/// ```rust
/// use keel_calendar::{Days, Weekday};
///
/// assert_eq!(Weekday::MONDAY + Days::new(6), Weekday::SUNDAY);
/// assert_eq!(Days::new(6) + Weekday::MONDAY, Weekday::SUNDAY);
/// assert!(!Weekday::from_encoding(9).ok());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Weekday(u8);

impl Weekday {
    /// Sunday, encoding 0.
    pub const SUNDAY: Weekday = Weekday(0);
    /// Monday, encoding 1.
    pub const MONDAY: Weekday = Weekday(1);
    /// Tuesday, encoding 2.
    pub const TUESDAY: Weekday = Weekday(2);
    /// Wednesday, encoding 3.
    pub const WEDNESDAY: Weekday = Weekday(3);
    /// Thursday, encoding 4.
    pub const THURSDAY: Weekday = Weekday(4);
    /// Friday, encoding 5.
    pub const FRIDAY: Weekday = Weekday(5);
    /// Saturday, encoding 6.
    pub const SATURDAY: Weekday = Weekday(6);

    /// Creates a weekday from its raw encoding, stored verbatim.
    ///
    /// No range check and no normalization; [`Weekday::ok`] reports whether
    /// the stored encoding names a day.
    #[inline(always)]
    pub const fn from_encoding(encoding: u8) -> Self {
        Weekday(encoding)
    }

    /// Returns the stored C encoding (Sunday = 0).
    #[inline(always)]
    pub const fn c_encoding(self) -> u8 {
        self.0
    }

    /// Returns the ISO 8601 encoding (Monday = 1 .. Sunday = 7).
    ///
    /// Only meaningful for valid weekdays; invalid encodings are returned
    /// verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_calendar::Weekday;
    /// assert_eq!(Weekday::SUNDAY.iso_encoding(), 7);
    /// assert_eq!(Weekday::MONDAY.iso_encoding(), 1);
    /// ```
    #[inline(always)]
    pub const fn iso_encoding(self) -> u8 {
        if self.0 == 0 { 7 } else { self.0 }
    }

    /// Checks whether the stored encoding names a day, i.e. is in `[0, 6]`.
    #[inline(always)]
    pub const fn ok(self) -> bool {
        self.0 <= 6
    }

    /// Adds a signed day count, wrapping modulo 7.
    ///
    /// The result encoding is `floor_mod(encoding + count, 7)`, so it is in
    /// `[0, 6]` for any operands, including an invalid `self`. `const`
    /// equivalent of `self + days`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_calendar::{Days, Weekday};
    /// assert_eq!(Weekday::SATURDAY.plus_days(Days::new(1)), Weekday::SUNDAY);
    /// assert_eq!(Weekday::SUNDAY.plus_days(Days::new(-1)), Weekday::SATURDAY);
    /// ```
    #[inline]
    pub const fn plus_days(self, days: Days) -> Weekday {
        Weekday(floor_mod(self.0 as i64 + days.count(), 7) as u8)
    }

    /// Subtracts a signed day count, wrapping modulo 7. `const` equivalent
    /// of `self - days`.
    #[inline]
    pub const fn minus_days(self, days: Days) -> Weekday {
        Weekday(floor_mod(self.0 as i64 - days.count(), 7) as u8)
    }

    /// Returns how many days forward `other` must travel to reach `self`.
    ///
    /// The count is always in `[0, 6]`. `const` equivalent of
    /// `self - other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_calendar::{Days, Weekday};
    /// assert_eq!(Weekday::SUNDAY.days_since(Weekday::SATURDAY), Days::new(1));
    /// assert_eq!(Weekday::MONDAY.days_since(Weekday::MONDAY), Days::new(0));
    /// ```
    #[inline]
    pub const fn days_since(self, other: Weekday) -> Days {
        Days::new(floor_mod(self.0 as i64 - other.0 as i64, 7))
    }

    /// Returns the following day, wrapping Saturday to Sunday.
    #[inline]
    pub const fn next(self) -> Weekday {
        self.plus_days(Days::new(1))
    }

    /// Returns the preceding day, wrapping Sunday to Saturday.
    #[inline]
    pub const fn prev(self) -> Weekday {
        self.minus_days(Days::new(1))
    }

    /// Pairs this weekday with an occurrence index ("the `index`th `self`
    /// of the month").
    ///
    /// Stored verbatim; [`WeekdayIndexed::ok`] gates validity.
    #[inline]
    pub const fn indexed(self, index: u8) -> WeekdayIndexed {
        WeekdayIndexed::new(self, index)
    }

    /// Marks this weekday as "the last `self` of the month".
    #[inline]
    pub const fn last(self) -> WeekdayLast {
        WeekdayLast::new(self)
    }
}

impl Add<Days> for Weekday {
    type Output = Weekday;

    #[inline(always)]
    fn add(self, rhs: Days) -> Weekday {
        self.plus_days(rhs)
    }
}

impl Add<Weekday> for Days {
    type Output = Weekday;

    #[inline(always)]
    fn add(self, rhs: Weekday) -> Weekday {
        rhs.plus_days(self)
    }
}

impl Sub<Days> for Weekday {
    type Output = Weekday;

    #[inline(always)]
    fn sub(self, rhs: Days) -> Weekday {
        self.minus_days(rhs)
    }
}

impl Sub<Weekday> for Weekday {
    type Output = Days;

    #[inline(always)]
    fn sub(self, rhs: Weekday) -> Days {
        self.days_since(rhs)
    }
}

impl AddAssign<Days> for Weekday {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Days) {
        *self = self.plus_days(rhs);
    }
}

impl SubAssign<Days> for Weekday {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Days) {
        *self = self.minus_days(rhs);
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Weekday::SUNDAY => write!(f, "Sunday"),
            Weekday::MONDAY => write!(f, "Monday"),
            Weekday::TUESDAY => write!(f, "Tuesday"),
            Weekday::WEDNESDAY => write!(f, "Wednesday"),
            Weekday::THURSDAY => write!(f, "Thursday"),
            Weekday::FRIDAY => write!(f, "Friday"),
            Weekday::SATURDAY => write!(f, "Saturday"),
            Weekday(other) => write!(f, "{} is not a valid weekday", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time twins: the arithmetic must hold during constant
    // evaluation, not only at runtime.
    const _: () = {
        assert!(Weekday::MONDAY.plus_days(Days::new(6)).c_encoding() == 0);
        assert!(Weekday::from_encoding(1).plus_days(Days::new(4)).c_encoding() == 5);
        assert!(Weekday::SUNDAY.minus_days(Days::new(1)).c_encoding() == 6);
        assert!(Weekday::SUNDAY.days_since(Weekday::SATURDAY).count() == 1);
        assert!(Weekday::SATURDAY.next().c_encoding() == 0);
        assert!(Weekday::SUNDAY.prev().c_encoding() == 6);
        assert!(!Weekday::from_encoding(7).ok());
    };

    fn euclidean_addition(i: i64, j: i64) -> u8 {
        let mut r = (i + j) % 7;
        if r < 0 {
            r += 7;
        }
        r as u8
    }

    #[test]
    fn test_construction_stores_verbatim() {
        for raw in 0..=255u8 {
            assert_eq!(Weekday::from_encoding(raw).c_encoding(), raw);
        }
    }

    #[test]
    fn test_ok_range() {
        for enc in 0..=6u8 {
            assert!(Weekday::from_encoding(enc).ok());
        }
        for enc in 7..=255u8 {
            assert!(!Weekday::from_encoding(enc).ok());
        }
    }

    #[test]
    fn test_addition_is_commutative_and_euclidean() {
        for i in 0..=6u8 {
            for j in 0..=6i64 {
                let wd1 = Weekday::from_encoding(i) + Days::new(j);
                let wd2 = Days::new(j) + Weekday::from_encoding(i);
                assert_eq!(wd1, wd2);
                assert_eq!(wd1.c_encoding(), euclidean_addition(i as i64, j));
                assert!(wd1.ok());
            }
        }
    }

    #[test]
    fn test_monday_plus_six_is_sunday() {
        assert_eq!(Weekday::MONDAY + Days::new(6), Weekday::SUNDAY);
        assert_eq!(
            Weekday::from_encoding(1) + Days::new(6),
            Weekday::from_encoding(0)
        );
    }

    #[test]
    fn test_negative_counts_wrap_toward_negative_infinity() {
        assert_eq!(Weekday::SUNDAY + Days::new(-1), Weekday::SATURDAY);
        assert_eq!(Weekday::SUNDAY + Days::new(-8), Weekday::SATURDAY);
        assert_eq!(Weekday::MONDAY - Days::new(2), Weekday::SATURDAY);
        assert_eq!(Weekday::MONDAY + Days::new(-700), Weekday::MONDAY);
    }

    #[test]
    fn test_arithmetic_on_invalid_weekday_wraps_to_valid() {
        let bad = Weekday::from_encoding(9);
        assert!(!bad.ok());
        let repaired = bad + Days::new(0);
        assert!(repaired.ok());
        assert_eq!(repaired, Weekday::TUESDAY);
    }

    #[test]
    fn test_subtraction_of_weekdays() {
        for i in 0..=6u8 {
            for j in 0..=6u8 {
                let d = Weekday::from_encoding(i) - Weekday::from_encoding(j);
                assert!((0..=6).contains(&d.count()));
                assert_eq!(Weekday::from_encoding(j) + d, Weekday::from_encoding(i));
            }
        }
    }

    #[test]
    fn test_assign_ops() {
        let mut wd = Weekday::FRIDAY;
        wd += Days::new(3);
        assert_eq!(wd, Weekday::MONDAY);
        wd -= Days::new(2);
        assert_eq!(wd, Weekday::SATURDAY);
    }

    #[test]
    fn test_next_prev_cycle() {
        let mut wd = Weekday::SUNDAY;
        for _ in 0..7 {
            wd = wd.next();
        }
        assert_eq!(wd, Weekday::SUNDAY);
        for _ in 0..7 {
            wd = wd.prev();
        }
        assert_eq!(wd, Weekday::SUNDAY);
        assert_eq!(Weekday::SATURDAY.next(), Weekday::SUNDAY);
        assert_eq!(Weekday::SUNDAY.prev(), Weekday::SATURDAY);
    }

    #[test]
    fn test_iso_encoding() {
        assert_eq!(Weekday::SUNDAY.iso_encoding(), 7);
        assert_eq!(Weekday::MONDAY.iso_encoding(), 1);
        assert_eq!(Weekday::SATURDAY.iso_encoding(), 6);
    }

    #[test]
    fn test_default_is_sunday() {
        assert_eq!(Weekday::default(), Weekday::SUNDAY);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Weekday::WEDNESDAY), "Wednesday");
        assert_eq!(
            format!("{}", Weekday::from_encoding(8)),
            "8 is not a valid weekday"
        );
    }
}
