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

//! # Indexed Weekdays
//!
//! Pairings of a [`Weekday`] with an occurrence within a month: "the 2nd
//! Tuesday" ([`WeekdayIndexed`]) and "the last Friday" ([`WeekdayLast`]).
//! Like `Weekday` itself, construction stores its inputs verbatim and
//! `ok()` is the sole, lazily evaluated validity gate.

use crate::weekday::Weekday;

/// The `index`th occurrence of a weekday in a month; valid indices are
/// `[1, 5]`.
///
/// # Examples
///
/// ```rust
/// use keel_calendar::{Weekday, WeekdayIndexed};
///
/// let second_tuesday = Weekday::TUESDAY.indexed(2);
/// assert!(second_tuesday.ok());
///
/// let nonsense = WeekdayIndexed::new(Weekday::from_encoding(9), 2);
/// assert!(!nonsense.ok());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct WeekdayIndexed {
    weekday: Weekday,
    index: u8,
}

impl WeekdayIndexed {
    /// Pairs `weekday` with `index`, storing both verbatim.
    ///
    /// No range check: a weekday outside `[0, 6]` or an index outside
    /// `[1, 5]` is representable, and [`WeekdayIndexed::ok`] reports
    /// `false` for it.
    #[inline(always)]
    pub const fn new(weekday: Weekday, index: u8) -> Self {
        WeekdayIndexed { weekday, index }
    }

    /// Returns the stored weekday.
    #[inline(always)]
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the stored occurrence index.
    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Checks validity: the weekday must be valid and the index in
    /// `[1, 5]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_calendar::{Weekday, WeekdayIndexed};
    /// assert!(WeekdayIndexed::new(Weekday::SUNDAY, 5).ok());
    /// assert!(!WeekdayIndexed::new(Weekday::SUNDAY, 6).ok());
    /// assert!(!WeekdayIndexed::default().ok());
    /// ```
    #[inline(always)]
    pub const fn ok(self) -> bool {
        self.weekday.ok() && self.index >= 1 && self.index <= 5
    }
}

impl std::fmt::Display for WeekdayIndexed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.index >= 1 && self.index <= 5 {
            write!(f, "{}[{}]", self.weekday, self.index)
        } else {
            write!(f, "{}[{} is not a valid index]", self.weekday, self.index)
        }
    }
}

/// The last occurrence of a weekday in a month.
///
/// # Examples
///
/// ```rust
/// use keel_calendar::Weekday;
///
/// let last_friday = Weekday::FRIDAY.last();
/// assert!(last_friday.ok());
/// assert_eq!(format!("{}", last_friday), "Friday[last]");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct WeekdayLast(Weekday);

impl WeekdayLast {
    /// Wraps `weekday`, stored verbatim.
    #[inline(always)]
    pub const fn new(weekday: Weekday) -> Self {
        WeekdayLast(weekday)
    }

    /// Returns the stored weekday.
    #[inline(always)]
    pub const fn weekday(self) -> Weekday {
        self.0
    }

    /// Checks validity: the weekday must be valid.
    #[inline(always)]
    pub const fn ok(self) -> bool {
        self.0.ok()
    }
}

impl std::fmt::Display for WeekdayLast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[last]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time twins of the constructor/accessor checks below.
    const _: () = {
        let wdi = WeekdayIndexed::new(Weekday::SUNDAY, 2);
        assert!(wdi.weekday().c_encoding() == 0);
        assert!(wdi.index() == 2);
        assert!(wdi.ok());
        assert!(!WeekdayIndexed::new(Weekday::TUESDAY, 6).ok());
        assert!(WeekdayLast::new(Weekday::FRIDAY).ok());
    };

    #[test]
    fn test_default_is_invalid() {
        let wdi = WeekdayIndexed::default();
        assert_eq!(wdi.weekday(), Weekday::default());
        assert_eq!(wdi.index(), 0);
        assert!(!wdi.ok());
    }

    #[test]
    fn test_valid_indices() {
        for i in 1..=5u8 {
            let wdi = WeekdayIndexed::new(Weekday::TUESDAY, i);
            assert_eq!(wdi.weekday(), Weekday::TUESDAY);
            assert_eq!(wdi.index(), i);
            assert!(wdi.ok());
        }
    }

    #[test]
    fn test_out_of_range_indices() {
        assert!(!WeekdayIndexed::new(Weekday::TUESDAY, 0).ok());
        for i in 6..=20u8 {
            let wdi = WeekdayIndexed::new(Weekday::TUESDAY, i);
            assert_eq!(wdi.index(), i);
            assert!(!wdi.ok());
        }
    }

    #[test]
    fn test_validity_requires_both_fields() {
        for i in 1..=5u8 {
            let wd = Weekday::from_encoding(9);
            assert_eq!(WeekdayIndexed::new(wd, i).ok(), wd.ok());
        }
        for enc in 0..=6u8 {
            let wd = Weekday::from_encoding(enc);
            assert_eq!(WeekdayIndexed::new(wd, 3).ok(), wd.ok());
        }
    }

    #[test]
    fn test_constructed_through_weekday() {
        let wdi = Weekday::WEDNESDAY.indexed(4);
        assert_eq!(wdi, WeekdayIndexed::new(Weekday::WEDNESDAY, 4));
    }

    #[test]
    fn test_weekday_last() {
        let last = Weekday::SATURDAY.last();
        assert_eq!(last.weekday(), Weekday::SATURDAY);
        assert!(last.ok());
        assert!(!WeekdayLast::new(Weekday::from_encoding(7)).ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Weekday::MONDAY.indexed(2)), "Monday[2]");
        assert_eq!(
            format!("{}", Weekday::MONDAY.indexed(7)),
            "Monday[7 is not a valid index]"
        );
        assert_eq!(format!("{}", Weekday::MONDAY.last()), "Monday[last]");
    }
}
