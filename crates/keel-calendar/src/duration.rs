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

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A signed count of days.
///
/// The duration operand of all weekday arithmetic. Plain integer semantics:
/// addition, subtraction, negation, and scalar multiplication are exact, and
/// `checked_` variants return `None` on overflow instead of wrapping.
///
/// # Examples
///
/// ```rust
/// use keel_calendar::Days;
///
/// let d = Days::new(3) + Days::new(4);
/// assert_eq!(d.count(), 7);
/// assert_eq!((-d).count(), -7);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Days(i64);

impl Days {
    /// A count of zero days.
    pub const ZERO: Days = Days(0);

    /// Creates a count of `count` days.
    #[inline(always)]
    pub const fn new(count: i64) -> Self {
        Days(count)
    }

    /// Returns the signed day count.
    #[inline(always)]
    pub const fn count(self) -> i64 {
        self.0
    }

    /// Checks whether the count is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_calendar::Days;
    /// assert!(Days::ZERO.is_zero());
    /// assert!(!Days::new(-2).is_zero());
    /// ```
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the absolute count of days.
    #[inline(always)]
    pub const fn abs(self) -> Days {
        Days(self.0.abs())
    }

    /// Adds two counts, returning `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_calendar::Days;
    /// assert_eq!(Days::new(1).checked_add(Days::new(2)), Some(Days::new(3)));
    /// assert_eq!(Days::new(i64::MAX).checked_add(Days::new(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, rhs: Days) -> Option<Days> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Days(v)),
            None => None,
        }
    }

    /// Subtracts a count, returning `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Days) -> Option<Days> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Days(v)),
            None => None,
        }
    }
}

impl Add for Days {
    type Output = Days;

    #[inline(always)]
    fn add(self, rhs: Days) -> Days {
        Days(self.0 + rhs.0)
    }
}

impl Sub for Days {
    type Output = Days;

    #[inline(always)]
    fn sub(self, rhs: Days) -> Days {
        Days(self.0 - rhs.0)
    }
}

impl Neg for Days {
    type Output = Days;

    #[inline(always)]
    fn neg(self) -> Days {
        Days(-self.0)
    }
}

impl AddAssign for Days {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Days) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Days {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Days) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Days {
    type Output = Days;

    #[inline(always)]
    fn mul(self, rhs: i64) -> Days {
        Days(self.0 * rhs)
    }
}

impl Mul<Days> for i64 {
    type Output = Days;

    #[inline(always)]
    fn mul(self, rhs: Days) -> Days {
        Days(self * rhs.0)
    }
}

impl From<i64> for Days {
    #[inline(always)]
    fn from(count: i64) -> Days {
        Days(count)
    }
}

impl From<Days> for i64 {
    #[inline(always)]
    fn from(days: Days) -> i64 {
        days.0
    }
}

impl std::fmt::Display for Days {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
