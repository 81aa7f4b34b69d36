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

//! # Euclidean (Floor) Modulo and Division
//!
//! The built-in `%` operator truncates toward zero, so `-1 % 7 == -1`.
//! Modular arithmetic over a fixed cycle needs the Euclidean remainder
//! instead: a result that always lands in `[0, |m|)`, rounding toward
//! negative infinity, so `(-1).floor_mod_val(7) == 6`.
//!
//! The traits here provide that operation by value for every signed integer
//! type, alongside the matching quotient for which
//! `floor_div * m + floor_mod == n` holds. The default implementation
//! delegates to the primitive `rem_euclid`/`div_euclid`; under the
//! `structural-fallback` feature an explicit derivation from truncating `%`
//! is compiled in instead. Both produce identical results for every input.

use core::ops::{Div, Rem};
use num_traits::{PrimInt, Signed};

/// A trait for types that support Euclidean remainder by value.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::floor_mod::FloorModVal;
/// assert_eq!((-1i64).floor_mod_val(7), 6);
/// assert_eq!(13i64.floor_mod_val(7), 6);
/// assert_eq!((-7i64).floor_mod_val(7), 0);
/// ```
pub trait FloorModVal: Sized + Rem<Self, Output = Self> {
    /// Computes the Euclidean remainder, always in `[0, |m|)`.
    fn floor_mod_val(self, m: Self) -> Self;
}

/// A trait for types that support Euclidean division by value.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::floor_mod::FloorDivVal;
/// assert_eq!((-1i64).floor_div_val(7), -1);
/// assert_eq!(13i64.floor_div_val(7), 1);
/// ```
pub trait FloorDivVal: Sized + Div<Self, Output = Self> {
    /// Computes the quotient matching the Euclidean remainder, so that
    /// `n.floor_div_val(m) * m + n.floor_mod_val(m) == n`.
    fn floor_div_val(self, m: Self) -> Self;
}

macro_rules! floor_mod_impl_val {
    ($t:ty) => {
        impl FloorModVal for $t {
            #[inline(always)]
            fn floor_mod_val(self, m: $t) -> $t {
                debug_assert!(m != 0, "called `floor_mod_val` with a zero modulus");

                #[cfg(not(feature = "structural-fallback"))]
                return <$t>::rem_euclid(self, m);

                #[cfg(feature = "structural-fallback")]
                {
                    let r = self % m;
                    if r < 0 { r + m.abs() } else { r }
                }
            }
        }
    };
}

macro_rules! floor_div_impl_val {
    ($t:ty) => {
        impl FloorDivVal for $t {
            #[inline(always)]
            fn floor_div_val(self, m: $t) -> $t {
                debug_assert!(m != 0, "called `floor_div_val` with a zero modulus");

                #[cfg(not(feature = "structural-fallback"))]
                return <$t>::div_euclid(self, m);

                #[cfg(feature = "structural-fallback")]
                {
                    let q = self / m;
                    if self % m < 0 {
                        if m > 0 { q - 1 } else { q + 1 }
                    } else {
                        q
                    }
                }
            }
        }
    };
}

floor_mod_impl_val!(i8);
floor_mod_impl_val!(i16);
floor_mod_impl_val!(i32);
floor_mod_impl_val!(i64);
floor_mod_impl_val!(i128);
floor_mod_impl_val!(isize);

floor_div_impl_val!(i8);
floor_div_impl_val!(i16);
floor_div_impl_val!(i32);
floor_div_impl_val!(i64);
floor_div_impl_val!(i128);
floor_div_impl_val!(isize);

/// Euclidean remainder of `n` modulo `m`, always in `[0, |m|)`.
///
/// Evaluable in constant items; the calendar crate routes all of its
/// modular arithmetic through this function.
///
/// # Panics
///
/// In debug builds, panics if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::floor_mod::floor_mod;
/// assert_eq!(floor_mod(-1, 7), 6);
/// assert_eq!(floor_mod(8, 7), 1);
/// assert_eq!(floor_mod(-8, 7), 6);
/// ```
#[inline(always)]
pub const fn floor_mod(n: i64, m: i64) -> i64 {
    debug_assert!(m != 0, "called `floor_mod` with a zero modulus");

    #[cfg(not(feature = "structural-fallback"))]
    return n.rem_euclid(m);

    #[cfg(feature = "structural-fallback")]
    {
        let r = n % m;
        if r < 0 { r + m.abs() } else { r }
    }
}

/// Euclidean quotient of `n` by `m`; the counterpart of [`floor_mod`].
///
/// # Panics
///
/// In debug builds, panics if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::floor_mod::{floor_div, floor_mod};
/// assert_eq!(floor_div(-1, 7), -1);
/// assert_eq!(floor_div(-1, 7) * 7 + floor_mod(-1, 7), -1);
/// ```
#[inline(always)]
pub const fn floor_div(n: i64, m: i64) -> i64 {
    debug_assert!(m != 0, "called `floor_div` with a zero modulus");

    #[cfg(not(feature = "structural-fallback"))]
    return n.div_euclid(m);

    #[cfg(feature = "structural-fallback")]
    {
        let q = n / m;
        if n % m < 0 {
            if m > 0 { q - 1 } else { q + 1 }
        } else {
            q
        }
    }
}

/// Generic Euclidean remainder for any signed primitive integer.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::floor_mod::floor_mod_of;
/// assert_eq!(floor_mod_of(-1i32, 7), 6);
/// assert_eq!(floor_mod_of(-1i16, 7), 6);
/// ```
#[inline]
pub fn floor_mod_of<T>(n: T, m: T) -> T
where
    T: PrimInt + Signed,
{
    let r = n % m;
    if r < T::zero() { r + m.abs() } else { r }
}

/// Generic Euclidean quotient for any signed primitive integer.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::floor_mod::{floor_div_of, floor_mod_of};
/// let (n, m) = (-13i32, 5);
/// assert_eq!(floor_div_of(n, m) * m + floor_mod_of(n, m), n);
/// ```
#[inline]
pub fn floor_div_of<T>(n: T, m: T) -> T
where
    T: PrimInt + Signed,
{
    let q = n / m;
    if n % m < T::zero() {
        if m > T::zero() { q - T::one() } else { q + T::one() }
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time twins of the runtime checks below.
    const _: () = assert!(floor_mod(-1, 7) == 6);
    const _: () = assert!(floor_mod(0, 7) == 0);
    const _: () = assert!(floor_mod(13, 7) == 6);
    const _: () = assert!(floor_div(-1, 7) == -1);
    const _: () = assert!(floor_div(-1, 7) * 7 + floor_mod(-1, 7) == -1);

    #[test]
    fn test_floor_mod_negative_operands() {
        assert_eq!(floor_mod(-1, 7), 6);
        assert_eq!(floor_mod(-7, 7), 0);
        assert_eq!(floor_mod(-8, 7), 6);
        assert_eq!(floor_mod(5, -7), 5);
        assert_eq!(floor_mod(-5, -7), 2);
    }

    #[test]
    fn test_floor_mod_differs_from_truncating_remainder() {
        assert_eq!(-1 % 7, -1);
        assert_eq!(floor_mod(-1, 7), 6);
    }

    #[test]
    fn test_quotient_remainder_identity() {
        for n in -100..=100i64 {
            for m in [-7, -3, -1, 1, 2, 7, 12] {
                let q = floor_div(n, m);
                let r = floor_mod(n, m);
                assert_eq!(q * m + r, n, "identity failed for n={}, m={}", n, m);
                assert!((0..m.abs()).contains(&r), "range failed for n={}, m={}", n, m);
            }
        }
    }

    #[test]
    fn test_trait_grid_agrees_with_helpers() {
        for n in -50..=50 {
            for m in [-7i64, -2, 3, 7] {
                assert_eq!(n.floor_mod_val(m), floor_mod(n, m));
                assert_eq!(n.floor_div_val(m), floor_div(n, m));
                assert_eq!((n as i32).floor_mod_val(m as i32), floor_mod(n, m) as i32);
                assert_eq!((n as i8).floor_mod_val(m as i8), floor_mod(n, m) as i8);
            }
        }
    }

    #[test]
    fn test_generic_agrees_with_concrete() {
        for n in -50..=50i64 {
            for m in [-7i64, -2, 3, 7] {
                assert_eq!(floor_mod_of(n, m), floor_mod(n, m));
                assert_eq!(floor_div_of(n, m), floor_div(n, m));
            }
        }
    }

    #[test]
    fn test_randomized_sweep() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let n: i64 = rng.random_range(-1_000_000_000..=1_000_000_000);
            let m: i64 = loop {
                let m = rng.random_range(-1_000..=1_000);
                if m != 0 {
                    break m;
                }
            };
            let q = n.floor_div_val(m);
            let r = n.floor_mod_val(m);
            assert_eq!(q * m + r, n);
            assert!(r >= 0 && r < m.abs());
            assert_eq!(r, floor_mod_of(n, m));
        }
    }
}
