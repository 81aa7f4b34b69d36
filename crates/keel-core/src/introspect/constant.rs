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

//! # Boolean Constant Carrier
//!
//! A zero-sized, type-level boolean. `Bool<const B: bool>` carries its value
//! in the type itself, so a classification can be named, passed as a type
//! parameter, and read back as a `const` without any runtime representation.
//! It is the base every introspection property in this crate bottoms out in.

/// A type whose identity carries a compile-time boolean value.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::constant::{BoolConstant, False, True};
///
/// assert!(True::VALUE);
/// assert!(!False::VALUE);
/// ```
pub trait BoolConstant {
    /// The boolean this type stands for.
    const VALUE: bool;
}

/// A zero-sized carrier for the compile-time boolean `B`.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::constant::{Bool, BoolConstant};
///
/// assert!(<Bool<true>>::VALUE);
/// assert_eq!(core::mem::size_of::<Bool<false>>(), 0);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Bool<const B: bool>;

impl<const B: bool> BoolConstant for Bool<B> {
    const VALUE: bool = B;
}

impl<const B: bool> Bool<B> {
    /// Creates a new carrier instance.
    #[inline(always)]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the carried boolean.
    #[inline(always)]
    pub const fn get(self) -> bool {
        B
    }
}

impl<const B: bool> std::fmt::Display for Bool<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", B)
    }
}

/// The carrier for `true`.
pub type True = Bool<true>;

/// The carrier for `false`.
pub type False = Bool<false>;

/// Reads the boolean carried by `C`.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::constant::{value, False, True};
///
/// assert!(value::<True>());
/// assert!(!value::<False>());
/// ```
#[inline(always)]
pub const fn value<C: BoolConstant>() -> bool {
    C::VALUE
}
