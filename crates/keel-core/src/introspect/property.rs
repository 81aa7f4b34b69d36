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

//! # Type Property Dispatcher
//!
//! Per-type boolean layout properties answered at compilation time:
//!
//! - `OVERLAPPING`: the type's fields share storage (a union-like layout).
//!   No compiler primitive can answer this, so it is always structural:
//!   `false` unless the type author opts in via [`declare_overlapping!`].
//! - `ZERO_SIZED`: the type occupies no storage. Primitive: `size_of`.
//! - `DROP_GLUE`: dropping a value runs code. Primitive: `needs_drop`.
//!
//! Types enter the query domain through the [`introspect_types!`]
//! declaration macro (or [`declare_overlapping!`] for union-like types).
//! A declaration covers the bare type together with its `&T` and `&mut T`
//! forms; the reference impls are generated by delegation to the base
//! declaration, so the qualified forms of a type can never answer
//! differently from the type itself.
//!
//! Without the `structural-fallback` feature, `ZERO_SIZED` and `DROP_GLUE`
//! compile down to the language primitives; with it, the declared structural
//! answers are compiled in. The declared answers must match the primitives
//! for every type in the grid, which the test suite checks, so the selected
//! path is never observable.
//!
//! ## Usage
//!
//! ```rust
//! use keel_core::introspect::property::{is_overlapping, is_zero_sized};
//! use keel_core::introspect_types;
//!
//! struct Knot(u32);
//!
//! introspect_types! {
//!     Knot => { zero_sized: false, drop_glue: false },
//! }
//!
//! assert!(!is_overlapping::<Knot>());
//! assert!(!is_zero_sized::<Knot>());
//! assert_eq!(is_zero_sized::<Knot>(), is_zero_sized::<&Knot>());
//! ```

/// Compile-time layout classification of a type.
///
/// Implementations are normally generated by [`introspect_types!`] or
/// [`declare_overlapping!`] rather than written by hand, so that the
/// reference-qualified forms stay consistent with the base type and the
/// builtin/structural dispatch stays uniform.
pub trait Introspect {
    /// Whether the fields of this type share storage.
    ///
    /// Defaults to `false`: a type is not union-like unless its author
    /// declares it so. This default is the structural fallback; there is no
    /// language primitive to consult.
    const OVERLAPPING: bool = false;

    /// Whether values of this type occupy no storage.
    const ZERO_SIZED: bool;

    /// Whether dropping a value of this type runs any code.
    const DROP_GLUE: bool;
}

/// Queries whether `T` has union-like overlapping storage.
///
/// Never fails: the structural default is `false`, so absence of a
/// declaration to the contrary is itself the answer.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::property::is_overlapping;
///
/// assert!(!is_overlapping::<u64>());
/// assert_eq!(is_overlapping::<u64>(), is_overlapping::<&u64>());
/// ```
#[inline(always)]
pub const fn is_overlapping<T: Introspect + ?Sized>() -> bool {
    T::OVERLAPPING
}

/// Queries whether `T` occupies no storage.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::property::is_zero_sized;
///
/// assert!(is_zero_sized::<()>());
/// assert!(!is_zero_sized::<u8>());
/// ```
#[inline(always)]
pub const fn is_zero_sized<T: Introspect + ?Sized>() -> bool {
    T::ZERO_SIZED
}

/// Queries whether dropping a `T` runs any code.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::property::has_drop_glue;
///
/// assert!(!has_drop_glue::<i32>());
/// ```
#[inline(always)]
pub const fn has_drop_glue<T: Introspect + ?Sized>() -> bool {
    T::DROP_GLUE
}

#[doc(hidden)]
#[macro_export]
macro_rules! __introspect_entry {
    ($t:ty, $ov:expr, $zs:expr, $dg:expr) => {
        impl $crate::introspect::property::Introspect for $t {
            const OVERLAPPING: bool = $ov;

            #[cfg(not(feature = "structural-fallback"))]
            const ZERO_SIZED: bool = ::core::mem::size_of::<$t>() == 0;
            #[cfg(feature = "structural-fallback")]
            const ZERO_SIZED: bool = $zs;

            #[cfg(not(feature = "structural-fallback"))]
            const DROP_GLUE: bool = ::core::mem::needs_drop::<$t>();
            #[cfg(feature = "structural-fallback")]
            const DROP_GLUE: bool = $dg;
        }

        impl<'a> $crate::introspect::property::Introspect for &'a $t {
            const OVERLAPPING: bool =
                <$t as $crate::introspect::property::Introspect>::OVERLAPPING;
            const ZERO_SIZED: bool =
                <$t as $crate::introspect::property::Introspect>::ZERO_SIZED;
            const DROP_GLUE: bool =
                <$t as $crate::introspect::property::Introspect>::DROP_GLUE;
        }

        impl<'a> $crate::introspect::property::Introspect for &'a mut $t {
            const OVERLAPPING: bool =
                <$t as $crate::introspect::property::Introspect>::OVERLAPPING;
            const ZERO_SIZED: bool =
                <$t as $crate::introspect::property::Introspect>::ZERO_SIZED;
            const DROP_GLUE: bool =
                <$t as $crate::introspect::property::Introspect>::DROP_GLUE;
        }
    };
}

/// Declares types as introspectable, with their structural answers.
///
/// For each entry this generates [`Introspect`] impls for `T`, `&T`, and
/// `&mut T`. The declared `zero_sized`/`drop_glue` values are the structural
/// fallback; they must match what the language primitives report, and are
/// only compiled in under the `structural-fallback` feature.
///
/// # Examples
///
/// ```rust
/// use keel_core::introspect::property::has_drop_glue;
/// use keel_core::introspect_types;
///
/// struct Fathom(i64);
///
/// introspect_types! {
///     Fathom => { zero_sized: false, drop_glue: false },
/// }
///
/// assert!(!has_drop_glue::<Fathom>());
/// ```
#[macro_export]
macro_rules! introspect_types {
    ($($t:ty => { zero_sized: $zs:expr, drop_glue: $dg:expr }),+ $(,)?) => {
        $( $crate::__introspect_entry!($t, false, $zs, $dg); )+
    };
}

/// Declares union-like types: introspectable with `OVERLAPPING == true`.
///
/// This is the opt-in half of the structural fallback for the overlapping
/// property. Everything else matches [`introspect_types!`].
///
/// # Examples
///
/// ```rust
/// use keel_core::declare_overlapping;
/// use keel_core::introspect::property::is_overlapping;
///
/// union Reinterpret {
///     bits: u32,
///     float: f32,
/// }
///
/// declare_overlapping! {
///     Reinterpret => { zero_sized: false, drop_glue: false },
/// }
///
/// assert!(is_overlapping::<Reinterpret>());
/// assert_eq!(is_overlapping::<Reinterpret>(), is_overlapping::<&Reinterpret>());
/// ```
#[macro_export]
macro_rules! declare_overlapping {
    ($($t:ty => { zero_sized: $zs:expr, drop_glue: $dg:expr }),+ $(,)?) => {
        $( $crate::__introspect_entry!($t, true, $zs, $dg); )+
    };
}

// The standard grid: primitives and the unit type.
crate::introspect_types! {
    bool => { zero_sized: false, drop_glue: false },
    char => { zero_sized: false, drop_glue: false },
    u8 => { zero_sized: false, drop_glue: false },
    u16 => { zero_sized: false, drop_glue: false },
    u32 => { zero_sized: false, drop_glue: false },
    u64 => { zero_sized: false, drop_glue: false },
    u128 => { zero_sized: false, drop_glue: false },
    usize => { zero_sized: false, drop_glue: false },
    i8 => { zero_sized: false, drop_glue: false },
    i16 => { zero_sized: false, drop_glue: false },
    i32 => { zero_sized: false, drop_glue: false },
    i64 => { zero_sized: false, drop_glue: false },
    i128 => { zero_sized: false, drop_glue: false },
    isize => { zero_sized: false, drop_glue: false },
    f32 => { zero_sized: false, drop_glue: false },
    f64 => { zero_sized: false, drop_glue: false },
    () => { zero_sized: true, drop_glue: false },
}

// `PhantomData` is zero-sized and drop-free for every `T`, so the builtin
// and structural answers coincide and a single definition serves both paths.
impl<T: ?Sized> Introspect for core::marker::PhantomData<T> {
    const ZERO_SIZED: bool = true;
    const DROP_GLUE: bool = false;
}

// Pairs answer by structural composition over their elements. Composition is
// path-independent: the element answers already honor the selected dispatch.
impl<A: Introspect, B: Introspect> Introspect for (A, B) {
    const ZERO_SIZED: bool = A::ZERO_SIZED && B::ZERO_SIZED;
    const DROP_GLUE: bool = A::DROP_GLUE || B::DROP_GLUE;
}
