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

//! # Aggregate Construction
//!
//! The construction surface of the pack types. C++-style implicit deduction
//! guides become an explicit overload table here: one factory, macro arm, or
//! conversion impl per call shape, each pinned to exactly one aggregate
//! type. A call shape outside the table does not compile; there is no
//! runtime rejection.
//!
//! | call shape                      | result type                  |
//! |---------------------------------|------------------------------|
//! | `pack![]`, `pack0()`            | `Nil`                        |
//! | `pack![a]`, `pack1(a)`          | `Cons<A, Nil>`               |
//! | `pack![a, b]`, `pack2(a, b)`    | `Cons<A, Cons<B, Nil>>`      |
//! | `(a, b).into()` / `into_pack()` | `Cons<A, Cons<B, Nil>>`      |
//! | copy/move, `repack(p)`          | exactly the source pack type |

use crate::node::{Cons, Nil, Pack};

/// Builds the empty aggregate.
#[inline(always)]
pub const fn pack0() -> Nil {
    Nil
}

/// Builds an arity-1 aggregate from one element.
///
/// # Examples
///
/// ```rust
/// # use keel_pack::{pack1, Cons, Nil};
/// let p: Cons<i32, Nil> = pack1(42);
/// assert_eq!(*p.first(), 42);
/// ```
#[inline(always)]
pub const fn pack1<A>(a: A) -> Cons<A, Nil> {
    Cons::new(a, Nil)
}

/// Builds an arity-2 aggregate from two elements.
#[inline(always)]
pub const fn pack2<A, B>(a: A, b: B) -> Cons<A, Cons<B, Nil>> {
    Cons::new(a, Cons::new(b, Nil))
}

/// Builds an arity-3 aggregate from three elements.
#[inline(always)]
pub const fn pack3<A, B, C>(a: A, b: B, c: C) -> Cons<A, Cons<B, Cons<C, Nil>>> {
    Cons::new(a, Cons::new(b, Cons::new(c, Nil)))
}

/// The copy/move shape made explicit: re-deducing from an existing pack is
/// the identity, with the type preserved exactly.
///
/// # Examples
///
/// ```rust
/// # use keel_pack::{pack, repack};
/// let p = pack![1i32, 'c'];
/// let q = repack(p);
/// assert_eq!(p, q);
/// ```
#[inline(always)]
pub const fn repack<P: Pack>(p: P) -> P {
    p
}

/// Builds an aggregate from an element list, deducing the element types
/// from the arguments.
///
/// `pack![]` is the distinguished empty shape and yields [`Nil`]; every
/// other arity nests [`Cons`] nodes, evaluating the elements left to right.
///
/// # Examples
///
/// ```rust
/// use keel_pack::{pack, Nil, Pack};
///
/// let p = pack![1i32, 'c', 2.0f64];
/// assert_eq!(p.len(), 3);
///
/// let empty = pack![];
/// let _: Nil = empty;
/// ```
#[macro_export]
macro_rules! pack {
    () => {
        $crate::Nil
    };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::Cons::new($head, $crate::pack!($($rest),*))
    };
}

/// Names the aggregate type for a list of element types.
///
/// # Examples
///
/// ```rust
/// use keel_pack::{pack, Pack};
///
/// let p: Pack![i32, char] = pack![1, 'c'];
/// assert_eq!(*p.second(), 'c');
/// ```
#[macro_export]
macro_rules! Pack {
    () => {
        $crate::Nil
    };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::Pack!($($rest),*)>
    };
}

/// Conversion into an aggregate, generalizing the pair-derived construction
/// shape to tuple arities 0 through 3.
///
/// Element types are preserved exactly: a reference element stays a
/// reference and a wrapper element stays wrapped.
///
/// # Examples
///
/// ```rust
/// use keel_pack::{IntoPack, Nil, Pack};
///
/// let p = (1i32, 'c').into_pack();
/// let _: Pack![i32, char] = p;
///
/// let empty = ().into_pack();
/// let _: Nil = empty;
/// ```
pub trait IntoPack {
    /// The aggregate type this shape deduces to.
    type Output: Pack;

    /// Performs the conversion.
    fn into_pack(self) -> Self::Output;
}

impl IntoPack for () {
    type Output = Nil;

    #[inline(always)]
    fn into_pack(self) -> Nil {
        Nil
    }
}

impl<A> IntoPack for (A,) {
    type Output = Cons<A, Nil>;

    #[inline(always)]
    fn into_pack(self) -> Self::Output {
        pack1(self.0)
    }
}

impl<A, B> IntoPack for (A, B) {
    type Output = Cons<A, Cons<B, Nil>>;

    #[inline(always)]
    fn into_pack(self) -> Self::Output {
        pack2(self.0, self.1)
    }
}

impl<A, B, C> IntoPack for (A, B, C) {
    type Output = Cons<A, Cons<B, Cons<C, Nil>>>;

    #[inline(always)]
    fn into_pack(self) -> Self::Output {
        pack3(self.0, self.1, self.2)
    }
}

// The pair-derived guide proper.
impl<A, B> From<(A, B)> for Cons<A, Cons<B, Nil>> {
    #[inline(always)]
    fn from((a, b): (A, B)) -> Self {
        pack2(a, b)
    }
}

impl From<()> for Nil {
    #[inline(always)]
    fn from(_: ()) -> Nil {
        Nil
    }
}

impl<A, B> Cons<A, Cons<B, Nil>> {
    /// Consumes an arity-2 aggregate, returning its elements as a pair.
    ///
    /// The inverse of the pair-derived construction shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_pack::pack;
    /// assert_eq!(pack![1i32, 'c'].into_pair(), (1, 'c'));
    /// ```
    #[inline(always)]
    pub fn into_pair(self) -> (A, B) {
        let (a, tail) = self.into_parts();
        (a, tail.into_head())
    }
}
