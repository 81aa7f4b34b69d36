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

//! # Aggregate Nodes
//!
//! The two node types every pack is built from: [`Nil`], the distinguished
//! empty aggregate, and [`Cons<H, T>`], one element in front of the rest.
//! The sealed [`Pack`] trait ties them together and carries the arity as an
//! associated constant.
//!
//! Elements live in declaration order: the head is constructed first and,
//! following ordinary struct-field rules, dropped first.

use keel_core::introspect::constant::{BoolConstant, False, True};
use keel_core::introspect::property::Introspect;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nil {}
    impl<H, T: Sealed> Sealed for super::Cons<H, T> {}
}

/// A fixed-arity, ordered, heterogeneous aggregate.
///
/// Implemented only by [`Nil`] and [`Cons`]; the trait is sealed so the
/// arity arithmetic and the empty/non-empty distinction stay closed.
///
/// # Examples
///
/// ```rust
/// use keel_pack::{pack, Pack, Cons, Nil};
///
/// assert_eq!(Nil::LEN, 0);
/// assert_eq!(<Cons<u8, Cons<char, Nil>>>::LEN, 2);
/// assert!(pack![].is_empty());
/// assert!(!pack![1].is_empty());
/// ```
pub trait Pack: sealed::Sealed {
    /// The number of elements.
    const LEN: usize;

    /// Type-level emptiness: [`True`] for [`Nil`], [`False`] for every
    /// [`Cons`]. The two can never unify.
    type Empty: BoolConstant;

    /// Returns the number of elements.
    #[inline(always)]
    fn len(&self) -> usize {
        Self::LEN
    }

    /// Checks whether the aggregate has no elements.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

/// The empty aggregate.
///
/// A distinguished type, not an arity-0 instance of the general shape. Its
/// only supported construction shapes are default construction and
/// copy/move from another `Nil`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Nil;

impl Pack for Nil {
    const LEN: usize = 0;
    type Empty = True;
}

/// One element in front of the rest of an aggregate.
///
/// `head` is the first element; `tail` is the aggregate of the remaining
/// ones, ending in [`Nil`].
///
/// # Examples
///
/// ```rust
/// use keel_pack::{Cons, Nil, Pack};
///
/// let p = Cons::new(1i32, Cons::new('c', Nil));
/// assert_eq!(p.len(), 2);
/// assert_eq!(*p.head(), 1);
/// assert_eq!(*p.tail().head(), 'c');
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Cons<H, T> {
    head: H,
    tail: T,
}

impl<H, T: Pack> Pack for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
    type Empty = False;
}

impl<H, T> Cons<H, T> {
    /// Creates a node from its first element and the rest.
    #[inline(always)]
    pub const fn new(head: H, tail: T) -> Self {
        Cons { head, tail }
    }

    /// Returns a reference to the first element.
    #[inline(always)]
    pub const fn head(&self) -> &H {
        &self.head
    }

    /// Returns a mutable reference to the first element.
    #[inline(always)]
    pub fn head_mut(&mut self) -> &mut H {
        &mut self.head
    }

    /// Consumes the node, returning the first element.
    #[inline(always)]
    pub fn into_head(self) -> H {
        self.head
    }

    /// Returns a reference to the rest of the aggregate.
    #[inline(always)]
    pub const fn tail(&self) -> &T {
        &self.tail
    }

    /// Returns a mutable reference to the rest of the aggregate.
    #[inline(always)]
    pub fn tail_mut(&mut self) -> &mut T {
        &mut self.tail
    }

    /// Consumes the node, returning the rest of the aggregate.
    #[inline(always)]
    pub fn into_tail(self) -> T {
        self.tail
    }

    /// Consumes the node, returning both parts.
    #[inline(always)]
    pub fn into_parts(self) -> (H, T) {
        (self.head, self.tail)
    }

    /// Puts a new element in front, growing the arity by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keel_pack::{pack, Pack};
    ///
    /// let p = pack!['c'].prepend(1i32);
    /// assert_eq!(p.len(), 2);
    /// assert_eq!(*p.first(), 1);
    /// ```
    #[inline(always)]
    pub fn prepend<G>(self, head: G) -> Cons<G, Self> {
        Cons { head, tail: self }
    }
}

impl Nil {
    /// Puts an element in front of the empty aggregate.
    #[inline(always)]
    pub fn prepend<G>(self, head: G) -> Cons<G, Nil> {
        Cons { head, tail: Nil }
    }
}

impl<A, T> Cons<A, T> {
    /// Returns a reference to element 0.
    #[inline(always)]
    pub const fn first(&self) -> &A {
        &self.head
    }
}

impl<A, B, T> Cons<A, Cons<B, T>> {
    /// Returns a reference to element 1.
    #[inline(always)]
    pub const fn second(&self) -> &B {
        &self.tail.head
    }
}

impl<A, B, C, T> Cons<A, Cons<B, Cons<C, T>>> {
    /// Returns a reference to element 2.
    #[inline(always)]
    pub const fn third(&self) -> &C {
        &self.tail.tail.head
    }
}

// Layout queries compose structurally over the elements, answered through
// the same dispatcher as scalar types.
impl Introspect for Nil {
    const ZERO_SIZED: bool = true;
    const DROP_GLUE: bool = false;
}

impl<H: Introspect, T: Pack + Introspect> Introspect for Cons<H, T> {
    const ZERO_SIZED: bool = H::ZERO_SIZED && T::ZERO_SIZED;
    const DROP_GLUE: bool = H::DROP_GLUE || T::DROP_GLUE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use keel_core::introspect::constant::value;
    use keel_core::introspect::property::{has_drop_glue, is_overlapping, is_zero_sized};
    use std::cell::RefCell;
    use std::rc::Rc;

    const _: () = assert!(Nil::LEN == 0);
    const _: () = assert!(<Cons<u8, Nil>>::LEN == 1);
    const _: () = assert!(<Cons<u8, Cons<char, Nil>>>::LEN == 2);
    const _: () = assert!(value::<<Nil as Pack>::Empty>());
    const _: () = assert!(!value::<<Cons<u8, Nil> as Pack>::Empty>());
    const _: () = assert!(is_zero_sized::<Nil>());
    const _: () = assert!(!is_zero_sized::<Cons<u8, Nil>>());

    #[test]
    fn test_arity() {
        assert_eq!(pack![].len(), 0);
        assert!(pack![].is_empty());
        assert_eq!(pack![1].len(), 1);
        assert_eq!(pack![1, 'c', 3.0].len(), 3);
        assert!(!pack![1].is_empty());
    }

    #[test]
    fn test_accessors() {
        let mut p = pack![1i32, 'c', "s"];
        assert_eq!(*p.head(), 1);
        assert_eq!(*p.first(), 1);
        assert_eq!(*p.second(), 'c');
        assert_eq!(*p.third(), "s");

        *p.head_mut() = 7;
        *p.tail_mut().head_mut() = 'd';
        assert_eq!(*p.first(), 7);
        assert_eq!(*p.second(), 'd');

        let (head, tail) = p.into_parts();
        assert_eq!(head, 7);
        assert_eq!(*tail.head(), 'd');
        assert_eq!(tail.into_tail().into_head(), "s");
    }

    #[test]
    fn test_prepend_grows_front() {
        let p = Nil.prepend('c').prepend(1i32);
        assert_eq!(*p.first(), 1);
        assert_eq!(*p.second(), 'c');
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_equality() {
        assert_eq!(pack![1, 'c'], pack![1, 'c']);
        assert_ne!(pack![1, 'c'], pack![2, 'c']);
        assert_eq!(Nil, Nil);
    }

    #[test]
    fn test_copy_preserves_value() {
        let p = pack![1u8, 2u16];
        let q = p;
        assert_eq!(p, q);
    }

    /// A test element type that carries drop glue.
    struct Buffer(#[allow(dead_code)] String);

    keel_core::introspect_types! {
        Buffer => { zero_sized: false, drop_glue: true },
    }

    #[test]
    fn test_introspect_composition() {
        assert!(is_zero_sized::<Nil>());
        assert!(is_zero_sized::<Cons<(), Cons<(), Nil>>>());
        assert!(!is_zero_sized::<Cons<(), Cons<u8, Nil>>>());
        assert!(!has_drop_glue::<Cons<u8, Cons<u16, Nil>>>());
        assert!(has_drop_glue::<Cons<u8, Cons<Buffer, Nil>>>());
        assert!(!is_overlapping::<Cons<u8, Nil>>());
    }

    /// Records construction and drop order by name.
    #[derive(Clone)]
    struct Tracked {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Tracked {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            log.borrow_mut().push(format!("ctor {}", name));
            Tracked {
                name,
                log: Rc::clone(log),
            }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("drop {}", self.name));
        }
    }

    #[test]
    fn test_construction_and_drop_order_follow_declaration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let _p = pack![
                Tracked::new("a", &log),
                Tracked::new("b", &log),
                Tracked::new("c", &log)
            ];
            assert_eq!(*log.borrow(), ["ctor a", "ctor b", "ctor c"]);
        }
        assert_eq!(
            *log.borrow(),
            ["ctor a", "ctor b", "ctor c", "drop a", "drop b", "drop c"]
        );
    }
}
