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

//! # Counted Iterator Advancement
//!
//! Stepping an iterator a bounded number of times, and measuring how many
//! steps a traversal actually performed. `advance_by` is the advancement
//! primitive; `StrideCounting<I>` wraps any iterator and counts the elements
//! it serves, which test code uses to assert traversal cost.
//!
//! ## Usage
//!
//! ```rust
//! use keel_core::utils::iter::{advance_by, StrideCounting};
//!
//! let mut it = StrideCounting::new(0..10);
//! assert_eq!(advance_by(&mut it, 3), 3);
//! assert_eq!(it.next(), Some(3));
//! assert_eq!(it.stride_count(), 4);
//! ```

use std::iter::FusedIterator;

/// Advances `iter` by up to `n` elements, returning the number of elements
/// actually consumed.
///
/// The return value is `n` unless the iterator was exhausted first, in which
/// case it is the number of elements that remained.
///
/// # Examples
///
/// ```rust
/// # use keel_core::utils::iter::advance_by;
/// let mut it = 0..10;
/// assert_eq!(advance_by(&mut it, 4), 4);
/// assert_eq!(it.next(), Some(4));
///
/// let mut short = 0..2;
/// assert_eq!(advance_by(&mut short, 5), 2);
/// assert_eq!(short.next(), None);
/// ```
pub fn advance_by<I: Iterator>(iter: &mut I, n: usize) -> usize {
    let mut taken = 0;
    while taken < n {
        if iter.next().is_none() {
            break;
        }
        taken += 1;
    }
    taken
}

/// An iterator adaptor that counts the elements the inner iterator serves.
///
/// Forwards all iterator behavior transparently; the count covers both
/// front (`next`) and back (`next_back`) traversal.
///
/// # Examples
///
/// ```rust
/// # use keel_core::utils::iter::StrideCounting;
/// let mut it = StrideCounting::new(vec![1, 2, 3].into_iter());
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.next_back(), Some(3));
/// assert_eq!(it.stride_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StrideCounting<I> {
    inner: I,
    strides: usize,
}

impl<I> StrideCounting<I> {
    /// Creates a new counting adaptor around `inner`.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, strides: 0 }
    }

    /// Returns the number of elements served so far.
    #[inline]
    pub fn stride_count(&self) -> usize {
        self.strides
    }

    /// Returns a reference to the wrapped iterator.
    #[inline]
    pub fn get_ref(&self) -> &I {
        &self.inner
    }

    /// Consumes the adaptor, returning the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for StrideCounting<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.strides += 1;
        }
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> DoubleEndedIterator for StrideCounting<I>
where
    I: DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back();
        if item.is_some() {
            self.strides += 1;
        }
        item
    }
}

impl<I> ExactSizeIterator for StrideCounting<I>
where
    I: ExactSizeIterator,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<I> FusedIterator for StrideCounting<I> where I: FusedIterator {}
