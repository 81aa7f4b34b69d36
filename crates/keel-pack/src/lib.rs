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

//! # Keel Pack
//!
//! Fixed-arity, ordered, heterogeneous aggregates. A pack is a cons-list of
//! independently-typed elements: [`Nil`] is the distinguished empty
//! aggregate, [`Cons<H, T>`] carries one element plus the rest.
//!
//! ## Construction shapes
//!
//! Each call shape resolves to exactly one aggregate type; a shape that
//! matches none of them does not compile. There is no runtime error path.
//!
//! - Element list: `pack![a, b]` or the `pack0()`..`pack3(..)` factories.
//!   `pack![]` yields `Nil`, never the general shape.
//! - Pair-derived: `From<(A, B)>` maps a 2-tuple to the arity-2 pack with
//!   exactly its element types, references and wrappers preserved. The
//!   generalized [`IntoPack`] covers tuple arities 0 through 3.
//! - Copy/move: `Clone` and moves keep the identical type; [`repack`] is
//!   the explicit identity shape.
//!
//! ## Usage
//!
//! ```rust
//! use keel_pack::{pack, Pack, Nil};
//!
//! let p = pack![1i32, 'c'];
//! assert_eq!(p.len(), 2);
//! assert_eq!(*p.first(), 1);
//! assert_eq!(*p.second(), 'c');
//!
//! let empty = pack![];
//! let _: Nil = empty;
//! ```

pub mod build;
pub mod node;

pub use build::{pack0, pack1, pack2, pack3, repack, IntoPack};
pub use node::{Cons, Nil, Pack};
