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

//! # Keel Core
//!
//! Compile-time foundations for the Keel facility layer. This crate
//! consolidates the constant carriers, type-introspection machinery, and
//! numeric building blocks that the calendar and aggregate crates are
//! built on.
//!
//! ## Modules
//!
//! - `introspect`: The boolean constant carrier (`Bool<B>`, `True`,
//!   `False`) and the type property dispatcher (`Introspect`) answering
//!   layout questions (`OVERLAPPING`, `ZERO_SIZED`, `DROP_GLUE`) at
//!   compilation time, with declaration macros that keep reference-qualified
//!   forms in lockstep with their base type.
//! - `num`: Euclidean (floor) modulo and division as by-value operation
//!   traits for all signed integers, plus `const fn` helpers usable in
//!   constant items.
//! - `utils`: Iterator helpers such as bounded advancement and a
//!   stride-counting adaptor for verifying traversal cost.
//!
//! ## Configuration
//!
//! The `structural-fallback` cargo feature switches every query that has a
//! compiler or runtime primitive onto its structurally-defined twin. The two
//! paths are contractually identical in outcome; callers can never observe
//! which one was compiled in.
//!
//! Refer to each module for detailed APIs and examples.

pub mod introspect;
pub mod num;
pub mod utils;
