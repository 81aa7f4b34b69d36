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

//! # Compile-Time Type Introspection
//!
//! Boolean classification of types, resolved entirely during compilation.
//! Queries never execute code at runtime and never fail: a type that is in
//! the query domain always yields an answer, and a type outside the domain
//! is rejected by the trait bound before the program exists.
//!
//! ## Submodules
//!
//! - `constant`: The primitive constant carrier `Bool<const B: bool>` with
//!   its `BoolConstant` trait and the `True`/`False` aliases. Every
//!   introspection answer is conceptually one of these carriers.
//! - `property`: The `Introspect` dispatcher answering per-type layout
//!   properties, the `introspect_types!`/`declare_overlapping!` declaration
//!   macros, and the free `const fn` query functions.
//!
//! ## Builtin vs. structural answers
//!
//! Where the language exposes a primitive for a property (`size_of`,
//! `needs_drop`), the declaration macros compile the query down to that
//! primitive. Under the `structural-fallback` cargo feature the declared
//! structural answer is compiled in instead. Both must agree for every
//! declared type; the provenance of an answer is never observable.

pub mod constant;
pub mod property;
