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

//! # Keel Calendar
//!
//! Small calendar value types with precisely specified modular arithmetic.
//!
//! ## Modules
//!
//! - `duration`: `Days`, a signed count of days used as the arithmetic
//!   operand throughout the crate.
//! - `weekday`: `Weekday`, a day of the week with Sunday = 0 encoding,
//!   wrapping arithmetic defined through Euclidean modulo, and a lazy
//!   `ok()` validity gate instead of checked construction.
//! - `indexed`: `WeekdayIndexed` ("the nth weekday of a month") and
//!   `WeekdayLast` ("the last weekday of a month"), validity-gated
//!   pairings of a weekday with an occurrence.
//!
//! ## Design
//!
//! Construction never range-checks and arithmetic never panics: out-of-range
//! inputs produce values whose `ok()` reports `false`, while arithmetic
//! results always land back in the valid range. All arithmetic goes through
//! `keel_core`'s Euclidean `floor_mod`, never the truncating `%` operator,
//! and every operator has a `const fn` equivalent so results are evaluable
//! in constant items.

pub mod duration;
pub mod indexed;
pub mod weekday;

pub use duration::Days;
pub use indexed::{WeekdayIndexed, WeekdayLast};
pub use weekday::Weekday;

keel_core::introspect_types! {
    crate::duration::Days => { zero_sized: false, drop_glue: false },
    crate::weekday::Weekday => { zero_sized: false, drop_glue: false },
    crate::indexed::WeekdayIndexed => { zero_sized: false, drop_glue: false },
    crate::indexed::WeekdayLast => { zero_sized: false, drop_glue: false },
}
