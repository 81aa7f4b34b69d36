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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use keel_calendar::{Days, Weekday};
use std::hint::black_box;

/// Sweeps every weekday through a span of day offsets.
fn sweep(span: i64) -> u64 {
    let mut acc = 0u64;
    for enc in 0..=6u8 {
        let wd = Weekday::from_encoding(enc);
        for count in -span..=span {
            acc += (wd + Days::new(count)).c_encoding() as u64;
        }
    }
    acc
}

fn bench_weekday_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekday_arithmetic");

    for span in [64i64, 1024, 16_384] {
        let ops = 7 * (2 * span as u64 + 1);
        group.throughput(Throughput::Elements(ops));
        group.bench_with_input(BenchmarkId::new("sweep", span), &span, |b, &span| {
            b.iter(|| sweep(black_box(span)));
        });
    }

    group.finish();
}

fn bench_days_since(c: &mut Criterion) {
    c.bench_function("days_since_grid", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for i in 0..=6u8 {
                for j in 0..=6u8 {
                    let x = Weekday::from_encoding(black_box(i));
                    let y = Weekday::from_encoding(black_box(j));
                    acc += (x - y).count();
                }
            }
            acc
        });
    });
}

criterion_group!(benches, bench_weekday_arithmetic, bench_days_since);
criterion_main!(benches);
