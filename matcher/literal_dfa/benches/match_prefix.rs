//! Prefix-match throughput benchmarks.
//!
//! Measures `match_prefix` on the interesting input shapes — full match,
//! early divergence, late divergence, truncated input — for an ASCII
//! target (byte-comparison fast path) and a multibyte target (scalar
//! decode loop). Running time is bounded by the target length, so
//! throughput is reported over the consumed prefix, not the whole input.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use literal_dfa::Literal;

/// Benchmark one target against the standard input shapes.
fn bench_target(c: &mut Criterion, group_name: &str, target: &str, inputs: &[(&str, &str)]) {
    let word = Literal::new(target);
    let mut group = c.benchmark_group(group_name);

    group.throughput(Throughput::Bytes(u64::try_from(target.len()).unwrap_or(0)));
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(word.match_prefix(black_box(input.as_bytes()))));
        });
    }

    group.finish();
}

fn bench_ascii_target(c: &mut Criterion) {
    bench_target(
        c,
        "match_prefix/ascii",
        "auctor",
        &[
            ("full_match", "auctoring the archives"),
            ("early_divergence", "barnacle"),
            ("late_divergence", "auction"),
            ("truncated", "auct"),
        ],
    );
}

fn bench_multibyte_target(c: &mut Criterion) {
    bench_target(
        c,
        "match_prefix/multibyte",
        "żółwie",
        &[
            ("full_match", "żółwie w ogrodzie"),
            ("early_divergence", "ptaki w ogrodzie"),
            ("late_divergence", "żółwik"),
            ("truncated", "żół"),
        ],
    );
}

criterion_group!(benches, bench_ascii_target, bench_multibyte_target);
criterion_main!(benches);
