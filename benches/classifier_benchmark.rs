//! Benchmark for the classification engine's line loop.
//!
//! Measures throughput over synthetic corpora mixing ASCII prose, mixed
//! Cyrillic/Latin tokens, and Arabic text, at a few input sizes.

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lexsentry::config::ConfigBuilder;
use lexsentry::driver::{Analyzer, Cancellation};

fn generate_corpus(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 48);
    for i in 0..lines {
        match i % 4 {
            0 => out.push_str("the quick brown fox jumps over the lazy dog.\n"),
            1 => out.push_str("Hеllο wοrld mixed scripts tеst.\n"),
            2 => out.push_str("كتاب جميل في المكتبة اليوم.\n"),
            _ => out.push_str("contact jane @ example . com for www . broken . url details.\n"),
        }
    }
    out
}

fn benchmark_analyzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer_run");
    for &lines in &[100usize, 1_000, 10_000] {
        let corpus = generate_corpus(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &corpus, |b, corpus| {
            b.iter(|| {
                let (config, _) = ConfigBuilder::default().build();
                let mut analyzer = Analyzer::new(config);
                let cancellation = Cancellation::new();
                analyzer
                    .run(Cursor::new(corpus.as_bytes()), &cancellation)
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_analyzer);
criterion_main!(benches);
