//! FILENAME: engine/benches/eval.rs
//! PURPOSE: End-to-end benchmarks for the evaluate pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate numeric", |b| {
        b.iter(|| engine::evaluate(black_box("2^10 + 3*4 - 5/2")).unwrap())
    });

    c.bench_function("evaluate symbolic", |b| {
        b.iter(|| engine::evaluate(black_box("sin(x+0)*1 + (y^1 - 0)*2^-3")).unwrap())
    });

    c.bench_function("evaluate deep nesting", |b| {
        let input = "((((1+2)*(3+4))^2 + sqrt(2))/7 - x*0)^1";
        b.iter(|| engine::evaluate(black_box(input)).unwrap())
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
